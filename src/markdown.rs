//! Markdown rendering of class records.

use serde_json::json;

use crate::error::DocResult;
use crate::extract::Member;
use crate::page::ClassRecord;
use crate::renderer::TemplateRenderer;

/// URL of a class on the source host
pub const SOURCE_LINK_TEMPLATE: &str = "{{ source_root }}{{ module }}/{{ source_path }}.java";

/// One constructor or method: its signature as code, then its doc
pub const MEMBER_TEMPLATE: &str = "```java\n{{ signature }}\n```\n{% if doc %}\n{{ doc }}\n{% endif %}";

const MEMBER_SEPARATOR: &str = "\n---\n";

/// Renders class records into Markdown blocks.
pub struct MarkdownRenderer<'a> {
    engine: &'a dyn TemplateRenderer,
    source_root: &'a str,
}

impl<'a> MarkdownRenderer<'a> {
    pub fn new(engine: &'a dyn TemplateRenderer, source_root: &'a str) -> Self {
        Self {
            engine,
            source_root,
        }
    }

    /// The right-floated `[[source]]` link for a class.
    pub fn source_link(&self, module: &str, source_path: &str) -> DocResult<String> {
        let url = self.engine.render(
            SOURCE_LINK_TEMPLATE,
            &json!({
                "source_root": self.source_root,
                "module": module,
                "source_path": source_path,
            }),
        )?;
        Ok(format!(
            "<span style=\"float:right;\"> [[source]]({}) </span>",
            url
        ))
    }

    pub fn member(&self, member: &Member) -> DocResult<String> {
        self.engine.render(
            MEMBER_TEMPLATE,
            &json!({
                "signature": member.signature,
                "doc": member.doc,
            }),
        )
    }

    fn section(&self, fragments: &mut Vec<String>, title: &str, members: &[Member]) -> DocResult<()> {
        if members.is_empty() {
            return Ok(());
        }
        let rendered = members
            .iter()
            .map(|m| self.member(m))
            .collect::<DocResult<Vec<_>>>()?;

        fragments.push("\n---".to_string());
        fragments.push(format!("<b>{}</b>\n", title));
        fragments.push(rendered.join(MEMBER_SEPARATOR));
        Ok(())
    }

    /// Fragments of one class block, in display order.
    pub fn fragments(&self, record: &ClassRecord) -> DocResult<Vec<String>> {
        let mut fragments = vec![self.source_link(&record.module, &record.source_path)?];

        if !record.module.is_empty() {
            fragments.push(format!("## {}\n", record.class_name));
        }
        if !record.doc.is_empty() {
            fragments.push(record.doc.clone());
        }

        self.section(&mut fragments, "Constructors", &record.constructors)?;
        self.section(&mut fragments, "Methods", &record.methods)?;

        Ok(fragments)
    }

    /// The complete Markdown block of one class.
    pub fn render_class(&self, record: &ClassRecord) -> DocResult<String> {
        Ok(self.fragments(record)?.join("\n"))
    }
}
