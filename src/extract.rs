//! Documentation and signature extraction from Java sources.
//!
//! Extraction walks the source text once, front to back. A byte offset
//! (`cursor`) marks how much text the previous stage has consumed: the class
//! documentation first, then every public constructor, then public methods.
//! Documentation is paired with a declaration by taking the nearest
//! `/** ... */` block between the cursor and the declaration. An
//! undocumented constructor overload is skipped in favour of the next
//! documented one.

use log::{debug, warn};
use regex::Regex;

use crate::error::{DocError, DocResult};

/// `/**` + line break, lazily up to the first `*/`
const DOC_BLOCK_PATTERN: &str = r"/\*\*[ \t]*\r?\n([\s\S]*?)\*/";

/// Top-level type declaration line
const TYPE_DECL_PATTERN: &str = r"(?m)^[ \t]*(?:@\w+(?:\([^)]*\))?\s+)*(?:(?:public|protected|private|abstract|final|static|sealed|strictfp)\s+)*(?:class|interface|enum|@interface)\s+\w+";

/// Public method declaration; group 1 is the method name
const METHOD_DECL_PATTERN: &str = r"\bpublic\s+(?:(?:static|final|synchronized|abstract|native|default)\s+)*(?:<[^>]*>\s+)?[\w.$]+(?:\s*<[^(){};]*>)?(?:\s*\[\])*\s+(\w+)\s*\(";

/// A documented constructor or method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    /// Declaration text up to the body brace
    pub signature: String,
    /// Cleaned documentation, annotations rendered as bullets
    pub doc: String,
}

/// Everything extracted from one source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extracted {
    pub doc: String,
    pub constructors: Vec<Member>,
    pub methods: Vec<Member>,
}

/// Location of a doc block inside the full source text.
#[derive(Debug, Clone, Copy)]
struct DocBlock {
    start: usize,
    end: usize,
    inner_start: usize,
    inner_end: usize,
}

/// Compiled patterns shared by every file of a run.
pub struct Extractor {
    doc_block: Regex,
    type_decl: Regex,
    method_decl: Regex,
}

fn compile(pattern: &str) -> DocResult<Regex> {
    Regex::new(pattern).map_err(|e| DocError::ExtractionError(format!("invalid pattern: {}", e)))
}

/// Removes comment decoration from a single doc line.
fn strip_decoration(line: &str) -> &str {
    line.trim_start().trim_start_matches('*').trim()
}

/// Cleans a class-level doc block (the full `/** ... */` text).
///
/// The opening and closing lines are dropped, and lines carrying an
/// annotation marker are discarded.
pub fn clean_main_doc(block: &str) -> String {
    let lines: Vec<&str> = block.lines().collect();
    if lines.len() < 2 {
        return String::new();
    }

    lines[1..lines.len() - 1]
        .iter()
        .filter(|line| !line.contains('@'))
        .map(|line| strip_decoration(line).trim_end_matches('/').trim_end())
        .collect::<Vec<_>>()
        .join("\n")
        .trim_matches('\n')
        .to_string()
}

/// Cleans the body of a member doc block, turning `@param`-style tags into
/// list items.
pub fn clean_member_doc(body: &str) -> String {
    body.lines()
        .map(|line| {
            let line = strip_decoration(line);
            match line.strip_prefix('@') {
                Some(rest) => format!("- {}", rest),
                None => line.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

impl Extractor {
    pub fn new() -> DocResult<Self> {
        Ok(Self {
            doc_block: compile(DOC_BLOCK_PATTERN)?,
            type_decl: compile(TYPE_DECL_PATTERN)?,
            method_decl: compile(METHOD_DECL_PATTERN)?,
        })
    }

    fn block_at(offset: usize, caps: &regex::Captures<'_>) -> Option<DocBlock> {
        let whole = caps.get(0)?;
        let inner = caps.get(1)?;
        Some(DocBlock {
            start: offset + whole.start(),
            end: offset + whole.end(),
            inner_start: offset + inner.start(),
            inner_end: offset + inner.end(),
        })
    }

    /// First doc block fully inside `source[from..to]`.
    fn first_doc(&self, source: &str, from: usize, to: usize) -> Option<DocBlock> {
        let caps = self.doc_block.captures(&source[from..to])?;
        Self::block_at(from, &caps)
    }

    /// Last doc block fully inside `source[from..to]`.
    fn nearest_doc(&self, source: &str, from: usize, to: usize) -> Option<DocBlock> {
        self.doc_block
            .captures_iter(&source[from..to])
            .last()
            .and_then(|caps| Self::block_at(from, &caps))
    }

    /// Locates the class documentation.
    ///
    /// Returns the cleaned doc and the offset right after the matched block.
    /// A class without documentation logs a warning and yields an empty doc
    /// with the cursor left at the start of the text.
    pub fn main_doc(&self, source: &str, class_name: &str) -> (String, usize) {
        let limit = self
            .type_decl
            .find(source)
            .map(|m| m.start())
            .unwrap_or(source.len());

        match self.first_doc(source, 0, limit) {
            Some(block) => (clean_main_doc(&source[block.start..block.end]), block.end),
            None => {
                warn!("No doc comment found for class {}", class_name);
                (String::new(), 0)
            }
        }
    }

    /// Builds a member from the declaration at `decl_start` and its doc
    /// block, consuming text up to and including the body brace (or `;`
    /// when `allow_abstract`).
    fn member(
        &self,
        source: &str,
        block: DocBlock,
        decl_start: usize,
        allow_abstract: bool,
        what: &str,
    ) -> DocResult<(Member, usize)> {
        let rest = &source[decl_start..];
        let terminators: &[char] = if allow_abstract { &['{', ';'] } else { &['{'] };
        let body = rest.find(terminators).ok_or_else(|| {
            DocError::ExtractionError(format!("{} at byte {} has no body", what, decl_start))
        })?;

        let member = Member {
            signature: rest[..body].trim_end().to_string(),
            doc: clean_member_doc(&source[block.inner_start..block.inner_end]),
        };

        Ok((member, decl_start + body + 1))
    }

    /// Extracts every documented `public <ClassName>(...)` constructor after
    /// `cursor`, in source order.
    ///
    /// Pairing starts from the doc side: the next doc block after the cursor
    /// selects the first constructor declared after it, so undocumented
    /// overloads in between are skipped. Anything else passed over on the
    /// way, including methods, is consumed. Constructors left with no doc
    /// block after the cursor at all are an error.
    ///
    /// Returns the constructors and the cursor after the last one; with no
    /// constructors the cursor is returned unchanged.
    pub fn constructors(
        &self,
        source: &str,
        class_name: &str,
        mut cursor: usize,
    ) -> DocResult<(Vec<Member>, usize)> {
        let decl = compile(&format!(r"\bpublic\s+{}\s*\(", regex::escape(class_name)))?;
        let what = format!("constructor of {}", class_name);
        let mut constructors = Vec::new();

        while decl.find_at(source, cursor).is_some() {
            let first = self.first_doc(source, cursor, source.len()).ok_or_else(|| {
                DocError::ExtractionError(format!(
                    "no doc comment precedes {} after byte {}",
                    what, cursor
                ))
            })?;
            let Some(found) = decl.find_at(source, first.end) else {
                debug!("{}: trailing constructor(s) have no doc comment", class_name);
                break;
            };

            let skipped = decl.find_iter(&source[cursor..first.start]).count();
            if skipped > 0 {
                debug!("{}: skipping {} undocumented constructor(s)", class_name, skipped);
            }

            let block = self
                .nearest_doc(source, first.start, found.start())
                .unwrap_or(first);
            let (member, next) = self.member(source, block, found.start(), false, &what)?;
            cursor = next;
            constructors.push(member);
        }

        debug!("{}: {} constructor(s)", class_name, constructors.len());
        Ok((constructors, cursor))
    }

    /// Extracts every documented public method after `cursor`, in source
    /// order.
    pub fn methods(&self, source: &str, mut cursor: usize) -> DocResult<Vec<Member>> {
        let mut methods = Vec::new();

        while let Some(caps) = self.method_decl.captures_at(source, cursor) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                break;
            };
            let what = format!("method {}", name.as_str());
            let block = self
                .nearest_doc(source, cursor, whole.start())
                .ok_or_else(|| {
                    DocError::ExtractionError(format!(
                        "no doc comment precedes {} at byte {}",
                        what,
                        whole.start()
                    ))
                })?;
            let (member, next) = self.member(source, block, whole.start(), true, &what)?;
            cursor = next;
            methods.push(member);
        }

        Ok(methods)
    }

    /// Runs class doc, constructor, and method extraction in sequence.
    pub fn extract(&self, source: &str, class_name: &str) -> DocResult<Extracted> {
        let (doc, cursor) = self.main_doc(source, class_name);
        let (constructors, cursor) = self.constructors(source, class_name, cursor)?;
        let methods = self.methods(source, cursor)?;

        Ok(Extracted {
            doc,
            constructors,
            methods,
        })
    }
}
