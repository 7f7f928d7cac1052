use docsmith::config::Settings;
use docsmith::error::DocError;
use docsmith::processor::{clean_target, create_index_page, readme_body, Processor};
use docsmith::renderer::MiniJinjaRenderer;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const A_JAVA: &str = "package layers;

/**
 * Class A does things.
 */
public class A {

    /**
     * Builds an A.
     *
     * @param size the size
     */
    public A(int size) {
    }

    /**
     * Runs A.
     */
    public void run() {
    }
}
";

const B_JAVA: &str = "package layers;

public class B {
    private int x;
}
";

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Lays out sources, templates, readme, and manifest under `root`.
fn project(root: &Path, manifest: &str) -> Settings {
    write(&root.join("src/layers/A.java"), A_JAVA);
    write(&root.join("src/layers/B.java"), B_JAVA);
    write(&root.join("templates/index.md"), "# Docs\n\n{{autogenerated}}\n");
    write(&root.join("README.md"), "# Project\nintro\n## Install\nrun it\n");
    write(&root.join("pages.json"), manifest);

    Settings {
        base_path: root.join("src"),
        template_dir: root.join("templates"),
        target_dir: root.join("out"),
        manifest: root.join("pages.json"),
        readme: root.join("README.md"),
        source_root: "https://src/".to_string(),
    }
}

#[test]
fn test_clean_target_mirrors_templates() {
    let temp_dir = TempDir::new().unwrap();
    let templates = temp_dir.path().join("templates");
    let target = temp_dir.path().join("out");
    write(&templates.join("index.md"), "{{autogenerated}}");
    write(&templates.join("layers/core.md"), "# Core\n{{autogenerated}}");
    fs::create_dir_all(templates.join("models/empty")).unwrap();
    write(&target.join("stale.md"), "old");

    clean_target(&templates, &target).unwrap();

    assert!(!dir_diff::is_different(&templates, &target).unwrap());
    assert!(!target.join("stale.md").exists());
}

#[test]
fn test_clean_target_skips_non_markdown() {
    let temp_dir = TempDir::new().unwrap();
    let templates = temp_dir.path().join("templates");
    let target = temp_dir.path().join("out");
    write(&templates.join("index.md"), "{{autogenerated}}");
    write(&templates.join("assets/logo.png"), "png");

    clean_target(&templates, &target).unwrap();

    assert!(target.join("index.md").exists());
    assert!(target.join("assets").is_dir());
    assert!(!target.join("assets/logo.png").exists());
}

#[test]
fn test_readme_body() {
    assert_eq!(readme_body("# Title\nintro\n## Usage\nmore\n"), "## Usage\nmore\n");
    assert_eq!(readme_body("## First\n## Second\n"), "## First\n## Second\n");
    assert_eq!(readme_body("# Title\n### Deep\n## Two\n"), "## Two\n");
}

#[test]
fn test_readme_with_byte_order_mark() {
    assert_eq!(readme_body("\u{feff}## Usage\nmore\n"), "## Usage\nmore\n");
    assert_eq!(readme_body("\u{feff}# Title\n## Two\n"), "## Two\n");
}

#[test_log::test]
fn test_readme_without_heading_is_used_whole() {
    assert_eq!(readme_body("just text\n"), "just text\n");
}

#[test]
fn test_index_page() {
    let temp_dir = TempDir::new().unwrap();
    let settings = project(temp_dir.path(), "[]");
    clean_target(&settings.template_dir, &settings.target_dir).unwrap();

    create_index_page(&settings).unwrap();

    assert_eq!(
        fs::read_to_string(settings.target_dir.join("index.md")).unwrap(),
        "# Docs\n\n## Install\nrun it\n\n"
    );
}

#[test_log::test]
fn test_module_page_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let settings = project(
        temp_dir.path(),
        r#"[{"page": "layers.md", "module": "layers"}]"#,
    );
    let engine = MiniJinjaRenderer::new();

    Processor::new(&settings, &engine).unwrap().run().unwrap();

    let a_section = concat!(
        "<span style=\"float:right;\"> [[source]](https://src/layers/A.java) </span>\n",
        "## A\n\n",
        "Class A does things.\n",
        "\n---\n",
        "<b>Constructors</b>\n\n",
        "```java\npublic A(int size)\n```\n\nBuilds an A.\n\n- param size the size\n",
        "\n\n---\n",
        "<b>Methods</b>\n\n",
        "```java\npublic void run()\n```\n\nRuns A.\n",
    );
    let b_section = "<span style=\"float:right;\"> [[source]](https://src/layers/B.java) </span>\n## B\n";

    let page = fs::read_to_string(settings.target_dir.join("layers.md")).unwrap();
    assert_eq!(page, format!("{}\n----\n\n{}", a_section, b_section));
    assert!(settings.target_dir.join("index.md").exists());
}

#[test]
fn test_class_list_page_merges_into_template() {
    let temp_dir = TempDir::new().unwrap();
    let settings = project(
        temp_dir.path(),
        r#"[{"page": "api/b.md", "module": "layers", "class": ["B.java"]}]"#,
    );
    write(
        &settings.template_dir.join("api/b.md"),
        "# B reference\n\n{{autogenerated}}\n\nSee also A.\n",
    );
    let engine = MiniJinjaRenderer::new();

    Processor::new(&settings, &engine).unwrap().run().unwrap();

    assert_eq!(
        fs::read_to_string(settings.target_dir.join("api/b.md")).unwrap(),
        "# B reference\n\n<span style=\"float:right;\"> [[source]](https://src/layers/B.java) </span>\n## B\n\n\nSee also A.\n"
    );
}

#[test_log::test]
fn test_class_in_subdirectory_links_full_path() {
    let temp_dir = TempDir::new().unwrap();
    let settings = project(
        temp_dir.path(),
        r#"[{"page": "c.md", "module": "layers", "class": ["core/C.java"]}]"#,
    );
    write(
        &settings.base_path.join("layers/core/C.java"),
        "/**\n * Core C.\n */\npublic class C {\n}\n",
    );
    let engine = MiniJinjaRenderer::new();

    Processor::new(&settings, &engine).unwrap().run().unwrap();

    assert_eq!(
        fs::read_to_string(settings.target_dir.join("c.md")).unwrap(),
        "<span style=\"float:right;\"> [[source]](https://src/layers/core/C.java) </span>\n## C\n\nCore C."
    );
}

#[test]
fn test_template_without_marker_aborts() {
    let temp_dir = TempDir::new().unwrap();
    let settings = project(
        temp_dir.path(),
        r#"[{"page": "layers.md", "module": "layers"}]"#,
    );
    write(&settings.template_dir.join("layers.md"), "# Layers\n");
    let engine = MiniJinjaRenderer::new();

    let result = Processor::new(&settings, &engine).unwrap().run();

    assert!(matches!(result, Err(DocError::MissingPlaceholder { .. })));
}

#[test]
fn test_empty_module_aborts() {
    let temp_dir = TempDir::new().unwrap();
    let settings = project(
        temp_dir.path(),
        r#"[{"page": "empty.md", "module": "empty"}]"#,
    );
    fs::create_dir_all(settings.base_path.join("empty")).unwrap();
    let engine = MiniJinjaRenderer::new();

    let result = Processor::new(&settings, &engine).unwrap().run();

    assert!(matches!(result, Err(DocError::EmptyPage(_))));
}

#[test]
fn test_missing_source_file_aborts() {
    let temp_dir = TempDir::new().unwrap();
    let settings = project(
        temp_dir.path(),
        r#"[{"page": "x.md", "module": "layers", "class": ["Missing.java"]}]"#,
    );
    let engine = MiniJinjaRenderer::new();

    let result = Processor::new(&settings, &engine).unwrap().run();

    assert!(matches!(result, Err(DocError::IoError(_))));
}
