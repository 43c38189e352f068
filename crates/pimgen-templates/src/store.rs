//! Template stores: directory-backed lookup and an in-memory fake.
//!
//! A template file is named `<mem>_template.<ext>` after the memory type it
//! specializes (e.g. `GDDR6_template.cpp`). The directory store searches a
//! template root recursively and returns the first match.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use pimgen_spec::MemoryTypeId;

use crate::error::{Result, TemplateError};

/// Default source extension for template files. The generated simulator
/// layers are C++ sources.
pub const DEFAULT_TEMPLATE_EXT: &str = "cpp";

/// A loaded template: raw source text plus the memory type it was loaded
/// for. Immutable, scoped to one generation run.
#[derive(Debug, Clone)]
pub struct TemplateSource {
    /// Memory type this template specializes.
    pub mem: MemoryTypeId,
    /// Where the template was found (`None` for in-memory stores).
    pub path: Option<PathBuf>,
    /// Full template text.
    pub text: String,
}

/// Source of base templates for the generation engine.
///
/// Abstracting the lookup behind a trait lets engine tests substitute an
/// in-memory store for a real directory tree.
pub trait TemplateStore {
    /// Load the template for the given memory type.
    fn load(&self, mem: &MemoryTypeId) -> Result<TemplateSource>;
}

/// Template file name derived from a memory type.
pub fn template_file_name(mem: &MemoryTypeId, ext: &str) -> String {
    format!("{mem}_template.{ext}")
}

/// Directory-backed template store.
///
/// `load` walks the root recursively and returns the first file whose name
/// matches `<mem>_template.<ext>`. When several subdirectories contain a
/// file with that name, which one wins depends on filesystem traversal
/// order, not on content.
pub struct DirTemplateStore {
    root: PathBuf,
    ext: String,
}

impl DirTemplateStore {
    /// Create a store over the given template root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ext: DEFAULT_TEMPLATE_EXT.to_string(),
        }
    }

    /// Override the source extension (default `cpp`).
    pub fn with_ext(mut self, ext: &str) -> Self {
        self.ext = ext.to_string();
        self
    }

    /// The configured template root.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl TemplateStore for DirTemplateStore {
    fn load(&self, mem: &MemoryTypeId) -> Result<TemplateSource> {
        let name = template_file_name(mem, &self.ext);
        match find_file(&self.root, &name)? {
            Some(path) => {
                let text = std::fs::read_to_string(&path)?;
                Ok(TemplateSource {
                    mem: mem.clone(),
                    path: Some(path),
                    text,
                })
            }
            None => Err(TemplateError::NotFound {
                name,
                root: self.root.clone(),
            }),
        }
    }
}

/// Depth-first search for a file by exact name. Files in a directory are
/// checked before its subdirectories.
fn find_file(dir: &Path, name: &str) -> Result<Option<PathBuf>> {
    if !dir.is_dir() {
        return Ok(None);
    }
    let mut subdirs = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            subdirs.push(path);
        } else if path.file_name().and_then(|n| n.to_str()) == Some(name) {
            return Ok(Some(path));
        }
    }
    for sub in subdirs {
        if let Some(found) = find_file(&sub, name)? {
            return Ok(Some(found));
        }
    }
    Ok(None)
}

/// Discover all template files under a root.
///
/// Returns `(mem_type_name, path)` pairs sorted by name. Unlike `load`, this
/// visits the whole tree.
pub fn discover(root: &Path, ext: &str) -> Result<Vec<(String, PathBuf)>> {
    let mut found = Vec::new();
    let suffix = format!("_template.{ext}");
    collect_templates(root, &suffix, &mut found)?;
    found.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(found)
}

fn collect_templates(
    dir: &Path,
    suffix: &str,
    found: &mut Vec<(String, PathBuf)>,
) -> Result<()> {
    if !dir.is_dir() {
        return Ok(());
    }
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            collect_templates(&path, suffix, found)?;
        } else if let Some(file_name) = path.file_name().and_then(|n| n.to_str()) {
            if let Some(mem) = file_name.strip_suffix(suffix) {
                found.push((mem.to_string(), path.clone()));
            }
        }
    }
    Ok(())
}

/// In-memory template store keyed by memory type name, for tests.
#[derive(Default)]
pub struct MemTemplateStore {
    templates: HashMap<String, String>,
}

impl MemTemplateStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template for a memory type name.
    pub fn insert(&mut self, mem: &str, text: &str) {
        self.templates.insert(mem.to_string(), text.to_string());
    }
}

impl TemplateStore for MemTemplateStore {
    fn load(&self, mem: &MemoryTypeId) -> Result<TemplateSource> {
        match self.templates.get(mem.as_str()) {
            Some(text) => Ok(TemplateSource {
                mem: mem.clone(),
                path: None,
                text: text.clone(),
            }),
            None => Err(TemplateError::NotFound {
                name: template_file_name(mem, DEFAULT_TEMPLATE_EXT),
                root: PathBuf::from("<memory>"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mem_id(yaml_mem: &str) -> MemoryTypeId {
        // Round-trip through the parser to obtain a validated identifier.
        let yaml = format!(
            "type:\n  mem: {yaml_mem}\n  pim: AiM\ncmd_spec_matrix:\n  - [cmd, a]\n  - [X, 1]\n"
        );
        pimgen_spec::SpecModel::parse(&yaml).unwrap().mem
    }

    #[test]
    fn template_name_derivation() {
        assert_eq!(
            template_file_name(&mem_id("GDDR6"), "cpp"),
            "GDDR6_template.cpp"
        );
    }

    #[test]
    fn load_finds_nested_template() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("dram").join("impl");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(nested.join("GDDR6_template.cpp"), "// gddr6").unwrap();

        let store = DirTemplateStore::new(dir.path());
        let source = store.load(&mem_id("GDDR6")).unwrap();
        assert_eq!(source.text, "// gddr6");
        assert_eq!(source.mem.as_str(), "GDDR6");
        assert!(source.path.unwrap().ends_with("dram/impl/GDDR6_template.cpp"));
    }

    #[test]
    fn load_reads_full_content() {
        let dir = tempfile::tempdir().unwrap();
        let text = "line1\nline2\nline3\n".repeat(100);
        std::fs::write(dir.path().join("LPDDR5_template.cpp"), &text).unwrap();

        let store = DirTemplateStore::new(dir.path());
        assert_eq!(store.load(&mem_id("LPDDR5")).unwrap().text, text);
    }

    #[test]
    fn load_missing_reports_name_and_root() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirTemplateStore::new(dir.path());
        let err = store.load(&mem_id("DRAM")).unwrap_err();
        match err {
            TemplateError::NotFound { name, root } => {
                assert_eq!(name, "DRAM_template.cpp");
                assert_eq!(root, dir.path());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn custom_extension() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("DRAM_template.cc"), "// cc").unwrap();

        let store = DirTemplateStore::new(dir.path()).with_ext("cc");
        assert_eq!(store.load(&mem_id("DRAM")).unwrap().text, "// cc");
    }

    #[test]
    fn discover_lists_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("sub");
        std::fs::create_dir_all(&sub).unwrap();
        std::fs::write(dir.path().join("LPDDR5_template.cpp"), "").unwrap();
        std::fs::write(sub.join("GDDR6_template.cpp"), "").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignore me").unwrap();

        let found = discover(dir.path(), "cpp").unwrap();
        let names: Vec<&str> = found.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["GDDR6", "LPDDR5"]);
    }

    #[test]
    fn discover_empty_root() {
        let dir = tempfile::tempdir().unwrap();
        assert!(discover(dir.path(), "cpp").unwrap().is_empty());
    }

    #[test]
    fn mem_store_load_and_miss() {
        let mut store = MemTemplateStore::new();
        store.insert("DRAM", "@MEM_TYPE@");

        let source = store.load(&mem_id("DRAM")).unwrap();
        assert_eq!(source.text, "@MEM_TYPE@");
        assert!(source.path.is_none());

        assert!(matches!(
            store.load(&mem_id("GDDR6")),
            Err(TemplateError::NotFound { .. })
        ));
    }
}
