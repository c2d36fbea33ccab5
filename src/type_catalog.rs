use crate::error::Result;
use crate::parser::LineClassifier;
use crate::scanner::FileScanner;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Go's predeclared types, left out of the catalog unless requested.
pub const BUILTIN_TYPES: &[&str] = &[
    "bool", "byte", "complex64", "complex128", "error", "float32", "float64", "int", "int8",
    "int16", "int32", "int64", "rune", "string", "uint", "uint8", "uint16", "uint32", "uint64",
    "uintptr", "map",
];

/// Whether `type_name` is one of [`BUILTIN_TYPES`].
pub fn is_builtin_type(type_name: &str) -> bool {
    BUILTIN_TYPES.contains(&type_name)
}

/// One field or embedded field of a declared struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Field name, empty for an embedded field
    pub name: String,
    /// Referenced type name with modifiers stripped
    #[serde(rename = "type")]
    pub type_name: String,
    /// Modifier text in front of the type name (`*`, `[]`, `[]*`, ...)
    pub attribute: String,
    /// Whether the member is an embedded field
    pub embed: bool,
}

impl Member {
    /// A named field such as `Owner *Account`.
    pub fn named(name: &str, attribute: &str, type_name: &str) -> Self {
        Self {
            name: name.to_string(),
            type_name: type_name.to_string(),
            attribute: attribute.to_string(),
            embed: false,
        }
    }

    /// An embedded field such as `Base` or `*Base`.
    pub fn embedded(type_name: &str) -> Self {
        Self {
            name: String::new(),
            type_name: type_name.to_string(),
            attribute: String::new(),
            embed: true,
        }
    }

    /// Edge label text: name, attribute, embed marker and type.
    pub fn label(&self) -> String {
        let marker = if self.embed { "*" } else { "" };
        format!("{} {}{}{}", self.name, self.attribute, marker, self.type_name)
    }
}

/// Map from struct name to its members in declaration order.
///
/// The catalog is never mutated after it is built, so one catalog can back any
/// number of graph traversals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCatalog {
    types: BTreeMap<String, Vec<Member>>,
}

impl TypeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Members of `type_name`, or `None` if it was never declared.
    pub fn get(&self, type_name: &str) -> Option<&[Member]> {
        self.types.get(type_name).map(Vec::as_slice)
    }

    /// The stored key and members of `type_name`.
    pub fn entry(&self, type_name: &str) -> Option<(&str, &[Member])> {
        self.types
            .get_key_value(type_name)
            .map(|(name, members)| (name.as_str(), members.as_slice()))
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    /// Number of declared types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Declared type names in sorted order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    /// Total member slots across all types.
    pub fn member_count(&self) -> usize {
        self.types.values().map(Vec::len).sum()
    }

    /// Starts a fresh entry for `type_name`. A later declaration replaces an earlier one.
    pub fn declare(&mut self, type_name: &str) {
        if self.types.insert(type_name.to_string(), Vec::new()).is_some() {
            debug!("Type {} declared again, replacing earlier definition", type_name);
        }
    }

    /// Appends a member to a declared type. Members of undeclared types are ignored.
    pub fn push_member(&mut self, type_name: &str, member: Member) {
        if let Some(members) = self.types.get_mut(type_name) {
            members.push(member);
        }
    }
}

/// Outcome of a catalog build.
pub struct CatalogBuild {
    pub catalog: TypeCatalog,
    /// Source files that were read
    pub files_scanned: usize,
    /// One message per file or entry that had to be skipped
    pub warnings: Vec<String>,
}

/// Builds a [`TypeCatalog`] from the `.go` files of one directory.
pub struct CatalogBuilder {
    classifier: LineClassifier,
    include_builtin: bool,
}

impl CatalogBuilder {
    pub fn new(include_builtin: bool) -> Self {
        Self {
            classifier: LineClassifier::new(),
            include_builtin,
        }
    }

    /// Scans `dir` (one level, file-name order) and collects every struct declaration.
    ///
    /// # Errors
    ///
    /// Fails only when `dir` itself cannot be listed. Unreadable files are logged,
    /// reported in [`CatalogBuild::warnings`] and skipped.
    pub fn build(&self, dir: &Path) -> Result<CatalogBuild> {
        let scan = FileScanner::new(dir.to_path_buf()).scan()?;

        let mut catalog = TypeCatalog::new();
        let mut warnings = scan.warnings;
        let mut files_scanned = 0;

        for path in &scan.go_files {
            debug!("Scanning {}", path.display());
            match fs::read(path) {
                Ok(bytes) => {
                    self.scan_source(&String::from_utf8_lossy(&bytes), &mut catalog);
                    files_scanned += 1;
                }
                Err(e) => {
                    let warning = format!("could not open file {}: {}", display_name(path), e);
                    warn!("{}", warning);
                    warnings.push(warning);
                }
            }
        }

        debug!(
            "Catalog built: {} types, {} members from {} files",
            catalog.len(),
            catalog.member_count(),
            files_scanned
        );

        Ok(CatalogBuild {
            catalog,
            files_scanned,
            warnings,
        })
    }

    /// Scans one file's text into `catalog` in a single forward pass.
    pub fn scan_source(&self, source: &str, catalog: &mut TypeCatalog) {
        let mut current: Option<String> = None;

        for line in source.lines() {
            let Some(type_name) = current.as_deref() else {
                if let Some(name) = self.classifier.type_header(line) {
                    debug!("Found struct {}", name);
                    catalog.declare(name);
                    current = Some(name.to_string());
                }
                continue;
            };

            if let Some(member) = self.classifier.member(line) {
                if self.include_builtin || !is_builtin_type(&member.type_name) {
                    catalog.push_member(type_name, member);
                }
            }

            if LineClassifier::closes_type(line) {
                current = None;
            }
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn scan(source: &str, include_builtin: bool) -> TypeCatalog {
        let mut catalog = TypeCatalog::new();
        CatalogBuilder::new(include_builtin).scan_source(source, &mut catalog);
        catalog
    }

    #[test]
    fn test_named_pointer_member() {
        let catalog = scan("type Foo struct {\nBar *Baz\n}\n", false);

        assert_eq!(catalog.get("Foo").unwrap(), &[Member::named("Bar", "*", "Baz")]);
    }

    #[test]
    fn test_embedded_member() {
        let catalog = scan("type Foo struct {\nEmbedded\n}\n", false);

        let members = catalog.get("Foo").unwrap();
        assert_eq!(members.len(), 1);
        assert!(members[0].embed);
        assert_eq!(members[0].type_name, "Embedded");
        assert_eq!(members[0].name, "");
    }

    #[test]
    fn test_builtin_members_dropped_by_default() {
        let source = "type User struct {\n\tName string\n\tAge int\n\tTags map[string]string\n\tErr error\n\tOwner *Account\n}\n";

        let catalog = scan(source, false);
        let members = catalog.get("User").unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].type_name, "Account");

        for builtin in BUILTIN_TYPES {
            assert!(members.iter().all(|m| m.type_name != *builtin));
        }
    }

    #[test]
    fn test_builtin_members_kept_when_requested() {
        let source = "type User struct {\n\tName string\n\tAge int\n}\n";

        let catalog = scan(source, true);
        let types: Vec<&str> = catalog
            .get("User")
            .unwrap()
            .iter()
            .map(|m| m.type_name.as_str())
            .collect();
        assert_eq!(types, vec!["string", "int"]);
    }

    #[test]
    fn test_member_order_follows_declaration() {
        let source = "type A struct {\n\tZ Zed\n\tY []Why\n\tX\n}\n";

        let catalog = scan(source, false);
        let names: Vec<&str> = catalog
            .get("A")
            .unwrap()
            .iter()
            .map(|m| m.type_name.as_str())
            .collect();
        assert_eq!(names, vec!["Zed", "Why", "X"]);
    }

    #[test]
    fn test_lines_outside_struct_ignored() {
        let source = "package model\n\nimport \"time\"\n\nvar Default Config\n\nfunc New() *Config { return nil }\n";

        let catalog = scan(source, false);
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_empty_struct_declared() {
        let catalog = scan("type Empty struct {\n}\n", false);

        assert!(catalog.contains("Empty"));
        assert!(catalog.get("Empty").unwrap().is_empty());
    }

    #[test]
    fn test_indented_brace_closes_type() {
        let source = "type Outer struct {\n\tInner struct {\n\t\tLeaf Leaf\n\t}\n\tAfter After\n}\n";

        let catalog = scan(source, false);
        let types: Vec<&str> = catalog
            .get("Outer")
            .unwrap()
            .iter()
            .map(|m| m.type_name.as_str())
            .collect();
        assert_eq!(types, vec!["struct", "Leaf"]);
    }

    #[test]
    fn test_multiple_types_in_one_source() {
        let source = "type A struct {\n\tB B\n}\n\ntype B struct {\n\tC *C\n}\n";

        let catalog = scan(source, false);
        assert_eq!(catalog.type_names().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(catalog.member_count(), 2);
    }

    #[test]
    fn test_redeclared_type_last_wins() {
        let source = "type A struct {\n\tOld Old\n}\ntype A struct {\n\tNew New\n}\n";

        let catalog = scan(source, false);
        assert_eq!(catalog.get("A").unwrap(), &[Member::named("New", "", "New")]);
    }

    #[test]
    fn test_label_text() {
        assert_eq!(Member::named("Bar", "[]*", "Baz").label(), "Bar []*Baz");
        assert_eq!(Member::embedded("Base").label(), " *Base");
    }

    #[test]
    fn test_build_from_directory() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("a.go"), "type A struct {\n\tB *B\n}\n").unwrap();
        fs::write(root.join("b.go"), "type B struct {\n\tA\n}\n").unwrap();
        fs::write(root.join("notes.txt"), "type C struct {\n\tD D\n}\n").unwrap();

        let build = CatalogBuilder::new(false).build(root).unwrap();

        assert_eq!(build.files_scanned, 2);
        assert!(build.warnings.is_empty());
        assert_eq!(build.catalog.type_names().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn test_build_later_file_wins() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("a.go"), "type T struct {\n\tFirst First\n}\n").unwrap();
        fs::write(root.join("b.go"), "type T struct {\n\tSecond Second\n}\n").unwrap();

        let build = CatalogBuilder::new(false).build(root).unwrap();

        assert_eq!(
            build.catalog.get("T").unwrap(),
            &[Member::named("Second", "", "Second")]
        );
    }

    #[test]
    fn test_build_tolerates_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("a.go"), b"type A struct {\n\t// \xff\xfe\n\tB B\n}\n").unwrap();

        let build = CatalogBuilder::new(false).build(root).unwrap();

        assert_eq!(build.catalog.get("A").unwrap().len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_build_warns_on_unreadable_file() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("a.go"), "type A struct {\n\tB *B\n}\n").unwrap();
        std::os::unix::fs::symlink(root.join("gone.go"), root.join("broken.go")).unwrap();

        let build = CatalogBuilder::new(false).build(root).unwrap();

        assert_eq!(build.warnings.len(), 1);
        assert!(build.warnings[0].contains("broken.go"));
        assert_eq!(build.files_scanned, 1);
        assert!(build.catalog.contains("A"));
    }

    #[test]
    fn test_build_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();

        let result = CatalogBuilder::new(false).build(&temp_dir.path().join("nope"));

        assert!(result.is_err());
    }
}
