//! Concatenation of schema fragments into a single document.

use std::path::{Path, PathBuf};

use crate::error::SchemaError;
use crate::matching::ExtensionMatch;
use crate::walk::build_walker;

/// Separator appended after every fragment.
pub const SEPARATOR: char = '\n';

/// What happened to one matching file during aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FragmentStatus {
    /// Contents were appended to the document.
    Included { bytes: usize },
    /// The file could not be read and contributed nothing.
    Skipped { reason: String },
}

/// A file whose name matched the schema extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaFragment {
    pub path: PathBuf,
    pub status: FragmentStatus,
}

impl SchemaFragment {
    #[must_use]
    pub const fn is_included(&self) -> bool {
        matches!(self.status, FragmentStatus::Included { .. })
    }

    /// Final path component, for display.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.path.file_name().map_or_else(
            || self.path.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
    }
}

/// Aggregated schema text plus the per-file results that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDocument {
    /// Fragment contents in walk order, each followed by [`SEPARATOR`].
    pub type_defs: String,
    /// Every matching file, in walk order, including skipped ones.
    pub fragments: Vec<SchemaFragment>,
}

impl SchemaDocument {
    pub fn included(&self) -> impl Iterator<Item = &SchemaFragment> {
        self.fragments.iter().filter(|f| f.is_included())
    }

    pub fn skipped(&self) -> impl Iterator<Item = &SchemaFragment> {
        self.fragments.iter().filter(|f| !f.is_included())
    }

    #[must_use]
    pub fn into_type_defs(self) -> String {
        self.type_defs
    }
}

/// Walk `dir` and concatenate every file whose name matches `extension`.
///
/// Directories and non-matching files are skipped. A matching file that
/// cannot be read is recorded as [`FragmentStatus::Skipped`] and does not fail
/// the call.
///
/// # Errors
///
/// - [`SchemaError::MissingDirectory`] if `dir` does not exist.
/// - [`SchemaError::Empty`] if nothing was appended: no file matched, or none
///   of the matches could be read.
pub fn aggregate(
    dir: &Path,
    extension: &str,
    matching: ExtensionMatch,
) -> Result<SchemaDocument, SchemaError> {
    if !dir.exists() {
        return Err(SchemaError::MissingDirectory {
            dir: dir.to_path_buf(),
        });
    }

    let mut type_defs = String::new();
    let mut fragments = Vec::new();

    for result in build_walker(dir) {
        let entry = match result {
            Ok(entry) => entry,
            Err(error) => {
                tracing::debug!(%error, "schema: skipping unreadable directory entry");
                continue;
            }
        };

        if entry.file_type().is_none_or(|ft| ft.is_dir()) {
            continue;
        }
        if !matching.matches(&entry.file_name().to_string_lossy(), extension) {
            continue;
        }

        let path = entry.into_path();
        let status = match read_lossy(&path) {
            Ok(contents) => {
                type_defs.push_str(&contents);
                type_defs.push(SEPARATOR);
                FragmentStatus::Included {
                    bytes: contents.len(),
                }
            }
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "schema: skipping unreadable file");
                FragmentStatus::Skipped {
                    reason: error.to_string(),
                }
            }
        };
        fragments.push(SchemaFragment { path, status });
    }

    if type_defs.is_empty() {
        return Err(SchemaError::Empty {
            dir: dir.to_path_buf(),
        });
    }

    let document = SchemaDocument {
        type_defs,
        fragments,
    };
    let names: Vec<String> = document.included().map(SchemaFragment::file_name).collect();
    tracing::info!(files = ?names, "schema files");

    Ok(document)
}

/// Read a single schema file.
///
/// # Errors
///
/// Returns [`SchemaError::Read`] if the file cannot be opened or read.
pub fn read_fragment(path: &Path) -> Result<String, SchemaError> {
    read_lossy(path).map_err(|source| SchemaError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Invalid UTF-8 sequences become U+FFFD, the same substitution JSON encoding
/// would apply to them later.
fn read_lossy(path: &Path) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(error) => String::from_utf8_lossy(error.as_bytes()).into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_fragment_returns_contents() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("test.graphql");
        let schema = "\n\ttype Query {\n\t\tworld: String\n\t  }\n\t";
        std::fs::write(&file, schema).unwrap();

        assert_eq!(read_fragment(&file).unwrap(), schema);
    }

    #[test]
    fn read_fragment_missing_file() {
        let err = read_fragment(Path::new("doesn't exist")).unwrap_err();
        assert!(matches!(err, SchemaError::Read { .. }));
        assert!(err.to_string().starts_with("cannot read schema file doesn't exist"));
    }

    #[test]
    fn read_fragment_replaces_invalid_utf8() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("bad.graphql");
        std::fs::write(&file, b"type Q\xff { a: Int }").unwrap();

        assert_eq!(read_fragment(&file).unwrap(), "type Q\u{FFFD} { a: Int }");
    }

    #[test]
    fn fragment_file_name() {
        let fragment = SchemaFragment {
            path: PathBuf::from("schemas/nested/query.graphql"),
            status: FragmentStatus::Included { bytes: 3 },
        };
        assert_eq!(fragment.file_name(), "query.graphql");
        assert!(fragment.is_included());
    }
}
