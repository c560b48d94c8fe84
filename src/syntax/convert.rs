//! Directory conversion pass
//!
//! Enumerates a directory of language-definition files and writes one
//! pretty-printed `<base>_syntax.json` file per entry. This is a single
//! linear pass: entry names are processed in sorted order, and the first
//! failure ends the run and is returned to the caller. Output files are
//! created or truncated, never deleted.

use crate::syntax::definition::LanguageDefinition;
use crate::syntax::error::ConvertError;
use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Suffix stripped from input entry names when deriving the output name.
pub const INPUT_SUFFIX: &str = ".yaml";

/// Suffix appended to every derived output name.
pub const OUTPUT_SUFFIX: &str = "_syntax.json";

/// Converts a directory of language-definition files to syntax JSON files.
pub struct Converter {
    source_dir: PathBuf,
    output_dir: PathBuf,
}

impl Converter {
    /// Create a converter reading from `source_dir` and writing to
    /// `output_dir`.
    pub fn new(source_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Converter {
            source_dir: source_dir.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Run the conversion pass.
    ///
    /// One diagnostic line of the form `filename: <name> : filetype: <type>`
    /// is written to `diagnostics` for every directory entry, including the
    /// special markers when the listing contains them. A diagnostic write
    /// failure ends the run like any other error. Returns the output paths
    /// written, in processing order.
    pub fn convert_all<W: Write>(
        &self,
        diagnostics: &mut W,
    ) -> Result<Vec<PathBuf>, ConvertError> {
        let mut written = Vec::new();

        for (name, kind) in self.list_entries()? {
            let display_name = name.to_string_lossy();
            writeln!(
                diagnostics,
                "filename: {} : filetype: {}",
                display_name, kind
            )
            .map_err(|e| ConvertError::Diagnostics { source: e })?;
            if is_special_marker(&display_name) {
                continue;
            }

            let source_path = self.source_dir.join(&name);
            let definition = LanguageDefinition::from_file(&source_path)?;
            let json = definition
                .to_json_pretty()
                .map_err(|e| ConvertError::Serialize {
                    path: source_path.clone(),
                    message: e.to_string(),
                })?;

            let output_path = self.output_dir.join(derive_output_name(&display_name));
            fs::write(&output_path, json).map_err(|e| ConvertError::CreateFile {
                path: output_path.clone(),
                source: e,
            })?;
            written.push(output_path);
        }

        Ok(written)
    }

    /// Enumerate the source directory, sorted by entry name.
    fn list_entries(&self) -> Result<Vec<(OsString, &'static str)>, ConvertError> {
        let read_dir = fs::read_dir(&self.source_dir).map_err(|e| ConvertError::ReadDir {
            path: self.source_dir.clone(),
            source: e,
        })?;

        let mut entries = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| ConvertError::ReadDir {
                path: self.source_dir.clone(),
                source: e,
            })?;
            entries.push((entry.file_name(), file_type_name(&entry)));
        }
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        Ok(entries)
    }
}

/// Derive `<base>_syntax.json` from an entry name.
///
/// The `.yaml` suffix is stripped only when present; any other entry name
/// keeps its full text as the base.
pub fn derive_output_name(entry_name: &str) -> String {
    let base = entry_name.strip_suffix(INPUT_SUFFIX).unwrap_or(entry_name);
    format!("{base}{OUTPUT_SUFFIX}")
}

/// Whether a name is one of the two entries every directory listing
/// implicitly contains. Matched by exact text equality only.
fn is_special_marker(name: &str) -> bool {
    name == "." || name == ".."
}

fn file_type_name(entry: &fs::DirEntry) -> &'static str {
    match entry.file_type() {
        Ok(t) if t.is_dir() => "dir",
        Ok(t) if t.is_file() => "file",
        Ok(t) if t.is_symlink() => "link",
        _ => "unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("java.yaml", "java_syntax.json")]
    #[case("cpp.yaml", "cpp_syntax.json")]
    #[case("notes.txt", "notes.txt_syntax.json")]
    #[case("archive.yaml.yaml", "archive.yaml_syntax.json")]
    #[case("yaml", "yaml_syntax.json")]
    fn test_derive_output_name(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(derive_output_name(input), expected);
    }

    #[rstest]
    #[case(".", true)]
    #[case("..", true)]
    #[case("...", false)]
    #[case(".hidden", false)]
    #[case("", false)]
    #[case(". ", false)]
    fn test_special_marker_filter(#[case] name: &str, #[case] special: bool) {
        assert_eq!(is_special_marker(name), special);
    }

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_diagnostic_write_failure_ends_the_run() {
        let source = tempfile::TempDir::new().unwrap();
        let output = tempfile::TempDir::new().unwrap();
        fs::write(source.path().join("java.yaml"), "language_data: {}\n").unwrap();

        let converter = Converter::new(source.path(), output.path());
        let err = converter.convert_all(&mut FailingSink).unwrap_err();

        match err {
            ConvertError::Diagnostics { .. } => {}
            other => panic!("Expected Diagnostics error, got {other:?}"),
        }
        assert!(!output.path().join("java_syntax.json").exists());
    }

    #[test]
    fn test_missing_source_dir_is_read_dir_error() {
        let converter = Converter::new("does/not/exist", ".");
        let mut diagnostics = Vec::<u8>::new();
        let err = converter.convert_all(&mut diagnostics).unwrap_err();
        match err {
            ConvertError::ReadDir { path, .. } => {
                assert_eq!(path, PathBuf::from("does/not/exist"))
            }
            other => panic!("Expected ReadDir error, got {other:?}"),
        }
        assert!(diagnostics.is_empty());
    }
}
