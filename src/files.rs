// File collaborator: reads input text and writes cleaned text.
//
// Output is written to a temporary file in the destination directory and
// renamed into place, so a failed write never leaves a partial file behind.

use std::io::{ErrorKind, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::IoError;

/// Read a whole UTF-8 input file.
pub fn read_input(path: &Path) -> Result<String, IoError> {
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => IoError::InputFileNotFound(path.to_path_buf()),
        _ => IoError::InputRead {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Atomically write `contents` to `path`, creating parent directories.
pub fn write_output(path: &Path, contents: &str) -> Result<(), IoError> {
    let fail = |source: std::io::Error| IoError::OutputWriteFailure {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(fail)?;

    // Dropping an unpersisted NamedTempFile deletes it
    let mut tmp = NamedTempFile::new_in(dir).map_err(fail)?;
    tmp.write_all(contents.as_bytes()).map_err(fail)?;
    tmp.as_file().sync_all().map_err(fail)?;
    tmp.persist(path).map_err(|e| fail(e.error))?;

    debug!(path = %path.display(), bytes = contents.len(), "Wrote output file");
    Ok(())
}

/// Write the cleaned text and, optionally, a JSON report alongside it.
///
/// The report is written first, so a failed report write never leaves a
/// fresh output file behind.
pub fn write_with_report(
    output: &Path,
    contents: &str,
    report: Option<(&Path, &str)>,
) -> Result<(), IoError> {
    if let Some((report_path, report_json)) = report {
        write_output(report_path, report_json)?;
    }
    write_output(output, contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_input() {
        let err = read_input(Path::new("/nonexistent/muffle-input.txt")).unwrap_err();
        assert!(matches!(err, IoError::InputFileNotFound(_)));
    }

    #[test]
    fn test_unreadable_input_is_not_reported_missing() {
        // A directory exists but cannot be read as text
        let dir = tempfile::tempdir().unwrap();
        let err = read_input(dir.path()).unwrap_err();
        assert!(matches!(err, IoError::InputRead { .. }));
    }

    #[test]
    fn test_write_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/out.txt");
        write_output(&path, "cleaned").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "cleaned");
    }

    #[test]
    fn test_write_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "old contents that are longer").unwrap();
        write_output(&path, "new").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_failed_report_skips_output() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("cleaned.txt");
        let report = dir.path().join("report.json");
        std::fs::create_dir(&report).unwrap();

        let err = write_with_report(&output, "text", Some((report.as_path(), "{}"))).unwrap_err();
        assert!(matches!(err, IoError::OutputWriteFailure { path, .. } if path == report));
        assert!(!output.exists());
    }

    #[test]
    fn test_write_with_report_writes_both() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("cleaned.txt");
        let report = dir.path().join("report.json");

        write_with_report(&output, "text", Some((report.as_path(), "{}"))).unwrap();
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "text");
        assert_eq!(std::fs::read_to_string(&report).unwrap(), "{}");
    }

    #[test]
    fn test_failed_write_leaves_no_files() {
        let dir = tempfile::tempdir().unwrap();
        // Target is an existing directory, so the final rename fails
        let target = dir.path().join("occupied");
        std::fs::create_dir(&target).unwrap();
        std::fs::write(target.join("keep.txt"), "x").unwrap();

        let err = write_output(&target, "text").unwrap_err();
        assert!(matches!(err, IoError::OutputWriteFailure { .. }));

        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1, "temp file was left behind");
    }
}
