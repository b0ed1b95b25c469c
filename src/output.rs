//! Publishing the computed version for later CI steps.

use crate::error::{NextTagError, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Output name under which the version is published
pub const VERSION_OUTPUT: &str = "version";

/// Appends `name=value` to a step output file such as `$GITHUB_OUTPUT`.
///
/// The file is created if it does not exist. Values containing a newline are
/// rejected since they would corrupt the file's line format.
pub fn publish_output<P: AsRef<Path>>(path: P, name: &str, value: &str) -> Result<()> {
    if value.contains('\n') || name.contains('\n') {
        return Err(NextTagError::output(format!(
            "value of '{}' must be a single line",
            name
        )));
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path.as_ref())?;
    writeln!(file, "{}={}", name, value)?;

    log::debug!("Wrote {}={} to {}", name, value, path.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_publish_appends_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("output");
        std::fs::write(&path, "other=1\n").unwrap();

        publish_output(&path, VERSION_OUTPUT, "v1.2.3").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "other=1\nversion=v1.2.3\n");
    }

    #[test]
    fn test_publish_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("new_output");

        publish_output(&path, VERSION_OUTPUT, "2024.01.1-rc1").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "version=2024.01.1-rc1\n");
    }

    #[test]
    fn test_publish_rejects_multiline_value() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("output");
        let err = publish_output(&path, VERSION_OUTPUT, "a\nb").unwrap_err();
        assert!(matches!(err, NextTagError::Output(_)));
        assert_eq!(
            err.to_string(),
            "Output error: value of 'version' must be a single line"
        );
        assert!(!path.exists());
    }
}
