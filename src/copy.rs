//! File cloning into the output tree.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Copy `source` to `dest`, creating any missing parent directories.
///
/// An existing destination file is overwritten.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the
/// copy itself fails (source vanished, permissions).
pub fn clone_file(source: &Path, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::copy(source, dest).with_context(|| {
        format!(
            "Failed to copy {} to {}",
            source.display(),
            dest.display()
        )
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_clone_file_creates_parents() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("foo.elf");
        fs::write(&src, b"\x7fELF payload").unwrap();

        let dest = temp.path().join("out/a/b/foo.elf");
        clone_file(&src, &dest).unwrap();

        assert_eq!(fs::read(&dest).unwrap(), b"\x7fELF payload");
    }

    #[test]
    fn test_clone_file_overwrites() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("foo.elf");
        let dest = temp.path().join("out/foo.elf");
        fs::create_dir_all(temp.path().join("out")).unwrap();
        fs::write(&src, b"new contents").unwrap();
        fs::write(&dest, b"stale").unwrap();

        clone_file(&src, &dest).unwrap();

        assert_eq!(fs::read(&dest).unwrap(), b"new contents");
    }

    #[test]
    fn test_clone_file_missing_source() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("gone.elf");
        let dest = temp.path().join("out/gone.elf");

        let result = clone_file(&src, &dest);
        assert!(result.is_err());
        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("Failed to copy"), "got: {}", msg);
    }
}
