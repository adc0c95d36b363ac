//! Recursive artifact discovery and suffix filtering.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Whether a file name counts as an elf artifact.
///
/// The check is a substring match, not an extension check: `app.elf`,
/// `app.elf.debug` and `app.elfstripped` all match.
pub fn is_elf_name(file_name: &str) -> bool {
    file_name.contains(".elf")
}

/// Recursively collect every elf artifact under `dir`.
///
/// Paths are returned in directory-traversal order; no sorting is
/// guaranteed.
///
/// # Errors
///
/// Returns an error if `dir` or any directory below it cannot be read.
#[must_use = "discovered artifact paths should be processed"]
pub fn find_elfs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut elfs = Vec::new();
    collect_elfs(dir, &mut elfs)?;
    Ok(elfs)
}

fn collect_elfs(dir: &Path, elfs: &mut Vec<PathBuf>) -> Result<()> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read directory: {}", dir.display()))?;

    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to read entry in: {}", dir.display()))?;
        let path = entry.path();

        if path.is_dir() {
            collect_elfs(&path, elfs)?;
        } else if is_elf_name(&entry.file_name().to_string_lossy()) {
            elfs.push(path);
        }
    }

    Ok(())
}

/// Keep the discovered paths that end with one of the requested suffixes.
///
/// An empty `requested` list keeps everything. A path matching several
/// suffixes is kept once; discovery order is preserved.
pub fn filter_by_suffix(elfs: &[PathBuf], requested: &[String]) -> Vec<PathBuf> {
    if requested.is_empty() {
        return elfs.to_vec();
    }

    elfs.iter()
        .filter(|elf| {
            let path = elf.to_string_lossy();
            requested.iter().any(|req| path.ends_with(req.as_str()))
        })
        .cloned()
        .collect()
}
