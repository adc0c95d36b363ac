//! Argument normalization and destination-path computation.

use anyhow::{Context, Result};
use std::path::{Component, Path, PathBuf};

/// Name of the output root created under the current directory, and of
/// the path component stripped from each match before re-rooting.
pub const OUTPUT_DIR_NAME: &str = "build_output";

/// Strip a trailing `/.` from the subdirectory argument.
///
/// `build/output/.` and `build/output` name the same search root.
pub fn normalize_subdir(subdir: &str) -> &str {
    subdir.strip_suffix("/.").unwrap_or(subdir)
}

/// Compute where `source` should be cloned to.
///
/// The source's path relative to `search_root` is mirrored under
/// `output_root`. A leading `build_output` component of that relative
/// path is dropped first, so an already-staged tree is not nested a
/// second time. Stripping only looks at the first component: a relative
/// path that no longer starts with `build_output` maps unchanged.
///
/// # Errors
///
/// Returns an error if `source` is not located under `search_root`.
pub fn dest_path(search_root: &Path, output_root: &Path, source: &Path) -> Result<PathBuf> {
    let relative = source.strip_prefix(search_root).with_context(|| {
        format!(
            "Source {} is not under search root {}",
            source.display(),
            search_root.display()
        )
    })?;

    Ok(output_root.join(strip_output_component(relative)))
}

fn strip_output_component(relative: &Path) -> &Path {
    let mut components = relative.components();
    match components.next() {
        Some(Component::Normal(first)) if first == OUTPUT_DIR_NAME => components.as_path(),
        _ => relative,
    }
}
