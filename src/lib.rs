//! Locate `.elf` build artifacts and clone them into a mirrored tree.
//!
//! "Elf" here is a naming heuristic: any file whose name contains the
//! substring `.elf` counts, with no content inspection. Matches found
//! under a search directory are copied into a `build_output/` tree in
//! the caller's working directory, mirroring their structure relative
//! to the search root. A leading `build_output` component in that
//! relative structure is dropped so re-running over an already-staged
//! tree does not nest the output.

mod copy;
mod discover;
mod paths;

pub use copy::clone_file;
pub use discover::{filter_by_suffix, find_elfs, is_elf_name};
pub use paths::{dest_path, normalize_subdir, OUTPUT_DIR_NAME};
