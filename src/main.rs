//! CLI entry point: `clone-elfs <subdir> [suffix ...]`.

use anyhow::{Context, Result};
use clap::Parser;
use std::env;

use elf_clone::{
    clone_file, dest_path, filter_by_suffix, find_elfs, normalize_subdir, OUTPUT_DIR_NAME,
};

/// Clone .elf build artifacts into a mirrored build_output tree.
#[derive(Debug, Parser)]
#[command(name = "clone-elfs", version, about)]
struct Cli {
    /// Directory to search, relative to the current directory.
    /// A trailing `/.` is ignored.
    subdir: String,

    /// Filename suffixes to keep. With none given, every match is cloned.
    requested: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    println!("Requested suffixes: {:?}", cli.requested);

    let current_dir = env::current_dir().context("Failed to resolve current directory")?;
    println!("Current dir: {}", current_dir.display());

    let search_root = current_dir.join(normalize_subdir(&cli.subdir));
    let output_root = current_dir.join(OUTPUT_DIR_NAME);

    let elfs = find_elfs(&search_root)?;
    println!("All elfs: {:?}", elfs);

    let filtered = filter_by_suffix(&elfs, &cli.requested);
    println!("Filtered: {:?}", filtered);

    for src in &filtered {
        let dst = dest_path(&search_root, &output_root, src)?;
        println!("Cloning: {} to: {}", src.display(), dst.display());
        clone_file(src, &dst)?;
    }

    Ok(())
}
