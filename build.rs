//! Build script for yaag_mme.
//!
//! It assembles the long description the distribution presents: the contents
//! of README.md, a blank line, then the contents of CHANGELOG.md. Both files
//! are required; a missing one fails the build here instead of surfacing at
//! run time.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=README.md");
    println!("cargo:rerun-if-changed=CHANGELOG.md");

    let manifest_dir =
        env::var("CARGO_MANIFEST_DIR").expect("cargo always sets CARGO_MANIFEST_DIR");
    let out_dir = env::var("OUT_DIR").expect("cargo always sets OUT_DIR");

    let readme = read_required(Path::new(&manifest_dir).join("README.md"));
    let changelog = read_required(Path::new(&manifest_dir).join("CHANGELOG.md"));

    let long_description = format!("{readme}\n\n{changelog}");
    fs::write(
        Path::new(&out_dir).join("long_description.md"),
        long_description,
    )
    .expect("OUT_DIR is writable during the build");
}

/// Reads one of the packaging files, failing the build with the offending
/// path if it is absent or unreadable.
fn read_required(path: PathBuf) -> String {
    match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(err) => panic!("{} is required to build this package: {err}", path.display()),
    }
}
