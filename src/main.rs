//! # yaag_mme
//!
//! This crate is the console build of Yet Another Adventure Game - Murder
//! Mystery Edition, a text based adventure game where you play with other NPC
//! adventurers. But whether they live or die, is up to you.
//!
//! The binary is nothing more than the installed alias for the library's
//! command entry point; everything the command does lives in the `cli`
//! module.

#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use anyhow::Result;
use yaag_mme::cli;

fn main() -> Result<()> {
    cli::main()
}
