//! The library components of the game. They allow resolving the installed
//! command to its entry point, drawing the title screen and the main menu,
//! and reporting the packaging metadata the distribution was built with.
//!
//! The starting point of the library is the cli.rs file, which owns the
//! command definition and the `main()` function the binary delegates to. The
//! murder mystery itself is not part of this release; the shell stops at the
//! menu and says so.

pub mod cli;
mod menu;
mod meta;
