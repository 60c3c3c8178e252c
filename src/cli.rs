//! The cli module contains the command-line surface of the game. It holds the
//! clap command the installed `yaag_mme` alias resolves to, the title screen
//! and the loop that drives the main menu.

use anyhow::Result;
use clap::Parser;
use console::{style, Term};

use crate::menu::{self, MenuAction};
use crate::meta;

/// This struct holds information about the application when it comes to the
/// command-line argument parser of choice, which is clap. The command does not
/// define any options of its own yet, so parsing only provides the implicit
/// `--help` and `--version` surface and rejects stray arguments. The long help
/// carries the same description the published package does.
#[derive(Parser)]
#[command(name = "yaag_mme", version, about)]
#[command(long_about = meta::LONG_DESCRIPTION)]
struct Cli;

/// This enum holds the errors the shell can hit before the menu loop is even
/// entered.
#[derive(thiserror::Error, Debug)]
enum ShellError {
    /// The menus are driven by interactive prompts, so a pipe or a file on
    /// standard output cannot host the game.
    #[error("{}", style("yaag_mme needs an interactive terminal").bold().underlined())]
    NotInteractive,
}

/// Initializes the shell and drives it until the player quits. This is the
/// function the installed `yaag_mme` command resolves to; main.rs only
/// delegates here.
///
/// # Errors
///
/// The function may return any one of the following errors:
///
/// - io::Error
/// - dialoguer::Error
/// - ShellError
pub fn main() -> Result<()> {
    // parse up front for the implicit --help/--version handling; there are no
    // options to read back yet
    let _cli = Cli::parse();
    let term = Term::stdout();

    if !term.is_term() {
        return Err(ShellError::NotInteractive.into());
    }

    title_screen(&term)?;

    loop {
        match menu::main_menu(&term)? {
            MenuAction::StartGame => menu::scenario_notice(&term)?,
            MenuAction::AboutPage => menu::about_page(&term)?,
            MenuAction::Finish => {
                term.clear_screen()?;
                term.show_cursor()?;
                break Ok(());
            }
        }
    }
}

/// This function draws the title screen shown above the first menu, as well as
/// a few other fallible operations. Among these, the screen is cleared and the
/// cursor is hidden. The title of the console window is also set to the name
/// of the game.
fn title_screen(term: &Term) -> Result<()> {
    const TITLE: &str = "Yet Another Adventure Game - Murder Mystery Edition";
    let title = style(TITLE).bold();

    term.clear_screen()?;
    term.set_title(meta::NAME);
    term.hide_cursor()?;

    term.write_line(&format!("{}", title))?;
    term.write_line(meta::DESCRIPTION)?;
    term.write_line("")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;
    use clap::{CommandFactory as _, Parser as _};

    use super::Cli;

    #[test]
    fn test_command_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_resolves_with_no_arguments() {
        assert!(
            Cli::try_parse_from(["yaag_mme"]).is_ok(),
            "the command must not require any arguments"
        );
    }

    #[test]
    fn test_version_flag() {
        let err = match Cli::try_parse_from(["yaag_mme", "--version"]) {
            Ok(_) => panic!("--version must short-circuit parsing"),
            Err(err) => err,
        };

        assert_eq!(
            err.kind(),
            ErrorKind::DisplayVersion,
            "--version must resolve to the version display"
        );
    }

    #[test]
    fn test_help_flag() {
        let err = match Cli::try_parse_from(["yaag_mme", "--help"]) {
            Ok(_) => panic!("--help must short-circuit parsing"),
            Err(err) => err,
        };

        assert_eq!(
            err.kind(),
            ErrorKind::DisplayHelp,
            "--help must resolve to the help display"
        );
    }

    #[test]
    fn test_rejects_stray_arguments() {
        assert!(
            Cli::try_parse_from(["yaag_mme", "start"]).is_err(),
            "the command defines no positional arguments"
        );
    }
}
