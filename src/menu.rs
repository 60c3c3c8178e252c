//! The menu module contains the main menu and the pages it leads to. The menu
//! is rendered with the `dialoguer` crate on the terminal handle owned by the
//! entry point, and every page returns to the menu on a key press.

use anyhow::Result;
use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;

use crate::meta;

/// This enum holds the entries of the main menu, in the order they are
/// displayed.
#[expect(
    clippy::arbitrary_source_item_ordering,
    reason = "It's best if the items reflect the actual order they are displayed in the menu."
)]
#[derive(PartialEq, Clone, Copy)]
pub(crate) enum MainMenu {
    /// This variant is used for the entry that would start a new adventure. It
    /// is the entry that gets selected by default once the menu is first
    /// loaded.
    NewGame,
    /// This variant is used for the entry showing the package name, version
    /// and long description.
    About,
    /// This variant is used for the entry that leaves the game.
    Quit,
}

impl MainMenu {
    /// This function returns the action bound to the menu entry.
    const fn action(&self) -> MenuAction {
        match *self {
            Self::NewGame => MenuAction::StartGame,
            Self::About => MenuAction::AboutPage,
            Self::Quit => MenuAction::Finish,
        }
    }

    /// This function returns all the enum variants as a vector.
    fn list() -> Vec<Self> {
        vec![Self::NewGame, Self::About, Self::Quit]
    }

    /// This function returns a string representation of the implicit object.
    const fn repr(&self) -> &str {
        match *self {
            Self::NewGame => "New game",
            Self::About => "About",
            Self::Quit => "Quit",
        }
    }
}

/// This enum holds the information about the types of actions that get
/// triggered with each entry in the menu.
#[derive(PartialEq, Debug)]
pub(crate) enum MenuAction {
    /// This variant is used when an adventure is to be started.
    StartGame,
    /// This variant is used when the about page should be shown.
    AboutPage,
    /// This variant is used when the quit entry is picked.
    Finish,
}

/// This function draws the main menu and blocks until the player confirms an
/// entry with the return key, returning the action bound to it.
pub(crate) fn main_menu(term: &Term) -> Result<MenuAction> {
    let entries = MainMenu::list();
    let labels: Vec<&str> = entries.iter().map(MainMenu::repr).collect();

    let picked = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{}", style("What will you do?").bold()))
        .items(&labels)
        .default(0)
        .interact_on(term)?;

    // indexing is safe; the prompt only returns indices into the items it was
    // given
    Ok(entries[picked].action())
}

/// This function draws the page behind the "New game" entry. There is no
/// scenario to play in this release, so the page says so and waits for a key
/// press.
pub(crate) fn scenario_notice(term: &Term) -> Result<()> {
    term.clear_screen()?;
    term.write_line(&format!(
        "{}",
        style("The murder mystery is still being written.").bold()
    ))?;
    term.write_line(
        "No adventure can be started in this release. The scenario, the other \
         adventurers and their fates arrive in a later version.",
    )?;

    press_any_key(term)
}

/// This function draws the page behind the "About" entry: the package name and
/// version, followed by the long description the distribution was built with.
pub(crate) fn about_page(term: &Term) -> Result<()> {
    term.clear_screen()?;
    term.write_line(&format!(
        "{} {}",
        style(meta::NAME).bold(),
        meta::VERSION
    ))?;
    term.write_line("")?;

    for line in meta::LONG_DESCRIPTION.lines() {
        term.write_line(line)?;
    }

    press_any_key(term)
}

/// This function closes a page by waiting for a single key press and clearing
/// the screen afterwards.
fn press_any_key(term: &Term) -> Result<()> {
    term.write_line("")?;
    term.write_line(&format!(
        "{}",
        style("Press any key to return to the menu").dim()
    ))?;

    let _key = term.read_key()?;
    term.clear_screen()?;
    Ok(())
}
