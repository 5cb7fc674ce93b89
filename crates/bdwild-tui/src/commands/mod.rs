//! `:` commands: parsing and execution.
//!
//! | Command | Action |
//! |---------|--------|
//! | `q`, `quit` | Back one page, or quit on the first page |
//! | `q!`, `quit!` | Quit |
//! | `help` | Toggle the help popup |
//! | `theme <name>` | Switch theme (`default`, `gruvbox`) |
//! | `status <value\|all>` | Set the conservation status filter |
//! | `category <value\|all>` | Set the category filter (opens Browse) |
//! | `go <page>` | `home`, `search`/`browse`, `blog`, `about` or a category |
//! | `open <id>` | Open the detail page of a species |
//! | `back` | Previous page |
//! | `clear` | Clear the search term and both filters |

use crate::{app::AppState, router::Route, theme::Theme};
use bdwild_core::{Category, ConservationStatus, Facet, SpeciesId};

/// A parsed, validated command ready to be executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Exit,
    Help,
    Theme(String),
    Status(Facet<ConservationStatus>),
    Category(Facet<Category>),
    Go(Route),
    Open(SpeciesId),
    Back,
    Clear,
}

impl Command {
    /// Parse a raw command string (the text after the `:` prefix).
    ///
    /// Returns `Ok(cmd)` on success, `Err(message)` on failure. An empty
    /// string returns `Err("")` as a sentinel meaning "close without acting".
    ///
    /// Filter values that name no known status or category are accepted; the
    /// resulting filter simply matches nothing.
    pub fn parse(input: &str) -> Result<Command, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err(String::new());
        }

        let (word, rest) = input
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((input, ""));

        match word {
            "q" | "quit" => Ok(Command::Quit),
            "q!" | "quit!" => Ok(Command::Exit),
            "help" => Ok(Command::Help),
            "back" => Ok(Command::Back),
            "clear" => Ok(Command::Clear),
            "theme" => match rest {
                "" => Err("usage: theme <default|gruvbox>".to_string()),
                name if Theme::by_name(name).is_some() => Ok(Command::Theme(name.to_string())),
                name => Err(format!("unknown theme: {name}")),
            },
            "status" => match rest {
                "" => Err("usage: status <value|all>".to_string()),
                value => Ok(Command::Status(Facet::parse(value))),
            },
            "category" => match rest {
                "" => Err("usage: category <value|all>".to_string()),
                value => Ok(Command::Category(Facet::parse(value))),
            },
            "go" => match rest {
                "" => Err("usage: go <home|search|blog|about|category>".to_string()),
                page => page.parse().map(Command::Go),
            },
            "open" => rest
                .parse::<SpeciesId>()
                .map(Command::Open)
                .map_err(|_| "usage: open <id>".to_string()),
            other => Err(format!("unknown command: {other}")),
        }
    }
}

/// Execute a parsed [`Command`] against the application state.
pub fn execute_command(s: &mut AppState, cmd: Command) {
    tracing::debug!(command = ?cmd, "executing command");
    match cmd {
        Command::Quit => s.back_or_quit(),
        Command::Exit => s.quit = true,
        Command::Help => s.show_help = !s.show_help,
        Command::Theme(name) => {
            if let Some(theme) = Theme::by_name(&name) {
                s.theme = theme;
            }
        }
        Command::Status(facet) => s.set_status(facet),
        Command::Category(facet) => s.set_category(facet),
        Command::Go(route) => s.navigate(route),
        Command::Open(id) => s.navigate(Route::Detail(id)),
        Command::Back => s.back(),
        Command::Clear => s.clear_search(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_quit() {
        assert_eq!(Command::parse("q"), Ok(Command::Quit));
        assert_eq!(Command::parse("  quit  "), Ok(Command::Quit));
        assert_eq!(Command::parse("q!"), Ok(Command::Exit));
    }

    #[test]
    fn parse_theme() {
        assert_eq!(
            Command::parse("theme gruvbox"),
            Ok(Command::Theme("gruvbox".to_string()))
        );
        assert!(Command::parse("theme").is_err());
        assert!(Command::parse("theme neon").unwrap_err().contains("neon"));
    }

    #[test]
    fn parse_filters() {
        assert_eq!(
            Command::parse("status endangered"),
            Ok(Command::Status(Facet::Only(ConservationStatus::Endangered)))
        );
        assert_eq!(Command::parse("status all"), Ok(Command::Status(Facet::All)));
        assert_eq!(
            Command::parse("category birds"),
            Ok(Command::Category(Facet::Only(Category::Bird)))
        );
        assert_eq!(
            Command::parse("category Dragon"),
            Ok(Command::Category(Facet::Unrecognised("Dragon".to_string())))
        );
        assert!(Command::parse("status").is_err());
    }

    #[test]
    fn parse_navigation() {
        assert_eq!(Command::parse("go blog"), Ok(Command::Go(Route::Blog)));
        assert_eq!(
            Command::parse("go fish"),
            Ok(Command::Go(Route::Category(Category::Fish)))
        );
        assert!(Command::parse("go moon").is_err());
        assert_eq!(Command::parse("open 9"), Ok(Command::Open(SpeciesId(9))));
        assert_eq!(Command::parse("open tiger"), Err("usage: open <id>".to_string()));
        assert_eq!(Command::parse("back"), Ok(Command::Back));
    }

    #[test]
    fn parse_empty_returns_sentinel_err() {
        assert_eq!(Command::parse(""), Err(String::new()));
        assert_eq!(Command::parse("  "), Err(String::new()));
    }

    #[test]
    fn parse_unknown() {
        let err = Command::parse("frobnicate").unwrap_err();
        assert!(err.contains("frobnicate"));
    }
}
