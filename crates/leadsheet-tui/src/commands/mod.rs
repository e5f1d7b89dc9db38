//! `:` commands.
//!
//! | Command | Action |
//! |---------|--------|
//! | `q`, `quit` | Quit |
//! | `help` | Toggle the help popup |
//! | `refresh` | Re-fetch the sheet, replacing the collection |
//! | `theme <name>` | Switch theme (`default`, `gruvbox`) |
//! | `status <filter>` | Select a status chip (`all`, `new`, `not-received`, …) |
//! | `category <name>` | Select a category, `all` to clear |
//! | `set <status>` | Set the selected lead's status |
//! | `links` | Toggle website / LinkedIn rows |

use crate::{app::AppState, theme::Theme};
use leadsheet_core::{CategoryFilter, LeadStatus, StatusFilter};

/// A parsed, validated command ready to be executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    Refresh,
    Theme(String),
    Status(StatusFilter),
    Category(CategoryFilter),
    Set(LeadStatus),
    Links,
}

impl Command {
    /// Parse a raw command string (the text after the `:` prefix).
    ///
    /// An empty string returns `Err("")` as a sentinel meaning "close without
    /// acting".
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
            "q" | "quit" | "q!" => Ok(Command::Quit),
            "help" => Ok(Command::Help),
            "refresh" | "reload" => Ok(Command::Refresh),
            "links" => Ok(Command::Links),
            "theme" => match Theme::by_name(rest) {
                Some(_) => Ok(Command::Theme(rest.to_string())),
                None if rest.is_empty() => Err("usage: theme <default|gruvbox>".to_string()),
                None => Err(format!("unknown theme: {rest}")),
            },
            "status" => StatusFilter::parse(rest).map(Command::Status).ok_or_else(|| {
                "usage: status <all|new|called|contacted|not-received|closed>".to_string()
            }),
            "category" | "cat" => match rest {
                "" => Err("usage: category <name|all>".to_string()),
                r if r.eq_ignore_ascii_case("all") => Ok(Command::Category(CategoryFilter::All)),
                r => Ok(Command::Category(CategoryFilter::Only(r.to_string()))),
            },
            "set" => LeadStatus::from_label(rest).map(Command::Set).ok_or_else(|| {
                "usage: set <new|called|contacted|not-received|follow-up|closed>".to_string()
            }),
            other => Err(format!("unknown command: {other}")),
        }
    }
}

/// Execute a parsed [`Command`] against the application state.
pub fn execute_command(s: &mut AppState, cmd: Command) {
    match cmd {
        Command::Quit => s.quit = true,
        Command::Help => s.show_help = !s.show_help,
        Command::Refresh => s.request_refresh(),
        Command::Theme(name) => {
            if let Some(theme) = Theme::by_name(&name) {
                s.theme = theme;
            }
        }
        Command::Status(filter) => s.set_status_filter(filter),
        Command::Category(category) => s.set_category(category),
        Command::Set(status) => s.set_selected_status(status),
        Command::Links => s.config.ui.show_links = !s.config.ui.show_links,
    }
}
