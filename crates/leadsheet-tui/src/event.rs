//! Key handling for the dashboard.
//!
//! crossterm events are translated into [`AppEvent`] here and nowhere else.
//! Two tables exist. [`to_app_event`] is used while the lead list has focus
//! and binds single letters to lead actions:
//!
//! | Keys                     | Event |
//! |--------------------------|-------|
//! | `q`, `Ctrl+c`            | `Quit` |
//! | `/`                      | `QueryFocus` |
//! | arrows, `hjkl`           | `Nav(..)`; left/right step the status chip |
//! | `PageUp`/`PageDown`, `Ctrl+u`/`Ctrl+d` | page the selection |
//! | `g`/`Home`, `G`/`End`    | `Top`, `Bottom` |
//! | `[`, `]`                 | previous / next category |
//! | `c`, `w`                 | `Call`, `WhatsApp` |
//! | `1`, `2`, `3`            | call outcome: Contacted, Not Received, Closed |
//! | `r`                      | `Refresh` |
//!
//! [`to_app_event_insert`] is used while the query bar or the `:` prompt is
//! being typed into. Letters and digits arrive as `Char`; only `Ctrl+c`,
//! arrows and the editing keys keep a meaning.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use leadsheet_core::LeadStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A semantic application event derived from a raw crossterm [`Event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    /// Move keyboard focus to the next pane (Tab-cycle).
    FocusNext,
    QueryFocus,
    /// Move the selection, or step the status filter on Left/Right.
    Nav(Direction),
    PageUp,
    PageDown,
    Top,
    Bottom,
    CategoryNext,
    CategoryPrev,
    /// Dial the selected lead and mark it Called.
    Call,
    WhatsApp,
    /// Record the result of a call on the selected lead.
    Outcome(LeadStatus),
    Refresh,
    Char(char),
    Backspace,
    Enter,
    Resize(u16, u16),
    Escape,
}

/// List-mode translation. `None` for mouse input and unbound keys.
pub fn to_app_event(event: Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) => list_key(key).or_else(|| editing_key(key)),
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        _ => None,
    }
}

/// Text-entry translation for the query bar and the command prompt.
pub fn to_app_event_insert(event: Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) => editing_key(key),
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        _ => None,
    }
}

fn list_key(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;

    let plain = key.modifiers == KeyModifiers::NONE;
    let ctrl = key.modifiers == KeyModifiers::CONTROL;

    let event = match key.code {
        Char('u') if ctrl => AppEvent::PageUp,
        Char('d') if ctrl => AppEvent::PageDown,
        PageUp => AppEvent::PageUp,
        PageDown => AppEvent::PageDown,
        Home => AppEvent::Top,
        End => AppEvent::Bottom,
        // terminals disagree on whether SHIFT accompanies an uppercase char
        Char('G') => AppEvent::Bottom,
        _ if !plain => return None,

        Char('q') => AppEvent::Quit,
        Char('/') => AppEvent::QueryFocus,
        Char('g') => AppEvent::Top,
        Char('[') => AppEvent::CategoryPrev,
        Char(']') => AppEvent::CategoryNext,
        Char('c') => AppEvent::Call,
        Char('w') => AppEvent::WhatsApp,
        Char('r') => AppEvent::Refresh,
        Char('1') => AppEvent::Outcome(LeadStatus::Contacted),
        Char('2') => AppEvent::Outcome(LeadStatus::NotReceived),
        Char('3') => AppEvent::Outcome(LeadStatus::Closed),
        Char('k') => AppEvent::Nav(Direction::Up),
        Char('j') => AppEvent::Nav(Direction::Down),
        Char('h') => AppEvent::Nav(Direction::Left),
        Char('l') => AppEvent::Nav(Direction::Right),
        _ => return None,
    };
    Some(event)
}

/// Bindings shared by both modes.
fn editing_key(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;

    let plain = key.modifiers == KeyModifiers::NONE;
    let typed = plain || key.modifiers == KeyModifiers::SHIFT;

    let event = match key.code {
        Char('c') if key.modifiers == KeyModifiers::CONTROL => AppEvent::Quit,
        Char(c) if typed => AppEvent::Char(c),
        Up => AppEvent::Nav(Direction::Up),
        Down => AppEvent::Nav(Direction::Down),
        Left => AppEvent::Nav(Direction::Left),
        Right => AppEvent::Nav(Direction::Right),
        Tab if plain => AppEvent::FocusNext,
        Backspace if plain => AppEvent::Backspace,
        Enter if plain => AppEvent::Enter,
        Esc => AppEvent::Escape,
        _ => return None,
    };
    Some(event)
}
