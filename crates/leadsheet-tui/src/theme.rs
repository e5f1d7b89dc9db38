//! Colour theme for the leadsheet TUI.
//!
//! Themes are TOML files embedded via [`include_str!`] so the application
//! works without any files on disk.
//!
//! Category badges hash the category name to a stable index into the
//! palette, so a category keeps its colour across refreshes and filter
//! changes.

use config::{Config, File, FileFormat};
use leadsheet_core::LeadStatus;
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

const DEFAULT_THEME_SRC: &str = include_str!("themes/default.toml");
const GRUVBOX_DARK_THEME_SRC: &str = include_str!("themes/gruvbox_dark.toml");

#[derive(Debug, Deserialize)]
struct RawStyle {
    fg: Option<String>,
    bg: Option<String>,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    dim: bool,
    #[serde(default)]
    italic: bool,
    #[serde(default)]
    underlined: bool,
}

impl RawStyle {
    fn into_style(self) -> Style {
        let mut style = Style::default();
        if let Some(c) = self.fg.as_deref().and_then(parse_color) {
            style = style.fg(c);
        }
        if let Some(c) = self.bg.as_deref().and_then(parse_color) {
            style = style.bg(c);
        }
        for (on, modifier) in [
            (self.bold, Modifier::BOLD),
            (self.dim, Modifier::DIM),
            (self.italic, Modifier::ITALIC),
            (self.underlined, Modifier::UNDERLINED),
        ] {
            if on {
                style = style.add_modifier(modifier);
            }
        }
        style
    }
}

#[derive(Debug, Deserialize)]
struct RawStatuses {
    new_lead: RawStyle,
    called: RawStyle,
    contacted: RawStyle,
    not_received: RawStyle,
    follow_up: RawStyle,
    closed: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawBorders {
    focused: RawStyle,
    command_bar: RawStyle,
    unfocused: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawList {
    selected: RawStyle,
    muted: RawStyle,
    link: RawStyle,
    error: RawStyle,
    chip_active: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawCategories {
    palette: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawTheme {
    statuses: RawStatuses,
    borders: RawBorders,
    list: RawList,
    categories: RawCategories,
}

/// Application colour theme. All styles are pre-resolved ratatui [`Style`]
/// values.
#[derive(Debug, Clone)]
pub struct Theme {
    pub status_new_lead: Style,
    pub status_called: Style,
    pub status_contacted: Style,
    pub status_not_received: Style,
    pub status_follow_up: Style,
    pub status_closed: Style,

    pub border_focused: Style,
    pub border_command_bar: Style,
    pub border_unfocused: Style,

    /// Highlight for the selected lead row.
    pub selected: Style,
    /// Secondary text: contact details, skeleton rows, hints.
    pub muted: Style,
    pub link: Style,
    pub error: Style,
    /// The active status chip in the filter bar.
    pub chip_active: Style,

    category_palette: Vec<Color>,
}

impl Theme {
    /// The palette used when `[ui] theme` is unset.
    pub fn load_default() -> Self {
        Self::embedded(DEFAULT_THEME_SRC, "default")
    }

    pub fn load_gruvbox_dark() -> Self {
        Self::embedded(GRUVBOX_DARK_THEME_SRC, "gruvbox_dark")
    }

    // The embedded sources are covered by `embedded_themes_load`.
    fn embedded(src: &str, name: &str) -> Self {
        Self::from_toml_str(src)
            .unwrap_or_else(|e| panic!("built-in theme {name} does not parse: {e}"))
    }

    /// Resolve a theme by name as accepted by `[ui] theme` and `:theme`.
    /// Returns `None` for unknown names.
    pub fn by_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "default" => Some(Self::load_default()),
            "gruvbox" | "gruvbox_dark" | "gruvbox-dark" => Some(Self::load_gruvbox_dark()),
            _ => None,
        }
    }

    /// Parse a theme from a TOML string. Unknown keys are ignored.
    pub fn from_toml_str(src: &str) -> anyhow::Result<Self> {
        let raw: RawTheme = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        Ok(Self {
            status_new_lead: raw.statuses.new_lead.into_style(),
            status_called: raw.statuses.called.into_style(),
            status_contacted: raw.statuses.contacted.into_style(),
            status_not_received: raw.statuses.not_received.into_style(),
            status_follow_up: raw.statuses.follow_up.into_style(),
            status_closed: raw.statuses.closed.into_style(),
            border_focused: raw.borders.focused.into_style(),
            border_command_bar: raw.borders.command_bar.into_style(),
            border_unfocused: raw.borders.unfocused.into_style(),
            selected: raw.list.selected.into_style(),
            muted: raw.list.muted.into_style(),
            link: raw.list.link.into_style(),
            error: raw.list.error.into_style(),
            chip_active: raw.list.chip_active.into_style(),
            category_palette: raw
                .categories
                .palette
                .iter()
                .filter_map(|s| parse_color(s))
                .collect(),
        })
    }

    /// Badge style for a lead status.
    pub fn status_style(&self, status: LeadStatus) -> Style {
        match status {
            LeadStatus::NewLead => self.status_new_lead,
            LeadStatus::Called => self.status_called,
            LeadStatus::Contacted => self.status_contacted,
            LeadStatus::NotReceived => self.status_not_received,
            LeadStatus::FollowUp => self.status_follow_up,
            LeadStatus::Closed => self.status_closed,
        }
    }

    /// Stable badge style for a category name.
    pub fn category_style(&self, category: &str) -> Style {
        if self.category_palette.is_empty() {
            return Style::default();
        }
        let idx = stable_hash(category) % self.category_palette.len();
        Style::default().fg(self.category_palette[idx])
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::load_default()
    }
}

/// djb2-style hash, stable across Rust versions and process restarts.
fn stable_hash(s: &str) -> usize {
    s.bytes()
        .fold(5381usize, |acc, b| acc.wrapping_mul(31).wrapping_add(b as usize))
}

static NAMED_COLORS: phf::Map<&'static str, Color> = phf::phf_map! {
    "black" => Color::Black,
    "red" => Color::Red,
    "green" => Color::Green,
    "yellow" => Color::Yellow,
    "blue" => Color::Blue,
    "magenta" => Color::Magenta,
    "cyan" => Color::Cyan,
    "gray" => Color::Gray,
    "darkgray" => Color::DarkGray,
    "lightred" => Color::LightRed,
    "lightgreen" => Color::LightGreen,
    "lightyellow" => Color::LightYellow,
    "lightblue" => Color::LightBlue,
    "lightmagenta" => Color::LightMagenta,
    "lightcyan" => Color::LightCyan,
    "white" => Color::White,
};

/// `dark_gray`, `#1d2021` or `indexed:208`. Underscores and `grey` spellings
/// are folded before the name lookup.
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_ascii_lowercase();
    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() != 6 {
            return None;
        }
        let rgb = u32::from_str_radix(hex, 16).ok()?;
        return Some(Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8));
    }
    if let Some(n) = s.strip_prefix("indexed:") {
        return n.parse().ok().map(Color::Indexed);
    }
    let folded = s.replace('_', "").replace("grey", "gray");
    NAMED_COLORS.get(folded.as_str()).copied()
}
