//! Colour theme for the bdwild TUI.
//!
//! Themes are defined as TOML files embedded in the binary via
//! [`include_str!`], so the application works without any files on disk.
//! Resolve one at startup with [`Theme::by_name`] (or [`Theme::load_default`])
//! and pass it through the application as a shared reference.
//!
//! # Conservation badges
//!
//! Each [`ConservationStatus`] has its own badge style, so the threat level
//! reads at a glance in lists, previews and the detail page.

use bdwild_core::{Category, ConservationStatus};
use config::{Config, File, FileFormat};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

const DEFAULT_THEME_SRC: &str = include_str!("themes/default.toml");
const GRUVBOX_DARK_THEME_SRC: &str = include_str!("themes/gruvbox_dark.toml");

/// Theme names accepted by [`Theme::by_name`].
pub const THEME_NAMES: [&str; 2] = ["default", "gruvbox"];

// ---------------------------------------------------------------------------
// Raw (serde) types, mirroring the TOML structure
// ---------------------------------------------------------------------------

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
    #[serde(default)]
    reversed: bool,
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
        let flags = [
            (self.bold, Modifier::BOLD),
            (self.dim, Modifier::DIM),
            (self.italic, Modifier::ITALIC),
            (self.underlined, Modifier::UNDERLINED),
            (self.reversed, Modifier::REVERSED),
        ];
        for (on, modifier) in flags {
            if on {
                style = style.add_modifier(modifier);
            }
        }
        style
    }
}

#[derive(Debug, Deserialize)]
struct RawStatus {
    critically_endangered: RawStyle,
    endangered: RawStyle,
    vulnerable: RawStyle,
    near_threatened: RawStyle,
    least_concern: RawStyle,
    data_deficient: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawBorders {
    focused: RawStyle,
    command_bar: RawStyle,
    unfocused: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawText {
    title: RawStyle,
    heading: RawStyle,
    muted: RawStyle,
    local_name: RawStyle,
    selected: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawSearch {
    highlight: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawCategories {
    palette: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawTheme {
    status: RawStatus,
    borders: RawBorders,
    text: RawText,
    search: RawSearch,
    categories: RawCategories,
}

// ---------------------------------------------------------------------------
// Public Theme type
// ---------------------------------------------------------------------------

/// Application colour theme. All styles are pre-resolved ratatui [`Style`]
/// values.
#[derive(Debug, Clone)]
pub struct Theme {
    pub status_critically_endangered: Style,
    pub status_endangered: Style,
    pub status_vulnerable: Style,
    pub status_near_threatened: Style,
    pub status_least_concern: Style,
    pub status_data_deficient: Style,

    pub border_focused: Style,
    pub border_command_bar: Style,
    pub border_unfocused: Style,

    /// Page and block titles.
    pub title: Style,
    /// Section headings inside a page ("Featured Species", "Habitat").
    pub heading: Style,
    /// Secondary text: dates, hints, scientific names.
    pub muted: Style,
    pub local_name: Style,
    /// The highlighted row of a focused list.
    pub selected: Style,

    /// Inline highlight applied to the matched part of a name.
    pub search_highlight: Style,

    /// One colour per category, in [`Category::ALL`] order.
    category_palette: Vec<Color>,
}

impl Theme {
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed.
    pub fn load_default() -> Self {
        Self::from_toml_str(DEFAULT_THEME_SRC).expect("embedded default theme must be valid TOML")
    }

    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed.
    pub fn load_gruvbox_dark() -> Self {
        Self::from_toml_str(GRUVBOX_DARK_THEME_SRC)
            .expect("embedded gruvbox dark theme must be valid TOML")
    }

    /// Resolve a theme by name (case-insensitive). `None` for unknown names.
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
            status_critically_endangered: raw.status.critically_endangered.into_style(),
            status_endangered: raw.status.endangered.into_style(),
            status_vulnerable: raw.status.vulnerable.into_style(),
            status_near_threatened: raw.status.near_threatened.into_style(),
            status_least_concern: raw.status.least_concern.into_style(),
            status_data_deficient: raw.status.data_deficient.into_style(),
            border_focused: raw.borders.focused.into_style(),
            border_command_bar: raw.borders.command_bar.into_style(),
            border_unfocused: raw.borders.unfocused.into_style(),
            title: raw.text.title.into_style(),
            heading: raw.text.heading.into_style(),
            muted: raw.text.muted.into_style(),
            local_name: raw.text.local_name.into_style(),
            selected: raw.text.selected.into_style(),
            search_highlight: raw.search.highlight.into_style(),
            category_palette: raw
                .categories
                .palette
                .iter()
                .filter_map(|s| parse_color(s))
                .collect(),
        })
    }

    /// Badge style for a conservation status.
    pub fn status_style(&self, status: ConservationStatus) -> Style {
        match status {
            ConservationStatus::CriticallyEndangered => self.status_critically_endangered,
            ConservationStatus::Endangered => self.status_endangered,
            ConservationStatus::Vulnerable => self.status_vulnerable,
            ConservationStatus::NearThreatened => self.status_near_threatened,
            ConservationStatus::LeastConcern => self.status_least_concern,
            ConservationStatus::DataDeficient => self.status_data_deficient,
        }
    }

    /// Accent colour for a category. Falls back to the default style when the
    /// palette is empty.
    pub fn category_style(&self, category: Category) -> Style {
        if self.category_palette.is_empty() {
            return Style::default();
        }
        let idx = Category::ALL.iter().position(|c| *c == category).unwrap_or(0);
        Style::default().fg(self.category_palette[idx % self.category_palette.len()])
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            self.border_focused
        } else {
            self.border_unfocused
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a colour name into a ratatui [`Color`].
///
/// Accepts:
/// - Named terminal colours (case-insensitive): `red`, `dark_gray`, etc.
/// - Hex RGB: `#rrggbb`
/// - 256-colour indexed: `indexed:N`
fn parse_color(s: &str) -> Option<Color> {
    match s.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "dark_gray" | "darkgray" | "dark_grey" | "darkgrey" => Some(Color::DarkGray),
        "light_red" => Some(Color::LightRed),
        "light_green" => Some(Color::LightGreen),
        "light_yellow" => Some(Color::LightYellow),
        "light_blue" => Some(Color::LightBlue),
        "light_magenta" => Some(Color::LightMagenta),
        "light_cyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        s if s.starts_with('#') && s.len() == 7 => {
            let r = u8::from_str_radix(&s[1..3], 16).ok()?;
            let g = u8::from_str_radix(&s[3..5], 16).ok()?;
            let b = u8::from_str_radix(&s[5..7], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        s if s.starts_with("indexed:") => {
            let n: u8 = s["indexed:".len()..].parse().ok()?;
            Some(Color::Indexed(n))
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
