//! Colour theme for the mealdeck TUI.
//!
//! Themes are defined as TOML files. Both built-in themes are embedded in the
//! binary via [`include_str!`] so the application works without any files on
//! disk. Call [`Theme::by_name`] at startup and pass the result through the
//! application as a shared reference.
//!
//! # Colour assignment for categories
//!
//! Category names are hashed to a stable index into the palette so the same
//! category always gets the same colour within a session, regardless of the
//! order in which recipes arrive.

use config::{Config, File, FileFormat};
use mealdeck_core::Notice;
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

const DEFAULT_THEME_SRC: &str = include_str!("themes/default.toml");
const GRUVBOX_DARK_THEME_SRC: &str = include_str!("themes/gruvbox_dark.toml");

// ---------------------------------------------------------------------------
// Raw (serde) types — mirror the TOML structure
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
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.dim {
            style = style.add_modifier(Modifier::DIM);
        }
        if self.italic {
            style = style.add_modifier(Modifier::ITALIC);
        }
        if self.underlined {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        style
    }
}

#[derive(Debug, Deserialize)]
struct RawBorders {
    focused: RawStyle,
    command_bar: RawStyle,
    unfocused: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawRecipes {
    title: RawStyle,
    meta: RawStyle,
    selected: RawStyle,
    highlight: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawNotices {
    info: RawStyle,
    warning: RawStyle,
    error: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawCategories {
    palette: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawTheme {
    borders: RawBorders,
    recipes: RawRecipes,
    notices: RawNotices,
    categories: RawCategories,
}

// ---------------------------------------------------------------------------
// Public Theme type
// ---------------------------------------------------------------------------

/// Application colour theme. All styles are pre-resolved ratatui [`Style`]
/// values — no allocation at render time.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Border style for the currently focused pane.
    pub border_focused: Style,
    /// Border style for the command bar and popups.
    pub border_command_bar: Style,
    /// Border style for unfocused panes.
    pub border_unfocused: Style,

    /// Recipe names in lists and headings.
    pub recipe_title: Style,
    /// Secondary text: area, measures, hints.
    pub recipe_meta: Style,
    /// The row under the list cursor.
    pub recipe_selected: Style,
    /// Matched query text inside recipe names.
    pub search_highlight: Style,

    pub notice_info: Style,
    pub notice_warning: Style,
    pub notice_error: Style,

    /// Ordered colour palette used for category colour cycling.
    category_palette: Vec<Color>,
}

impl Theme {
    /// Load and parse the embedded default theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed.
    pub fn load_default() -> Self {
        Self::from_toml_str(DEFAULT_THEME_SRC).expect("embedded default theme must be valid TOML")
    }

    /// Load and parse the embedded Gruvbox Dark theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed.
    pub fn load_gruvbox_dark() -> Self {
        Self::from_toml_str(GRUVBOX_DARK_THEME_SRC)
            .expect("embedded gruvbox dark theme must be valid TOML")
    }

    /// Resolve a theme name from config or the `:theme` command. Unknown
    /// names fall back to the default theme.
    pub fn by_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "gruvbox" | "gruvbox_dark" | "gruvbox-dark" => Self::load_gruvbox_dark(),
            _ => Self::load_default(),
        }
    }

    /// Parse a theme from a TOML string. Unknown keys are ignored.
    pub fn from_toml_str(src: &str) -> anyhow::Result<Self> {
        let raw: RawTheme = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        Ok(Self {
            border_focused: raw.borders.focused.into_style(),
            border_command_bar: raw.borders.command_bar.into_style(),
            border_unfocused: raw.borders.unfocused.into_style(),
            recipe_title: raw.recipes.title.into_style(),
            recipe_meta: raw.recipes.meta.into_style(),
            recipe_selected: raw.recipes.selected.into_style(),
            search_highlight: raw.recipes.highlight.into_style(),
            notice_info: raw.notices.info.into_style(),
            notice_warning: raw.notices.warning.into_style(),
            notice_error: raw.notices.error.into_style(),
            category_palette: raw
                .categories
                .palette
                .iter()
                .filter_map(|s| parse_color(s))
                .collect(),
        })
    }

    pub fn notice_style(&self, notice: &Notice) -> Style {
        match notice {
            Notice::NoRecipes => self.notice_info,
            Notice::Partial { .. } => self.notice_warning,
            Notice::LoadFailed { .. } => self.notice_error,
        }
    }

    /// Return a stable [`Style`] for a category name.
    pub fn category_style(&self, category: &str) -> Style {
        if self.category_palette.is_empty() {
            return Style::default();
        }
        let idx = stable_hash(category) % self.category_palette.len();
        Style::default().fg(self.category_palette[idx])
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// djb2-style hash, stable across Rust versions and process restarts.
fn stable_hash(s: &str) -> usize {
    s.bytes().fold(5381usize, |acc, b| {
        acc.wrapping_mul(31).wrapping_add(b as usize)
    })
}

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_loads() {
        let theme = Theme::load_default();
        assert_ne!(theme.border_focused, Style::default());
        assert_ne!(theme.search_highlight, Style::default());
        assert_ne!(theme.notice_error, Style::default());
        assert!(!theme.category_palette.is_empty());
    }

    #[test]
    fn gruvbox_dark_theme_loads() {
        let theme = Theme::load_gruvbox_dark();
        assert_ne!(theme.border_focused, Style::default());
        assert_ne!(theme.notice_warning, Style::default());
        assert!(!theme.category_palette.is_empty());
    }

    #[test]
    fn by_name_falls_back_to_default() {
        let fallback = Theme::by_name("solarized");
        let default = Theme::load_default();
        assert_eq!(fallback.border_focused, default.border_focused);
        assert_ne!(
            Theme::by_name("gruvbox").border_focused,
            default.border_focused
        );
    }

    #[test]
    fn category_style_is_stable() {
        let theme = Theme::load_default();
        assert_eq!(theme.category_style("Seafood"), theme.category_style("Seafood"));
    }

    #[test]
    fn notice_styles_follow_severity() {
        let theme = Theme::load_default();
        assert_eq!(theme.notice_style(&Notice::NoRecipes), theme.notice_info);
        assert_eq!(
            theme.notice_style(&Notice::LoadFailed { reason: "x".into() }),
            theme.notice_error
        );
    }

    #[test]
    fn parse_hex_color() {
        assert_eq!(parse_color("#ff0080"), Some(Color::Rgb(255, 0, 128)));
    }

    #[test]
    fn parse_indexed_color() {
        assert_eq!(parse_color("indexed:42"), Some(Color::Indexed(42)));
    }

    #[test]
    fn parse_unknown_color_returns_none() {
        assert_eq!(parse_color("chartreuse"), None);
    }
}
