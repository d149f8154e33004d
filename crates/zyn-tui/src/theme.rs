//! Colour themes for the zynshop TUI.
//!
//! Both themes are TOML files embedded in the binary via [`include_str!`], so
//! the application works without any files on disk. [`Theme::for_mode`] picks
//! the one matching the stored [`ThemeMode`]; the app swaps themes in place
//! when the user toggles.

use config::{Config, File, FileFormat};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;
use zyn_core::{NotificationKind, ThemeMode};

const LIGHT_THEME_SRC: &str = include_str!("themes/light.toml");
const DARK_THEME_SRC: &str = include_str!("themes/dark.toml");

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
struct RawText {
    normal: RawStyle,
    muted: RawStyle,
    title: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawBorders {
    focused: RawStyle,
    command_bar: RawStyle,
    unfocused: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawShop {
    price: RawStyle,
    rating: RawStyle,
    brand: RawStyle,
    selected: RawStyle,
    category_active: RawStyle,
    badge: RawStyle,
    in_cart: RawStyle,
    in_wishlist: RawStyle,
    load_more: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawToast {
    success: RawStyle,
    info: RawStyle,
    error: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawSearch {
    highlight: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawTheme {
    text: RawText,
    borders: RawBorders,
    shop: RawShop,
    toast: RawToast,
    search: RawSearch,
}

// ---------------------------------------------------------------------------
// Public Theme type
// ---------------------------------------------------------------------------

/// Application colour theme. All styles are pre-resolved ratatui [`Style`]
/// values.
#[derive(Debug, Clone)]
pub struct Theme {
    pub mode: ThemeMode,

    pub text: Style,
    pub muted: Style,
    pub title: Style,

    /// Border style for the currently focused pane.
    pub border_focused: Style,
    pub border_command_bar: Style,
    pub border_unfocused: Style,

    pub price: Style,
    pub rating: Style,
    pub brand: Style,
    /// Highlighted product row.
    pub selected: Style,
    pub category_active: Style,
    /// Cart and wishlist counters in the tab bar.
    pub badge: Style,
    pub in_cart: Style,
    pub in_wishlist: Style,
    pub load_more: Style,

    pub toast_success: Style,
    pub toast_info: Style,
    pub toast_error: Style,

    /// Inline highlight applied to matched query tokens.
    pub search_highlight: Style,
}

impl Theme {
    /// Embedded theme for `mode`.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed, which the unit tests rule out.
    pub fn for_mode(mode: ThemeMode) -> Self {
        let src = match mode {
            ThemeMode::Light => LIGHT_THEME_SRC,
            ThemeMode::Dark => DARK_THEME_SRC,
        };
        Self::from_toml_str(src, mode).expect("embedded theme must be valid TOML")
    }

    /// Parse a theme from a TOML string. Unknown keys are ignored.
    pub fn from_toml_str(src: &str, mode: ThemeMode) -> anyhow::Result<Self> {
        let raw: RawTheme = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        Ok(Self {
            mode,
            text: raw.text.normal.into_style(),
            muted: raw.text.muted.into_style(),
            title: raw.text.title.into_style(),
            border_focused: raw.borders.focused.into_style(),
            border_command_bar: raw.borders.command_bar.into_style(),
            border_unfocused: raw.borders.unfocused.into_style(),
            price: raw.shop.price.into_style(),
            rating: raw.shop.rating.into_style(),
            brand: raw.shop.brand.into_style(),
            selected: raw.shop.selected.into_style(),
            category_active: raw.shop.category_active.into_style(),
            badge: raw.shop.badge.into_style(),
            in_cart: raw.shop.in_cart.into_style(),
            in_wishlist: raw.shop.in_wishlist.into_style(),
            load_more: raw.shop.load_more.into_style(),
            toast_success: raw.toast.success.into_style(),
            toast_info: raw.toast.info.into_style(),
            toast_error: raw.toast.error.into_style(),
            search_highlight: raw.search.highlight.into_style(),
        })
    }

    pub fn toast_style(&self, kind: NotificationKind) -> Style {
        match kind {
            NotificationKind::Success => self.toast_success,
            NotificationKind::Info => self.toast_info,
            NotificationKind::Error => self.toast_error,
        }
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
/// Accepts named terminal colours (case-insensitive), hex RGB `#rrggbb` and
/// 256-colour `indexed:N`.
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
        "light_blue" => Some(Color::LightBlue),
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
