use ratatui::style::Color;

use crate::model::UiConfig;

/// Color theme for the TUI. Ships a dark and a light variant; either can
/// be overridden slot-by-slot from `[ui.colors]` in the config file.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    pub accent: Color,
    pub done: Color,
    pub selection_bg: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Theme {
            background: Color::Rgb(0x16, 0x16, 0x26),
            text: Color::Rgb(0xC8, 0xC4, 0xE8),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x6E, 0x6A, 0x9E),
            accent: Color::Rgb(0xBD, 0x93, 0xF9),
            done: Color::Rgb(0x50, 0xFA, 0x7B),
            selection_bg: Color::Rgb(0x3A, 0x30, 0x5A),
        }
    }

    pub fn light() -> Self {
        Theme {
            background: Color::Rgb(0xEF, 0xF1, 0xF5),
            text: Color::Rgb(0x4C, 0x4F, 0x69),
            text_bright: Color::Rgb(0x11, 0x11, 0x1B),
            dim: Color::Rgb(0x9C, 0xA0, 0xB0),
            accent: Color::Rgb(0x88, 0x39, 0xEF),
            done: Color::Rgb(0x40, 0xA0, 0x2B),
            selection_bg: Color::Rgb(0xCC, 0xD0, 0xDA),
        }
    }

    /// Build the dark or light theme with config overrides applied.
    pub fn from_config(ui: &UiConfig, dark: bool) -> Self {
        let mut theme = if dark { Theme::dark() } else { Theme::light() };
        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "dim" => theme.dim = color,
                    "accent" => theme.accent = color,
                    "done" => theme.done = color,
                    "selection_bg" => theme.selection_bg = color,
                    _ => {}
                }
            }
        }
        theme
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color.
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}
