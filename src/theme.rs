//! Theme settings and their terminal translation.
//!
//! The document's theme block describes a CRT look: a phosphor color,
//! screen curvature, scanlines and flicker. In the terminal those map to
//! the base foreground color, a rounded border, dimmed alternate rows and
//! a periodic dimmed frame.

use crate::transcript::LineStyle;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub color: ThemeColor,
    pub crt_curvature: bool,
    pub scanlines: bool,
    /// Flicker intensity in [0, 1]; 0 disables it.
    pub flicker: f64,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            color: ThemeColor::Green,
            crt_curvature: true,
            scanlines: true,
            flicker: 0.0,
        }
    }
}

/// Phosphor color: one of the three stock themes, or a custom value
/// (a `#rrggbb` string; anything unparseable falls back to green).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ThemeColor {
    Green,
    Amber,
    White,
    Custom(String),
}

impl From<String> for ThemeColor {
    fn from(value: String) -> Self {
        match value.as_str() {
            "green" => ThemeColor::Green,
            "amber" => ThemeColor::Amber,
            "white" => ThemeColor::White,
            _ => ThemeColor::Custom(value),
        }
    }
}

impl From<ThemeColor> for String {
    fn from(color: ThemeColor) -> Self {
        match color {
            ThemeColor::Green => "green".to_string(),
            ThemeColor::Amber => "amber".to_string(),
            ThemeColor::White => "white".to_string(),
            ThemeColor::Custom(value) => value,
        }
    }
}

impl ThemeColor {
    pub fn as_str(&self) -> &str {
        match self {
            ThemeColor::Green => "green",
            ThemeColor::Amber => "amber",
            ThemeColor::White => "white",
            ThemeColor::Custom(value) => value,
        }
    }
}

/// Parse a `#rrggbb` hex string.
fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// The base phosphor color everything else derives from.
    pub fn base_color(&self) -> Color {
        match &self.color {
            ThemeColor::Green => Color::Rgb(51, 255, 51),
            ThemeColor::Amber => Color::Rgb(255, 176, 0),
            ThemeColor::White => Color::Rgb(230, 230, 230),
            ThemeColor::Custom(value) => {
                parse_hex_color(value).unwrap_or(Color::Rgb(51, 255, 51))
            }
        }
    }

    /// Screen border: curved CRT glass reads as rounded corners.
    pub fn border_type(&self) -> BorderType {
        if self.crt_curvature {
            BorderType::Rounded
        } else {
            BorderType::Plain
        }
    }

    /// Whether a transcript row should be dimmed as a scanline.
    pub fn scanline_row(&self, row: usize) -> bool {
        self.scanlines && row % 2 == 1
    }

    /// Whether the whole frame should be dimmed on this tick. Deterministic:
    /// one dimmed tick per period, shorter periods at higher intensity.
    pub fn flicker_frame(&self, tick: u64) -> bool {
        if self.flicker <= 0.0 {
            return false;
        }
        let intensity = self.flicker.min(1.0);
        let period = (500.0 / intensity).round() as u64;
        tick % period.max(25) == 0
    }

    /// The terminal style for a transcript line.
    pub fn line_style(&self, style: LineStyle) -> Style {
        let base = Style::default().fg(self.base_color());
        match style {
            LineStyle::Plain | LineStyle::HelpItem | LineStyle::Company
            | LineStyle::Institution => base,
            LineStyle::Echo => base.add_modifier(Modifier::BOLD),
            LineStyle::Error => Style::default().fg(Color::Red),
            LineStyle::Success => base.add_modifier(Modifier::BOLD),
            LineStyle::SectionTitle => base.add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            LineStyle::AsciiArt => base.add_modifier(Modifier::BOLD),
            LineStyle::Subtitle | LineStyle::Tagline | LineStyle::Degree => {
                base.add_modifier(Modifier::ITALIC)
            }
            LineStyle::ProjectName | LineStyle::Position => base.add_modifier(Modifier::BOLD),
            LineStyle::Tech | LineStyle::Period => base.add_modifier(Modifier::DIM),
        }
    }
}
