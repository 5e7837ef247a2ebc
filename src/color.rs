// Simple color struct, created from an unsigned 32 representing RRGGBBAA
// or from a "#rrggbb" / "#rrggbbaa" hex string

use crate::error::FieldError;
use serde::Deserialize;
use std::convert::TryFrom;

#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    // Orange used by the portfolio theme (tailwind orange-400)
    pub const ORANGE: Color = Color {
        r: 251,
        g: 146,
        b: 60,
        a: 0xff,
    };

    pub fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    pub fn parse_hex(text: &str) -> Result<Color, FieldError> {
        let invalid = || FieldError::InvalidColor(text.to_owned());
        let digits = text.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let num = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
        match digits.len() {
            6 => Ok(Color::from_u32((num << 8) | 0xff)),
            8 => Ok(Color::from_u32(num)),
            _ => Err(invalid()),
        }
    }

    // CSS color string with the given alpha multiplied into this color's own alpha
    pub fn css_rgba(&self, alpha: f64) -> String {
        let alpha = alpha * (self.a as f64 / 255.0);
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::ORANGE
    }
}

impl TryFrom<String> for Color {
    type Error = FieldError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Color::parse_hex(&text)
    }
}
