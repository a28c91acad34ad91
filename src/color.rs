use egui::Color32;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque RGB fill/stroke color of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn r(&self) -> u8 {
        self.r
    }

    pub const fn g(&self) -> u8 {
        self.g
    }

    pub const fn b(&self) -> u8 {
        self.b
    }
}

/// Formats as the value part of a `color:` line
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}

impl From<Color> for Color32 {
    fn from(color: Color) -> Self {
        Color32::from_rgb(color.r, color.g, color.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Color::rgb(255, 0, 30).to_string(), "255,0,30");
        assert_eq!(Color::default(), Color::BLACK);
    }

    #[test]
    fn test_into_color32() {
        let color: Color32 = Color::rgb(255, 0, 0).into();
        assert_eq!(color, Color32::RED);
    }
}
