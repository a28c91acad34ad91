use serde::{Deserialize, Serialize};
use std::fmt;

use crate::color::Color;
use crate::format;
use crate::point::Point;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Circle {
    center: Point,
    radius: u32,
    color: Color,
    filled: bool,
}

impl Circle {
    pub fn new(center: Point, radius: u32) -> Self {
        Self {
            center,
            radius,
            color: Color::BLACK,
            filled: false,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: u32) {
        self.radius = radius;
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn is_filled(&self) -> bool {
        self.filled
    }

    pub fn set_filled(&mut self, filled: bool) {
        self.filled = filled;
    }

    /// The `Circle` ... `EndCircle` block for a save file
    pub fn report(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", format::CIRCLE)?;
        writeln!(f, "\tcolor:{}", self.color)?;
        writeln!(f, "\tfilled:{}", self.filled)?;
        writeln!(f, "\tcenter:{}", self.center)?;
        writeln!(f, "\tradius:{}", self.radius)?;
        writeln!(f, "{}", format::END_CIRCLE)
    }
}
