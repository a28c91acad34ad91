use serde::{Deserialize, Serialize};
use std::fmt;

use crate::color::Color;
use crate::format;
use crate::point::Point;

/// Axis-aligned rectangle spanned by two opposite corners.
///
/// The corners are stored as given; `p1` need not be the top-left one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rectangle {
    p1: Point,
    p2: Point,
    color: Color,
    filled: bool,
}

impl Rectangle {
    pub fn new(p1: Point, p2: Point) -> Self {
        Self {
            p1,
            p2,
            color: Color::BLACK,
            filled: false,
        }
    }

    pub fn p1(&self) -> Point {
        self.p1
    }

    pub fn set_p1(&mut self, p1: Point) {
        self.p1 = p1;
    }

    pub fn p2(&self) -> Point {
        self.p2
    }

    pub fn set_p2(&mut self, p2: Point) {
        self.p2 = p2;
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

    pub fn report(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", format::RECTANGLE)?;
        writeln!(f, "\tcolor:{}", self.color)?;
        writeln!(f, "\tfilled:{}", self.filled)?;
        writeln!(f, "\tp1:{}", self.p1)?;
        writeln!(f, "\tp2:{}", self.p2)?;
        writeln!(f, "{}", format::END_RECTANGLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_keeps_corner_order() {
        let rect = Rectangle::new(Point::new(40, 50), Point::new(1, 2));

        assert_eq!(
            rect.report(),
            "Rectangle\n\tcolor:0,0,0\n\tfilled:false\n\tp1:(40,50)\n\tp2:(1,2)\nEndRectangle\n"
        );
    }
}
