mod circle;
mod path;
mod rectangle;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::color::Color;
use crate::format;

pub use circle::Circle;
pub use path::{PointList, Polyline, Squiggle};
pub(crate) use path::PathShape;
pub use rectangle::Rectangle;

/// One drawing primitive of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum PaintCommand {
    Circle(Circle),
    Rectangle(Rectangle),
    Squiggle(Squiggle),
    Polyline(Polyline),
}

impl PaintCommand {
    /// The keyword that opens this command's block in a save file
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Circle(_) => format::CIRCLE,
            Self::Rectangle(_) => format::RECTANGLE,
            Self::Squiggle(_) => format::SQUIGGLE,
            Self::Polyline(_) => format::POLYLINE,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Self::Circle(c) => c.color(),
            Self::Rectangle(r) => r.color(),
            Self::Squiggle(s) => s.color(),
            Self::Polyline(p) => p.color(),
        }
    }

    pub fn set_color(&mut self, color: Color) {
        match self {
            Self::Circle(c) => c.set_color(color),
            Self::Rectangle(r) => r.set_color(color),
            Self::Squiggle(s) => s.set_color(color),
            Self::Polyline(p) => p.set_color(color),
        }
    }

    pub fn is_filled(&self) -> bool {
        match self {
            Self::Circle(c) => c.is_filled(),
            Self::Rectangle(r) => r.is_filled(),
            Self::Squiggle(s) => s.is_filled(),
            Self::Polyline(p) => p.is_filled(),
        }
    }

    pub fn set_filled(&mut self, filled: bool) {
        match self {
            Self::Circle(c) => c.set_filled(filled),
            Self::Rectangle(r) => r.set_filled(filled),
            Self::Squiggle(s) => s.set_filled(filled),
            Self::Polyline(p) => p.set_filled(filled),
        }
    }

    /// The save-file block for this command, ending with a newline
    pub fn report(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PaintCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Circle(c) => fmt::Display::fmt(c, f),
            Self::Rectangle(r) => fmt::Display::fmt(r, f),
            Self::Squiggle(s) => fmt::Display::fmt(s, f),
            Self::Polyline(p) => fmt::Display::fmt(p, f),
        }
    }
}

impl From<Circle> for PaintCommand {
    fn from(circle: Circle) -> Self {
        Self::Circle(circle)
    }
}

impl From<Rectangle> for PaintCommand {
    fn from(rectangle: Rectangle) -> Self {
        Self::Rectangle(rectangle)
    }
}

impl From<Squiggle> for PaintCommand {
    fn from(squiggle: Squiggle) -> Self {
        Self::Squiggle(squiggle)
    }
}

impl From<Polyline> for PaintCommand {
    fn from(polyline: Polyline) -> Self {
        Self::Polyline(polyline)
    }
}
