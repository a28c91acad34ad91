use serde::{Deserialize, Serialize};
use std::fmt;

use crate::color::Color;
use crate::event::{EventBus, EventHandler, ShapeEvent};
use crate::format;
use crate::point::Point;

/// Ordered vertex list that notifies its observers on every structural change.
///
/// Observers are tied to this instance: they are not cloned, compared or
/// serialized.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Point>", into = "Vec<Point>")]
pub struct PointList {
    points: Vec<Point>,
    observers: EventBus,
}

impl PointList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn subscribe(&self, handler: impl EventHandler + 'static) {
        self.observers.subscribe(Box::new(handler));
    }

    pub fn add(&mut self, point: Point) {
        self.points.push(point);
        self.observers.emit(ShapeEvent::PointAdded {
            index: self.points.len() - 1,
            point,
        });
    }

    /// Removes the last vertex. Does nothing on an empty list.
    pub fn remove_last(&mut self) -> Option<Point> {
        let point = self.points.pop()?;
        self.observers.emit(ShapeEvent::PointRemoved {
            index: self.points.len(),
            point,
        });
        Some(point)
    }

    /// Replaces the last vertex and returns the old one.
    /// Does nothing on an empty list.
    pub fn change_last(&mut self, point: Point) -> Option<Point> {
        let index = self.points.len().checked_sub(1)?;
        let old = std::mem::replace(&mut self.points[index], point);
        self.observers.emit(ShapeEvent::PointChanged {
            index,
            old,
            new: point,
        });
        Some(old)
    }
}

impl PartialEq for PointList {
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points
    }
}

impl Eq for PointList {}

impl From<Vec<Point>> for PointList {
    fn from(points: Vec<Point>) -> Self {
        Self {
            points,
            observers: EventBus::new(),
        }
    }
}

impl From<PointList> for Vec<Point> {
    fn from(list: PointList) -> Self {
        list.points
    }
}

impl FromIterator<Point> for PointList {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

/// What the parser needs to build a squiggle or a polyline line by line.
pub(crate) trait PathShape: Default + Into<super::PaintCommand> {
    fn set_color(&mut self, color: Color);
    fn set_filled(&mut self, filled: bool);
    fn add(&mut self, point: Point);
}

fn write_path_block(
    f: &mut fmt::Formatter<'_>,
    (start, end): (&str, &str),
    color: Color,
    filled: bool,
    points: &[Point],
) -> fmt::Result {
    writeln!(f, "{start}")?;
    writeln!(f, "\tcolor:{color}")?;
    writeln!(f, "\tfilled:{filled}")?;
    writeln!(f, "\t{}", format::POINTS)?;
    for point in points {
        writeln!(f, "\t\tpoint:{point}")?;
    }
    writeln!(f, "\t{}", format::END_POINTS)?;
    writeln!(f, "{end}")
}

macro_rules! path_shape {
    ($(#[$meta:meta])* $name:ident, $start:expr, $end:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
        pub struct $name {
            points: PointList,
            color: Color,
            filled: bool,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
                Self {
                    points: points.into_iter().collect(),
                    ..Self::default()
                }
            }

            /// Vertices in draw order
            pub fn points(&self) -> &[Point] {
                self.points.as_slice()
            }

            pub fn add(&mut self, point: Point) {
                self.points.add(point);
            }

            pub fn remove_last(&mut self) -> Option<Point> {
                self.points.remove_last()
            }

            pub fn change_last(&mut self, point: Point) -> Option<Point> {
                self.points.change_last(point)
            }

            /// Registers an observer for vertex changes, e.g. a canvas that
            /// needs to repaint while the shape is being drawn
            pub fn subscribe(&self, handler: impl EventHandler + 'static) {
                self.points.subscribe(handler);
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

        impl PathShape for $name {
            fn set_color(&mut self, color: Color) {
                $name::set_color(self, color);
            }

            fn set_filled(&mut self, filled: bool) {
                $name::set_filled(self, filled);
            }

            fn add(&mut self, point: Point) {
                $name::add(self, point);
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write_path_block(f, ($start, $end), self.color, self.filled, self.points())
            }
        }
    };
}

path_shape!(
    /// Freehand stroke recorded from pointer motion.
    Squiggle,
    format::SQUIGGLE,
    format::END_SQUIGGLE
);

path_shape!(
    /// Open polygonal chain placed vertex by vertex.
    Polyline,
    format::POLYLINE,
    format::END_POLYLINE
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<ShapeEvent>>>, impl FnMut(&ShapeEvent) + 'static) {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        (events, move |event: &ShapeEvent| sink.borrow_mut().push(*event))
    }

    #[test]
    fn test_polyline_notifies_in_order() {
        let (events, handler) = recorder();
        let mut polyline = Polyline::new();
        polyline.subscribe(handler);

        polyline.add(Point::new(1, 1));
        polyline.add(Point::new(1, 1));
        polyline.change_last(Point::new(5, 6));
        polyline.remove_last();

        assert_eq!(
            *events.borrow(),
            vec![
                ShapeEvent::PointAdded { index: 0, point: Point::new(1, 1) },
                ShapeEvent::PointAdded { index: 1, point: Point::new(1, 1) },
                ShapeEvent::PointChanged { index: 1, old: Point::new(1, 1), new: Point::new(5, 6) },
                ShapeEvent::PointRemoved { index: 1, point: Point::new(5, 6) },
            ]
        );
        assert_eq!(polyline.points(), &[Point::new(1, 1)]);
    }

    #[test]
    fn test_empty_list_mutations_are_silent() {
        let (events, handler) = recorder();
        let mut squiggle = Squiggle::new();
        squiggle.subscribe(handler);

        assert_eq!(squiggle.remove_last(), None);
        assert_eq!(squiggle.change_last(Point::new(3, 3)), None);
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_equality_ignores_observers() {
        let watched = Squiggle::from_points([Point::new(1, 2)]);
        watched.subscribe(|_: &ShapeEvent| {});

        assert_eq!(watched, Squiggle::from_points([Point::new(1, 2)]));
        assert_ne!(watched, Squiggle::from_points([Point::new(2, 1)]));
    }

    #[test]
    fn test_empty_report_closes_point_list() {
        let report = Polyline::new().report();
        assert_eq!(
            report,
            "Polyline\n\tcolor:0,0,0\n\tfilled:false\n\tpoints\n\tendpoints\nEndPolyline\n"
        );
    }

    #[test]
    fn test_squiggle_report_lists_points_in_order() {
        let mut squiggle = Squiggle::from_points([Point::new(3, 4), Point::new(1, 2)]);
        squiggle.set_color(Color::rgb(1, 2, 3));
        squiggle.set_filled(true);

        assert_eq!(
            squiggle.report(),
            "Squiggle\n\tcolor:1,2,3\n\tfilled:true\n\tpoints\n\t\tpoint:(3,4)\n\t\tpoint:(1,2)\n\tendpoints\nEndSquiggle\n"
        );
    }
}
