//! Conversion of paint commands into egui shapes.
//!
//! Drawing surfaces live outside this crate; they call [`shapes`] or
//! [`paint`] with whatever painter they own.

use egui::{Color32, Painter, Pos2, Rect, Shape, Stroke};

use crate::command::PaintCommand;
use crate::document::Document;
use crate::point::Point;

pub const STROKE_WIDTH: f32 = 1.0;

fn outline(color: Color32) -> Stroke {
    Stroke::new(STROKE_WIDTH, color)
}

fn open_path(points: &[Point], color: Color32) -> Option<Shape> {
    // A single vertex has no visible segment
    if points.len() < 2 {
        return None;
    }
    let points: Vec<Pos2> = points.iter().copied().map(Pos2::from).collect();
    Some(Shape::line(points, outline(color)))
}

/// Shapes that draw `command`. Squiggles and polylines are open paths, so
/// their fill flag has no effect on screen.
pub fn shapes(command: &PaintCommand) -> Vec<Shape> {
    let color = Color32::from(command.color());
    let shape = match command {
        PaintCommand::Circle(circle) => {
            let center = Pos2::from(circle.center());
            let radius = circle.radius() as f32;
            Some(if circle.is_filled() {
                Shape::circle_filled(center, radius, color)
            } else {
                Shape::circle_stroke(center, radius, outline(color))
            })
        }
        PaintCommand::Rectangle(rectangle) => {
            let rect = Rect::from_two_pos(rectangle.p1().into(), rectangle.p2().into());
            Some(if rectangle.is_filled() {
                Shape::rect_filled(rect, 0.0, color)
            } else {
                Shape::rect_stroke(rect, 0.0, outline(color))
            })
        }
        PaintCommand::Squiggle(squiggle) => open_path(squiggle.points(), color),
        PaintCommand::Polyline(polyline) => open_path(polyline.points(), color),
    };
    shape.into_iter().collect()
}

/// Shapes for every command of `document`, bottom-most first
pub fn document_shapes(document: &Document) -> Vec<Shape> {
    document.iter().flat_map(shapes).collect()
}

/// Paints every command of `document` in order
pub fn paint(painter: &Painter, document: &Document) {
    painter.extend(document_shapes(document));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::command::{Circle, Rectangle, Squiggle};

    #[test]
    fn test_filled_circle() {
        let mut circle = Circle::new(Point::new(10, 20), 5);
        circle.set_filled(true);
        circle.set_color(Color::rgb(255, 0, 0));

        match shapes(&circle.into()).as_slice() {
            [Shape::Circle(shape)] => {
                assert_eq!(shape.center, egui::pos2(10.0, 20.0));
                assert_eq!(shape.radius, 5.0);
                assert_eq!(shape.fill, Color32::RED);
            }
            other => panic!("unexpected shapes {other:?}"),
        }
    }

    #[test]
    fn test_rectangle_corners_in_any_order() {
        let rectangle = Rectangle::new(Point::new(30, 40), Point::new(10, 5));

        match shapes(&rectangle.into()).as_slice() {
            [Shape::Rect(shape)] => {
                assert_eq!(shape.rect.min, egui::pos2(10.0, 5.0));
                assert_eq!(shape.rect.max, egui::pos2(30.0, 40.0));
                assert_eq!(shape.fill, Color32::TRANSPARENT);
            }
            other => panic!("unexpected shapes {other:?}"),
        }
    }

    #[test]
    fn test_short_paths_draw_nothing() {
        assert!(shapes(&Squiggle::new().into()).is_empty());
        assert!(shapes(&Squiggle::from_points([Point::new(1, 1)]).into()).is_empty());

        let squiggle = Squiggle::from_points([Point::new(1, 1), Point::new(2, 3), Point::new(5, 8)]);
        match shapes(&squiggle.into()).as_slice() {
            [Shape::Path(path)] => {
                assert_eq!(path.points.len(), 3);
                assert!(!path.closed);
            }
            other => panic!("unexpected shapes {other:?}"),
        }
    }

    #[test]
    fn test_document_shapes_keep_command_order() {
        let mut document = Document::new();
        document.add_command(Circle::new(Point::new(50, 50), 10));
        document.add_command(Squiggle::from_points([Point::new(1, 1)]));
        document.add_command(Rectangle::new(Point::new(0, 0), Point::new(4, 4)));

        match document_shapes(&document).as_slice() {
            [Shape::Circle(circle), Shape::Rect(rect)] => {
                assert_eq!(circle.center, egui::pos2(50.0, 50.0));
                assert_eq!(rect.rect.max, egui::pos2(4.0, 4.0));
            }
            other => panic!("unexpected shapes {other:?}"),
        }
    }
}
