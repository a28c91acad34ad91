use crate::command::{Circle, PaintCommand, PathShape, Polyline, Rectangle, Squiggle};
use crate::error::ParseErrorKind;
use crate::format;

use super::patterns::{self, Extracted};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CircleStep {
    Color,
    Fill,
    Center,
    Radius,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RectangleStep {
    Color,
    Fill,
    P1,
    P2,
    End,
}

/// Steps shared by squiggles and polylines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PathStep {
    Color,
    Fill,
    PointsOpen,
    Points,
    End,
}

/// Where the parser is in the file. Each state accepts exactly one kind of
/// line (or, in `Body` and `PathStep::Points`, a small set of alternatives).
/// Shape states own the command they are building.
#[derive(Debug)]
pub(crate) enum ParseState {
    Header,
    /// Between shapes: a shape keyword or the end of the file
    Body,
    /// A single shape keyword, used when parsing one block on its own
    Shape,
    Circle(CircleStep, Circle),
    Rectangle(RectangleStep, Rectangle),
    Squiggle(PathStep, Squiggle),
    Polyline(PathStep, Polyline),
    Finished,
}

/// Result of feeding one line to a state
pub(crate) struct Transition {
    pub next: ParseState,
    pub completed: Option<PaintCommand>,
}

impl Transition {
    fn complete(command: impl Into<PaintCommand>) -> Self {
        Self {
            next: ParseState::Body,
            completed: Some(command.into()),
        }
    }
}

impl From<ParseState> for Transition {
    fn from(next: ParseState) -> Self {
        Self { next, completed: None }
    }
}

enum PathOutcome<S> {
    Continue(PathStep, S),
    Complete(S),
}

fn require<T>(found: Extracted<T>, expected: &'static str) -> Result<T, ParseErrorKind> {
    found?.ok_or(ParseErrorKind::Syntax { expected })
}

fn keyword(line: &str, keyword: &str, expected: &'static str) -> Result<(), ParseErrorKind> {
    if line == keyword {
        Ok(())
    } else {
        Err(ParseErrorKind::Syntax { expected })
    }
}

fn start_shape(line: &str) -> Option<ParseState> {
    match line {
        format::CIRCLE => Some(ParseState::Circle(CircleStep::Color, Circle::default())),
        format::RECTANGLE => Some(ParseState::Rectangle(RectangleStep::Color, Rectangle::default())),
        format::SQUIGGLE => Some(ParseState::Squiggle(PathStep::Color, Squiggle::default())),
        format::POLYLINE => Some(ParseState::Polyline(PathStep::Color, Polyline::default())),
        _ => None,
    }
}

fn advance_path<S: PathShape>(
    step: PathStep,
    mut shape: S,
    line: &str,
    end: &str,
    expected: &'static str,
) -> Result<PathOutcome<S>, ParseErrorKind> {
    let next = match step {
        PathStep::Color => {
            shape.set_color(require(patterns::color(line), expected)?);
            PathStep::Fill
        }
        PathStep::Fill => {
            shape.set_filled(require(patterns::filled(line), expected)?);
            PathStep::PointsOpen
        }
        PathStep::PointsOpen => {
            keyword(line, format::POINTS, expected)?;
            PathStep::Points
        }
        PathStep::Points => {
            if line == format::END_POINTS {
                PathStep::End
            } else {
                shape.add(require(patterns::list_point(line), expected)?);
                PathStep::Points
            }
        }
        PathStep::End => {
            keyword(line, end, expected)?;
            return Ok(PathOutcome::Complete(shape));
        }
    };
    Ok(PathOutcome::Continue(next, shape))
}

impl ParseState {
    /// Description of the line this state accepts, used in error messages
    pub fn expected(&self) -> &'static str {
        match self {
            Self::Header => "Expected Start of Paint Save File",
            Self::Body => "Expected start of shape object or end of file",
            Self::Shape => "Expected start of shape object",
            Self::Circle(step, _) => match step {
                CircleStep::Color => "Expected proper color formatting",
                CircleStep::Fill => "Expected proper fill formatting",
                CircleStep::Center => "Expected proper centre point formatting",
                CircleStep::Radius => "Expected proper radius formatting",
                CircleStep::End => "Expected end of circle object",
            },
            Self::Rectangle(step, _) => match step {
                RectangleStep::Color => "Expected proper color formatting",
                RectangleStep::Fill => "Expected proper fill formatting",
                RectangleStep::P1 => "Expected proper p1 formatting",
                RectangleStep::P2 => "Expected proper p2 formatting",
                RectangleStep::End => "Expected end of rectangle object",
            },
            Self::Squiggle(step, _) | Self::Polyline(step, _) => match (self, step) {
                (_, PathStep::Color) => "Expected proper color formatting",
                (_, PathStep::Fill) => "Expected proper fill formatting",
                (_, PathStep::PointsOpen) => "Expected start of point list",
                (_, PathStep::Points) => "Expected proper point or end of point list",
                (Self::Squiggle(..), PathStep::End) => "Expected end of squiggle object",
                (_, PathStep::End) => "Expected end of polyline object",
            },
            Self::Finished => "Expected no content after end of file",
        }
    }

    /// Consumes a normalized, non-blank line.
    pub fn advance(self, line: &str) -> Result<Transition, ParseErrorKind> {
        let expected = self.expected();
        let mismatch = ParseErrorKind::Syntax { expected };

        match self {
            Self::Header => {
                keyword(line, format::FILE_START, expected)?;
                Ok(Self::Body.into())
            }
            Self::Body if line == format::FILE_END => Ok(Self::Finished.into()),
            Self::Body | Self::Shape => start_shape(line).map(Transition::from).ok_or(mismatch),
            Self::Circle(step, mut circle) => {
                let next = match step {
                    CircleStep::Color => {
                        circle.set_color(require(patterns::color(line), expected)?);
                        CircleStep::Fill
                    }
                    CircleStep::Fill => {
                        circle.set_filled(require(patterns::filled(line), expected)?);
                        CircleStep::Center
                    }
                    CircleStep::Center => {
                        circle.set_center(require(patterns::center(line), expected)?);
                        CircleStep::Radius
                    }
                    CircleStep::Radius => {
                        circle.set_radius(require(patterns::radius(line), expected)?);
                        CircleStep::End
                    }
                    CircleStep::End => {
                        keyword(line, format::END_CIRCLE, expected)?;
                        return Ok(Transition::complete(circle));
                    }
                };
                Ok(Self::Circle(next, circle).into())
            }
            Self::Rectangle(step, mut rectangle) => {
                let next = match step {
                    RectangleStep::Color => {
                        rectangle.set_color(require(patterns::color(line), expected)?);
                        RectangleStep::Fill
                    }
                    RectangleStep::Fill => {
                        rectangle.set_filled(require(patterns::filled(line), expected)?);
                        RectangleStep::P1
                    }
                    RectangleStep::P1 => {
                        rectangle.set_p1(require(patterns::p1(line), expected)?);
                        RectangleStep::P2
                    }
                    RectangleStep::P2 => {
                        rectangle.set_p2(require(patterns::p2(line), expected)?);
                        RectangleStep::End
                    }
                    RectangleStep::End => {
                        keyword(line, format::END_RECTANGLE, expected)?;
                        return Ok(Transition::complete(rectangle));
                    }
                };
                Ok(Self::Rectangle(next, rectangle).into())
            }
            Self::Squiggle(step, squiggle) => {
                Ok(match advance_path(step, squiggle, line, format::END_SQUIGGLE, expected)? {
                    PathOutcome::Continue(step, squiggle) => Self::Squiggle(step, squiggle).into(),
                    PathOutcome::Complete(squiggle) => Transition::complete(squiggle),
                })
            }
            Self::Polyline(step, polyline) => {
                Ok(match advance_path(step, polyline, line, format::END_POLYLINE, expected)? {
                    PathOutcome::Continue(step, polyline) => Self::Polyline(step, polyline).into(),
                    PathOutcome::Complete(polyline) => Transition::complete(polyline),
                })
            }
            Self::Finished => Err(ParseErrorKind::TrailingContent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::point::Point;

    fn feed(mut state: ParseState, lines: &[&str]) -> (ParseState, Vec<PaintCommand>) {
        let mut completed = Vec::new();
        for line in lines {
            let transition = state.advance(line).unwrap();
            completed.extend(transition.completed);
            state = transition.next;
        }
        (state, completed)
    }

    #[test]
    fn test_circle_block_completes_into_body() {
        let (state, completed) = feed(
            ParseState::Body,
            &["Circle", "color:1,2,3", "filled:false", "center:(4,5)", "radius:6", "EndCircle"],
        );

        assert!(matches!(state, ParseState::Body));
        let mut circle = Circle::new(Point::new(4, 5), 6);
        circle.set_color(Color::rgb(1, 2, 3));
        assert_eq!(completed, vec![PaintCommand::Circle(circle)]);
    }

    #[test]
    fn test_point_loop_stays_in_points_step() {
        let (state, completed) = feed(
            ParseState::Polyline(PathStep::PointsOpen, Polyline::default()),
            &["points", "point:(1,1)", "point:(2,2)"],
        );

        assert!(completed.is_empty());
        match state {
            ParseState::Polyline(PathStep::Points, polyline) => {
                assert_eq!(polyline.points(), &[Point::new(1, 1), Point::new(2, 2)]);
            }
            other => panic!("unexpected state {other:?}"),
        }
    }

    #[test]
    fn test_mismatch_reports_expectation() {
        let state = ParseState::Rectangle(RectangleStep::P2, Rectangle::default());
        let err = state.advance("p1:(1,1)").err();
        assert_eq!(err, Some(ParseErrorKind::Syntax { expected: "Expected proper p2 formatting" }));
    }

    #[test]
    fn test_shape_state_rejects_file_end() {
        assert!(ParseState::Shape.advance("EndPaintSaveFile").is_err());
        assert!(matches!(
            ParseState::Body.advance("EndPaintSaveFile").map(|t| t.next),
            Ok(ParseState::Finished)
        ));
    }

    #[test]
    fn test_squiggle_end_message_differs_from_polyline() {
        let squiggle = ParseState::Squiggle(PathStep::End, Squiggle::default());
        let polyline = ParseState::Polyline(PathStep::End, Polyline::default());
        assert_eq!(squiggle.expected(), "Expected end of squiggle object");
        assert_eq!(polyline.expected(), "Expected end of polyline object");
    }
}
