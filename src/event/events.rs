use crate::point::Point;

/// Structural change to the vertex list of a squiggle or polyline.
///
/// `index` is the position of the affected vertex in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeEvent {
    PointAdded {
        index: usize,
        point: Point,
    },
    PointRemoved {
        index: usize,
        point: Point,
    },
    PointChanged {
        index: usize,
        old: Point,
        new: Point,
    },
}
