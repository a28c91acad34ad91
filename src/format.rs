//! Keywords of the PaintSaveFile v1.0 text format, shared by the
//! serializer and the parser.

pub const FILE_START: &str = "PaintSaveFileVersion1.0";
pub const FILE_END: &str = "EndPaintSaveFile";

pub const CIRCLE: &str = "Circle";
pub const END_CIRCLE: &str = "EndCircle";

pub const RECTANGLE: &str = "Rectangle";
pub const END_RECTANGLE: &str = "EndRectangle";

pub const SQUIGGLE: &str = "Squiggle";
pub const END_SQUIGGLE: &str = "EndSquiggle";

pub const POLYLINE: &str = "Polyline";
pub const END_POLYLINE: &str = "EndPolyline";

pub const POINTS: &str = "points";
pub const END_POINTS: &str = "endpoints";
