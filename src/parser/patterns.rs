//! Line patterns for the value-carrying lines of a save file.
//!
//! Every extractor takes an already normalized line and returns `Ok(None)`
//! when the line does not match. A match guarantees the captured text is
//! well formed; only numeric overflow can still fail.

use regex_lite::{Captures, Regex};
use std::sync::OnceLock;

use crate::color::Color;
use crate::error::ParseErrorKind;
use crate::point::Point;

/// A decimal color channel in 0..=255 without leading zeros
const CHANNEL: &str = "(25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9][0-9]|[0-9])";

struct Patterns {
    color: Regex,
    filled: Regex,
    center: Regex,
    radius: Regex,
    p1: Regex,
    p2: Regex,
    point: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        color: compile(&format!("^color:{CHANNEL},{CHANNEL},{CHANNEL}$")),
        filled: compile("^filled:(true|false)$"),
        center: point_field("center"),
        radius: compile(r"^radius:(\d+)$"),
        p1: point_field("p1"),
        p2: point_field("p2"),
        point: point_field("point"),
    })
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("save-file line patterns are valid")
}

fn point_field(name: &str) -> Regex {
    compile(&format!(r"^{name}:\((\d+),(\d+)\)$"))
}

pub(crate) type Extracted<T> = Result<Option<T>, ParseErrorKind>;

fn number<T: std::str::FromStr>(caps: &Captures<'_>, group: usize) -> Result<T, ParseErrorKind> {
    caps.get(group)
        .and_then(|m| m.as_str().parse().ok())
        .ok_or(ParseErrorKind::Integrity)
}

fn point(re: &Regex, line: &str) -> Extracted<Point> {
    re.captures(line)
        .map(|caps| -> Result<Point, ParseErrorKind> {
            Ok(Point::new(number(&caps, 1)?, number(&caps, 2)?))
        })
        .transpose()
}

pub(crate) fn color(line: &str) -> Extracted<Color> {
    patterns()
        .color
        .captures(line)
        .map(|caps| -> Result<Color, ParseErrorKind> {
            Ok(Color::rgb(number(&caps, 1)?, number(&caps, 2)?, number(&caps, 3)?))
        })
        .transpose()
}

pub(crate) fn filled(line: &str) -> Extracted<bool> {
    Ok(patterns()
        .filled
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str() == "true"))
}

pub(crate) fn center(line: &str) -> Extracted<Point> {
    point(&patterns().center, line)
}

pub(crate) fn radius(line: &str) -> Extracted<u32> {
    patterns()
        .radius
        .captures(line)
        .map(|caps| number(&caps, 1))
        .transpose()
}

pub(crate) fn p1(line: &str) -> Extracted<Point> {
    point(&patterns().p1, line)
}

pub(crate) fn p2(line: &str) -> Extracted<Point> {
    point(&patterns().p2, line)
}

pub(crate) fn list_point(line: &str) -> Extracted<Point> {
    point(&patterns().point, line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_channel_range() {
        assert_eq!(color("color:0,128,255"), Ok(Some(Color::rgb(0, 128, 255))));
        assert_eq!(color("color:256,0,0"), Ok(None));
        assert_eq!(color("color:01,0,0"), Ok(None));
        assert_eq!(color("color:1,2"), Ok(None));
    }

    #[test]
    fn test_filled_literals() {
        assert_eq!(filled("filled:true"), Ok(Some(true)));
        assert_eq!(filled("filled:false"), Ok(Some(false)));
        assert_eq!(filled("filled:True"), Ok(None));
        assert_eq!(filled("filled:yes"), Ok(None));
    }

    #[test]
    fn test_point_fields_check_their_name() {
        assert_eq!(center("center:(3,4)"), Ok(Some(Point::new(3, 4))));
        assert_eq!(center("p1:(3,4)"), Ok(None));
        assert_eq!(p2("p2:(0,0)"), Ok(Some(Point::ORIGIN)));
        assert_eq!(list_point("point:(-1,4)"), Ok(None));
    }

    #[test]
    fn test_overflow_is_integrity_error() {
        assert_eq!(radius("radius:99999999999"), Err(ParseErrorKind::Integrity));
        assert_eq!(list_point("point:(1,4294967296)"), Err(ParseErrorKind::Integrity));
        assert_eq!(radius("radius:4294967295"), Ok(Some(u32::MAX)));
    }
}
