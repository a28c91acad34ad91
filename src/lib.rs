#![warn(clippy::all, rust_2018_idioms)]

//! Loading and saving of PaintSaveFile v1.0 drawings.
//!
//! A [`Document`] is an ordered list of [`PaintCommand`]s. Text goes in
//! through [`PaintFileParser`] and comes back out through
//! [`Document::report`] / [`PaintCommand::report`].

pub mod color;
pub mod command;
pub mod config;
pub mod document;
pub mod error;
pub mod event;
pub mod format;
pub mod parser;
pub mod point;
pub mod render;

pub use color::Color;
pub use command::{Circle, PaintCommand, Polyline, Rectangle, Squiggle};
pub use config::{ParserConfig, WhitespaceMode};
pub use document::Document;
pub use error::{PaintFileError, ParseError, ParseErrorKind};
pub use event::{EventBus, EventHandler, ShapeEvent};
pub use parser::{PaintFileParser, parse_command, parse_document};
pub use point::Point;
