//! Reader for PaintSaveFile v1.0 documents.
//!
//! The parser is a line-driven state machine: each state accepts one kind of
//! line, and the first line that does not fit stops the parse with its line
//! number. There is no attempt to resynchronize after an error.

mod patterns;
mod state;

use log::{debug, info, trace, warn};
use std::io::BufRead;

use crate::command::PaintCommand;
use crate::config::{ParserConfig, WhitespaceMode};
use crate::document::Document;
use crate::error::{ParseError, ParseErrorKind};

use state::ParseState;

/// Strips ASCII whitespace from a non-blank line. Other Unicode spaces are
/// kept and make the line fail to match.
///
/// In strict mode whitespace that separates two alphanumeric characters is
/// rejected instead of silently joining them into one token.
fn normalize(line: &str, mode: WhitespaceMode) -> Result<String, ParseErrorKind> {
    let mut out = String::with_capacity(line.len());
    let mut gap = false;
    for c in line.chars() {
        if c.is_ascii_whitespace() {
            gap = true;
            continue;
        }
        if gap
            && mode == WhitespaceMode::Strict
            && c.is_alphanumeric()
            && out.chars().next_back().is_some_and(char::is_alphanumeric)
        {
            return Err(ParseErrorKind::UnexpectedWhitespace);
        }
        gap = false;
        out.push(c);
    }
    Ok(out)
}

/// Drives a [`ParseState`] over raw lines and keeps the line count.
struct LineMachine {
    state: ParseState,
    line_number: usize,
    whitespace: WhitespaceMode,
}

impl LineMachine {
    fn new(state: ParseState, whitespace: WhitespaceMode) -> Self {
        Self {
            state,
            line_number: 0,
            whitespace,
        }
    }

    /// Feeds one raw line, returning the command it completed, if any.
    fn feed(&mut self, raw: &str) -> Result<Option<PaintCommand>, ParseError> {
        self.line_number += 1;

        // Blank lines are skipped before normalization, in every state
        if raw.trim_matches(|c: char| c.is_ascii_whitespace()).is_empty() {
            return Ok(None);
        }

        if matches!(self.state, ParseState::Finished) {
            return Err(self.error(ParseErrorKind::TrailingContent));
        }

        let line = normalize(raw, self.whitespace).map_err(|kind| self.error(kind))?;
        trace!("line {}: {:?} ({})", self.line_number, line, self.state.expected());

        let state = std::mem::replace(&mut self.state, ParseState::Finished);
        let transition = state.advance(&line).map_err(|kind| self.error(kind))?;
        self.state = transition.next;

        if let Some(command) = &transition.completed {
            debug!("line {}: completed {}", self.line_number, command.keyword());
        }
        Ok(transition.completed)
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(self.line_number, kind)
    }

    /// Error for input that could not be read past the current line
    fn unreadable(&self) -> ParseError {
        ParseError::new(self.line_number + 1, ParseErrorKind::Integrity)
    }

    fn unexpected_eof(&self) -> ParseError {
        ParseError::new(
            self.line_number + 1,
            ParseErrorKind::UnexpectedEof { expected: self.state.expected() },
        )
    }
}

/// Parses save files into a [`Document`].
///
/// Follows the classic reader-object shape: [`PaintFileParser::parse`] reports
/// success as a `bool` and the failure is kept for
/// [`PaintFileParser::error_message`]. The `Result` based
/// [`PaintFileParser::parse_document`] is usually nicer to call.
#[derive(Debug, Default)]
pub struct PaintFileParser {
    config: ParserConfig,
    error: Option<ParseError>,
    error_message: String,
}

impl PaintFileParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Message of the last failed parse, empty after a successful one
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn last_error(&self) -> Option<&ParseError> {
        self.error.as_ref()
    }

    /// Parses `input` as a save file, appending its shapes to `document`.
    ///
    /// On failure the document is rolled back to its previous content unless
    /// [`ParserConfig::keep_partial_on_error`] is set.
    pub fn parse(&mut self, input: impl BufRead, document: &mut Document) -> bool {
        self.parse_into(input, document).is_ok()
    }

    /// Parses `input` as a save file into a new document.
    pub fn parse_document(&mut self, input: impl BufRead) -> Result<Document, ParseError> {
        let mut document = Document::new();
        self.parse_into(input, &mut document)?;
        Ok(document)
    }

    /// Parses a single shape block without the file header and end line,
    /// e.g. the output of [`PaintCommand::report`].
    pub fn parse_command(&self, text: &str) -> Result<PaintCommand, ParseError> {
        let mut machine = LineMachine::new(ParseState::Shape, self.config.whitespace);
        let mut parsed = None;

        for line in text.lines() {
            if let Some(command) = machine.feed(line)? {
                parsed = Some(command);
                // Only blank lines may follow the block
                machine.state = ParseState::Finished;
            }
        }

        parsed.ok_or_else(|| machine.unexpected_eof())
    }

    fn parse_into(&mut self, input: impl BufRead, document: &mut Document) -> Result<(), ParseError> {
        self.error = None;
        self.error_message.clear();

        let previous_len = document.len();
        match self.run(input, document) {
            Ok(()) => {
                info!("Parsed save file with {} shapes", document.len() - previous_len);
                Ok(())
            }
            Err(err) => {
                warn!("Failed to parse save file: {err}");
                if !self.config.keep_partial_on_error {
                    document.truncate(previous_len);
                }
                self.error_message = err.to_string();
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    fn run(&self, input: impl BufRead, document: &mut Document) -> Result<(), ParseError> {
        let mut machine = LineMachine::new(ParseState::Header, self.config.whitespace);

        for line in input.lines() {
            let line = line.map_err(|err| {
                debug!("read error after line {}: {err}", machine.line_number);
                machine.unreadable()
            })?;
            if let Some(command) = machine.feed(&line)? {
                document.add_command(command);
            }
        }

        match machine.state {
            ParseState::Finished => Ok(()),
            _ => Err(machine.unexpected_eof()),
        }
    }
}

/// Parses a complete save file with the default configuration.
pub fn parse_document(input: impl BufRead) -> Result<Document, ParseError> {
    PaintFileParser::new().parse_document(input)
}

/// Parses one shape block with the default configuration.
pub fn parse_command(text: &str) -> Result<PaintCommand, ParseError> {
    PaintFileParser::new().parse_command(text)
}
