use log::info;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

use crate::command::PaintCommand;
use crate::error::{ParseError, Result};
use crate::format;
use crate::parser::PaintFileParser;

/// A drawing: its shapes in the order they are painted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    commands: Vec<PaintCommand>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_command(&mut self, command: impl Into<PaintCommand>) {
        self.commands.push(command.into());
    }

    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PaintCommand> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        self.commands.truncate(len);
    }

    /// The complete save-file text for this document
    pub fn report(&self) -> String {
        self.to_string()
    }

    /// Reads a save file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let document = PaintFileParser::new().parse_document(reader)?;
        info!("Loaded {} shapes from {}", document.len(), path.display());
        Ok(document)
    }

    /// Writes the document to disk in save-file format
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.report())?;
        info!("Saved {} shapes to {}", self.len(), path.display());
        Ok(())
    }

    /// JSON snapshot of the document, for persisting editor state
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", format::FILE_START)?;
        for command in &self.commands {
            write!(f, "{command}")?;
        }
        writeln!(f, "{}", format::FILE_END)
    }
}

impl FromStr for Document {
    type Err = ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        PaintFileParser::new().parse_document(s.as_bytes())
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a PaintCommand;
    type IntoIter = std::slice::Iter<'a, PaintCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<PaintCommand> for Document {
    fn from_iter<I: IntoIterator<Item = PaintCommand>>(iter: I) -> Self {
        Self {
            commands: iter.into_iter().collect(),
        }
    }
}
