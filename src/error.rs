use thiserror::Error;

/// Why a save file was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// The line does not match what the current parser state accepts
    #[error("{expected}")]
    Syntax { expected: &'static str },

    #[error("Extra lines past expected end of file")]
    TrailingContent,

    /// Whitespace splits a token, only reported in strict whitespace mode
    #[error("Unexpected whitespace inside a token")]
    UnexpectedWhitespace,

    #[error("Unexpected end of file, {expected}")]
    UnexpectedEof { expected: &'static str },

    /// Anything that slipped past the line patterns: numeric overflow,
    /// unreadable input, invalid UTF-8
    #[error("Unexpected error, please verify integrity of file")]
    Integrity,
}

/// First error of a failed parse, with its 1-based line number
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error in line {line} {kind}")]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(line: usize, kind: ParseErrorKind) -> Self {
        Self { line, kind }
    }
}

/// Errors of document file and snapshot operations
#[derive(Debug, Error)]
pub enum PaintFileError {
    #[error("Failed to access save file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid save file: {0}")]
    Parse(#[from] ParseError),

    #[error("Invalid document snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for document file operations
pub type Result<T> = std::result::Result<T, PaintFileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_format() {
        let err = ParseError::new(1, ParseErrorKind::Syntax { expected: "Expected Start of Paint Save File" });
        assert_eq!(err.to_string(), "Error in line 1 Expected Start of Paint Save File");

        let err = ParseError::new(9, ParseErrorKind::TrailingContent);
        assert_eq!(err.to_string(), "Error in line 9 Extra lines past expected end of file");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PaintFileError = io_err.into();
        assert!(matches!(err, PaintFileError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }
}
