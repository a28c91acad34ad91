use serde::{Deserialize, Serialize};

/// How whitespace inside a non-blank line is treated before classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WhitespaceMode {
    /// Every whitespace character is removed, so `End Circle` reads as
    /// `EndCircle` and `color: 1, 2, 3` as `color:1,2,3`.
    #[default]
    Lenient,
    /// Whitespace may surround punctuation and pad the line, but may not
    /// separate two letters or digits.
    Strict,
}

/// Parser settings. Missing fields fall back to their defaults when
/// deserializing, so older config files keep loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    pub whitespace: WhitespaceMode,
    /// Keep shapes completed before the failing line in the target document
    /// instead of rolling it back
    pub keep_partial_on_error: bool,
}

impl ParserConfig {
    pub fn strict() -> Self {
        Self {
            whitespace: WhitespaceMode::Strict,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: ParserConfig = serde_json::from_str(r#"{ "whitespace": "Strict" }"#).unwrap();
        assert_eq!(config, ParserConfig::strict());
        assert!(!config.keep_partial_on_error);
    }
}
