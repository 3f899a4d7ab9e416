//! Parse options

use serde::Deserialize;

/// What to do with input lines left over once the grammar is exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrailingInput {
    /// Ignore them.
    #[default]
    Lenient,
    /// Fail with [`ParseError::TrailingInput`](crate::ParseError::TrailingInput).
    Strict,
}

/// Knobs for a single parse run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ParseOptions {
    pub trailing_input: TrailingInput,
}

impl ParseOptions {
    pub fn strict() -> Self {
        ParseOptions {
            trailing_input: TrailingInput::Strict,
        }
    }

    pub fn with_trailing_input(mut self, trailing_input: TrailingInput) -> Self {
        self.trailing_input = trailing_input;
        self
    }
}
