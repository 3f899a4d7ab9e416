//! Error types
//!
//! Grammar problems are caught before anything is compiled ([`GrammarError`]);
//! problems applying a compiled grammar to an input file surface as
//! [`ParseError`]. [`Error`] wraps both, plus I/O and output formatting, for
//! callers that drive the whole pipeline.

use std::path::PathBuf;

use crate::formats::FormatError;

/// A grammar that cannot be compiled.
///
/// Line indices are 0-based positions among the cleaned grammar lines
/// (blank lines dropped), which is what the validator reports.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GrammarError {
    /// The line is neither a fields line, an open-group line nor a close line.
    #[error("Error parsing grammar line {index}: \"{line}\"")]
    Syntax { index: usize, line: String },

    /// An open-group line whose matching `]` never comes.
    #[error("group opened at grammar line {index} is never closed: \"{line}\"")]
    UnclosedGroup { index: usize, line: String },

    /// A `]` with no open group to close.
    #[error("grammar line {index} closes a group that was never opened")]
    UnmatchedClose { index: usize },

    /// An open-group line nested deeper than the compiler allows.
    #[error("group opened at grammar line {index} is nested {depth} levels deep (limit {limit})", limit = crate::grammar::MAX_NESTING)]
    TooDeep { index: usize, depth: usize },
}

/// A failure while applying a compiled grammar to input lines.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error(
        "line {line_number}: expected {} value(s) for ({}), got {}: ({})",
        .expected.len(),
        .expected.join(", "),
        .actual.len(),
        .actual.join(", ")
    )]
    FieldCountMismatch {
        line_number: usize,
        expected: Vec<String>,
        actual: Vec<String>,
    },

    #[error("input insufficient: {remaining} grammar step(s) left with no input lines")]
    InsufficientInput { remaining: usize },

    #[error("group '{key}' repeats '{count_var}', which is not bound")]
    UnboundCountVariable { key: String, count_var: String },

    #[error("count variable '{count_var}' is not a non-negative integer: {value:?}")]
    InvalidCount { count_var: String, value: String },

    #[error("line {line_number}: {remaining} input line(s) left over after the grammar was exhausted")]
    TrailingInput { line_number: usize, remaining: usize },
}

/// Top-level error for compile-then-run pipelines.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Grammar(#[from] GrammarError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Format(#[from] FormatError),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_names_index_and_text() {
        let err = GrammarError::Syntax {
            index: 3,
            line: "bad syntax here :::".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Error parsing grammar line 3: \"bad syntax here :::\""
        );
    }

    #[test]
    fn test_field_count_mismatch_lists_names_and_values() {
        let err = ParseError::FieldCountMismatch {
            line_number: 1,
            expected: vec!["name".to_string(), "age".to_string()],
            actual: vec!["Alice".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "line 1: expected 2 value(s) for (name, age), got 1: (Alice)"
        );
    }

    #[test]
    fn test_umbrella_error_is_transparent() {
        let err: Error = ParseError::InsufficientInput { remaining: 2 }.into();
        assert_eq!(
            err.to_string(),
            "input insufficient: 2 grammar step(s) left with no input lines"
        );
    }
}
