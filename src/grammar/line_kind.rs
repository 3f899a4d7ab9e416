//! Grammar line classification
//!
//! Each grammar line is one of three forms, recognized by the patterns below
//! and tried in declaration order:
//!
//! | kind          | example              |
//! |---------------|----------------------|
//! | fields        | `name age`           |
//! | open group    | `records : count *[` |
//! | close group   | `]`                  |

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::GrammarError;

/// One or more word tokens separated by single whitespace characters.
static FIELDS_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\w+(?:\s\w+)*$").unwrap());

/// `<name> : <countvar> *[`, with an optional single space around `:` and `*`.
static OPEN_GROUP_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<key>\w+)\s?:\s?(?P<count_var>\w+)\s?\*\s?\[$").unwrap()
});

static CLOSE_GROUP_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\]$").unwrap());

/// The syntactic form of a single grammar line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Names bound, in order, to the values of one input line.
    Fields(Vec<String>),
    /// Start of a repeated group: list key and the variable holding its count.
    OpenGroup { key: String, count_var: String },
    CloseGroup,
}

impl LineKind {
    pub fn is_open(&self) -> bool {
        matches!(self, LineKind::OpenGroup { .. })
    }

    pub fn is_close(&self) -> bool {
        matches!(self, LineKind::CloseGroup)
    }
}

/// Classify a trimmed grammar line, or `None` if it matches no known form.
pub fn classify(line: &str) -> Option<LineKind> {
    if FIELDS_LINE.is_match(line) {
        let names = line.split_whitespace().map(str::to_string).collect();
        return Some(LineKind::Fields(names));
    }

    if let Some(caps) = OPEN_GROUP_LINE.captures(line) {
        return Some(LineKind::OpenGroup {
            key: caps["key"].to_string(),
            count_var: caps["count_var"].to_string(),
        });
    }

    if CLOSE_GROUP_LINE.is_match(line) {
        return Some(LineKind::CloseGroup);
    }

    None
}

/// Classify every line, failing on the first one that matches no form.
pub fn validate<S: AsRef<str>>(lines: &[S]) -> Result<Vec<LineKind>, GrammarError> {
    lines
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let line = line.as_ref();
            classify(line).ok_or_else(|| GrammarError::Syntax {
                index,
                line: line.to_string(),
            })
        })
        .collect()
}
