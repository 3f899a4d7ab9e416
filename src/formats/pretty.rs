//! Human-readable nested dict/list output
//!
//! A value is printed on one line when it fits in [`WIDTH`] columns from where
//! it starts. Otherwise its entries go one per line, aligned one column right
//! of the opening bracket:
//!
//! ```text
//! {'count': '3',
//!  'records': [{'id': 'aaaaaaaaaaaaaaaaaaaa'},
//!              {'id': 'bbbbbbbbbbbbbbbbbbbb'},
//!              {'id': 'cccccccccccccccccccc'}]}
//! ```

use std::fmt;

use super::registry::{FormatError, Formatter};
use crate::state::{State, Value};

pub const WIDTH: usize = 80;

pub struct PrettyFormatter;

impl Formatter for PrettyFormatter {
    fn name(&self) -> &str {
        "pretty"
    }

    fn serialize(&self, state: &State) -> Result<String, FormatError> {
        let mut out = to_pretty_string(state);
        out.push('\n');
        Ok(out)
    }

    fn description(&self) -> &str {
        "Nested dicts and lists, wrapped at 80 columns"
    }
}

/// Render `state` starting at column 0, without a trailing newline.
pub fn to_pretty_string(state: &State) -> String {
    format_state(state, 0)
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_pretty_string(self))
    }
}

fn format_state(state: &State, column: usize) -> String {
    let flat = flat_state(state);
    if column + width(&flat) <= WIDTH {
        return flat;
    }

    let indent = " ".repeat(column + 1);
    let mut out = String::from("{");
    for (i, (name, value)) in state.iter().enumerate() {
        if i > 0 {
            out.push_str(",\n");
            out.push_str(&indent);
        }
        let key = format!("{}: ", quote(name));
        let value_column = column + 1 + width(&key);
        out.push_str(&key);
        out.push_str(&format_value(value, value_column));
    }
    out.push('}');
    out
}

fn format_list(items: &[State], column: usize) -> String {
    let flat = flat_list(items);
    if column + width(&flat) <= WIDTH {
        return flat;
    }

    let indent = " ".repeat(column + 1);
    let mut out = String::from("[");
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(",\n");
            out.push_str(&indent);
        }
        out.push_str(&format_state(item, column + 1));
    }
    out.push(']');
    out
}

fn format_value(value: &Value, column: usize) -> String {
    match value {
        Value::Scalar(s) => quote(s),
        Value::List(items) => format_list(items, column),
    }
}

fn flat_state(state: &State) -> String {
    let entries: Vec<String> = state
        .iter()
        .map(|(name, value)| format!("{}: {}", quote(name), flat_value(value)))
        .collect();
    format!("{{{}}}", entries.join(", "))
}

fn flat_list(items: &[State]) -> String {
    let entries: Vec<String> = items.iter().map(flat_state).collect();
    format!("[{}]", entries.join(", "))
}

fn flat_value(value: &Value) -> String {
    match value {
        Value::Scalar(s) => quote(s),
        Value::List(items) => flat_list(items),
    }
}

/// Quote a string, preferring single quotes unless only double quotes avoid escaping.
fn quote(s: &str) -> String {
    let delim = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(delim);
    for c in s.chars() {
        if c == '\\' || c == delim {
            out.push('\\');
        }
        out.push(c);
    }
    out.push(delim);
    out
}

fn width(s: &str) -> usize {
    s.chars().count()
}
