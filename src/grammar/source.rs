//! Splitting raw grammar text into lines

/// Split `text` into lines, dropping empty ones and trimming the rest.
///
/// Lines made only of whitespace are dropped too, so every returned line is
/// non-empty. Validation error indices refer to positions in this list.
pub fn grammar_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}
