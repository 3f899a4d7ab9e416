//! Cursor over input lines

/// The non-empty, trimmed lines of an input file, consumed front to back.
///
/// Each line keeps its 1-based line number in the original text so errors
/// can point at it.
#[derive(Debug, Clone)]
pub struct InputLines<'a> {
    lines: Vec<(usize, &'a str)>,
    pos: usize,
}

impl<'a> InputLines<'a> {
    pub fn new(text: &'a str) -> Self {
        let lines = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty())
            .collect();
        InputLines { lines, pos: 0 }
    }

    /// Take the next line with its line number.
    pub fn next_line(&mut self) -> Option<(usize, &'a str)> {
        let line = self.lines.get(self.pos).copied()?;
        self.pos += 1;
        Some(line)
    }

    /// Line number of the next unconsumed line.
    pub fn peek_line_number(&self) -> Option<usize> {
        self.lines.get(self.pos).map(|(n, _)| *n)
    }

    pub fn remaining(&self) -> usize {
        self.lines.len() - self.pos
    }

    pub fn consumed(&self) -> usize {
        self.pos
    }

    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.lines.len()
    }
}
