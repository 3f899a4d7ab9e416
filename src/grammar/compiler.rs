//! Recursive descent from classified grammar lines to a procedure tree
//!
//! Before anything is built, one pass over the classified lines pairs every
//! open-group line with its close line using a stack of pending opens. The
//! same pass rejects a stray `]`, a group that is never closed, and nesting
//! deeper than [`MAX_NESTING`].
//!
//! The compiler then walks the lines left to right with a cursor. A fields
//! line becomes a [`Procedure::Fields`]. An open-group line compiles the lines
//! up to its paired close recursively into the group's body, and the close
//! line itself is skipped.

use tracing::debug;

use super::line_kind::{validate, LineKind};
use super::procedure::{tree_depth, Procedure};
use crate::error::GrammarError;

/// Deepest group nesting a grammar may use.
///
/// Compiling and running both recurse once per level, so this also bounds
/// the executor's stack use.
pub const MAX_NESTING: usize = 256;

/// Validate and compile cleaned grammar lines into a procedure tree.
///
/// The whole grammar is classified and its brackets paired before anything
/// is built, so a bad line anywhere fails the call without producing a
/// partial tree.
pub fn compile<S: AsRef<str>>(lines: &[S]) -> Result<Vec<Procedure>, GrammarError> {
    let kinds = validate(lines)?;
    let closes = pair_brackets(lines, &kinds)?;
    let mut compiler = Compiler {
        kinds: &kinds,
        closes: &closes,
        pos: 0,
    };
    let procedures = compiler.compile_block(kinds.len());

    debug!(
        lines = procedures.iter().map(Procedure::line_count).sum::<usize>(),
        procedures = procedures.len(),
        depth = tree_depth(&procedures),
        "grammar compiled"
    );
    Ok(procedures)
}

/// For every open-group line, the index of its matching close line.
fn pair_brackets<S: AsRef<str>>(
    lines: &[S],
    kinds: &[LineKind],
) -> Result<Vec<Option<usize>>, GrammarError> {
    let mut closes = vec![None; kinds.len()];
    let mut pending: Vec<usize> = Vec::new();

    for (index, kind) in kinds.iter().enumerate() {
        match kind {
            LineKind::OpenGroup { .. } => {
                let depth = pending.len() + 1;
                if depth > MAX_NESTING {
                    return Err(GrammarError::TooDeep { index, depth });
                }
                pending.push(index);
            }
            LineKind::CloseGroup => {
                let open = pending
                    .pop()
                    .ok_or(GrammarError::UnmatchedClose { index })?;
                closes[open] = Some(index);
            }
            LineKind::Fields(_) => {}
        }
    }

    // report the outermost group left open
    if let Some(&open) = pending.first() {
        return Err(GrammarError::UnclosedGroup {
            index: open,
            line: lines[open].as_ref().to_string(),
        });
    }

    Ok(closes)
}

struct Compiler<'a> {
    kinds: &'a [LineKind],
    closes: &'a [Option<usize>],
    pos: usize,
}

impl Compiler<'_> {
    /// Compile lines from the cursor up to (not including) `end`.
    ///
    /// Brackets are already paired, so every open line has a close and no
    /// close line is reached by the cursor.
    fn compile_block(&mut self, end: usize) -> Vec<Procedure> {
        let kinds = self.kinds;
        let mut procedures = Vec::new();

        while self.pos < end {
            let index = self.pos;
            self.pos += 1;

            match &kinds[index] {
                LineKind::Fields(names) => procedures.push(Procedure::Fields {
                    names: names.clone(),
                }),
                LineKind::OpenGroup { key, count_var } => {
                    let close = self.closes[index].unwrap_or(end);
                    let body = self.compile_block(close);
                    // step over the close line
                    self.pos = close + 1;
                    procedures.push(Procedure::Group {
                        key: key.clone(),
                        count_var: count_var.clone(),
                        body,
                    });
                }
                LineKind::CloseGroup => {}
            }
        }

        procedures
    }
}
