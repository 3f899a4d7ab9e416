//! Grammar compilation
//!
//! Grammar text goes through three steps:
//! 1. [`grammar_lines`] drops blank lines and trims the rest
//! 2. [`validate`] classifies every line up front and rejects the grammar on the
//!    first line that matches no known form
//! 3. [`compile`] builds the [`Procedure`] tree by recursive descent
//!
//! Validation runs over the whole grammar before compilation starts, so a
//! malformed grammar never yields a partial tree.

pub mod compiler;
pub mod line_kind;
pub mod procedure;
pub mod source;

pub use compiler::{compile, MAX_NESTING};
pub use line_kind::{classify, validate, LineKind};
pub use procedure::{grammar_treeviz, Procedure};
pub use source::grammar_lines;
