//! Compile-once, parse-many entry point
//!
//! ```rust,ignore
//! use linegram::GrammarParser;
//!
//! let parser = GrammarParser::from_file("grammar")?;
//! for path in inputs {
//!     let state = parser.parse_file(path)?;
//!     println!("{state}");
//! }
//! ```

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{Error, GrammarError, ParseError};
use crate::grammar::{compile, grammar_lines, Procedure};
use crate::options::ParseOptions;
use crate::parsing::{run, InputLines};
use crate::state::State;

/// A validated, compiled grammar ready to be applied to input files.
#[derive(Debug, Clone)]
pub struct GrammarParser {
    procedures: Vec<Procedure>,
    options: ParseOptions,
}

impl GrammarParser {
    /// Validate and compile grammar text.
    pub fn from_source(source: &str) -> Result<Self, GrammarError> {
        let procedures = compile(&grammar_lines(source))?;
        Ok(GrammarParser {
            procedures,
            options: ParseOptions::default(),
        })
    }

    /// Read, validate and compile a grammar file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let parser = Self::from_source(&source)?;
        info!(grammar = %path.display(), procedures = parser.procedures.len(), "parser created");
        Ok(parser)
    }

    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> ParseOptions {
        self.options
    }

    pub fn procedures(&self) -> &[Procedure] {
        &self.procedures
    }

    /// Apply the grammar to input text.
    pub fn parse_str(&self, input: &str) -> Result<State, ParseError> {
        let mut lines = InputLines::new(input);
        run(&self.procedures, &mut lines, self.options)
    }

    /// Read an input file and apply the grammar to it.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<State, Error> {
        let path = path.as_ref();
        let input = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        info!(input = %path.display(), "parsing input file");
        Ok(self.parse_str(&input)?)
    }
}
