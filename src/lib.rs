//! # linegram
//!
//! A reader for line-oriented structured text files, driven by a small
//! declarative grammar.
//!
//! A grammar describes the shape of an input file one line at a time:
//!
//! ```text
//! count
//! records : count *[
//!     id name
//! ]
//! ```
//!
//! - a *fields* line (`id name`) says the next input line holds that many
//!   space-separated values, bound to those names;
//! - an *open-group* line (`records : count *[`) repeats the enclosed
//!   sub-grammar as many times as the previously bound `count` says, and
//!   collects each repetition into a list under `records`;
//! - a *close* line (`]`) ends the group.
//!
//! The grammar is validated and compiled once into a tree of
//! [`Procedure`]s, which is then interpreted against any number of input
//! files. See [`GrammarParser`] for the usual entry point.

pub mod error;
pub mod formats;
pub mod grammar;
pub mod options;
pub mod parser;
pub mod parsing;
pub mod state;

pub use error::{Error, GrammarError, ParseError};
pub use grammar::{compile, Procedure};
pub use options::{ParseOptions, TrailingInput};
pub use parser::GrammarParser;
pub use parsing::{run, InputLines};
pub use state::{State, Value};
