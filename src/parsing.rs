//! Applying a compiled grammar to input lines
//!
//! [`InputLines`] is a cursor over the cleaned input; [`run`] interprets a
//! procedure tree against it and returns the resulting [`State`](crate::State).

pub mod executor;
pub mod input;

pub use executor::run;
pub use input::InputLines;
