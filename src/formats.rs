//! Output formats for parse results
//!
//! Each format implements [`Formatter`] and is looked up by name through a
//! [`FormatRegistry`]:
//! - `pretty`: nested dict/list notation, wrapped to 80 columns
//! - `json`: indented JSON
//! - `yaml`: YAML

pub mod json;
pub mod pretty;
pub mod registry;
pub mod yaml;

pub use json::JsonFormatter;
pub use pretty::{to_pretty_string, PrettyFormatter};
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use yaml::YamlFormatter;
