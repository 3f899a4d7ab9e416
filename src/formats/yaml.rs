//! YAML output

use super::registry::{FormatError, Formatter};
use crate::state::State;

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, state: &State) -> Result<String, FormatError> {
        serde_yaml::to_string(state).map_err(|e| FormatError::Serialization(e.to_string()))
    }

    fn description(&self) -> &str {
        "YAML document"
    }
}
