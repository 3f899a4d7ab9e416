//! JSON output

use super::registry::{FormatError, Formatter};
use crate::state::State;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, state: &State) -> Result<String, FormatError> {
        let mut out = serde_json::to_string_pretty(state)
            .map_err(|e| FormatError::Serialization(e.to_string()))?;
        out.push('\n');
        Ok(out)
    }

    fn description(&self) -> &str {
        "Indented JSON"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_keeps_binding_order() {
        let state: State = [("name", "Alice"), ("age", "30")].into_iter().collect();
        let out = JsonFormatter.serialize(&state).unwrap();
        assert_eq!(out, "{\n  \"name\": \"Alice\",\n  \"age\": \"30\"\n}\n");
    }
}
