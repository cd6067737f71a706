use jsonschema::validator_for;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum SchemaValidationError {
    #[error("Schema compile error: {0}")]
    SchemaCompile(String),
    #[error("{0}")]
    ValidationFailed(String),
}

/// Validate tool-call arguments against a declared input schema
/// (draft 2020-12). Returns the first violation as a human-readable message.
pub fn validate_arguments(schema: &Value, instance: &Value) -> Result<(), SchemaValidationError> {
    let validator =
        validator_for(schema).map_err(|e| SchemaValidationError::SchemaCompile(e.to_string()))?;

    // Own the message before the iterator (which borrows the validator) drops.
    let first = validator.iter_errors(instance).next().map(|e| e.to_string());
    match first {
        None => Ok(()),
        Some(msg) => Err(SchemaValidationError::ValidationFailed(msg)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_valid_instance() {
        let schema = json!({
            "type": "object",
            "required": ["limit"],
            "properties": {"limit": {"type": "integer", "minimum": 1, "maximum": 100}}
        });
        assert!(validate_arguments(&schema, &json!({"limit": 50})).is_ok());
    }

    #[test]
    fn reports_first_violation() {
        let schema = json!({
            "type": "object",
            "properties": {"limit": {"type": "integer", "minimum": 1, "maximum": 100}}
        });
        let err = validate_arguments(&schema, &json!({"limit": 101})).unwrap_err();
        assert!(matches!(err, SchemaValidationError::ValidationFailed(_)));
    }
}
