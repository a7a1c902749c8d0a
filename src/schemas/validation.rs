use crate::{error::PlannerError, schemas::SchemaHandle};
use jsonschema::{Draft, JSONSchema};
use serde::de::DeserializeOwned;
use serde_json::Value;

const MAX_SCHEMA_ERRORS: usize = 3;

/// Check a JSON document against a schema, reporting the first few violations
pub(crate) fn validate_against_schema(
    schema: &SchemaHandle,
    payload: &Value,
) -> std::result::Result<(), PlannerError> {
    let validator = JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(schema.schema_json())
        .map_err(|err| {
            PlannerError::Validation(format!(
                "Failed to prepare `{}` schema for validation: {}",
                schema.schema_name(),
                err
            ))
        })?;

    if let Err(errors) = validator.validate(payload) {
        let mut details = Vec::new();
        let mut truncated = false;

        for (idx, error) in errors.enumerate() {
            if idx < MAX_SCHEMA_ERRORS {
                let path = display_path(error.instance_path.to_string());
                details.push(format!("{}: {}", path, error));
            } else {
                truncated = true;
                break;
            }
        }

        let mut detail_str = if details.is_empty() {
            "document failed schema validation".to_string()
        } else {
            details.join("; ")
        };

        if truncated {
            detail_str.push_str("; additional errors truncated");
        }

        return Err(PlannerError::Validation(format!(
            "Document does not match `{}` schema: {}",
            schema.schema_name(),
            detail_str
        )));
    }

    Ok(())
}

/// Deserialize while tracking the path of the first field that fails
pub(crate) fn deserialize_with_path<T: DeserializeOwned>(
    schema_name: &str,
    payload: Value,
) -> std::result::Result<T, PlannerError> {
    serde_path_to_error::deserialize(payload).map_err(|err| {
        PlannerError::Validation(format!(
            "failed to deserialize `{}` at {}: {}",
            schema_name,
            display_path(err.path().to_string()),
            err.inner()
        ))
    })
}

fn display_path(path: String) -> String {
    if path.is_empty() || path == "." {
        "<root>".to_string()
    } else {
        path
    }
}
