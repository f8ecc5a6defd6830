use serde::Serialize;
use serde_json::{json, Value};

/// Structured-output descriptor sent as `response_format.json_schema`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseSchema {
    pub name: String,
    pub description: String,
    pub schema: Value,
    pub strict: bool,
}

/// Schema for a `ScriptResponse`: two required strings, nothing else allowed.
///
/// Strict mode requires every property to be listed in `required` and
/// `additionalProperties` to be false, and rejects `$ref`s to outside
/// definitions, so the object is kept inline.
pub fn script_response_schema() -> ResponseSchema {
    ResponseSchema {
        name: "script".to_string(),
        description: "Script generation based on requirements".to_string(),
        schema: json!({
            "type": "object",
            "properties": {
                "filename": {
                    "type": "string",
                    "description": "The filename for the generated script"
                },
                "content": {
                    "type": "string",
                    "description": "The content of the generated script"
                }
            },
            "required": ["filename", "content"],
            "additionalProperties": false
        }),
        strict: true,
    }
}
