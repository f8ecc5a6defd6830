mod writer;

pub use writer::{output_path, write_script};

use crate::ScriptgenError;
use serde::Deserialize;

/// A generated script as returned by the model
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScriptResponse {
    /// The filename for the generated script; may be empty
    pub filename: String,
    /// The content of the generated script
    pub content: String,
}

impl ScriptResponse {
    /// Name to write the script under, using `fallback` when the model left it blank
    pub fn output_filename<'a>(&'a self, fallback: &'a str) -> &'a str {
        let filename = self.filename.trim();
        if filename.is_empty() {
            fallback
        } else {
            filename
        }
    }
}

/// Decode the text of a structured reply into a `ScriptResponse`
pub fn decode_response(text: &str) -> Result<ScriptResponse, ScriptgenError> {
    serde_json::from_str(text).map_err(ScriptgenError::Decode)
}
