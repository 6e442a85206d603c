use serde::Deserialize;
use serde_json::Value as JsonValue;

/// Body of a vector-insert request.
///
/// Real clients send a vector and metadata alongside the id; the mock accepts
/// them but only the id influences the response. All fields are optional so an
/// empty object is a valid insert.
#[derive(Debug, Default, Deserialize)]
pub struct InsertVectorRequest {
    pub id: Option<String>,
    #[serde(default)]
    pub vector: Vec<f32>,
    #[serde(default)]
    pub metadata: JsonValue,
}
