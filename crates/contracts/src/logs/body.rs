use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which half of the exchange a body preview belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyPart {
    Req,
    Res,
}

impl BodyPart {
    /// Wire value for the `part` query parameter; also used in download
    /// filenames (`log-<id>-<part>.txt`).
    pub fn as_str(&self) -> &'static str {
        match self {
            BodyPart::Req => "req",
            BodyPart::Res => "res",
        }
    }
}

/// Payload of `GET /logs/{id}/body?part=req|res`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyPayload {
    pub part: String,

    /// Stored body; `None` when the backend kept the row without content.
    /// The stored value may itself be a JSON-encoded string.
    #[serde(default)]
    pub json: Option<Value>,
}
