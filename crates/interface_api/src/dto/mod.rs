//! Request and response bodies

pub mod klant;
pub mod opstalverzekering;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::ApiError;

/// Body of the `PUT .../einddatum` endpoints
///
/// An absent or empty body, `{}` and `{"eindDatum": null}` all mean
/// "end now".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetEinddatumRequest {
    #[serde(default)]
    pub eind_datum: Option<DateTime<Utc>>,
}

impl SetEinddatumRequest {
    /// Parses the raw request body
    pub fn from_body(body: &[u8]) -> Result<Self, ApiError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body).map_err(|e| ApiError::BadRequest(e.to_string()))
    }
}
