use serde::Deserialize;
use thiserror::Error;

// Helper structs to parse the JSON error response from ORS
#[derive(Deserialize, Debug)]
pub struct OrsErrorDetail {
    pub code: u32,
    pub message: String,
}
#[derive(Deserialize, Debug)]
pub struct OrsErrorPayload {
    pub error: OrsErrorDetail,
}

#[derive(Error, Debug)]
pub enum RoutingError {
    #[error("Directions provider unreachable: {0}")]
    ProviderUnavailable(String),

    #[error("Directions provider did not answer within {0} ms")]
    Timeout(u128),

    // Structured error body returned alongside a non-success status
    #[error("API Error (Code {code}): {message}")]
    ApiError { code: u32, message: String },

    // Non-success status whose body is not the expected JSON error shape
    #[error("Unstructured API Error: {0}")]
    RawApiError(String),

    #[error("Unusable directions response: {0}")]
    ProviderResponseInvalid(String),

    #[error("Underlying request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),
}

impl RoutingError {
    /// Parses a non-success body into the most specific variant available.
    pub fn from_error_body(body: &str) -> Self {
        match serde_json::from_str::<OrsErrorPayload>(body) {
            Ok(payload) => RoutingError::ApiError {
                code: payload.error.code,
                message: payload.error.message,
            },
            Err(_) => RoutingError::RawApiError(body.to_string()),
        }
    }
}
