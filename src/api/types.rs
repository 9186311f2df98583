use serde::{Deserialize, Serialize};

/// Body accepted by every simulation endpoint.
///
/// `marcos` is taken as a signed integer so that out-of-range values reach the
/// validation layer and produce a descriptive client error instead of a bare
/// deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulateRequest {
    pub referencias: String,
    pub marcos: i64,
}

/// Error body returned for validation and internal failures.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
