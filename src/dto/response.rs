use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub requests: u64,
    pub uptime: u64,
}

/// Insert acknowledgement
#[derive(Debug, Serialize)]
pub struct InsertVectorResponse {
    pub id: String,
    pub status: String,
}
