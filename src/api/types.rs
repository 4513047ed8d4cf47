// src/api/types.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Generation request and response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct GenerateRequest {
    /// Desired password length (default 12, clamped to 8..=64)
    pub length: Option<usize>,
    /// Include uppercase letters (default true)
    pub upper: Option<bool>,
    /// Include lowercase letters (default true)
    pub lower: Option<bool>,
    /// Include digits (default true)
    pub number: Option<bool>,
    /// Include symbols (default true)
    pub symbol: Option<bool>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct GenerateResponse {
    /// The generated password; empty when no character class was selected
    pub password: String,
}

// Analysis request (the response is the AnalysisReport itself)
#[derive(Serialize, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// Password to analyze (default empty string)
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ServiceInfo {
    /// Service name
    pub service: String,
    /// Crate version
    pub version: String,
}
