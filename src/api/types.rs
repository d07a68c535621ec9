// src/api/types.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationRequest {
    /// Password length (default: 16, accepted range: 4-64)
    pub length: Option<usize>,
    /// Include uppercase letters (default: true)
    pub include_uppercase: Option<bool>,
    /// Include lowercase letters (default: true)
    pub include_lowercase: Option<bool>,
    /// Include numbers (default: true)
    pub include_numbers: Option<bool>,
    /// Include symbols (default: true)
    pub include_symbols: Option<bool>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Generated password
    pub password: Option<String>,
    /// Password strength score (0-100)
    pub strength: Option<u8>,
    /// Strength band label ("Weak" .. "Very Strong")
    pub description: Option<String>,
    /// CSS color for the strength indicator
    pub color: Option<String>,
    /// Error message (if operation failed)
    pub error: Option<String>,
}

impl PasswordGenerationResponse {
    pub fn failure(error: String) -> Self {
        PasswordGenerationResponse {
            success: false,
            password: None,
            strength: None,
            description: None,
            color: None,
            error: Some(error),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct StrengthAnalysisRequest {
    /// Password to score
    pub password: String,
    /// Uppercase was requested when the password was created (default: false)
    pub include_uppercase: Option<bool>,
    /// Lowercase was requested (default: false)
    pub include_lowercase: Option<bool>,
    /// Numbers were requested (default: false)
    pub include_numbers: Option<bool>,
    /// Symbols were requested (default: false)
    pub include_symbols: Option<bool>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct StrengthAnalysisResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Password strength score (0-100)
    pub strength: u8,
    /// Strength band label
    pub description: String,
    /// CSS color for the strength indicator
    pub color: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Whether the service is up
    pub success: bool,
    /// Crate version
    pub version: String,
}
