//! Manifest validate/convert passthrough.
//!
//! Both operations are pure proxies to server-side endpoints; no manifest
//! parsing or validation happens locally.

use crate::client::{ApiClient, ApiError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationIssue {
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    #[serde(default)]
    pub valid: bool,
    #[serde(default)]
    pub errors: Vec<ValidationIssue>,
}

#[derive(Debug, Serialize)]
struct ValidateRequest<'a> {
    content: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ConvertRequest<'a> {
    content: &'a str,
    target_type: &'a str,
    validate: bool,
}

/// Conversion output: YAML text for shoehorn/backstage targets, a JSON
/// object for the mold target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub mold: Option<HashMap<String, serde_json::Value>>,
    #[serde(default)]
    pub format: String,
    #[serde(default)]
    pub validation: Option<ValidationResult>,
}

impl ApiClient {
    /// Validate a manifest server-side. The endpoint answers 422 when the
    /// manifest is invalid, which still carries the validation result, so
    /// this uses the raw-status variant and only treats 5xx/401/403 as
    /// transport failures.
    pub async fn validate_manifest(&self, content: &str) -> Result<ValidationResult, ApiError> {
        let (_status, result) = self
            .post_raw_status("/api/v1/manifests/validate", &ValidateRequest { content })
            .await?;
        Ok(result)
    }

    /// Convert a manifest between shoehorn, backstage, and mold formats.
    pub async fn convert_manifest(
        &self,
        content: &str,
        target_type: &str,
        validate: bool,
    ) -> Result<ConversionResult, ApiError> {
        self.post(
            "/api/v1/manifests/convert",
            &ConvertRequest {
                content,
                target_type,
                validate,
            },
        )
        .await
    }
}
