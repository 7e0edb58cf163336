//! Remote generation service: wire types, the [`GenerationApi`] seam, and its
//! single error kind.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::defaults::Defaults;

pub mod http;

pub use http::HttpGenerationApi;

/* ───────────────────────── Wire types ───────────────────────── */

/// Body of `POST /generate-and-upload`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRequest {
    pub prompt: String,
    pub size: String,
    pub quality: String,
    pub n: u32,
    pub response_format: String,
}

impl ImageRequest {
    /// Everything except the prompt is fixed by the service contract.
    pub fn for_prompt(prompt: &str) -> Self {
        Self {
            prompt: prompt.to_string(),
            size: Defaults::IMAGE_SIZE.to_string(),
            quality: Defaults::IMAGE_QUALITY.to_string(),
            n: Defaults::IMAGE_COUNT,
            response_format: Defaults::IMAGE_RESPONSE_FORMAT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageResponse {
    pub message: String,
    pub url_path: String,
}

/// Body of `POST /generate-recipe`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeRequest {
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeResponse {
    pub message: String,
    pub recipe: String,
}

/// Response of `GET /{address}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    pub url_path: String,
    pub recipe: String,
    pub name: String,
}

/* ───────────────────────── Error ───────────────────────── */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteOp {
    GenerateImage,
    GenerateRecipe,
    FetchAddress,
}

impl fmt::Display for RemoteOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RemoteOp::GenerateImage => "image generation",
            RemoteOp::GenerateRecipe => "recipe generation",
            RemoteOp::FetchAddress => "address lookup",
        })
    }
}

/// The only failure a remote call can report. HTTP status errors, transport
/// errors and undecodable bodies all collapse into this; `reason` is for logs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{op} failed: {reason}")]
pub struct RemoteCallFailed {
    pub op: RemoteOp,
    pub reason: String,
}

impl RemoteCallFailed {
    pub fn new(op: RemoteOp, reason: impl Into<String>) -> Self {
        Self { op, reason: reason.into() }
    }
}

/* ───────────────────────── Seam ───────────────────────── */

#[async_trait]
pub trait GenerationApi: Send + Sync {
    async fn generate_image(&self, req: &ImageRequest) -> Result<ImageResponse, RemoteCallFailed>;
    async fn generate_recipe(&self, req: &RecipeRequest) -> Result<RecipeResponse, RemoteCallFailed>;
    async fn fetch_address(&self, address: &str) -> Result<AddressRecord, RemoteCallFailed>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_request_has_fixed_fields() {
        let v = serde_json::to_value(ImageRequest::for_prompt("Sichuan Hotpot")).unwrap();
        assert_eq!(
            v,
            serde_json::json!({
                "prompt": "Sichuan Hotpot",
                "size": "1024x1024",
                "quality": "standard",
                "n": 1,
                "response_format": "url",
            })
        );
    }

    #[test]
    fn error_display_names_the_operation() {
        let e = RemoteCallFailed::new(RemoteOp::GenerateRecipe, "HTTP 500");
        assert_eq!(e.to_string(), "recipe generation failed: HTTP 500");
    }
}
