//! `reqwest` implementation of [`GenerationApi`].

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use url::Url;

use super::{
    AddressRecord, GenerationApi, ImageRequest, ImageResponse, RecipeRequest, RecipeResponse,
    RemoteCallFailed, RemoteOp,
};

/// HTTP client for the generation service. Built once at startup and shared.
///
/// No request timeout is configured; calls rely on the transport defaults.
#[derive(Debug, Clone)]
pub struct HttpGenerationApi {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpGenerationApi {
    pub fn new(base_url: Url) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("building HTTP client")?;

        Ok(Self { client, base_url })
    }

    /// `base_url` with one extra, percent-encoded path segment.
    fn endpoint(&self, op: RemoteOp, segment: &str) -> Result<Url, RemoteCallFailed> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| RemoteCallFailed::new(op, format!("base URL {} cannot take a path", self.base_url)))?
            .pop_if_empty()
            .push(segment);
        Ok(url)
    }

    async fn read_json<T: DeserializeOwned>(
        op: RemoteOp,
        sent: reqwest::Result<reqwest::Response>,
    ) -> Result<T, RemoteCallFailed> {
        let resp = sent.map_err(|e| RemoteCallFailed::new(op, e.to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(RemoteCallFailed::new(op, format!("HTTP {status}")));
        }
        resp.json::<T>()
            .await
            .map_err(|e| RemoteCallFailed::new(op, format!("decoding response: {e}")))
    }
}

#[async_trait]
impl GenerationApi for HttpGenerationApi {
    async fn generate_image(&self, req: &ImageRequest) -> Result<ImageResponse, RemoteCallFailed> {
        let op = RemoteOp::GenerateImage;
        let url = self.endpoint(op, "generate-and-upload")?;
        tracing::info!(%url, prompt = %req.prompt, "requesting image");
        Self::read_json(op, self.client.post(url).json(req).send().await).await
    }

    async fn generate_recipe(&self, req: &RecipeRequest) -> Result<RecipeResponse, RemoteCallFailed> {
        let op = RemoteOp::GenerateRecipe;
        let url = self.endpoint(op, "generate-recipe")?;
        tracing::info!(%url, prompt = %req.prompt, "requesting recipe");
        Self::read_json(op, self.client.post(url).json(req).send().await).await
    }

    async fn fetch_address(&self, address: &str) -> Result<AddressRecord, RemoteCallFailed> {
        let op = RemoteOp::FetchAddress;
        let url = self.endpoint(op, address)?;
        tracing::info!(%url, "fetching address record");
        Self::read_json(op, self.client.get(url).send().await).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base: &str) -> HttpGenerationApi {
        HttpGenerationApi::new(Url::parse(base).unwrap()).unwrap()
    }

    #[test]
    fn endpoint_appends_to_root() {
        let a = api("http://127.0.0.1:8000");
        let u = a.endpoint(RemoteOp::GenerateImage, "generate-and-upload").unwrap();
        assert_eq!(u.as_str(), "http://127.0.0.1:8000/generate-and-upload");
    }

    #[test]
    fn endpoint_keeps_base_path() {
        let a = api("https://svc.example/api/");
        let u = a.endpoint(RemoteOp::GenerateRecipe, "generate-recipe").unwrap();
        assert_eq!(u.as_str(), "https://svc.example/api/generate-recipe");

        let a = api("https://svc.example/api");
        let u = a.endpoint(RemoteOp::GenerateRecipe, "generate-recipe").unwrap();
        assert_eq!(u.as_str(), "https://svc.example/api/generate-recipe");
    }

    #[test]
    fn address_segment_is_escaped() {
        let a = api("http://127.0.0.1:8000");
        let u = a.endpoint(RemoteOp::FetchAddress, "0xabc/../x").unwrap();
        assert_eq!(u.as_str(), "http://127.0.0.1:8000/0xabc%2F..%2Fx");
    }
}
