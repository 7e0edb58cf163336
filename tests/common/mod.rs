//! Shared test doubles for the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Mutex;

use food_meme_factory::api::{
    AddressRecord, GenerationApi, ImageRequest, ImageResponse, RecipeRequest, RecipeResponse,
    RemoteCallFailed, RemoteOp,
};

/// One recorded call against [`MockApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Image(ImageRequest),
    Recipe(RecipeRequest),
    Address(String),
}

/// Canned responses plus a call log. `None` answers fail with HTTP 500.
pub struct MockApi {
    pub image: Option<ImageResponse>,
    pub recipe: Option<RecipeResponse>,
    pub record: Option<AddressRecord>,
    pub calls: Mutex<Vec<Call>>,
}

impl MockApi {
    pub fn ok(url_path: &str, recipe: &str) -> Self {
        Self {
            image: Some(ImageResponse { message: "ok".into(), url_path: url_path.into() }),
            recipe: Some(RecipeResponse { message: "ok".into(), recipe: recipe.into() }),
            record: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self { image: None, recipe: None, record: None, calls: Mutex::new(Vec::new()) }
    }

    pub fn with_record(mut self, record: AddressRecord) -> Self {
        self.record = Some(record);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn recipe_calls(&self) -> usize {
        self.calls().iter().filter(|c| matches!(c, Call::Recipe(_))).count()
    }

    fn answer<T: Clone>(&self, op: RemoteOp, canned: &Option<T>) -> Result<T, RemoteCallFailed> {
        canned.clone().ok_or_else(|| RemoteCallFailed::new(op, "HTTP 500"))
    }
}

#[async_trait]
impl GenerationApi for MockApi {
    async fn generate_image(&self, req: &ImageRequest) -> Result<ImageResponse, RemoteCallFailed> {
        self.calls.lock().unwrap().push(Call::Image(req.clone()));
        self.answer(RemoteOp::GenerateImage, &self.image)
    }

    async fn generate_recipe(&self, req: &RecipeRequest) -> Result<RecipeResponse, RemoteCallFailed> {
        self.calls.lock().unwrap().push(Call::Recipe(req.clone()));
        self.answer(RemoteOp::GenerateRecipe, &self.recipe)
    }

    async fn fetch_address(&self, address: &str) -> Result<AddressRecord, RemoteCallFailed> {
        self.calls.lock().unwrap().push(Call::Address(address.to_string()));
        self.answer(RemoteOp::FetchAddress, &self.record)
    }
}
