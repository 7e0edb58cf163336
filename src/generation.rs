//! Generation workflow state: prompt, current result, busy flags.
//!
//! Network work happens elsewhere (spawned tasks in the TUI, straight-line
//! `await`s in [`generate_meme`]). This type only decides what a request looks
//! like when it is issued and whether its completion may still touch state.
//!
//! Every request gets a ticket carrying a sequence number. A completion is
//! applied only if its number is still the latest one issued for that kind of
//! request; anything older is dropped without side effects.

use crate::api::{
    GenerationApi, ImageRequest, ImageResponse, RecipeRequest, RecipeResponse, RemoteCallFailed,
};
use crate::notify::{Notification, Notifier};
use crate::prompt::PromptCapture;
use crate::ui::components::TextField;

pub const IMAGE_FAILED: &str = "Failed to generate meme or recipe. Please try again.";
pub const RECIPE_FAILED: &str = "Failed to generate recipe. Please try again.";

/// Issued by [`GenerationSession::begin_image`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageTicket {
    pub seq: u64,
    pub prompt: String,
}

impl ImageTicket {
    pub fn request(&self) -> ImageRequest {
        ImageRequest::for_prompt(&self.prompt)
    }
}

/// Issued by [`GenerationSession::begin_recipe`], or as the follow-up of a
/// successful image step (then `image_seq` is set).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeTicket {
    pub seq: u64,
    pub prompt: String,
    pub image_seq: Option<u64>,
}

impl RecipeTicket {
    pub fn request(&self) -> RecipeRequest {
        RecipeRequest { prompt: self.prompt.clone() }
    }
}

/// What the caller should do after an image completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageOutcome {
    /// Image stored; issue this recipe request next.
    FetchRecipe(RecipeTicket),
    /// Image step failed; the error notification was raised.
    Failed,
    /// A newer request superseded this one; nothing changed.
    Stale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeOutcome {
    Stored,
    Failed,
    Stale,
}

#[derive(Debug, Default)]
pub struct GenerationSession {
    pub prompt: PromptCapture,
    image_url: String,
    recipe: TextField,
    is_loading: bool,
    is_recipe_loading: bool,
    image_seq: u64,
    recipe_seq: u64,
}

impl GenerationSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn image_url(&self) -> &str { &self.image_url }
    pub fn recipe_text(&self) -> &str { &self.recipe.text }
    pub fn is_loading(&self) -> bool { self.is_loading }
    pub fn is_recipe_loading(&self) -> bool { self.is_recipe_loading }

    pub fn is_idle(&self) -> bool {
        !self.is_loading && !self.is_recipe_loading
    }

    /// The result panel is shown only once both halves are present.
    pub fn has_result(&self) -> bool {
        !self.image_url.is_empty() && !self.recipe.text.is_empty()
    }

    pub fn recipe(&self) -> &TextField {
        &self.recipe
    }

    /// Local edit of the displayed recipe. Never sent to the server.
    pub fn recipe_mut(&mut self) -> &mut TextField {
        &mut self.recipe
    }

    /// Start the image step: clears the current result and supersedes any
    /// request still in flight, image or recipe.
    pub fn begin_image(&mut self) -> ImageTicket {
        self.image_url.clear();
        self.recipe = TextField::default();
        self.image_seq += 1;
        self.recipe_seq += 1;
        self.is_loading = true;
        self.is_recipe_loading = false;
        tracing::info!(seq = self.image_seq, prompt = %self.prompt.text(), "image generation started");
        ImageTicket { seq: self.image_seq, prompt: self.prompt.text().to_string() }
    }

    pub fn complete_image(
        &mut self,
        ticket: &ImageTicket,
        result: Result<ImageResponse, RemoteCallFailed>,
        notifier: &mut dyn Notifier,
    ) -> ImageOutcome {
        if ticket.seq != self.image_seq {
            tracing::debug!(seq = ticket.seq, latest = self.image_seq, "discarding stale image result");
            return ImageOutcome::Stale;
        }
        match result {
            Ok(resp) => {
                tracing::info!(seq = ticket.seq, url = %resp.url_path, "image generated");
                self.image_url = resp.url_path;
                let next = self.issue_recipe(ticket.prompt.clone(), Some(ticket.seq));
                ImageOutcome::FetchRecipe(next)
            }
            Err(e) => {
                tracing::warn!(seq = ticket.seq, error = %e, "image generation failed");
                self.is_loading = false;
                notifier.notify(Notification::error(IMAGE_FAILED));
                ImageOutcome::Failed
            }
        }
    }

    /// Standalone "regenerate recipe" with the currently held prompt.
    pub fn begin_recipe(&mut self) -> RecipeTicket {
        let prompt = self.prompt.text().to_string();
        self.issue_recipe(prompt, None)
    }

    fn issue_recipe(&mut self, prompt: String, image_seq: Option<u64>) -> RecipeTicket {
        self.recipe_seq += 1;
        self.is_recipe_loading = true;
        tracing::info!(seq = self.recipe_seq, chained = image_seq.is_some(), "recipe generation started");
        RecipeTicket { seq: self.recipe_seq, prompt, image_seq }
    }

    pub fn complete_recipe(
        &mut self,
        ticket: &RecipeTicket,
        result: Result<RecipeResponse, RemoteCallFailed>,
        notifier: &mut dyn Notifier,
    ) -> RecipeOutcome {
        // The image busy flag belongs to the chain, not to the latest recipe:
        // release it even when this recipe result itself is superseded.
        let owns_chain = ticket.image_seq.is_some_and(|s| s == self.image_seq);
        if owns_chain {
            self.is_loading = false;
        }

        if ticket.seq != self.recipe_seq {
            tracing::debug!(seq = ticket.seq, latest = self.recipe_seq, "discarding stale recipe result");
            return RecipeOutcome::Stale;
        }
        self.is_recipe_loading = false;

        match result {
            Ok(resp) => {
                tracing::info!(seq = ticket.seq, len = resp.recipe.len(), "recipe generated");
                self.recipe = TextField::with(&resp.recipe);
                self.recipe.home();
                if owns_chain {
                    notifier.notify(Notification::success(
                        "Meme and Recipe generated",
                        "Your meme and recipe are ready!",
                    ));
                }
                RecipeOutcome::Stored
            }
            Err(e) => {
                tracing::warn!(seq = ticket.seq, error = %e, "recipe generation failed");
                notifier.notify(Notification::error(RECIPE_FAILED));
                RecipeOutcome::Failed
            }
        }
    }
}

/// Run the whole image-then-recipe chain in one go.
pub async fn generate_meme(
    api: &dyn GenerationApi,
    session: &mut GenerationSession,
    notifier: &mut dyn Notifier,
) {
    let ticket = session.begin_image();
    let result = api.generate_image(&ticket.request()).await;
    if let ImageOutcome::FetchRecipe(next) = session.complete_image(&ticket, result, notifier) {
        let result = api.generate_recipe(&next.request()).await;
        session.complete_recipe(&next, result, notifier);
    }
}

/// Regenerate only the recipe for the held prompt.
pub async fn regenerate_recipe(
    api: &dyn GenerationApi,
    session: &mut GenerationSession,
    notifier: &mut dyn Notifier,
) -> RecipeOutcome {
    let ticket = session.begin_recipe();
    let result = api.generate_recipe(&ticket.request()).await;
    session.complete_recipe(&ticket, result, notifier)
}
