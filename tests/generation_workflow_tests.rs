//! Generation Workflow Tests
//!
//! Drives the image → recipe chain and the standalone recipe regeneration
//! against an in-memory [`MockApi`].
//!
//! # Test Coverage
//!
//! - **Chaining**: recipe call follows a successful image call with the same prompt
//! - **Image failure**: no recipe call, one error notification
//! - **Regeneration**: never touches the image URL
//! - **Lookup**: fetched record is stored verbatim

mod common;

use common::{Call, MockApi};
use pretty_assertions::assert_eq;

use food_meme_factory::api::{AddressRecord, ImageRequest, RecipeRequest};
use food_meme_factory::generation::{
    generate_meme, regenerate_recipe, GenerationSession, RecipeOutcome, IMAGE_FAILED, RECIPE_FAILED,
};
use food_meme_factory::lookup::{load_address, LookupState, LOOKUP_FAILED};
use food_meme_factory::notify::{Notification, Severity};

// ============================================================================
// Image → recipe chain
// ============================================================================

#[tokio::test]
async fn test_successful_image_triggers_recipe_with_same_prompt() {
    for prompt in ["Ramen", "", "Pho with extra basil 🌿", "  spaced  "] {
        let api = MockApi::ok("https://x/img.png", "Step 1...");
        let mut session = GenerationSession::new();
        session.prompt.set(prompt);
        let mut notes: Vec<Notification> = Vec::new();

        generate_meme(&api, &mut session, &mut notes).await;

        assert_eq!(session.image_url(), "https://x/img.png");
        assert_eq!(
            api.calls(),
            vec![
                Call::Image(ImageRequest::for_prompt(prompt)),
                Call::Recipe(RecipeRequest { prompt: prompt.to_string() }),
            ]
        );
    }
}

#[tokio::test]
async fn test_image_failure_skips_recipe_and_notifies_once() {
    let api = MockApi::failing();
    let mut session = GenerationSession::new();
    session.prompt.set("Tacos");
    let mut notes: Vec<Notification> = Vec::new();

    generate_meme(&api, &mut session, &mut notes).await;

    assert_eq!(session.image_url(), "");
    assert_eq!(api.recipe_calls(), 0);
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].severity, Severity::Error);
    assert_eq!(notes[0].description, IMAGE_FAILED);
    assert!(session.is_idle());
}

#[tokio::test]
async fn test_recipe_failure_keeps_image_and_clears_busy_flags() {
    let mut api = MockApi::ok("https://x/img.png", "unused");
    api.recipe = None;
    let mut session = GenerationSession::new();
    let mut notes: Vec<Notification> = Vec::new();

    generate_meme(&api, &mut session, &mut notes).await;

    assert_eq!(session.image_url(), "https://x/img.png");
    assert_eq!(session.recipe_text(), "");
    assert!(!session.has_result());
    assert!(session.is_idle());
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].description, RECIPE_FAILED);
}

#[tokio::test]
async fn test_auto_generated_prompt_end_to_end() {
    let api = MockApi::ok("https://x/img.png", "Step 1...");
    let mut session = GenerationSession::new();
    session.prompt.auto_generate();
    let mut notes: Vec<Notification> = Vec::new();

    generate_meme(&api, &mut session, &mut notes).await;

    assert_eq!(session.prompt.text(), "Sichuan Hotpot");
    assert_eq!(session.image_url(), "https://x/img.png");
    assert_eq!(session.recipe_text(), "Step 1...");
    assert!(!session.is_loading());
    assert!(!session.is_recipe_loading());
    assert!(session.has_result());
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].severity, Severity::Success);
    assert_eq!(notes[0].title, "Meme and Recipe generated");
}

// ============================================================================
// Regeneration
// ============================================================================

#[tokio::test]
async fn test_regenerate_never_touches_image_url() {
    let api = MockApi::ok("https://x/img.png", "Step 1...");
    let mut session = GenerationSession::new();
    let mut notes: Vec<Notification> = Vec::new();
    generate_meme(&api, &mut session, &mut notes).await;

    let ok = MockApi::ok("https://other/img.png", "Step 2...");
    assert_eq!(regenerate_recipe(&ok, &mut session, &mut notes).await, RecipeOutcome::Stored);
    assert_eq!(session.image_url(), "https://x/img.png");
    assert_eq!(session.recipe_text(), "Step 2...");

    let failing = MockApi::failing();
    assert_eq!(regenerate_recipe(&failing, &mut session, &mut notes).await, RecipeOutcome::Failed);
    assert_eq!(session.image_url(), "https://x/img.png");
    assert_eq!(session.recipe_text(), "Step 2...");
    assert!(session.is_idle());
    assert_eq!(notes.last().map(|n| n.description.as_str()), Some(RECIPE_FAILED));
}

#[tokio::test]
async fn test_regenerate_uses_current_prompt() {
    let api = MockApi::ok("u", "r");
    let mut session = GenerationSession::new();
    let mut notes: Vec<Notification> = Vec::new();
    generate_meme(&api, &mut session, &mut notes).await;

    session.prompt.set("Changed my mind");
    regenerate_recipe(&api, &mut session, &mut notes).await;

    assert_eq!(
        api.calls().last(),
        Some(&Call::Recipe(RecipeRequest { prompt: "Changed my mind".into() }))
    );
}

// ============================================================================
// Lookup
// ============================================================================

#[tokio::test]
async fn test_lookup_stores_record() {
    let record = AddressRecord { url_path: "u".into(), recipe: "r".into(), name: "n".into() };
    let api = MockApi::failing().with_record(record.clone());
    let mut state = LookupState::new("0xabc");
    let mut notes: Vec<Notification> = Vec::new();

    load_address(&api, &mut state, &mut notes).await;

    assert_eq!(api.calls(), vec![Call::Address("0xabc".into())]);
    let got = state.record().expect("record stored");
    assert_eq!(got.name, "n");
    assert_eq!(got.url_path, "u");
    assert_eq!(got.recipe, "r");
    assert!(notes.is_empty());
}

#[tokio::test]
async fn test_lookup_failure_notifies() {
    let api = MockApi::failing();
    let mut state = LookupState::new("0xdead");
    let mut notes: Vec<Notification> = Vec::new();

    load_address(&api, &mut state, &mut notes).await;

    assert!(state.record().is_none());
    assert!(!state.is_loading());
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].description, LOOKUP_FAILED);
}
