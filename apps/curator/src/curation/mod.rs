//! Curation — orchestrates the scene-to-content pipeline.
//!
//! Flow: validate scene → compose prompt → generator call → parse reply.
//!
//! The generator is a trait object so the shipped mock and any future live
//! backend are interchangeable here.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::generator::{self, TextGenerator};
use crate::scene::{validation, SceneDescription};

pub mod composer;
pub mod prompts;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Content generated for a scene. Field order doubles as JSON key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedContent {
    /// Short, catchy scene title.
    pub title: String,
    /// Multi-paragraph story about the space.
    pub narrative: String,
    /// Actionable ideas to enhance the space, in the model's order.
    pub design_suggestions: Vec<String>,
}

/// Result of curating a scene: the prompt that was sent and the parsed reply.
#[derive(Debug, Clone)]
pub struct CuratedScene {
    pub prompt: String,
    pub content: GeneratedContent,
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Runs the full curation pipeline for a scene.
///
/// Steps:
/// 1. `validation::validate` — reject incomplete scenes up front
/// 2. `composer::compose` — render the curator prompt
/// 3. `generator.generate` — obtain the model reply
/// 4. `generator::parse_json` — parse the reply into `GeneratedContent`
pub fn curate(
    scene: &SceneDescription,
    generator: &dyn TextGenerator,
) -> Result<CuratedScene, AppError> {
    validation::validate(scene)?;

    let prompt = composer::compose(scene);
    info!(
        "Composed curator prompt for scene '{}' ({} objects, {} chars)",
        scene.name,
        scene.objects.len(),
        prompt.len()
    );

    let reply = generator.generate(&prompt, prompts::CURATOR_SYSTEM)?;
    let content: GeneratedContent = generator::parse_json(&reply)?;
    info!("Generated content titled '{}'", content.title);

    Ok(CuratedScene { prompt, content })
}
