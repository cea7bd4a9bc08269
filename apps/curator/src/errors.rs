#![allow(dead_code)]

use thiserror::Error;

use crate::generator::GeneratorError;

/// Application-level error type.
///
/// Two conditions matter to callers: a scene that cannot be curated
/// (`InvalidScene` — caught before any prompt is composed, so a bad scene
/// never produces a partially-rendered prompt) and a model reply that
/// cannot be parsed (`Generation`).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid scene: {0}")]
    InvalidScene(String),

    #[error("Generation error: {0}")]
    Generation(#[from] GeneratorError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
