//! Scene model — the structured description of a 3D spatial arrangement
//! used as model input context.
//!
//! Field names on the wire follow the scene-export convention of the
//! upstream spatial platform (`scene_name`, `overall_style`, `lighting.type`),
//! hence the serde renames.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

pub mod fixtures;
pub mod validation;

/// Lighting conditions for a scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lighting {
    /// e.g. "Natural, bright afternoon sun"
    #[serde(rename = "type")]
    pub kind: String,
    /// e.g. "Large floor-to-ceiling windows"
    pub source: String,
}

/// A single object placed in a scene.
///
/// `id` is expected to be unique within a scene by convention; duplicates
/// are tolerated (validation only warns) since exports from some platforms
/// reuse ids across instanced meshes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneObject {
    pub id: String,
    pub name: String,
    /// Human-readable descriptors, order-preserving.
    pub tags: Vec<String>,
    pub material: String,
    /// Free-text spatial placement, e.g. "In front of the leather sofa".
    pub position: String,
}

/// A full scene description. Immutable for the duration of curation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneDescription {
    #[serde(rename = "scene_name")]
    pub name: String,
    #[serde(rename = "overall_style")]
    pub style: String,
    pub lighting: Lighting,
    /// Order is semantically meaningful — it drives narrative ordering.
    pub objects: Vec<SceneObject>,
}

impl SceneDescription {
    /// Parses a scene from its JSON export form.
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        serde_json::from_str(json).map_err(|e| {
            AppError::InvalidScene(format!("scene JSON does not match the expected shape: {e}"))
        })
    }

    /// Reads and parses a scene JSON file.
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::InvalidScene(format!("cannot read scene file {}: {e}", path.display()))
        })?;
        Self::from_json(&raw)
    }
}
