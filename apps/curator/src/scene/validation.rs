//! Scene validation — structural checks run before prompt composition.
//!
//! The composer itself performs no validation; a scene that reaches it is
//! assumed complete. This pass fails fast on empty required fields so a bad
//! scene never produces a partially-rendered prompt.

use std::collections::HashSet;

use tracing::warn;

use crate::errors::AppError;
use crate::scene::SceneDescription;

/// Validates a scene description for curation.
///
/// FAIL conditions (`InvalidScene`):
/// - empty `name`, `style`, `lighting.kind`, or `lighting.source`
/// - any object with an empty `id`, `name`, `material`, or `position`
///
/// Tolerated:
/// - an empty `objects` list (renders an empty object block)
/// - empty `tags` on an object
/// - duplicate object ids (warned — uniqueness is convention, not contract)
pub fn validate(scene: &SceneDescription) -> Result<(), AppError> {
    require("scene_name", &scene.name)?;
    require("overall_style", &scene.style)?;
    require("lighting.type", &scene.lighting.kind)?;
    require("lighting.source", &scene.lighting.source)?;

    let mut seen_ids = HashSet::new();
    for (index, object) in scene.objects.iter().enumerate() {
        let label = if object.id.trim().is_empty() {
            format!("object at index {index}")
        } else {
            format!("object '{}'", object.id)
        };

        require_object(&label, "id", &object.id)?;
        require_object(&label, "name", &object.name)?;
        require_object(&label, "material", &object.material)?;
        require_object(&label, "position", &object.position)?;

        if !seen_ids.insert(object.id.as_str()) {
            warn!(
                "Scene '{}' contains duplicate object id '{}' — narrative ordering may surprise",
                scene.name, object.id
            );
        }
    }

    Ok(())
}

fn require(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidScene(format!(
            "required field '{field}' is empty"
        )));
    }
    Ok(())
}

fn require_object(label: &str, field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidScene(format!(
            "{label} has an empty required field '{field}'"
        )));
    }
    Ok(())
}
