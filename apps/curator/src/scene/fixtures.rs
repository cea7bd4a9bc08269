//! Built-in scene fixtures.
//!
//! The loft scene is the canonical demo input: the kind of data a spatial
//! platform like Three.js or Blender would export, with tags, materials,
//! and positions giving the model spatial context.

use crate::scene::{Lighting, SceneDescription, SceneObject};

fn object(id: &str, name: &str, tags: &[&str], material: &str, position: &str) -> SceneObject {
    SceneObject {
        id: id.to_string(),
        name: name.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        material: material.to_string(),
        position: position.to_string(),
    }
}

/// The five-object "Modern Loft Living Room" scene.
pub fn loft_scene() -> SceneDescription {
    SceneDescription {
        name: "Modern Loft Living Room".to_string(),
        style: "Minimalist, Industrial".to_string(),
        lighting: Lighting {
            kind: "Natural, bright afternoon sun".to_string(),
            source: "Large floor-to-ceiling windows".to_string(),
        },
        objects: vec![
            object(
                "sofa_01",
                "Leather Sofa",
                &["seating", "main furniture", "comfortable"],
                "Distressed brown leather",
                "Center of the room, facing the windows",
            ),
            object(
                "table_01",
                "Concrete Coffee Table",
                &["table", "centerpiece", "functional"],
                "Polished concrete with steel legs",
                "In front of the leather sofa",
            ),
            object(
                "plant_01",
                "Fiddle Leaf Fig",
                &["plant", "organic", "decoration", "life"],
                "Green leaves, terracotta pot",
                "In the corner, near the windows",
            ),
            object(
                "lamp_01",
                "Arc Floor Lamp",
                &["lighting", "modern", "accent"],
                "Brushed nickel",
                "Arching over the sofa from behind",
            ),
            object(
                "art_01",
                "Abstract Painting",
                &["art", "wall decor", "color accent"],
                "Canvas with bold blue and yellow strokes",
                "On the exposed brick wall behind the sofa",
            ),
        ],
    }
}
