//! Prompt Composer — renders a `SceneDescription` into the curator prompt.
//!
//! Pure and deterministic: no I/O, no validation, no mutation of the input.
//! Structural checks happen in `scene::validation` before composition.

use crate::curation::prompts::CURATOR_PROMPT_TEMPLATE;
use crate::scene::SceneDescription;

/// Composes the curator prompt for a scene.
///
/// Each object renders as one flush-left line
/// `- {name}: Made of {material}. Positioned at: {position}. Tags: {t1}, {t2}.`,
/// joined by newlines in input order. An empty object list renders an empty
/// block.
pub fn compose(scene: &SceneDescription) -> String {
    let object_descriptions = scene
        .objects
        .iter()
        .map(|obj| {
            format!(
                "- {}: Made of {}. Positioned at: {}. Tags: {}.",
                obj.name,
                obj.material,
                obj.position,
                obj.tags.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    CURATOR_PROMPT_TEMPLATE
        .replace("{scene_name}", &scene.name)
        .replace("{overall_style}", &scene.style)
        .replace("{lighting_kind}", &scene.lighting.kind)
        .replace("{lighting_source}", &scene.lighting.source)
        .replace("{object_descriptions}", &object_descriptions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::fixtures::loft_scene;
    use crate::scene::{Lighting, SceneObject};

    fn two_object_scene() -> SceneDescription {
        SceneDescription {
            name: "Reading Corner".to_string(),
            style: "Scandinavian".to_string(),
            lighting: Lighting {
                kind: "Warm evening light".to_string(),
                source: "A single window".to_string(),
            },
            objects: vec![
                SceneObject {
                    id: "chair_01".to_string(),
                    name: "Wingback Chair".to_string(),
                    tags: vec!["seating".to_string(), "cozy".to_string()],
                    material: "Green velvet".to_string(),
                    position: "Beside the window".to_string(),
                },
                SceneObject {
                    id: "shelf_01".to_string(),
                    name: "Oak Bookshelf".to_string(),
                    tags: vec!["storage".to_string()],
                    material: "Solid oak".to_string(),
                    position: "Against the far wall".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_compose_is_deterministic() {
        let scene = loft_scene();
        assert_eq!(compose(&scene), compose(&scene));
    }

    #[test]
    fn test_compose_does_not_mutate_the_scene() {
        let scene = two_object_scene();
        let before = scene.clone();
        let _ = compose(&scene);
        assert_eq!(scene, before);
    }

    #[test]
    fn test_one_object_line_per_object() {
        let scene = two_object_scene();
        let prompt = compose(&scene);
        let object_lines: Vec<&str> = prompt.lines().filter(|l| l.starts_with("- ")).collect();
        assert_eq!(object_lines.len(), 2);
        assert_eq!(
            object_lines[0],
            "- Wingback Chair: Made of Green velvet. Positioned at: Beside the window. Tags: seating, cozy."
        );
        assert_eq!(
            object_lines[1],
            "- Oak Bookshelf: Made of Solid oak. Positioned at: Against the far wall. Tags: storage."
        );
    }

    #[test]
    fn test_object_order_is_preserved() {
        let mut scene = two_object_scene();
        scene.objects.reverse();
        let prompt = compose(&scene);
        let shelf = prompt.find("Oak Bookshelf").unwrap();
        let chair = prompt.find("Wingback Chair").unwrap();
        assert!(shelf < chair);
    }

    #[test]
    fn test_empty_scene_renders_empty_object_block() {
        let mut scene = two_object_scene();
        scene.objects.clear();
        let prompt = compose(&scene);
        assert!(!prompt.lines().any(|l| l.starts_with("- ")));
        assert!(prompt.contains("  - Objects in Scene:\n\n"));
    }

    #[test]
    fn test_output_contract_keys_are_always_present() {
        let mut scene = two_object_scene();
        scene.objects.clear();
        let prompt = compose(&scene);
        assert!(prompt.contains("\"title\""));
        assert!(prompt.contains("\"narrative\""));
        assert!(prompt.contains("\"design_suggestions\""));
    }

    #[test]
    fn test_loft_scene_renders_expected_facts() {
        let prompt = compose(&loft_scene());
        assert!(prompt.contains(
            "- Leather Sofa: Made of Distressed brown leather. \
             Positioned at: Center of the room, facing the windows. \
             Tags: seating, main furniture, comfortable."
        ));
        assert!(prompt.contains("Modern Loft Living Room"));
        assert!(prompt.contains("Minimalist, Industrial"));
        assert!(prompt.contains("Natural, bright afternoon sun from Large floor-to-ceiling windows"));
    }
}
