mod config;
mod curation;
mod errors;
mod generator;
mod scene;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::generator::MockGenerator;
use crate::scene::SceneDescription;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Curator v{}", env!("CARGO_PKG_VERSION"));

    let scene = match &config.scene_path {
        Some(path) => {
            info!("Loading scene from {}", path.display());
            SceneDescription::from_path(path)?
        }
        None => {
            info!("No SCENE_PATH set — using the built-in loft scene");
            scene::fixtures::loft_scene()
        }
    };

    let generator = MockGenerator::curator();
    let curated = curation::curate(&scene, &generator)?;

    println!("--- Generated Prompt ---");
    println!("{}", curated.prompt);
    println!("------------------------");

    let content_json = serde_json::to_string_pretty(&curated.content)
        .context("Failed to serialize generated content")?;
    println!("\n--- Generated Content (JSON Output) ---");
    println!("{content_json}");
    println!("---------------------------------------");

    println!("\nTitle: {}", curated.content.title);

    Ok(())
}
