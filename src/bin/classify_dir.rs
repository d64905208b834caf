//! Classify every image in a directory against a running relay
//!
//! Usage: cargo run --bin classify-dir -- <directory> [relay-url]
//!
//! Reads image files from the directory, loads them into a gallery as base64
//! payloads, runs the classification pipeline, and prints the per-image
//! category assignments.

use anyhow::{bail, Context, Result};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use tracing::{info, warn};

use curator::{Classifier, Gallery, UploadedImage};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "curator=info".into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let dir = args
        .next()
        .context("Usage: classify-dir <directory> [relay-url]")?;
    let relay_url = args
        .next()
        .unwrap_or_else(|| "http://localhost:8080".to_string());

    let mut gallery = Gallery::new();
    let entries =
        std::fs::read_dir(&dir).with_context(|| format!("Failed to read directory {}", dir))?;

    for entry in entries {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }

        let mime = mime_guess::from_path(&path).first_or_octet_stream();
        if mime.type_() != mime_guess::mime::IMAGE {
            continue;
        }

        let filename = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name.to_string(),
            None => continue,
        };
        let data = std::fs::read(&path)
            .with_context(|| format!("Failed to read file {}", path.display()))?;

        let image = UploadedImage::new(
            filename.clone(),
            BASE64.encode(&data),
            data.len() as u64,
            mime.essence_str().to_string(),
        );
        if !gallery.add(image) {
            warn!(filename = %filename, "Skipping duplicate filename");
        }
    }

    if gallery.is_empty() {
        bail!("No image files found in {}", dir);
    }

    info!(
        images = gallery.len(),
        total_bytes = gallery.total_size_bytes(),
        "Gallery loaded"
    );

    let model = std::env::var("CURATOR_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());
    let classifier = Classifier::new(reqwest::Client::new(), relay_url, model);

    let outcomes = classifier.classify_all(&mut gallery).await;
    for outcome in &outcomes {
        match &outcome.category {
            Some(category) => println!("{}: {}", outcome.filename, category),
            None => println!("{}: (uncategorized)", outcome.filename),
        }
    }

    Ok(())
}
