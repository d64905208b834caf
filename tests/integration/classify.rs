//! Client classification pipeline integration tests
//!
//! Drives the full chain: gallery -> classifier -> relay -> mock upstream,
//! covering partial failure tolerance and category write-back.

use curator::{Classifier, Gallery, UploadedImage};

use crate::common::spawn_relay;
use crate::mocks::frida::MockFrida;

fn image(filename: &str, payload: &str) -> UploadedImage {
    UploadedImage::new(filename, payload, payload.len() as u64, "image/png")
}

async fn classifier_against(frida: &MockFrida) -> Classifier {
    let relay_url = spawn_relay(&frida.uri(), Some("test-frida-api-key")).await;
    Classifier::new(reqwest::Client::new(), relay_url, "gpt-4o-mini")
}

#[tokio::test]
async fn test_batch_tolerates_single_failure() {
    let frida = MockFrida::start().await;
    // Each image's base64 payload is unique, so the mock can answer per image
    frida.mock_completion_for_payload("b25l", "Food").await;
    frida.mock_error_for_payload("dHdv", 500).await;
    frida
        .mock_completion_for_payload("dGhyZWU", "  architecture.\nit shows a building")
        .await;

    let mut gallery = Gallery::new();
    gallery.add(image("one.png", "b25l"));
    gallery.add(image("two.png", "dHdv"));
    gallery.add(image("three.png", "dGhyZWU"));

    let classifier = classifier_against(&frida).await;
    let outcomes = classifier.classify_all(&mut gallery).await;

    assert_eq!(outcomes.len(), 3);

    let by_name = |name: &str| {
        outcomes
            .iter()
            .find(|o| o.filename == name)
            .unwrap()
            .category
            .clone()
    };
    assert_eq!(by_name("one.png"), Some("Food".to_string()));
    assert_eq!(by_name("two.png"), None);
    assert_eq!(by_name("three.png"), Some("Architecture".to_string()));

    // Categories were written back to the gallery by filename
    assert_eq!(
        gallery.get("one.png").unwrap().category.as_deref(),
        Some("Food")
    );
    assert!(gallery.get("two.png").unwrap().category.is_none());
    assert_eq!(
        gallery.get("three.png").unwrap().category.as_deref(),
        Some("Architecture")
    );

    let food = gallery.images_by_category("Food");
    assert_eq!(food.len(), 1);
    assert_eq!(food[0].filename, "one.png");
}

#[tokio::test]
async fn test_answer_outside_allow_list_leaves_category_unset() {
    let frida = MockFrida::start().await;
    frida.mock_completion_with_content("skyscraper").await;

    let mut gallery = Gallery::new();
    gallery.add(image("tower.jpg", "dG93ZXI="));

    let classifier = classifier_against(&frida).await;
    let outcomes = classifier.classify_all(&mut gallery).await;

    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].category, None);
    assert!(gallery.get("tower.jpg").unwrap().category.is_none());
}

#[tokio::test]
async fn test_classify_image_resignals_relay_errors() {
    let frida = MockFrida::start().await;
    frida.mock_rate_limited().await;

    let classifier = classifier_against(&frida).await;
    let result = classifier
        .classify_image(&image("one.png", "b25l"))
        .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_classify_image_normalizes_upstream_shape() {
    let frida = MockFrida::start().await;
    frida.mock_completion_with_content("Food").await;

    let classifier = classifier_against(&frida).await;
    let response = classifier
        .classify_image(&image("lunch.jpg", "bHVuY2g="))
        .await
        .unwrap();

    assert_eq!(response.kind, "message");
    assert_eq!(response.role, "assistant");
    assert_eq!(response.text(), "Food");
    assert_eq!(response.stop_reason, "stop");
    assert_eq!(response.usage.input_tokens, 34);
    assert_eq!(response.usage.output_tokens, 2);
}
