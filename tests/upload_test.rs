//! Integration tests for multipart upload and the list projection.

mod common;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use common::{encode_jpeg, TestHarness};
use pixshelf::config::Config;
use reqwest::multipart::{Form, Part};

fn upload_form(data: Vec<u8>, file_name: &str) -> Form {
    let part = Part::bytes(data).file_name(file_name.to_string());
    Form::new().part("file", part)
}

#[tokio::test]
async fn upload_creates_image() {
    let (_h, addr) = TestHarness::with_server().await;

    let client = reqwest::Client::new();
    let resp = client
        .post(format!("http://{addr}/api/v1/images"))
        .multipart(upload_form(encode_jpeg(100, 100), "cat.jpg"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);

    let location = resp
        .headers()
        .get("location")
        .expect("missing Location header")
        .to_str()
        .unwrap()
        .to_string();

    let body: serde_json::Value = resp.json().await.unwrap();
    let id = body["id"].as_i64().expect("id should be a number");
    assert_eq!(location, format!("/api/v1/images/{id}"));
    assert_eq!(body["name"], "cat.jpg");
    assert!(body["imagePixelData"].is_string());
    assert!(body["thumbnailPixelData"].is_string());

    // The record is retrievable at the advertised location
    let resp = reqwest::get(format!("http://{addr}{location}")).await.unwrap();
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn upload_generates_thumbnail_at_configured_size() {
    let mut config = Config::default();
    config.thumbnail.width = 50;
    config.thumbnail.height = 50;
    let (_h, addr) = TestHarness::with_server_config(config).await;

    let client = reqwest::Client::new();
    let resp = client
        .post(format!("http://{addr}/api/v1/images"))
        .multipart(upload_form(encode_jpeg(100, 100), "square.jpg"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);

    let body: serde_json::Value = resp.json().await.unwrap();
    let thumb_b64 = body["thumbnailPixelData"].as_str().unwrap();
    let thumb_bytes = STANDARD.decode(thumb_b64).expect("thumbnail not base64");

    let thumb = image::load_from_memory(&thumb_bytes).expect("thumbnail not a valid image");
    assert_eq!(thumb.width(), 50);
    assert_eq!(thumb.height(), 50);
}

#[tokio::test]
async fn upload_rejects_non_image_payload() {
    let (_h, addr) = TestHarness::with_server().await;

    let client = reqwest::Client::new();
    let resp = client
        .post(format!("http://{addr}/api/v1/images"))
        .multipart(upload_form(b"not an image".to_vec(), "x.jpg"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 422);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert!(body["error"].is_string());

    // Nothing was persisted
    let list: serde_json::Value = reqwest::get(format!("http://{addr}/api/v1/images"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list, serde_json::json!([]));
}

#[tokio::test]
async fn upload_rejects_empty_file() {
    let (_h, addr) = TestHarness::with_server().await;

    let client = reqwest::Client::new();
    let resp = client
        .post(format!("http://{addr}/api/v1/images"))
        .multipart(upload_form(Vec::new(), "empty.jpg"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    // Nothing was persisted
    let list: serde_json::Value = reqwest::get(format!("http://{addr}/api/v1/images"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list, serde_json::json!([]));
}

#[tokio::test]
async fn upload_rejects_blank_filename() {
    let (_h, addr) = TestHarness::with_server().await;

    let client = reqwest::Client::new();
    let resp = client
        .post(format!("http://{addr}/api/v1/images"))
        .multipart(upload_form(encode_jpeg(10, 10), "   "))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn upload_rejects_form_without_file() {
    let (_h, addr) = TestHarness::with_server().await;

    // A text part carries no filename, so there is no file to upload
    let form = Form::new().text("note", "hello");
    let client = reqwest::Client::new();
    let resp = client
        .post(format!("http://{addr}/api/v1/images"))
        .multipart(form)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn list_defaults_to_thumbnail_projection() {
    let (_h, addr) = TestHarness::with_server().await;

    let client = reqwest::Client::new();
    client
        .post(format!("http://{addr}/api/v1/images"))
        .multipart(upload_form(encode_jpeg(20, 20), "a.jpg"))
        .send()
        .await
        .unwrap();

    let list: serde_json::Value = reqwest::get(format!("http://{addr}/api/v1/images"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let entry = &list.as_array().unwrap()[0];
    assert!(entry["id"].is_number());
    assert!(entry["name"].is_string());
    assert!(entry["thumbnailPixelData"].is_string());
    assert!(entry.get("imagePixelData").is_none());
}

#[tokio::test]
async fn list_with_thumbnails_only_false_returns_full_records() {
    let (_h, addr) = TestHarness::with_server().await;

    let client = reqwest::Client::new();
    client
        .post(format!("http://{addr}/api/v1/images"))
        .multipart(upload_form(encode_jpeg(20, 20), "a.jpg"))
        .send()
        .await
        .unwrap();

    let list: serde_json::Value =
        reqwest::get(format!("http://{addr}/api/v1/images?thumbnailsOnly=false"))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
    let entry = &list.as_array().unwrap()[0];
    assert!(entry["imagePixelData"].is_string());
    assert!(entry["thumbnailPixelData"].is_string());
}
