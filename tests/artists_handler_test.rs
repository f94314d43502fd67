//! Integration tests for artist handler routes
//!
//! Tests all artist-related API endpoints including:
//! - Create artist
//! - Get single artist and the full list
//! - Partial update
//! - Delete (including the track associations)

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use fake::{faker::name::en::Name, Fake};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::util::ServiceExt;

use music_catalog::db::repositories::TrackRepository;
use music_catalog::handlers;
use music_catalog::state::AppState;
use music_catalog::test_utils::*;

/// Helper to create a test router with the resource routes
fn create_test_router(state: &AppState) -> Router {
    Router::new()
        .nest(handlers::API_PREFIX, handlers::api_routes())
        .with_state(state.clone())
}

/// Helper to build a request carrying a JSON body
fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Helper to parse JSON response body
async fn parse_json_response<T: serde::de::DeserializeOwned>(
    response: axum::response::Response,
) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

async fn create_artist(app: &Router, name: &str) -> Value {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/resources/artists/0",
            json!({ "name": name }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    parse_json_response(response).await
}

#[tokio::test]
async fn test_create_artist() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let body = create_artist(&app, "Pink").await;

    assert_eq!(body["name"], "Pink");
    assert!(body["artist_id"].as_i64().unwrap() > 0);
    assert!(body["status"].is_null());
    assert!(body["error"].is_null());
    assert_eq!(
        body["uri"],
        format!("/api/v1/resources/artists/{}", body["artist_id"])
    );
}

#[tokio::test]
async fn test_get_one_artist_via_its_uri() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let name: String = Name().fake();
    let created = create_artist(&app, &name).await;
    let uri = created["uri"].as_str().unwrap();

    let response = app.oneshot(empty_request("GET", uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = parse_json_response(response).await;
    assert_eq!(body, created);
    assert_eq!(body["name"], name.as_str());
}

#[tokio::test]
async fn test_get_missing_artist_is_not_found() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    for uri in ["/api/v1/resources/artists/999", "/api/v1/resources/artists/nope"] {
        let response = app.clone().oneshot(empty_request("GET", uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body: Value = parse_json_response(response).await;
        assert!(body["error"].as_str().unwrap().contains("not found"));
    }
}

#[tokio::test]
async fn test_list_artists_newest_first() {
    let state = setup_test_app_state().await;
    create_test_artist(&state.db, "First").await;
    create_test_artist(&state.db, "Second").await;
    create_test_artist(&state.db, "Third").await;

    let app = create_test_router(&state);
    let response = app
        .oneshot(empty_request("GET", "/api/v1/resources/artists/all"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Vec<Value> = parse_json_response(response).await;
    let names: Vec<&str> = body.iter().map(|a| a["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Third", "Second", "First"]);
}

#[tokio::test]
async fn test_update_artist_name() {
    let state = setup_test_app_state().await;
    let artist = create_test_artist(&state.db, "Pink").await;
    let app = create_test_router(&state);

    let uri = format!("/api/v1/resources/artists/{}", artist.artist_id);
    let response = app
        .clone()
        .oneshot(json_request("PUT", &uri, json!({ "name": "Pink UPDATED" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app.oneshot(empty_request("GET", &uri)).await.unwrap();
    let body: Value = parse_json_response(response).await;
    assert_eq!(body["name"], "Pink UPDATED");
}

#[tokio::test]
async fn test_update_missing_artist_is_a_no_op() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/v1/resources/artists/42",
            json!({ "name": "Ghost" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(empty_request("GET", "/api/v1/resources/artists/all"))
        .await
        .unwrap();
    let body: Vec<Value> = parse_json_response(response).await;
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_delete_all_artists_leaves_empty_list() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    for _ in 0..3 {
        let name: String = Name().fake();
        create_artist(&app, &name).await;
    }

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/api/v1/resources/artists/all"))
        .await
        .unwrap();
    let artists: Vec<Value> = parse_json_response(response).await;
    assert_eq!(artists.len(), 3);

    for artist in &artists {
        let response = app
            .clone()
            .oneshot(empty_request("DELETE", artist["uri"].as_str().unwrap()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    let response = app
        .oneshot(empty_request("GET", "/api/v1/resources/artists/all"))
        .await
        .unwrap();
    let body: Vec<Value> = parse_json_response(response).await;
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_delete_artist_keeps_its_tracks() {
    let state = setup_test_app_state().await;
    let track = create_test_track(&state.db, "Cover Me In Sunshine", &["Pink"]).await;
    let app = create_test_router(&state);

    let uri = format!("/api/v1/resources/artists/{}", track.artists[0].artist_id);
    let response = app.oneshot(empty_request("DELETE", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let remaining = TrackRepository::new(state.db.clone())
        .find_by_id(track.track.track_id)
        .await
        .unwrap()
        .expect("track should survive its artist");
    assert!(remaining.artists.is_empty());
}

#[tokio::test]
async fn test_delete_missing_artist_still_succeeds() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(empty_request("DELETE", "/api/v1/resources/artists/7"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
