pub mod albums;
pub mod artists;
pub mod common;
pub mod health;
pub mod html;
pub mod tracks;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Mount point of [`api_routes`]; resource URIs are built from it
pub const API_PREFIX: &str = "/api/v1/resources";

pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Artist endpoints
        .route(
            "/artists",
            get(artists::list_artists).post(artists::create_artist),
        )
        .route(
            "/artists/:id",
            get(artists::get_artists)
                .post(artists::create_artist)
                .put(artists::update_artist)
                .delete(artists::delete_artist),
        )

        // Track endpoints
        .route(
            "/tracks",
            get(tracks::list_tracks).post(tracks::create_track),
        )
        .route(
            "/tracks/:id",
            get(tracks::get_tracks)
                .post(tracks::create_track)
                .put(tracks::update_track)
                .delete(tracks::delete_track),
        )

        // Album endpoints
        .route(
            "/albums",
            get(albums::list_albums).post(albums::create_album),
        )
        .route(
            "/albums/:id",
            get(albums::get_albums)
                .post(albums::create_album)
                .put(albums::update_album)
                .delete(albums::delete_album),
        )
}

pub fn html_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(html::about))
        .route("/about", get(html::about))
        .route("/help", get(html::help))
}
