use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use super::common::{not_found, resource_uri, OneOrMany, ResourceId};
use crate::{
    db::{
        entities::artist,
        repositories::{ArtistChanges, NewArtist},
    },
    error::Result,
    state::AppState,
};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtistPayload {
    pub name: Option<String>,
}

impl From<ArtistPayload> for NewArtist {
    fn from(payload: ArtistPayload) -> Self {
        Self { name: payload.name }
    }
}

impl From<ArtistPayload> for ArtistChanges {
    fn from(payload: ArtistPayload) -> Self {
        Self { name: payload.name }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ArtistResponse {
    pub artist_id: i32,
    pub uri: String,
    pub name: Option<String>,
    pub status: Option<String>,
    pub error: Option<String>,
}

impl From<artist::Model> for ArtistResponse {
    fn from(artist: artist::Model) -> Self {
        Self {
            artist_id: artist.artist_id,
            uri: resource_uri("artists", artist.artist_id),
            name: artist.name,
            status: None,
            error: None,
        }
    }
}

pub async fn list_artists(State(state): State<AppState>) -> Result<Json<Vec<ArtistResponse>>> {
    let artists = state.artists().find_all().await?;
    tracing::debug!("Listing {} artists", artists.len());

    Ok(Json(artists.into_iter().map(ArtistResponse::from).collect()))
}

/// `GET /artists/<id|all>`
pub async fn get_artists(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<OneOrMany<ArtistResponse>>> {
    let id = match ResourceId::parse(&raw_id) {
        ResourceId::All => return Ok(Json(OneOrMany::Many(list_artists(State(state)).await?.0))),
        ResourceId::One(id) => id,
        ResourceId::Unknown(_) => return Err(not_found("Artist", &raw_id)),
    };

    let artist = state
        .artists()
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found("Artist", &raw_id))?;

    Ok(Json(OneOrMany::One(artist.into())))
}

pub async fn create_artist(
    State(state): State<AppState>,
    Json(payload): Json<ArtistPayload>,
) -> Result<(StatusCode, Json<ArtistResponse>)> {
    let artist = state.artists().create(payload.into()).await?;
    tracing::info!("Created artist {}", artist.artist_id);

    Ok((StatusCode::CREATED, Json(artist.into())))
}

pub async fn update_artist(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Json(payload): Json<ArtistPayload>,
) -> Result<StatusCode> {
    if let Some(id) = ResourceId::parse(&raw_id).row_id() {
        let updated = state.artists().update(id, payload.into()).await?;
        tracing::debug!("Updated {} artist row(s) for id {}", updated, id);
    }

    Ok(StatusCode::CREATED)
}

pub async fn delete_artist(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode> {
    if let Some(id) = ResourceId::parse(&raw_id).row_id() {
        if state.artists().delete(id).await? > 0 {
            tracing::info!("Deleted artist {}", id);
        }
    }

    Ok(StatusCode::NO_CONTENT)
}
