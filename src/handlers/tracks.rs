use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use super::artists::{ArtistPayload, ArtistResponse};
use super::common::{deserialize_truthy, not_found, resource_uri, OneOrMany, ResourceId};
use crate::{
    db::repositories::{NewArtist, NewTrack, TrackChanges, TrackWithArtists},
    error::Result,
    state::AppState,
};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrackPayload {
    pub title: Option<String>,
    pub version: Option<String>,
    #[serde(default, deserialize_with = "deserialize_truthy")]
    pub explicit: Option<bool>,
    pub isrc: Option<String>,
    pub audio_file: Option<String>,
    /// Only read on create
    #[serde(default)]
    pub artists: Vec<ArtistPayload>,
}

impl From<TrackPayload> for NewTrack {
    fn from(payload: TrackPayload) -> Self {
        Self {
            title: payload.title,
            version: payload.version,
            explicit: payload.explicit.unwrap_or(false),
            isrc: payload.isrc,
            audio_file: payload.audio_file,
            artists: payload.artists.into_iter().map(NewArtist::from).collect(),
        }
    }
}

impl From<TrackPayload> for TrackChanges {
    fn from(payload: TrackPayload) -> Self {
        Self {
            title: payload.title,
            version: payload.version,
            explicit: payload.explicit,
            isrc: payload.isrc,
            audio_file: payload.audio_file,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TrackResponse {
    pub track_id: i32,
    pub uri: String,
    pub title: Option<String>,
    pub version: Option<String>,
    pub explicit: Option<bool>,
    pub isrc: Option<String>,
    pub audio_file: Option<String>,
    pub artists: Vec<ArtistResponse>,
    pub status: Option<String>,
    pub error: Option<String>,
}

impl From<TrackWithArtists> for TrackResponse {
    fn from(TrackWithArtists { track, artists }: TrackWithArtists) -> Self {
        Self {
            track_id: track.track_id,
            uri: resource_uri("tracks", track.track_id),
            title: track.title,
            version: track.version,
            explicit: track.explicit,
            isrc: track.isrc,
            audio_file: track.audio_file,
            artists: artists.into_iter().map(ArtistResponse::from).collect(),
            status: None,
            error: None,
        }
    }
}

/// Also served at the bare `/tracks` path, which older clients still call
pub async fn list_tracks(State(state): State<AppState>) -> Result<Json<Vec<TrackResponse>>> {
    let tracks = state.tracks().find_all().await?;
    tracing::debug!("Listing {} tracks", tracks.len());

    Ok(Json(tracks.into_iter().map(TrackResponse::from).collect()))
}

pub async fn get_tracks(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<OneOrMany<TrackResponse>>> {
    let id = match ResourceId::parse(&raw_id) {
        ResourceId::All => return Ok(Json(OneOrMany::Many(list_tracks(State(state)).await?.0))),
        ResourceId::One(id) => id,
        ResourceId::Unknown(_) => return Err(not_found("Track", &raw_id)),
    };

    let track = state
        .tracks()
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found("Track", &raw_id))?;

    Ok(Json(OneOrMany::One(track.into())))
}

pub async fn create_track(
    State(state): State<AppState>,
    Json(payload): Json<TrackPayload>,
) -> Result<(StatusCode, Json<TrackResponse>)> {
    let created = state.tracks().create(payload.into()).await?;
    tracing::info!(
        "Created track {} with {} artist(s)",
        created.track.track_id,
        created.artists.len()
    );

    Ok((StatusCode::CREATED, Json(created.into())))
}

pub async fn update_track(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Json(payload): Json<TrackPayload>,
) -> Result<StatusCode> {
    if let Some(id) = ResourceId::parse(&raw_id).row_id() {
        let updated = state.tracks().update(id, payload.into()).await?;
        tracing::debug!("Updated {} track row(s) for id {}", updated, id);
    }

    Ok(StatusCode::CREATED)
}

pub async fn delete_track(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode> {
    if let Some(id) = ResourceId::parse(&raw_id).row_id() {
        if state.tracks().delete(id).await? > 0 {
            tracing::info!("Deleted track {}", id);
        }
    }

    Ok(StatusCode::NO_CONTENT)
}
