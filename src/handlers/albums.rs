use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use super::common::{not_found, parse_release_date, resource_uri, OneOrMany, ResourceId};
use super::tracks::{TrackPayload, TrackResponse};
use crate::{
    db::{
        enums::StoreName,
        repositories::{AlbumChanges, AlbumWithRelations, NewAlbum, NewTrack},
    },
    error::{AppError, Result},
    state::AppState,
};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlbumPayload {
    pub title: Option<String>,
    pub upc: Option<String>,
    pub artwork_file: Option<String>,
    /// ISO-8601 (`YYYY-MM-DD`)
    pub release_date: Option<String>,
    #[serde(default)]
    pub stores: Vec<String>,
    #[serde(default)]
    pub tracks: Vec<TrackPayload>,
}

impl TryFrom<AlbumPayload> for NewAlbum {
    type Error = AppError;

    fn try_from(payload: AlbumPayload) -> Result<Self> {
        let release_date = payload
            .release_date
            .as_deref()
            .map(parse_release_date)
            .transpose()?;

        let stores = payload
            .stores
            .iter()
            .map(|name| {
                StoreName::from_str(name)
                    .ok_or_else(|| AppError::InvalidInput(format!("Unknown store '{}'", name)))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            title: payload.title,
            upc: payload.upc,
            artwork_file: payload.artwork_file,
            release_date,
            stores,
            tracks: payload.tracks.into_iter().map(NewTrack::from).collect(),
        })
    }
}

impl TryFrom<AlbumPayload> for AlbumChanges {
    type Error = AppError;

    fn try_from(payload: AlbumPayload) -> Result<Self> {
        Ok(Self {
            release_date: payload
                .release_date
                .as_deref()
                .map(parse_release_date)
                .transpose()?,
            title: payload.title,
            upc: payload.upc,
            artwork_file: payload.artwork_file,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AlbumResponse {
    pub album_id: i32,
    pub uri: String,
    pub title: Option<String>,
    pub upc: Option<String>,
    pub artwork_file: Option<String>,
    pub release_date: Option<String>,
    pub stores: Vec<String>,
    pub tracks: Vec<TrackResponse>,
    pub status: Option<String>,
    pub error: Option<String>,
}

impl From<AlbumWithRelations> for AlbumResponse {
    fn from(AlbumWithRelations { album, tracks, stores }: AlbumWithRelations) -> Self {
        Self {
            album_id: album.album_id,
            uri: resource_uri("albums", album.album_id),
            title: album.title,
            upc: album.upc,
            artwork_file: album.artwork_file,
            release_date: album.release_date.map(|d| d.to_string()),
            stores: stores.into_iter().map(|s| s.name.into()).collect(),
            tracks: tracks.into_iter().map(TrackResponse::from).collect(),
            status: None,
            error: None,
        }
    }
}

pub async fn list_albums(State(state): State<AppState>) -> Result<Json<Vec<AlbumResponse>>> {
    let albums = state.albums().find_all().await?;
    tracing::debug!("Listing {} albums", albums.len());

    Ok(Json(albums.into_iter().map(AlbumResponse::from).collect()))
}

pub async fn get_albums(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<OneOrMany<AlbumResponse>>> {
    let id = match ResourceId::parse(&raw_id) {
        ResourceId::All => return Ok(Json(OneOrMany::Many(list_albums(State(state)).await?.0))),
        ResourceId::One(id) => id,
        ResourceId::Unknown(_) => return Err(not_found("Album", &raw_id)),
    };

    let album = state
        .albums()
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found("Album", &raw_id))?;

    Ok(Json(OneOrMany::One(album.into())))
}

/// Creates the album; stores are reused by name, nested tracks are always new
pub async fn create_album(
    State(state): State<AppState>,
    Json(payload): Json<AlbumPayload>,
) -> Result<(StatusCode, Json<AlbumResponse>)> {
    let new_album = NewAlbum::try_from(payload)?;
    let created = state.albums().create(new_album).await?;
    tracing::info!(
        "Created album {} with {} track(s) on {} store(s)",
        created.album.album_id,
        created.tracks.len(),
        created.stores.len()
    );

    Ok((StatusCode::CREATED, Json(created.into())))
}

pub async fn update_album(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Json(payload): Json<AlbumPayload>,
) -> Result<StatusCode> {
    let changes = AlbumChanges::try_from(payload)?;

    if let Some(id) = ResourceId::parse(&raw_id).row_id() {
        let updated = state.albums().update(id, changes).await?;
        tracing::debug!("Updated {} album row(s) for id {}", updated, id);
    }

    Ok(StatusCode::CREATED)
}

pub async fn delete_album(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode> {
    if let Some(id) = ResourceId::parse(&raw_id).row_id() {
        if state.albums().delete(id).await? > 0 {
            tracing::info!("Deleted album {}", id);
        }
    }

    Ok(StatusCode::NO_CONTENT)
}
