use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, ModelTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};

use super::artists::{insert_artist, NewArtist};
use crate::db::{
    entities::{artist, artist_track, track, track_album},
    enums::ArtistRole,
};
use crate::error::Result;

#[derive(Debug, Clone, Default)]
pub struct NewTrack {
    pub title: Option<String>,
    pub version: Option<String>,
    pub explicit: bool,
    pub isrc: Option<String>,
    pub audio_file: Option<String>,
    /// Always inserted as new artist rows, never matched against existing ones
    pub artists: Vec<NewArtist>,
}

#[derive(Debug, Clone, Default)]
pub struct TrackChanges {
    pub title: Option<String>,
    pub version: Option<String>,
    pub explicit: Option<bool>,
    pub isrc: Option<String>,
    pub audio_file: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackWithArtists {
    pub track: track::Model,
    pub artists: Vec<artist::Model>,
}

pub struct TrackRepository {
    db: DatabaseConnection,
}

impl TrackRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> Result<Vec<TrackWithArtists>> {
        let tracks = track::Entity::find()
            .order_by_desc(track::Column::TrackId)
            .all(&self.db)
            .await?;

        let mut results = Vec::with_capacity(tracks.len());
        for track in tracks {
            results.push(with_artists(&self.db, track).await?);
        }

        Ok(results)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<TrackWithArtists>> {
        match track::Entity::find_by_id(id).one(&self.db).await? {
            Some(track) => Ok(Some(with_artists(&self.db, track).await?)),
            None => Ok(None),
        }
    }

    pub async fn create(&self, track: NewTrack) -> Result<TrackWithArtists> {
        let txn = self.db.begin().await?;
        let created = insert_track(&txn, track).await?;
        txn.commit().await?;

        Ok(created)
    }

    pub async fn update(&self, id: i32, changes: TrackChanges) -> Result<u64> {
        let mut active = track::ActiveModel {
            ..Default::default()
        };
        if let Some(title) = changes.title {
            active.title = Set(Some(title));
        }
        if let Some(version) = changes.version {
            active.version = Set(Some(version));
        }
        if let Some(explicit) = changes.explicit {
            active.explicit = Set(Some(explicit));
        }
        if let Some(isrc) = changes.isrc {
            active.isrc = Set(Some(isrc));
        }
        if let Some(audio_file) = changes.audio_file {
            active.audio_file = Set(Some(audio_file));
        }

        if !active.is_changed() {
            return Ok(0);
        }

        let result = track::Entity::update_many()
            .set(active)
            .filter(track::Column::TrackId.eq(id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Removes the track with its artist and album associations; artists and albums stay
    pub async fn delete(&self, id: i32) -> Result<u64> {
        let txn = self.db.begin().await?;

        artist_track::Entity::delete_many()
            .filter(artist_track::Column::TrackId.eq(id))
            .exec(&txn)
            .await?;

        track_album::Entity::delete_many()
            .filter(track_album::Column::TrackId.eq(id))
            .exec(&txn)
            .await?;

        let result = track::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        Ok(result.rows_affected)
    }
}

pub(crate) async fn with_artists<C: ConnectionTrait>(
    conn: &C,
    track: track::Model,
) -> Result<TrackWithArtists> {
    let artists = track
        .find_related(artist::Entity)
        .order_by_asc(artist::Column::ArtistId)
        .all(conn)
        .await?;

    Ok(TrackWithArtists { track, artists })
}

/// Inserts the track, then one artist row plus association per nested artist
pub(crate) async fn insert_track<C: ConnectionTrait>(
    conn: &C,
    new_track: NewTrack,
) -> Result<TrackWithArtists> {
    let active = track::ActiveModel {
        title: Set(new_track.title),
        version: Set(new_track.version),
        explicit: Set(Some(new_track.explicit)),
        isrc: Set(new_track.isrc),
        audio_file: Set(new_track.audio_file),
        ..Default::default()
    };
    let track = active.insert(conn).await?;

    let mut artists = Vec::with_capacity(new_track.artists.len());
    for new_artist in new_track.artists {
        let artist = insert_artist(conn, new_artist).await?;

        artist_track::Entity::insert(artist_track::ActiveModel {
            artist_id: Set(artist.artist_id),
            track_id: Set(track.track_id),
            role: Set(ArtistRole::PrimaryArtist),
        })
        .exec(conn)
        .await?;

        artists.push(artist);
    }

    Ok(TrackWithArtists { track, artists })
}
