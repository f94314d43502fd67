use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, ModelTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};

use super::stores::find_or_create;
use super::tracks::{insert_track, with_artists, NewTrack, TrackWithArtists};
use crate::db::{
    entities::{album, album_store, store, track, track_album},
    enums::StoreName,
};
use crate::error::Result;

#[derive(Debug, Clone, Default)]
pub struct NewAlbum {
    pub title: Option<String>,
    pub upc: Option<String>,
    pub artwork_file: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub stores: Vec<StoreName>,
    pub tracks: Vec<NewTrack>,
}

#[derive(Debug, Clone, Default)]
pub struct AlbumChanges {
    pub title: Option<String>,
    pub upc: Option<String>,
    pub artwork_file: Option<String>,
    pub release_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlbumWithRelations {
    pub album: album::Model,
    pub tracks: Vec<TrackWithArtists>,
    pub stores: Vec<store::Model>,
}

pub struct AlbumRepository {
    db: DatabaseConnection,
}

impl AlbumRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> Result<Vec<AlbumWithRelations>> {
        let albums = album::Entity::find()
            .order_by_desc(album::Column::AlbumId)
            .all(&self.db)
            .await?;

        let mut results = Vec::with_capacity(albums.len());
        for album in albums {
            results.push(with_relations(&self.db, album).await?);
        }

        Ok(results)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<AlbumWithRelations>> {
        match album::Entity::find_by_id(id).one(&self.db).await? {
            Some(album) => Ok(Some(with_relations(&self.db, album).await?)),
            None => Ok(None),
        }
    }

    /// Creates the album, attaches its stores by name and creates its tracks, all or nothing
    pub async fn create(&self, new_album: NewAlbum) -> Result<AlbumWithRelations> {
        let txn = self.db.begin().await?;

        let active = album::ActiveModel {
            title: Set(new_album.title),
            upc: Set(new_album.upc),
            artwork_file: Set(new_album.artwork_file),
            release_date: Set(new_album.release_date),
            ..Default::default()
        };
        let album = active.insert(&txn).await?;

        let mut stores: Vec<store::Model> = Vec::with_capacity(new_album.stores.len());
        for name in new_album.stores {
            if stores.iter().any(|s| s.name == name) {
                continue;
            }

            let store = find_or_create(&txn, name).await?;
            album_store::Entity::insert(album_store::ActiveModel {
                album_id: Set(album.album_id),
                store_id: Set(store.store_id),
            })
            .exec(&txn)
            .await?;

            stores.push(store);
        }

        let mut tracks = Vec::with_capacity(new_album.tracks.len());
        for new_track in new_album.tracks {
            let created = insert_track(&txn, new_track).await?;
            track_album::Entity::insert(track_album::ActiveModel {
                track_id: Set(created.track.track_id),
                album_id: Set(album.album_id),
            })
            .exec(&txn)
            .await?;

            tracks.push(created);
        }

        txn.commit().await?;
        stores.sort_by_key(|s| s.store_id);

        Ok(AlbumWithRelations {
            album,
            tracks,
            stores,
        })
    }

    pub async fn update(&self, id: i32, changes: AlbumChanges) -> Result<u64> {
        let mut active = album::ActiveModel {
            ..Default::default()
        };
        if let Some(title) = changes.title {
            active.title = Set(Some(title));
        }
        if let Some(upc) = changes.upc {
            active.upc = Set(Some(upc));
        }
        if let Some(artwork_file) = changes.artwork_file {
            active.artwork_file = Set(Some(artwork_file));
        }
        if let Some(release_date) = changes.release_date {
            active.release_date = Set(Some(release_date));
        }

        if !active.is_changed() {
            return Ok(0);
        }

        let result = album::Entity::update_many()
            .set(active)
            .filter(album::Column::AlbumId.eq(id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Removes the album with its track and store associations; tracks and stores stay
    pub async fn delete(&self, id: i32) -> Result<u64> {
        let txn = self.db.begin().await?;

        track_album::Entity::delete_many()
            .filter(track_album::Column::AlbumId.eq(id))
            .exec(&txn)
            .await?;

        album_store::Entity::delete_many()
            .filter(album_store::Column::AlbumId.eq(id))
            .exec(&txn)
            .await?;

        let result = album::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        Ok(result.rows_affected)
    }
}

async fn with_relations<C: ConnectionTrait>(
    conn: &C,
    album: album::Model,
) -> Result<AlbumWithRelations> {
    let album_tracks = album
        .find_related(track::Entity)
        .order_by_asc(track::Column::TrackId)
        .all(conn)
        .await?;

    let mut tracks = Vec::with_capacity(album_tracks.len());
    for track in album_tracks {
        tracks.push(with_artists(conn, track).await?);
    }

    let stores = album
        .find_related(store::Entity)
        .order_by_asc(store::Column::StoreId)
        .all(conn)
        .await?;

    Ok(AlbumWithRelations {
        album,
        tracks,
        stores,
    })
}
