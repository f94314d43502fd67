use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use crate::db::entities::{artist, artist_track};
use crate::error::Result;

#[derive(Debug, Clone, Default)]
pub struct NewArtist {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ArtistChanges {
    pub name: Option<String>,
}

pub struct ArtistRepository {
    db: DatabaseConnection,
}

impl ArtistRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> Result<Vec<artist::Model>> {
        Ok(artist::Entity::find()
            .order_by_desc(artist::Column::ArtistId)
            .all(&self.db)
            .await?)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<artist::Model>> {
        Ok(artist::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn create(&self, artist: NewArtist) -> Result<artist::Model> {
        insert_artist(&self.db, artist).await
    }

    /// Applies the present fields to the artist; returns the number of rows touched
    pub async fn update(&self, id: i32, changes: ArtistChanges) -> Result<u64> {
        let mut active = artist::ActiveModel {
            ..Default::default()
        };
        if let Some(name) = changes.name {
            active.name = Set(Some(name));
        }

        if !active.is_changed() {
            return Ok(0);
        }

        let result = artist::Entity::update_many()
            .set(active)
            .filter(artist::Column::ArtistId.eq(id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Removes the artist and its track associations, leaving the tracks in place
    pub async fn delete(&self, id: i32) -> Result<u64> {
        let txn = self.db.begin().await?;

        artist_track::Entity::delete_many()
            .filter(artist_track::Column::ArtistId.eq(id))
            .exec(&txn)
            .await?;

        let result = artist::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        Ok(result.rows_affected)
    }
}

pub(crate) async fn insert_artist<C: ConnectionTrait>(
    conn: &C,
    artist: NewArtist,
) -> Result<artist::Model> {
    let active = artist::ActiveModel {
        name: Set(artist.name),
        ..Default::default()
    };

    Ok(active.insert(conn).await?)
}
