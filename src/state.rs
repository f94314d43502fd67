use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::config::Config;
use crate::db::repositories::{AlbumRepository, ArtistRepository, StoreRepository, TrackRepository};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }

    pub fn artists(&self) -> ArtistRepository {
        ArtistRepository::new(self.db.clone())
    }

    pub fn tracks(&self) -> TrackRepository {
        TrackRepository::new(self.db.clone())
    }

    pub fn albums(&self) -> AlbumRepository {
        AlbumRepository::new(self.db.clone())
    }

    pub fn stores(&self) -> StoreRepository {
        StoreRepository::new(self.db.clone())
    }
}
