//! Test utilities for Music Catalog
//!
//! Provides helpers for creating isolated test environments with:
//! - In-memory SQLite databases (one per test)
//! - AppState factories
//! - Test data generators

use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use migration::MigratorTrait;

use crate::{
    config::Config,
    db::{
        entities::artist,
        enums::StoreName,
        repositories::{
            AlbumRepository, AlbumWithRelations, ArtistRepository, NewAlbum, NewArtist, NewTrack,
            TrackRepository, TrackWithArtists,
        },
    },
    state::AppState,
};

/// Setup an in-memory SQLite database with all migrations applied
///
/// Each call creates a fresh, isolated database. The pool is pinned to one
/// connection because every SQLite in-memory connection is its own database.
pub async fn setup_test_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("Failed to create in-memory database");

    // Run all migrations
    migration::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Create a test configuration with sensible defaults
pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        server_host: "127.0.0.1".to_string(),
        server_port: 5000,
        log_format: None,
    }
}

/// Create a complete test AppState with an isolated database
pub async fn setup_test_app_state() -> AppState {
    let db = setup_test_db().await;
    AppState::new(db, test_config())
}

// ============================================================================
// Test Data Factories
// ============================================================================

/// Create a test artist in the database
pub async fn create_test_artist(db: &DatabaseConnection, name: &str) -> artist::Model {
    ArtistRepository::new(db.clone())
        .create(NewArtist {
            name: Some(name.to_string()),
        })
        .await
        .expect("Failed to insert test artist")
}

/// Build a track definition credited to the given artists
pub fn new_test_track(title: &str, artist_names: &[&str]) -> NewTrack {
    NewTrack {
        title: Some(title.to_string()),
        version: Some("Studio Edit".to_string()),
        explicit: false,
        isrc: Some("TEST000000001".to_string()),
        audio_file: Some("https://cdn.example.com/test.wav".to_string()),
        artists: artist_names
            .iter()
            .map(|name| NewArtist {
                name: Some(name.to_string()),
            })
            .collect(),
    }
}

/// Create a test track (and its artists) in the database
pub async fn create_test_track(
    db: &DatabaseConnection,
    title: &str,
    artist_names: &[&str],
) -> TrackWithArtists {
    TrackRepository::new(db.clone())
        .create(new_test_track(title, artist_names))
        .await
        .expect("Failed to insert test track")
}

/// Create a test album with the given stores and freshly created tracks
pub async fn create_test_album(
    db: &DatabaseConnection,
    title: &str,
    stores: &[StoreName],
    track_titles: &[&str],
) -> AlbumWithRelations {
    let album = NewAlbum {
        title: Some(title.to_string()),
        upc: Some("00000000000111".to_string()),
        artwork_file: Some("https://cdn.example.com/test.jpg".to_string()),
        release_date: chrono::NaiveDate::from_ymd_opt(2021, 1, 1),
        stores: stores.to_vec(),
        tracks: track_titles
            .iter()
            .map(|title| new_test_track(title, &["Pink"]))
            .collect(),
    };

    AlbumRepository::new(db.clone())
        .create(album)
        .await
        .expect("Failed to insert test album")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_setup_test_db() {
        let db = setup_test_db().await;
        // Verify we can query the database (it has tables from migrations)
        use sea_orm::EntityTrait;
        let artists = artist::Entity::find().all(&db).await.unwrap();
        assert_eq!(artists.len(), 0);
    }

    #[tokio::test]
    async fn test_create_test_track() {
        let db = setup_test_db().await;
        let track = create_test_track(&db, "Cover Me In Sunshine", &["Pink", "Willow"]).await;

        assert_eq!(track.track.title.as_deref(), Some("Cover Me In Sunshine"));
        assert_eq!(track.artists.len(), 2);
        assert_eq!(track.artists[0].name.as_deref(), Some("Pink"));
    }

    #[tokio::test]
    async fn test_parallel_databases() {
        // Run two database setups in parallel - they should not interfere
        let (db1, db2) = tokio::join!(setup_test_db(), setup_test_db());

        let artist1 = create_test_artist(&db1, "Artist 1").await;
        let artist2 = create_test_artist(&db2, "Artist 2").await;

        // Both should be ID 1 (separate databases)
        assert_eq!(artist1.artist_id, 1);
        assert_eq!(artist2.artist_id, 1);

        use sea_orm::EntityTrait;
        let db1_artists = artist::Entity::find().all(&db1).await.unwrap();
        let db2_artists = artist::Entity::find().all(&db2).await.unwrap();

        assert_eq!(db1_artists.len(), 1);
        assert_eq!(db2_artists.len(), 1);
        assert_eq!(db1_artists[0].name.as_deref(), Some("Artist 1"));
        assert_eq!(db2_artists[0].name.as_deref(), Some("Artist 2"));
    }
}
