//! Database integration tests
//!
//! Exercises the repositories directly to ensure:
//! - Join rows always reference existing parents
//! - Deletes clear associations on every side
//! - Partial updates only touch the fields they carry

use pretty_assertions::assert_eq;
use sea_orm::{EntityTrait, Set};

use music_catalog::db::{
    entities::{album_store, artist_track, track_album},
    enums::{ArtistRole, StoreName},
    repositories::{
        AlbumChanges, AlbumRepository, ArtistChanges, ArtistRepository, StoreRepository,
        TrackChanges, TrackRepository,
    },
};
use music_catalog::test_utils::*;

#[tokio::test]
async fn test_association_requires_existing_parents() {
    let db = setup_test_db().await;

    let orphan = artist_track::ActiveModel {
        artist_id: Set(9999),
        track_id: Set(9999),
        role: Set(ArtistRole::PrimaryArtist),
    };

    // This should fail due to foreign key constraint
    let result = artist_track::Entity::insert(orphan).exec(&db).await;
    assert!(result.is_err(), "Should fail to link rows that do not exist");
}

#[tokio::test]
async fn test_track_artists_get_primary_role() {
    let db = setup_test_db().await;
    create_test_track(&db, "Cover Me In Sunshine", &["Pink"]).await;

    let links = artist_track::Entity::find().all(&db).await.unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].role, ArtistRole::PrimaryArtist);
}

#[tokio::test]
async fn test_find_or_create_store_through_albums() {
    let db = setup_test_db().await;
    let stores = StoreRepository::new(db.clone());

    assert!(stores.find_by_name(StoreName::Apple).await.unwrap().is_none());

    create_test_album(&db, "First", &[StoreName::Apple], &[]).await;
    let apple = stores
        .find_by_name(StoreName::Apple)
        .await
        .unwrap()
        .expect("apple store should exist");

    let second = create_test_album(&db, "Second", &[StoreName::Apple, StoreName::Youtube], &[]).await;
    assert_eq!(second.stores[0].store_id, apple.store_id);
    assert_eq!(stores.find_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_update_with_no_fields_is_a_no_op() {
    let db = setup_test_db().await;
    let artist = create_test_artist(&db, "Pink").await;

    let touched = ArtistRepository::new(db.clone())
        .update(artist.artist_id, ArtistChanges::default())
        .await
        .unwrap();
    assert_eq!(touched, 0);

    let touched = TrackRepository::new(db.clone())
        .update(1, TrackChanges::default())
        .await
        .unwrap();
    assert_eq!(touched, 0);
}

#[tokio::test]
async fn test_update_reports_rows_touched() {
    let db = setup_test_db().await;
    let album = create_test_album(&db, "Sample", &[], &[]).await;
    let albums = AlbumRepository::new(db.clone());

    let changes = AlbumChanges {
        upc: Some("12345".to_string()),
        ..Default::default()
    };
    assert_eq!(albums.update(album.album.album_id, changes.clone()).await.unwrap(), 1);
    assert_eq!(albums.update(album.album.album_id + 100, changes).await.unwrap(), 0);

    let reloaded = albums
        .find_by_id(album.album.album_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.album.upc.as_deref(), Some("12345"));
    assert_eq!(reloaded.album.title.as_deref(), Some("Sample"));
}

#[tokio::test]
async fn test_delete_track_clears_album_links() {
    let db = setup_test_db().await;
    let album = create_test_album(&db, "Sample", &[StoreName::Spotify], &["One", "Two"]).await;
    let tracks = TrackRepository::new(db.clone());

    let removed = tracks.delete(album.tracks[0].track.track_id).await.unwrap();
    assert_eq!(removed, 1);

    let links = track_album::Entity::find().all(&db).await.unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].track_id, album.tracks[1].track.track_id);

    let reloaded = AlbumRepository::new(db.clone())
        .find_by_id(album.album.album_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.tracks.len(), 1);
    assert_eq!(reloaded.stores.len(), 1);
}

#[tokio::test]
async fn test_delete_album_keeps_shared_store_for_other_albums() {
    let db = setup_test_db().await;
    let first = create_test_album(&db, "First", &[StoreName::Apple], &[]).await;
    let second = create_test_album(&db, "Second", &[StoreName::Apple], &[]).await;
    let albums = AlbumRepository::new(db.clone());

    assert_eq!(albums.delete(first.album.album_id).await.unwrap(), 1);
    assert_eq!(albums.delete(first.album.album_id).await.unwrap(), 0);

    let links = album_store::Entity::find().all(&db).await.unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].album_id, second.album.album_id);
}
