pub use sea_orm_migration::prelude::*;

mod m20211101_000001_create_artists_table;
mod m20211101_000002_create_tracks_table;
mod m20211101_000003_create_albums_table;
mod m20211101_000004_create_stores_table;
mod m20211101_000005_create_assoc_artist_to_track_table;
mod m20211101_000006_create_assoc_track_to_album_table;
mod m20211101_000007_create_assoc_album_to_stores_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20211101_000001_create_artists_table::Migration),
            Box::new(m20211101_000002_create_tracks_table::Migration),
            Box::new(m20211101_000003_create_albums_table::Migration),
            Box::new(m20211101_000004_create_stores_table::Migration),
            Box::new(m20211101_000005_create_assoc_artist_to_track_table::Migration),
            Box::new(m20211101_000006_create_assoc_track_to_album_table::Migration),
            Box::new(m20211101_000007_create_assoc_album_to_stores_table::Migration),
        ]
    }
}
