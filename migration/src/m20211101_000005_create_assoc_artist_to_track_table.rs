use sea_orm_migration::prelude::*;

use super::m20211101_000001_create_artists_table::Artists;
use super::m20211101_000002_create_tracks_table::Tracks;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AssocArtistToTrack::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AssocArtistToTrack::ArtistId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AssocArtistToTrack::TrackId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AssocArtistToTrack::Role)
                            .string_len(20)
                            .not_null()
                            .default("primary_artist"),
                    )
                    .primary_key(
                        Index::create()
                            .col(AssocArtistToTrack::ArtistId)
                            .col(AssocArtistToTrack::TrackId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assoc_artist_to_track_artist_id")
                            .from(AssocArtistToTrack::Table, AssocArtistToTrack::ArtistId)
                            .to(Artists::Table, Artists::ArtistId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assoc_artist_to_track_track_id")
                            .from(AssocArtistToTrack::Table, AssocArtistToTrack::TrackId)
                            .to(Tracks::Table, Tracks::TrackId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_assoc_artist_to_track_track_id")
                    .table(AssocArtistToTrack::Table)
                    .col(AssocArtistToTrack::TrackId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AssocArtistToTrack::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AssocArtistToTrack {
    Table,
    ArtistId,
    TrackId,
    Role,
}
