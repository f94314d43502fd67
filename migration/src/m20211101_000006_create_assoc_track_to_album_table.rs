use sea_orm_migration::prelude::*;

use super::m20211101_000002_create_tracks_table::Tracks;
use super::m20211101_000003_create_albums_table::Albums;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AssocTrackToAlbum::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AssocTrackToAlbum::TrackId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AssocTrackToAlbum::AlbumId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(AssocTrackToAlbum::TrackId)
                            .col(AssocTrackToAlbum::AlbumId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assoc_track_to_album_track_id")
                            .from(AssocTrackToAlbum::Table, AssocTrackToAlbum::TrackId)
                            .to(Tracks::Table, Tracks::TrackId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assoc_track_to_album_album_id")
                            .from(AssocTrackToAlbum::Table, AssocTrackToAlbum::AlbumId)
                            .to(Albums::Table, Albums::AlbumId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_assoc_track_to_album_album_id")
                    .table(AssocTrackToAlbum::Table)
                    .col(AssocTrackToAlbum::AlbumId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AssocTrackToAlbum::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AssocTrackToAlbum {
    Table,
    TrackId,
    AlbumId,
}
