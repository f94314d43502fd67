use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tracks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tracks::TrackId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tracks::Title).string_len(128))
                    .col(ColumnDef::new(Tracks::Version).string_len(128))
                    .col(ColumnDef::new(Tracks::Explicit).boolean())
                    .col(ColumnDef::new(Tracks::Isrc).string_len(128))
                    .col(ColumnDef::new(Tracks::AudioFile).string_len(1024))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tracks_isrc")
                    .table(Tracks::Table)
                    .col(Tracks::Isrc)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tracks::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Tracks {
    Table,
    TrackId,
    Title,
    Version,
    Explicit,
    Isrc,
    AudioFile,
}
