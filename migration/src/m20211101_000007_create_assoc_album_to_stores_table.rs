use sea_orm_migration::prelude::*;

use super::m20211101_000003_create_albums_table::Albums;
use super::m20211101_000004_create_stores_table::Stores;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AssocAlbumToStores::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AssocAlbumToStores::AlbumId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AssocAlbumToStores::StoreId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(AssocAlbumToStores::AlbumId)
                            .col(AssocAlbumToStores::StoreId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assoc_album_to_stores_album_id")
                            .from(AssocAlbumToStores::Table, AssocAlbumToStores::AlbumId)
                            .to(Albums::Table, Albums::AlbumId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assoc_album_to_stores_store_id")
                            .from(AssocAlbumToStores::Table, AssocAlbumToStores::StoreId)
                            .to(Stores::Table, Stores::StoreId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AssocAlbumToStores::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AssocAlbumToStores {
    Table,
    AlbumId,
    StoreId,
}
