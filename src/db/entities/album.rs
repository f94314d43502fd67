use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "albums")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub album_id: i32,
    pub title: Option<String>,
    pub upc: Option<String>,
    pub artwork_file: Option<String>,
    pub release_date: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::track_album::Entity")]
    TrackAlbum,
    #[sea_orm(has_many = "super::album_store::Entity")]
    AlbumStore,
}

impl Related<super::track::Entity> for Entity {
    fn to() -> RelationDef {
        super::track_album::Relation::Track.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::track_album::Relation::Album.def().rev())
    }
}

impl Related<super::store::Entity> for Entity {
    fn to() -> RelationDef {
        super::album_store::Relation::Store.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::album_store::Relation::Album.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
