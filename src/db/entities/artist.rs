use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "artists")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub artist_id: i32,
    pub name: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::artist_track::Entity")]
    ArtistTrack,
}

impl Related<super::track::Entity> for Entity {
    fn to() -> RelationDef {
        super::artist_track::Relation::Track.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::artist_track::Relation::Artist.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
