use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tracks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub track_id: i32,
    pub title: Option<String>,
    pub version: Option<String>,
    pub explicit: Option<bool>,
    pub isrc: Option<String>,
    pub audio_file: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::artist_track::Entity")]
    ArtistTrack,
    #[sea_orm(has_many = "super::track_album::Entity")]
    TrackAlbum,
}

impl Related<super::artist::Entity> for Entity {
    fn to() -> RelationDef {
        super::artist_track::Relation::Artist.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::artist_track::Relation::Track.def().rev())
    }
}

impl Related<super::album::Entity> for Entity {
    fn to() -> RelationDef {
        super::track_album::Relation::Album.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::track_album::Relation::Track.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
