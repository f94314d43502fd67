use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::db::enums::StoreName;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "stores")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub store_id: i32,
    #[sea_orm(unique)]
    pub name: StoreName,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::album_store::Entity")]
    AlbumStore,
}

impl Related<super::album::Entity> for Entity {
    fn to() -> RelationDef {
        super::album_store::Relation::Album.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::album_store::Relation::Store.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
