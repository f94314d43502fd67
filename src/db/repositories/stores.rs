use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::db::{entities::store, enums::StoreName};
use crate::error::Result;

pub struct StoreRepository {
    db: DatabaseConnection,
}

impl StoreRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> Result<Vec<store::Model>> {
        Ok(store::Entity::find()
            .order_by_asc(store::Column::StoreId)
            .all(&self.db)
            .await?)
    }

    pub async fn find_by_name(&self, name: StoreName) -> Result<Option<store::Model>> {
        find_by_name(&self.db, name).await
    }
}

async fn find_by_name<C: ConnectionTrait>(conn: &C, name: StoreName) -> Result<Option<store::Model>> {
    Ok(store::Entity::find()
        .filter(store::Column::Name.eq(name))
        .one(conn)
        .await?)
}

/// Stores are shared between albums, so an existing row wins over a new one
pub(crate) async fn find_or_create<C: ConnectionTrait>(
    conn: &C,
    name: StoreName,
) -> Result<store::Model> {
    if let Some(existing) = find_by_name(conn, name).await? {
        return Ok(existing);
    }

    let active = store::ActiveModel {
        name: Set(name),
        ..Default::default()
    };

    tracing::debug!("Creating store {}", name.as_str());
    Ok(active.insert(conn).await?)
}
