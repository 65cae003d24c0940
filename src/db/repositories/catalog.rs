use crate::entities::prelude::*;
use crate::models::catalog::CatalogTable;
use anyhow::Result;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};

/// Read-side queries over the catalogue tables.
pub struct CatalogRepository {
    conn: DatabaseConnection,
}

impl CatalogRepository {
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn count(&self, table: CatalogTable) -> Result<u64> {
        let count = match table {
            CatalogTable::Genres => Genres::find().count(&self.conn).await?,
            CatalogTable::Movies => Movies::find().count(&self.conn).await?,
            CatalogTable::MovieGenres => MovieGenres::find().count(&self.conn).await?,
            CatalogTable::Seasons => Seasons::find().count(&self.conn).await?,
            CatalogTable::Episodes => Episodes::find().count(&self.conn).await?,
            CatalogTable::People => People::find().count(&self.conn).await?,
            CatalogTable::MovieActors => MovieActors::find().count(&self.conn).await?,
            CatalogTable::MovieCrews => MovieCrews::find().count(&self.conn).await?,
            CatalogTable::Ratings => Ratings::find().count(&self.conn).await?,
        };

        Ok(count)
    }

    pub async fn counts(&self) -> Result<Vec<(CatalogTable, u64)>> {
        let mut counts = Vec::with_capacity(CatalogTable::INSERT_ORDER.len());
        for table in CatalogTable::INSERT_ORDER {
            counts.push((table, self.count(table).await?));
        }
        Ok(counts)
    }
}
