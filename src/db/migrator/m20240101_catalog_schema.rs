use crate::entities::prelude::*;
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{EntityTrait, Schema};

#[derive(DeriveMigrationName)]
pub struct Migration;

async fn create_from_entity<E>(
    manager: &SchemaManager<'_>,
    schema: &Schema,
    entity: E,
) -> Result<(), DbErr>
where
    E: EntityTrait,
{
    manager
        .create_table(
            schema
                .create_table_from_entity(entity)
                .if_not_exists()
                .to_owned(),
        )
        .await
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();
        let schema = Schema::new(backend);

        // Parents before children so foreign keys resolve on every backend.
        create_from_entity(manager, &schema, Genres).await?;
        create_from_entity(manager, &schema, Movies).await?;
        create_from_entity(manager, &schema, MovieGenres).await?;
        create_from_entity(manager, &schema, Seasons).await?;
        create_from_entity(manager, &schema, Episodes).await?;
        create_from_entity(manager, &schema, People).await?;
        create_from_entity(manager, &schema, MovieActors).await?;
        create_from_entity(manager, &schema, MovieCrews).await?;
        create_from_entity(manager, &schema, Ratings).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ratings).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MovieCrews).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MovieActors).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(People).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Episodes).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Seasons).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MovieGenres).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Movies).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Genres).to_owned())
            .await?;

        Ok(())
    }
}
