//! Seed command handlers

use super::check::verify_dataset;
use super::{open_store, print_rows};
use crate::config::Config;
use crate::db::Store;
use crate::seed::data::Dataset;
use crate::seed::{self, Seeder};
use anyhow::Context;

pub async fn cmd_up(config: &Config, transactional: bool, skip_check: bool) -> anyhow::Result<()> {
    let dataset = Dataset::builtin();
    if config.seed.verify_before_seed && !skip_check {
        verify_dataset(&dataset).context("Refusing to seed an inconsistent dataset")?;
    }

    let store = open_store(config).await?;
    let seeder = Seeder::new(dataset).transactional(transactional || config.seed.transactional);

    let report = seeder.up(&store.conn).await?;
    print_rows("Seeded catalogue", &report);

    Ok(())
}

pub async fn cmd_reset(
    config: &Config,
    transactional: bool,
    skip_check: bool,
) -> anyhow::Result<()> {
    let store = open_store(config).await?;
    let options = ResetOptions {
        transactional: transactional || config.seed.transactional,
        verify: config.seed.verify_before_seed && !skip_check,
    };

    reset(&store, Dataset::builtin(), options).await
}

#[derive(Debug, Clone, Copy)]
struct ResetOptions {
    transactional: bool,
    verify: bool,
}

/// The check runs before anything is deleted, so a rejected dataset leaves
/// the current catalogue in place.
async fn reset(store: &Store, dataset: Dataset<'_>, options: ResetOptions) -> anyhow::Result<()> {
    if options.verify {
        verify_dataset(&dataset).context("Refusing to reset to an inconsistent dataset")?;
    }

    let cleared = seed::down(&store.conn).await?;
    print_rows("Cleared catalogue", &cleared);
    println!();

    let report = Seeder::new(dataset)
        .transactional(options.transactional)
        .up(&store.conn)
        .await?;
    print_rows("Seeded catalogue", &report);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::CatalogTable;
    use crate::seed::SeedError;
    use crate::seed::data::{GENRES, MovieGenreSeed};

    const BROKEN: Dataset<'static> = Dataset {
        movie_genres: &[MovieGenreSeed::new(1, 999)],
        ..Dataset::builtin()
    };

    async fn spawn_seeded_store() -> Store {
        let db_path =
            std::env::temp_dir().join(format!("marquee-reset-test-{}.db", uuid::Uuid::new_v4()));
        let store = Store::new(&format!("sqlite:{}", db_path.display()))
            .await
            .expect("Failed to open store");
        seed::up(&store.conn).await.expect("seed should succeed");
        store
    }

    #[tokio::test]
    async fn reset_checks_dataset_before_clearing() {
        let store = spawn_seeded_store().await;
        let options = ResetOptions {
            transactional: false,
            verify: true,
        };

        let err = reset(&store, BROKEN, options).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SeedError>(),
            Some(SeedError::Integrity(1))
        ));

        let dataset = Dataset::builtin();
        for (table, rows) in store.table_counts().await.unwrap() {
            assert_eq!(rows, dataset.len_of(table) as u64, "row count for {table}");
        }
    }

    #[tokio::test]
    async fn reset_without_check_clears_before_seeding() {
        let store = spawn_seeded_store().await;
        let options = ResetOptions {
            transactional: false,
            verify: false,
        };

        let err = reset(&store, BROKEN, options).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SeedError>(),
            Some(SeedError::Insert {
                table: CatalogTable::MovieGenres,
                ..
            })
        ));
        assert_eq!(store.count(CatalogTable::Genres).await.unwrap(), GENRES.len() as u64);
        assert_eq!(store.count(CatalogTable::People).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn reset_restores_builtin_catalogue() {
        let store = spawn_seeded_store().await;
        let options = ResetOptions {
            transactional: true,
            verify: true,
        };

        reset(&store, Dataset::builtin(), options).await.unwrap();

        assert_eq!(store.count(CatalogTable::Genres).await.unwrap(), GENRES.len() as u64);
        assert_eq!(
            store.count(CatalogTable::Ratings).await.unwrap(),
            Dataset::builtin().len_of(CatalogTable::Ratings) as u64
        );
    }
}
