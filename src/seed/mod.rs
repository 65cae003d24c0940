//! Loading and clearing the demo catalogue.
//!
//! [`up`] writes the embedded [`Dataset`] table by table in foreign-key order,
//! one bulk insert per table, each awaited before the next. The first failing
//! statement aborts the run. [`down`] removes the content again.
//!
//! Both accept any sea-orm connection, so they run equally against a pooled
//! [`sea_orm::DatabaseConnection`] or inside an open transaction.

pub mod data;
pub mod integrity;

use crate::entities::{
    episodes, genres, movie_actors, movie_crews, movie_genres, movies, people, prelude::*,
    ratings, seasons,
};
use crate::models::catalog::CatalogTable;
use data::{
    Dataset, EpisodeSeed, GenreSeed, MovieActorSeed, MovieCrewSeed, MovieGenreSeed, MovieSeed,
    PersonSeed, RatingSeed, SeasonSeed,
};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel, Set,
    TransactionTrait,
};
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Seeding failed. Carries the stage that failed where there is one.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to insert into {table}: {source}")]
    Insert { table: CatalogTable, source: DbErr },

    #[error("Failed to clear {table}: {source}")]
    Delete { table: CatalogTable, source: DbErr },

    #[error("Seed transaction failed: {0}")]
    Transaction(#[source] DbErr),

    #[error("Dataset has {0} integrity violation(s)")]
    Integrity(usize),
}

impl SeedError {
    /// The table whose statement failed, if the failure was tied to one.
    #[must_use]
    pub const fn table(&self) -> Option<CatalogTable> {
        match self {
            Self::Insert { table, .. } | Self::Delete { table, .. } => Some(*table),
            Self::Transaction(_) | Self::Integrity(_) => None,
        }
    }
}

/// Rows written or removed per table, in the order the statements ran.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowReport {
    pub rows: Vec<(CatalogTable, u64)>,
}

impl RowReport {
    fn push(&mut self, table: CatalogTable, rows: u64) {
        self.rows.push((table, rows));
    }

    #[must_use]
    pub fn rows_for(&self, table: CatalogTable) -> Option<u64> {
        self.rows
            .iter()
            .find(|(t, _)| *t == table)
            .map(|(_, rows)| *rows)
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.rows.iter().map(|(_, rows)| rows).sum()
    }
}

/// Writes the embedded catalogue. Stages that finished before a failure keep
/// their rows.
pub async fn up<C>(db: &C) -> Result<RowReport, SeedError>
where
    C: ConnectionTrait,
{
    log_outcome(Seeder::new(Dataset::builtin()).insert_all(db).await)
}

fn log_outcome(result: Result<RowReport, SeedError>) -> Result<RowReport, SeedError> {
    match result {
        Ok(report) => {
            info!(rows = report.total(), "Catalogue seeded");
            Ok(report)
        }
        Err(err) => {
            error!(error = %err, "Seeding catalogue failed");
            Err(err)
        }
    }
}

/// Deletes every row from the primary catalogue tables, children first.
///
/// Join tables and ratings are not named here; their foreign keys cascade, so
/// they are emptied together with the seasons, movies, genres and people they
/// point at.
pub async fn down<C>(db: &C) -> Result<RowReport, SeedError>
where
    C: ConnectionTrait,
{
    let mut report = RowReport::default();

    for table in CatalogTable::TEARDOWN_ORDER {
        let result = match table {
            CatalogTable::Episodes => Episodes::delete_many().exec(db).await,
            CatalogTable::Seasons => Seasons::delete_many().exec(db).await,
            CatalogTable::Movies => Movies::delete_many().exec(db).await,
            CatalogTable::Genres => Genres::delete_many().exec(db).await,
            CatalogTable::People => People::delete_many().exec(db).await,
            other => {
                debug!(table = %other, "Not cleared directly");
                continue;
            }
        };

        let deleted = result
            .map_err(|source| {
                let err = SeedError::Delete { table, source };
                error!(error = %err, "Catalogue teardown failed");
                err
            })?
            .rows_affected;

        debug!(table = %table, rows = deleted, "Cleared table");
        report.push(table, deleted);
    }

    info!(rows = report.total(), "Catalogue cleared");
    Ok(report)
}

/// Configurable seed run over an arbitrary [`Dataset`].
#[derive(Debug, Clone, Copy)]
pub struct Seeder<'a> {
    dataset: Dataset<'a>,
    transactional: bool,
}

impl<'a> Seeder<'a> {
    #[must_use]
    pub const fn new(dataset: Dataset<'a>) -> Self {
        Self {
            dataset,
            transactional: false,
        }
    }

    /// Wrap the whole run in one transaction so a failure leaves nothing behind.
    /// Off by default: rows from stages that completed before a failure stay.
    #[must_use]
    pub const fn transactional(mut self, enabled: bool) -> Self {
        self.transactional = enabled;
        self
    }

    pub async fn up<C>(&self, db: &C) -> Result<RowReport, SeedError>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        let result = if self.transactional {
            self.up_in_transaction(db).await
        } else {
            self.insert_all(db).await
        };

        log_outcome(result)
    }

    async fn up_in_transaction<C>(&self, db: &C) -> Result<RowReport, SeedError>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        let txn = db.begin().await.map_err(SeedError::Transaction)?;

        match self.insert_all(&txn).await {
            Ok(report) => {
                txn.commit().await.map_err(SeedError::Transaction)?;
                Ok(report)
            }
            Err(err) => {
                // Keep the insert error; a rollback failure is only logged.
                match txn.rollback().await {
                    Ok(()) => warn!(table = ?err.table(), "Seed transaction rolled back"),
                    Err(rollback) => {
                        error!(error = %rollback, cause = %err, "Seed transaction rollback failed");
                    }
                }
                Err(err)
            }
        }
    }

    async fn insert_all<C>(&self, db: &C) -> Result<RowReport, SeedError>
    where
        C: ConnectionTrait,
    {
        let now = chrono::Utc::now().to_rfc3339();
        let d = &self.dataset;
        let mut report = RowReport::default();

        let rows = insert_stage(
            db,
            CatalogTable::Genres,
            d.genres.iter().map(|g| genre_model(g, &now)).collect(),
        )
        .await?;
        report.push(CatalogTable::Genres, rows);

        let rows = insert_stage(
            db,
            CatalogTable::Movies,
            d.movies.iter().map(|m| movie_model(m, &now)).collect(),
        )
        .await?;
        report.push(CatalogTable::Movies, rows);

        let rows = insert_stage(
            db,
            CatalogTable::MovieGenres,
            d.movie_genres.iter().map(movie_genre_model).collect(),
        )
        .await?;
        report.push(CatalogTable::MovieGenres, rows);

        let rows = insert_stage(
            db,
            CatalogTable::Seasons,
            d.seasons.iter().map(|s| season_model(s, &now)).collect(),
        )
        .await?;
        report.push(CatalogTable::Seasons, rows);

        let rows = insert_stage(
            db,
            CatalogTable::Episodes,
            d.episodes.iter().map(|e| episode_model(e, &now)).collect(),
        )
        .await?;
        report.push(CatalogTable::Episodes, rows);

        let rows = insert_stage(
            db,
            CatalogTable::People,
            d.people.iter().map(|p| person_model(p, &now)).collect(),
        )
        .await?;
        report.push(CatalogTable::People, rows);

        let rows = insert_stage(
            db,
            CatalogTable::MovieActors,
            d.movie_actors
                .iter()
                .map(|a| movie_actor_model(a, &now))
                .collect(),
        )
        .await?;
        report.push(CatalogTable::MovieActors, rows);

        let rows = insert_stage(
            db,
            CatalogTable::MovieCrews,
            d.movie_crews
                .iter()
                .map(|c| movie_crew_model(c, &now))
                .collect(),
        )
        .await?;
        report.push(CatalogTable::MovieCrews, rows);

        let rows = insert_stage(
            db,
            CatalogTable::Ratings,
            d.ratings.iter().map(|r| rating_model(r, &now)).collect(),
        )
        .await?;
        report.push(CatalogTable::Ratings, rows);

        Ok(report)
    }
}

/// One bulk insert. Empty input is skipped since an `INSERT` needs at least one row.
async fn insert_stage<C, A>(db: &C, table: CatalogTable, models: Vec<A>) -> Result<u64, SeedError>
where
    C: ConnectionTrait,
    A: ActiveModelTrait + Send,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
{
    if models.is_empty() {
        debug!(table = %table, "Nothing to insert");
        return Ok(0);
    }

    let rows = <A::Entity as EntityTrait>::insert_many(models)
        .exec_without_returning(db)
        .await
        .map_err(|source| SeedError::Insert { table, source })?;

    info!(table = %table, rows, "Inserted rows");
    Ok(rows)
}

// ============================================================================
// Model Conversion Helpers
// ============================================================================

fn genre_model(seed: &GenreSeed, now: &str) -> genres::ActiveModel {
    genres::ActiveModel {
        id: Set(seed.id),
        name: Set(seed.name.to_string()),
        created_at: Set(now.to_string()),
        updated_at: Set(now.to_string()),
    }
}

fn movie_model(seed: &MovieSeed, now: &str) -> movies::ActiveModel {
    movies::ActiveModel {
        id: Set(seed.id),
        title: Set(seed.title.to_string()),
        kind: Set(seed.kind.as_str().to_string()),
        created_at: Set(now.to_string()),
        updated_at: Set(now.to_string()),
    }
}

fn movie_genre_model(seed: &MovieGenreSeed) -> movie_genres::ActiveModel {
    movie_genres::ActiveModel {
        genre_id: Set(seed.genre_id),
        movie_id: Set(seed.movie_id),
    }
}

fn season_model(seed: &SeasonSeed, now: &str) -> seasons::ActiveModel {
    seasons::ActiveModel {
        id: Set(seed.id),
        season_number: Set(seed.season_number),
        title: Set(seed.title.to_string()),
        overview: Set(Some(seed.overview.to_string())),
        release_date: Set(Some(seed.release_date.to_string())),
        poster_url: Set(Some(seed.poster_url())),
        backdrop_url: Set(Some(seed.backdrop_url())),
        trailer_url: Set(Some(seed.trailer_url())),
        status: Set(seed.status.as_str().to_string()),
        runtime: Set(seed.runtime),
        movie_id: Set(seed.movie_id),
        created_at: Set(now.to_string()),
        updated_at: Set(now.to_string()),
    }
}

fn episode_model(seed: &EpisodeSeed, now: &str) -> episodes::ActiveModel {
    episodes::ActiveModel {
        id: Set(seed.id),
        episode_number: Set(seed.episode_number),
        title: Set(seed.title.to_string()),
        overview: Set(seed.overview.map(str::to_string)),
        runtime: Set(seed.runtime),
        video_url: Set(Some(seed.video_url())),
        release_date: Set(Some(seed.release_date.to_string())),
        season_id: Set(seed.season_id),
        created_at: Set(now.to_string()),
        updated_at: Set(now.to_string()),
    }
}

fn person_model(seed: &PersonSeed, now: &str) -> people::ActiveModel {
    people::ActiveModel {
        id: Set(seed.id),
        name: Set(seed.name.to_string()),
        birthday: Set(Some(seed.birthday.to_string())),
        gender: Set(seed.gender.as_str().to_string()),
        biography: Set(Some(seed.biography.to_string())),
        profile_url: Set(Some(seed.profile_url())),
        created_at: Set(now.to_string()),
        updated_at: Set(now.to_string()),
    }
}

fn movie_actor_model(seed: &MovieActorSeed, now: &str) -> movie_actors::ActiveModel {
    movie_actors::ActiveModel {
        id: Set(seed.id),
        season_id: Set(seed.season_id),
        people_id: Set(seed.people_id),
        role: Set(seed.role.to_string()),
        created_at: Set(now.to_string()),
        updated_at: Set(now.to_string()),
    }
}

fn movie_crew_model(seed: &MovieCrewSeed, now: &str) -> movie_crews::ActiveModel {
    movie_crews::ActiveModel {
        id: Set(seed.id),
        season_id: Set(seed.season_id),
        people_id: Set(seed.people_id),
        job: Set(seed.job.to_string()),
        created_at: Set(now.to_string()),
        updated_at: Set(now.to_string()),
    }
}

fn rating_model(seed: &RatingSeed, now: &str) -> ratings::ActiveModel {
    ratings::ActiveModel {
        id: Set(seed.id),
        rating: Set(seed.rating),
        user_id: Set(seed.user_id),
        season_id: Set(seed.season_id),
        created_at: Set(now.to_string()),
        updated_at: Set(now.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ActiveValue;

    #[test]
    fn season_model_fills_derived_urls() {
        let seed = &data::SEASONS[0];
        let model = season_model(seed, "2024-01-01T00:00:00+00:00");

        assert_eq!(model.id, ActiveValue::Set(1));
        assert_eq!(model.status, ActiveValue::Set("completed".to_string()));
        assert_eq!(
            model.poster_url,
            ActiveValue::Set(Some(
                "https://media.marquee.example/posters/harry-potter-1.jpg".to_string()
            ))
        );
        assert_eq!(
            model.created_at,
            ActiveValue::Set("2024-01-01T00:00:00+00:00".to_string())
        );
    }

    #[test]
    fn movie_model_stores_kind_string() {
        let model = movie_model(&data::MOVIES[4], "now");
        assert_eq!(model.kind, ActiveValue::Set("series".to_string()));
    }

    #[test]
    fn report_totals_rows() {
        let mut report = RowReport::default();
        report.push(CatalogTable::Genres, 12);
        report.push(CatalogTable::Movies, 10);

        assert_eq!(report.total(), 22);
        assert_eq!(report.rows_for(CatalogTable::Movies), Some(10));
        assert_eq!(report.rows_for(CatalogTable::Ratings), None);
    }

    #[test]
    fn seed_error_names_failed_table() {
        let err = SeedError::Insert {
            table: CatalogTable::MovieGenres,
            source: DbErr::Custom("FOREIGN KEY constraint failed".to_string()),
        };
        assert_eq!(err.table(), Some(CatalogTable::MovieGenres));
        assert_eq!(
            err.to_string(),
            "Failed to insert into movie_genres: Custom Error: FOREIGN KEY constraint failed"
        );
        assert_eq!(SeedError::Integrity(3).table(), None);
    }
}
