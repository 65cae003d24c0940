//! Integration tests for the catalogue seed loader and teardown.
//!
//! Every test runs against its own temporary SQLite file with the schema
//! migrations applied.

use marquee::db::Store;
use marquee::entities::{genres, movie_genres, movies, people, prelude::*};
use marquee::models::catalog::CatalogTable;
use marquee::seed::data::{Dataset, GENRES, GenreSeed, MovieKind};
use marquee::seed::{self, SeedError, Seeder, integrity};
use sea_orm::{ColumnTrait, EntityTrait, ModelTrait, QueryFilter, Set, TransactionTrait};

async fn spawn_store() -> Store {
    let db_path =
        std::env::temp_dir().join(format!("marquee-seed-test-{}.db", uuid::Uuid::new_v4()));

    Store::new(&format!("sqlite:{}", db_path.display()))
        .await
        .expect("Failed to open store")
}

async fn assert_counts_match_dataset(store: &Store) {
    let dataset = Dataset::builtin();
    for (table, rows) in store.table_counts().await.expect("Failed to count rows") {
        assert_eq!(rows, dataset.len_of(table) as u64, "row count for {table}");
    }
}

fn conflicting_person() -> people::ActiveModel {
    people::ActiveModel {
        id: Set(1),
        name: Set("Placeholder".to_string()),
        birthday: Set(None),
        gender: Set("female".to_string()),
        biography: Set(None),
        profile_url: Set(None),
        created_at: Set("2024-01-01T00:00:00+00:00".to_string()),
        updated_at: Set("2024-01-01T00:00:00+00:00".to_string()),
    }
}

#[tokio::test]
async fn up_populates_every_table() {
    let store = spawn_store().await;

    let report = seed::up(&store.conn).await.expect("seed should succeed");

    let dataset = Dataset::builtin();
    let order: Vec<CatalogTable> = report.rows.iter().map(|(table, _)| *table).collect();
    assert_eq!(order, CatalogTable::INSERT_ORDER.to_vec());
    for (table, rows) in &report.rows {
        assert_eq!(*rows, dataset.len_of(*table) as u64, "reported rows for {table}");
    }

    assert_counts_match_dataset(&store).await;
}

#[tokio::test]
async fn second_up_fails_on_duplicate_primary_key() {
    let store = spawn_store().await;
    seed::up(&store.conn).await.expect("first seed should succeed");

    let err = seed::up(&store.conn)
        .await
        .expect_err("second seed must not overwrite existing rows");

    assert!(
        matches!(
            err,
            SeedError::Insert {
                table: CatalogTable::Genres,
                ..
            }
        ),
        "unexpected error: {err}"
    );
    assert_counts_match_dataset(&store).await;
}

#[tokio::test]
async fn down_then_up_restores_row_counts() {
    let store = spawn_store().await;
    seed::up(&store.conn).await.unwrap();

    let cleared = seed::down(&store.conn).await.unwrap();
    assert_eq!(
        cleared.rows_for(CatalogTable::Episodes),
        Some(Dataset::builtin().episodes.len() as u64)
    );

    seed::up(&store.conn).await.expect("reseed after down");
    assert_counts_match_dataset(&store).await;
}

#[tokio::test]
async fn down_clears_join_tables_through_cascade() {
    let store = spawn_store().await;
    seed::up(&store.conn).await.unwrap();

    let cleared = seed::down(&store.conn).await.unwrap();
    assert_eq!(cleared.rows.len(), CatalogTable::TEARDOWN_ORDER.len());
    assert_eq!(cleared.rows_for(CatalogTable::MovieGenres), None);

    for (table, rows) in store.table_counts().await.unwrap() {
        assert_eq!(rows, 0, "{table} should be empty after teardown");
    }
}

#[tokio::test]
async fn down_on_empty_store_succeeds() {
    let store = spawn_store().await;

    let cleared = seed::down(&store.conn).await.unwrap();
    assert_eq!(cleared.total(), 0);
}

#[tokio::test]
async fn genre_one_is_action() {
    let store = spawn_store().await;
    seed::up(&store.conn).await.unwrap();

    let rows = Genres::find()
        .filter(genres::Column::Name.eq("Action"))
        .all(&store.conn)
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, 1);
    assert_eq!(rows[0].name, GENRES[0].name);
}

#[tokio::test]
async fn seeded_relations_resolve() {
    let store = spawn_store().await;
    seed::up(&store.conn).await.unwrap();

    let movie = Movies::find_by_id(1)
        .one(&store.conn)
        .await
        .unwrap()
        .expect("movie 1 exists");
    assert_eq!(movie.title, "Harry Potter and the Sorcerer's Stone");
    assert_eq!(movie.kind, MovieKind::Movie.as_str());

    let genres = movie.find_related(Genres).all(&store.conn).await.unwrap();
    let mut names: Vec<String> = genres.into_iter().map(|g| g.name).collect();
    names.sort();
    assert_eq!(names, vec!["Adventure", "Family", "Fantasy"]);

    let series = Movies::find()
        .filter(movies::Column::Kind.eq(MovieKind::Series.as_str()))
        .all(&store.conn)
        .await
        .unwrap();
    assert_eq!(series.len(), 3);
}

#[tokio::test]
async fn movie_genre_requires_both_parents() {
    let store = spawn_store().await;
    let link = || movie_genres::ActiveModel {
        genre_id: Set(1),
        movie_id: Set(1),
    };

    let orphan = MovieGenres::insert(link())
        .exec_without_returning(&store.conn)
        .await;
    assert!(orphan.is_err(), "link without parents must be rejected");

    Genres::insert(genres::ActiveModel {
        id: Set(1),
        name: Set("Action".to_string()),
        created_at: Set("2024-01-01T00:00:00+00:00".to_string()),
        updated_at: Set("2024-01-01T00:00:00+00:00".to_string()),
    })
    .exec_without_returning(&store.conn)
    .await
    .unwrap();

    let half = MovieGenres::insert(link())
        .exec_without_returning(&store.conn)
        .await;
    assert!(half.is_err(), "link without movie must be rejected");

    Movies::insert(movies::ActiveModel {
        id: Set(1),
        title: Set("Harry Potter and the Sorcerer's Stone".to_string()),
        kind: Set(MovieKind::Movie.as_str().to_string()),
        created_at: Set("2024-01-01T00:00:00+00:00".to_string()),
        updated_at: Set("2024-01-01T00:00:00+00:00".to_string()),
    })
    .exec_without_returning(&store.conn)
    .await
    .unwrap();

    let rows = MovieGenres::insert(link())
        .exec_without_returning(&store.conn)
        .await
        .expect("link with both parents");
    assert_eq!(rows, 1);
}

#[tokio::test]
async fn default_run_keeps_stages_before_failure() {
    let store = spawn_store().await;
    People::insert(conflicting_person())
        .exec_without_returning(&store.conn)
        .await
        .unwrap();

    let err = Seeder::new(Dataset::builtin())
        .up(&store.conn)
        .await
        .expect_err("people stage must fail");
    assert_eq!(err.table(), Some(CatalogTable::People));

    let dataset = Dataset::builtin();
    assert_eq!(
        store.count(CatalogTable::Genres).await.unwrap(),
        dataset.genres.len() as u64
    );
    assert_eq!(
        store.count(CatalogTable::Episodes).await.unwrap(),
        dataset.episodes.len() as u64
    );
    assert_eq!(store.count(CatalogTable::People).await.unwrap(), 1);
    assert_eq!(store.count(CatalogTable::MovieActors).await.unwrap(), 0);
}

#[tokio::test]
async fn transactional_run_rolls_back_on_failure() {
    let store = spawn_store().await;
    People::insert(conflicting_person())
        .exec_without_returning(&store.conn)
        .await
        .unwrap();

    let err = Seeder::new(Dataset::builtin())
        .transactional(true)
        .up(&store.conn)
        .await
        .expect_err("people stage must fail");
    assert!(matches!(
        err,
        SeedError::Insert {
            table: CatalogTable::People,
            ..
        }
    ));

    assert_eq!(store.count(CatalogTable::Genres).await.unwrap(), 0);
    assert_eq!(store.count(CatalogTable::Seasons).await.unwrap(), 0);
    assert_eq!(store.count(CatalogTable::People).await.unwrap(), 1);
}

#[tokio::test]
async fn transactional_run_commits_on_success() {
    let store = spawn_store().await;

    Seeder::new(Dataset::builtin())
        .transactional(true)
        .up(&store.conn)
        .await
        .expect("transactional seed should succeed");

    assert_counts_match_dataset(&store).await;
}

#[tokio::test]
async fn partial_dataset_skips_empty_tables() {
    let store = spawn_store().await;
    let dataset = Dataset {
        genres: &GENRES[..3],
        movies: &[],
        movie_genres: &[],
        seasons: &[],
        episodes: &[],
        people: &[],
        movie_actors: &[],
        movie_crews: &[],
        ratings: &[],
    };

    let report = Seeder::new(dataset).up(&store.conn).await.unwrap();

    assert_eq!(report.rows_for(CatalogTable::Genres), Some(3));
    assert_eq!(report.rows_for(CatalogTable::Movies), Some(0));
    assert_eq!(report.total(), 3);
    assert_eq!(store.count(CatalogTable::Genres).await.unwrap(), 3);
}

#[tokio::test]
async fn store_ping_and_counts_on_fresh_schema() {
    let store = spawn_store().await;
    store.ping().await.unwrap();

    let counts = store.table_counts().await.unwrap();
    assert_eq!(counts.len(), 9);
    assert!(counts.iter().all(|(_, rows)| *rows == 0));
}

#[tokio::test]
async fn repeated_genre_name_is_caught_before_the_store_rejects_it() {
    let store = spawn_store().await;
    let dataset = Dataset {
        genres: &[GenreSeed::new(1, "Action"), GenreSeed::new(2, "Action")],
        ..Dataset::builtin()
    };

    let violations = integrity::check(&dataset);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].table, CatalogTable::Genres);

    let err = Seeder::new(dataset)
        .up(&store.conn)
        .await
        .expect_err("unique genre name must be enforced");
    assert_eq!(err.table(), Some(CatalogTable::Genres));
}

#[tokio::test]
async fn up_runs_inside_a_caller_transaction() {
    let store = spawn_store().await;

    let txn = store.conn.begin().await.unwrap();
    let report = seed::up(&txn).await.expect("seed should succeed");
    assert_eq!(report.rows_for(CatalogTable::Genres), Some(GENRES.len() as u64));
    txn.rollback().await.unwrap();

    assert_eq!(store.count(CatalogTable::Genres).await.unwrap(), 0);
}
