//! Offline validation of a [`Dataset`] before it is written to a store.
//!
//! The database enforces the same rules through primary, unique and foreign
//! keys, but there a single bad record aborts the whole run. Checking up front
//! reports every problem at once.

use super::data::Dataset;
use crate::models::catalog::CatalogTable;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::ops::RangeInclusive;

/// Widest scale used by the demo ratings.
pub const RATING_RANGE: RangeInclusive<f64> = 0.0..=10.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    DuplicateKey,
    DuplicateValue(&'static str),
    DanglingReference {
        column: &'static str,
        target: CatalogTable,
        id: i32,
    },
    RatingOutOfRange(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub table: CatalogTable,
    /// Primary key of the offending record, e.g. `id=4`.
    pub record: String,
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ViolationKind::DuplicateKey => {
                write!(f, "{} [{}]: duplicate primary key", self.table, self.record)
            }
            ViolationKind::DuplicateValue(column) => write!(
                f,
                "{} [{}]: {column} is already taken by another record",
                self.table, self.record
            ),
            ViolationKind::DanglingReference { column, target, id } => write!(
                f,
                "{} [{}]: {column}={id} does not exist in {target}",
                self.table, self.record
            ),
            ViolationKind::RatingOutOfRange(value) => write!(
                f,
                "{} [{}]: rating {value} outside {}..={}",
                self.table,
                self.record,
                RATING_RANGE.start(),
                RATING_RANGE.end()
            ),
        }
    }
}

struct Checker {
    violations: Vec<Violation>,
}

impl Checker {
    fn keys<T, K>(
        &mut self,
        table: CatalogTable,
        records: &[T],
        key: impl Fn(&T) -> K,
        label: impl Fn(&K) -> String,
    ) -> HashSet<K>
    where
        K: Eq + Hash,
    {
        let mut seen = HashSet::with_capacity(records.len());
        for record in records {
            let k = key(record);
            if seen.contains(&k) {
                self.violations.push(Violation {
                    table,
                    record: label(&k),
                    kind: ViolationKind::DuplicateKey,
                });
            } else {
                seen.insert(k);
            }
        }
        seen
    }

    /// Flags records repeating a value of a `UNIQUE` column.
    fn unique<T, V>(
        &mut self,
        table: CatalogTable,
        records: &[T],
        column: &'static str,
        key: impl Fn(&T) -> i32,
        value: impl Fn(&T) -> V,
    ) where
        V: Eq + Hash,
    {
        let mut seen = HashSet::with_capacity(records.len());
        for record in records {
            if !seen.insert(value(record)) {
                self.violations.push(Violation {
                    table,
                    record: id_label(&key(record)),
                    kind: ViolationKind::DuplicateValue(column),
                });
            }
        }
    }

    fn reference(
        &mut self,
        table: CatalogTable,
        record: impl Fn() -> String,
        column: &'static str,
        target: (CatalogTable, &HashSet<i32>),
        id: i32,
    ) {
        let (target, known) = target;
        if !known.contains(&id) {
            self.violations.push(Violation {
                table,
                record: record(),
                kind: ViolationKind::DanglingReference { column, target, id },
            });
        }
    }
}

fn id_label(id: &i32) -> String {
    format!("id={id}")
}

/// Returns every integrity problem in `dataset`, in table insert order.
#[must_use]
pub fn check(dataset: &Dataset<'_>) -> Vec<Violation> {
    use CatalogTable as T;

    let mut checker = Checker {
        violations: Vec::new(),
    };

    let genres = checker.keys(T::Genres, dataset.genres, |g| g.id, id_label);
    checker.unique(T::Genres, dataset.genres, "name", |g| g.id, |g| g.name);
    let movies = checker.keys(T::Movies, dataset.movies, |m| m.id, id_label);

    checker.keys(
        T::MovieGenres,
        dataset.movie_genres,
        |mg| (mg.genre_id, mg.movie_id),
        |(genre_id, movie_id)| format!("genre_id={genre_id}, movie_id={movie_id}"),
    );
    for mg in dataset.movie_genres {
        let label = || format!("genre_id={}, movie_id={}", mg.genre_id, mg.movie_id);
        checker.reference(
            T::MovieGenres,
            label,
            "genre_id",
            (T::Genres, &genres),
            mg.genre_id,
        );
        checker.reference(
            T::MovieGenres,
            label,
            "movie_id",
            (T::Movies, &movies),
            mg.movie_id,
        );
    }

    let seasons = checker.keys(T::Seasons, dataset.seasons, |s| s.id, id_label);
    for season in dataset.seasons {
        checker.reference(
            T::Seasons,
            || id_label(&season.id),
            "movie_id",
            (T::Movies, &movies),
            season.movie_id,
        );
    }

    checker.keys(T::Episodes, dataset.episodes, |e| e.id, id_label);
    for episode in dataset.episodes {
        checker.reference(
            T::Episodes,
            || id_label(&episode.id),
            "season_id",
            (T::Seasons, &seasons),
            episode.season_id,
        );
    }

    let people = checker.keys(T::People, dataset.people, |p| p.id, id_label);

    checker.keys(T::MovieActors, dataset.movie_actors, |a| a.id, id_label);
    for actor in dataset.movie_actors {
        let label = || id_label(&actor.id);
        checker.reference(
            T::MovieActors,
            label,
            "season_id",
            (T::Seasons, &seasons),
            actor.season_id,
        );
        checker.reference(
            T::MovieActors,
            label,
            "people_id",
            (T::People, &people),
            actor.people_id,
        );
    }

    checker.keys(T::MovieCrews, dataset.movie_crews, |c| c.id, id_label);
    for crew in dataset.movie_crews {
        let label = || id_label(&crew.id);
        checker.reference(
            T::MovieCrews,
            label,
            "season_id",
            (T::Seasons, &seasons),
            crew.season_id,
        );
        checker.reference(
            T::MovieCrews,
            label,
            "people_id",
            (T::People, &people),
            crew.people_id,
        );
    }

    checker.keys(T::Ratings, dataset.ratings, |r| r.id, id_label);
    for rating in dataset.ratings {
        checker.reference(
            T::Ratings,
            || id_label(&rating.id),
            "season_id",
            (T::Seasons, &seasons),
            rating.season_id,
        );
        if !RATING_RANGE.contains(&rating.rating) {
            checker.violations.push(Violation {
                table: T::Ratings,
                record: id_label(&rating.id),
                kind: ViolationKind::RatingOutOfRange(rating.rating.to_string()),
            });
        }
    }

    checker.violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::data::{
        EpisodeSeed, GenreSeed, MovieActorSeed, MovieGenreSeed, MovieKind, MovieSeed, RatingSeed,
        SeasonSeed, SeasonStatus,
    };

    const SEASON: SeasonSeed = SeasonSeed {
        id: 1,
        movie_id: 1,
        season_number: 1,
        title: "Pilot Film",
        overview: "",
        release_date: "2020-01-01",
        status: SeasonStatus::Completed,
        runtime: Some(90),
        slug: "pilot-film",
    };

    fn empty() -> Dataset<'static> {
        Dataset {
            genres: &[],
            movies: &[],
            movie_genres: &[],
            seasons: &[],
            episodes: &[],
            people: &[],
            movie_actors: &[],
            movie_crews: &[],
            ratings: &[],
        }
    }

    #[test]
    fn builtin_dataset_is_consistent() {
        let violations = check(&Dataset::builtin());
        assert!(violations.is_empty(), "unexpected violations: {violations:?}");
    }

    #[test]
    fn empty_dataset_is_consistent() {
        assert!(check(&empty()).is_empty());
    }

    #[test]
    fn movie_genre_requires_both_parents() {
        let dataset = Dataset {
            genres: &[GenreSeed::new(1, "Action")],
            movie_genres: &[MovieGenreSeed::new(1, 1)],
            ..empty()
        };

        let violations = check(&dataset);
        assert_eq!(
            violations,
            vec![Violation {
                table: CatalogTable::MovieGenres,
                record: "genre_id=1, movie_id=1".to_string(),
                kind: ViolationKind::DanglingReference {
                    column: "movie_id",
                    target: CatalogTable::Movies,
                    id: 1,
                },
            }]
        );
    }

    #[test]
    fn duplicate_ids_are_reported_once_per_extra_record() {
        let dataset = Dataset {
            genres: &[
                GenreSeed::new(1, "Action"),
                GenreSeed::new(1, "Adventure"),
                GenreSeed::new(1, "Animation"),
            ],
            ..empty()
        };

        let violations = check(&dataset);
        assert_eq!(violations.len(), 2);
        assert!(
            violations
                .iter()
                .all(|v| v.kind == ViolationKind::DuplicateKey && v.record == "id=1")
        );
    }

    #[test]
    fn repeated_genre_name_is_reported() {
        let dataset = Dataset {
            genres: &[GenreSeed::new(1, "Action"), GenreSeed::new(2, "Action")],
            ..empty()
        };

        let violations = check(&dataset);
        assert_eq!(
            violations,
            vec![Violation {
                table: CatalogTable::Genres,
                record: "id=2".to_string(),
                kind: ViolationKind::DuplicateValue("name"),
            }]
        );
        assert_eq!(
            violations[0].to_string(),
            "genres [id=2]: name is already taken by another record"
        );
    }

    #[test]
    fn duplicate_composite_key_is_reported() {
        let dataset = Dataset {
            genres: &[GenreSeed::new(1, "Action")],
            movies: &[MovieSeed::new(1, "Film", MovieKind::Movie)],
            movie_genres: &[MovieGenreSeed::new(1, 1), MovieGenreSeed::new(1, 1)],
            ..empty()
        };

        let violations = check(&dataset);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::DuplicateKey);
    }

    #[test]
    fn children_of_missing_season_are_reported() {
        let dataset = Dataset {
            movies: &[MovieSeed::new(1, "Film", MovieKind::Movie)],
            seasons: &[SEASON],
            episodes: &[EpisodeSeed::new(1, 2, 1, "Orphan", 90, "2020-01-01")],
            movie_actors: &[MovieActorSeed::new(1, 1, 7, "Lead")],
            ratings: &[RatingSeed::new(1, 4.0, 1, 9)],
            ..empty()
        };

        let violations = check(&dataset);
        let described: Vec<String> = violations.iter().map(ToString::to_string).collect();
        assert_eq!(
            described,
            vec![
                "episodes [id=1]: season_id=2 does not exist in seasons",
                "movie_actors [id=1]: people_id=7 does not exist in people",
                "ratings [id=1]: season_id=9 does not exist in seasons",
            ]
        );
    }

    #[test]
    fn ratings_outside_scale_are_reported() {
        let dataset = Dataset {
            movies: &[MovieSeed::new(1, "Film", MovieKind::Movie)],
            seasons: &[SEASON],
            ratings: &[
                RatingSeed::new(1, 10.0, 1, 1),
                RatingSeed::new(2, 11.5, 1, 1),
                RatingSeed::new(3, -1.0, 2, 1),
            ],
            ..empty()
        };

        let violations = check(&dataset);
        assert_eq!(violations.len(), 2);
        assert_eq!(
            violations[0].to_string(),
            "ratings [id=2]: rating 11.5 outside 0..=10"
        );
        assert_eq!(
            violations[1].kind,
            ViolationKind::RatingOutOfRange("-1".to_string())
        );
    }
}
