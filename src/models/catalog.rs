use std::fmt;

/// The tables making up the media catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CatalogTable {
    Genres,
    Movies,
    MovieGenres,
    Seasons,
    Episodes,
    People,
    MovieActors,
    MovieCrews,
    Ratings,
}

impl CatalogTable {
    /// Foreign-key-safe insert order: every table comes after the tables it references.
    pub const INSERT_ORDER: [Self; 9] = [
        Self::Genres,
        Self::Movies,
        Self::MovieGenres,
        Self::Seasons,
        Self::Episodes,
        Self::People,
        Self::MovieActors,
        Self::MovieCrews,
        Self::Ratings,
    ];

    /// Tables cleared explicitly on teardown. Join tables and ratings go with
    /// their parents through `ON DELETE CASCADE`.
    pub const TEARDOWN_ORDER: [Self; 5] = [
        Self::Episodes,
        Self::Seasons,
        Self::Movies,
        Self::Genres,
        Self::People,
    ];

    #[must_use]
    pub const fn table_name(self) -> &'static str {
        match self {
            Self::Genres => "genres",
            Self::Movies => "movies",
            Self::MovieGenres => "movie_genres",
            Self::Seasons => "seasons",
            Self::Episodes => "episodes",
            Self::People => "people",
            Self::MovieActors => "movie_actors",
            Self::MovieCrews => "movie_crews",
            Self::Ratings => "ratings",
        }
    }
}

impl fmt::Display for CatalogTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}
