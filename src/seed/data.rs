//! The demo catalogue written by `marquee up`.
//!
//! Records are plain `const` data. URLs for artwork, trailers and streams are
//! derived from a slug or id when the rows are built, see [`media_url`].

use crate::models::catalog::CatalogTable;
use std::fmt;

/// Host serving demo artwork and streams.
pub const MEDIA_BASE_URL: &str = "https://media.marquee.example";

pub const DIRECTOR: &str = "Đạo diễn";
pub const WRITER: &str = "Biên kịch";
pub const PRODUCER: &str = "Nhà sản xuất";

#[must_use]
pub fn media_url(kind: &str, path: impl fmt::Display) -> String {
    format!("{MEDIA_BASE_URL}/{kind}/{path}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovieKind {
    Movie,
    Series,
}

impl MovieKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Series => "series",
        }
    }
}

impl fmt::Display for MovieKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeasonStatus {
    Completed,
    Upcoming,
}

impl SeasonStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Upcoming => "upcoming",
        }
    }
}

impl fmt::Display for SeasonStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenreSeed {
    pub id: i32,
    pub name: &'static str,
}

impl GenreSeed {
    pub const fn new(id: i32, name: &'static str) -> Self {
        Self { id, name }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovieSeed {
    pub id: i32,
    pub title: &'static str,
    pub kind: MovieKind,
}

impl MovieSeed {
    pub const fn new(id: i32, title: &'static str, kind: MovieKind) -> Self {
        Self { id, title, kind }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovieGenreSeed {
    pub genre_id: i32,
    pub movie_id: i32,
}

impl MovieGenreSeed {
    pub const fn new(genre_id: i32, movie_id: i32) -> Self {
        Self { genre_id, movie_id }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonSeed {
    pub id: i32,
    pub movie_id: i32,
    pub season_number: i32,
    pub title: &'static str,
    pub overview: &'static str,
    pub release_date: &'static str,
    pub status: SeasonStatus,
    pub runtime: Option<i32>,
    /// Key for the poster, backdrop and trailer paths.
    pub slug: &'static str,
}

impl SeasonSeed {
    #[must_use]
    pub fn poster_url(&self) -> String {
        media_url("posters", format_args!("{}.jpg", self.slug))
    }

    #[must_use]
    pub fn backdrop_url(&self) -> String {
        media_url("backdrops", format_args!("{}.jpg", self.slug))
    }

    #[must_use]
    pub fn trailer_url(&self) -> String {
        media_url("trailers", format_args!("{}.mp4", self.slug))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpisodeSeed {
    pub id: i32,
    pub season_id: i32,
    pub episode_number: i32,
    pub title: &'static str,
    pub overview: Option<&'static str>,
    pub runtime: Option<i32>,
    pub release_date: &'static str,
}

impl EpisodeSeed {
    pub const fn new(
        id: i32,
        season_id: i32,
        episode_number: i32,
        title: &'static str,
        runtime: i32,
        release_date: &'static str,
    ) -> Self {
        Self {
            id,
            season_id,
            episode_number,
            title,
            overview: None,
            runtime: Some(runtime),
            release_date,
        }
    }

    pub const fn with_overview(self, overview: &'static str) -> Self {
        Self {
            overview: Some(overview),
            ..self
        }
    }

    #[must_use]
    pub fn video_url(&self) -> String {
        media_url(
            "stream",
            format_args!("{}/{}.m3u8", self.season_id, self.episode_number),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonSeed {
    pub id: i32,
    pub name: &'static str,
    pub birthday: &'static str,
    pub gender: Gender,
    pub biography: &'static str,
}

impl PersonSeed {
    pub const fn new(
        id: i32,
        name: &'static str,
        birthday: &'static str,
        gender: Gender,
        biography: &'static str,
    ) -> Self {
        Self {
            id,
            name,
            birthday,
            gender,
            biography,
        }
    }

    #[must_use]
    pub fn profile_url(&self) -> String {
        media_url("people", format_args!("{}.jpg", self.id))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovieActorSeed {
    pub id: i32,
    pub season_id: i32,
    pub people_id: i32,
    pub role: &'static str,
}

impl MovieActorSeed {
    pub const fn new(id: i32, season_id: i32, people_id: i32, role: &'static str) -> Self {
        Self {
            id,
            season_id,
            people_id,
            role,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovieCrewSeed {
    pub id: i32,
    pub season_id: i32,
    pub people_id: i32,
    pub job: &'static str,
}

impl MovieCrewSeed {
    pub const fn new(id: i32, season_id: i32, people_id: i32, job: &'static str) -> Self {
        Self {
            id,
            season_id,
            people_id,
            job,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingSeed {
    pub id: i32,
    pub rating: f64,
    pub user_id: i32,
    pub season_id: i32,
}

impl RatingSeed {
    pub const fn new(id: i32, rating: f64, user_id: i32, season_id: i32) -> Self {
        Self {
            id,
            rating,
            user_id,
            season_id,
        }
    }
}

/// A full set of catalogue records, one slice per table.
#[derive(Debug, Clone, Copy)]
pub struct Dataset<'a> {
    pub genres: &'a [GenreSeed],
    pub movies: &'a [MovieSeed],
    pub movie_genres: &'a [MovieGenreSeed],
    pub seasons: &'a [SeasonSeed],
    pub episodes: &'a [EpisodeSeed],
    pub people: &'a [PersonSeed],
    pub movie_actors: &'a [MovieActorSeed],
    pub movie_crews: &'a [MovieCrewSeed],
    pub ratings: &'a [RatingSeed],
}

impl Dataset<'static> {
    /// The embedded demo catalogue.
    #[must_use]
    pub const fn builtin() -> Self {
        Self {
            genres: GENRES,
            movies: MOVIES,
            movie_genres: MOVIE_GENRES,
            seasons: SEASONS,
            episodes: EPISODES,
            people: PEOPLE,
            movie_actors: MOVIE_ACTORS,
            movie_crews: MOVIE_CREWS,
            ratings: RATINGS,
        }
    }
}

impl Dataset<'_> {
    #[must_use]
    pub const fn len_of(&self, table: CatalogTable) -> usize {
        match table {
            CatalogTable::Genres => self.genres.len(),
            CatalogTable::Movies => self.movies.len(),
            CatalogTable::MovieGenres => self.movie_genres.len(),
            CatalogTable::Seasons => self.seasons.len(),
            CatalogTable::Episodes => self.episodes.len(),
            CatalogTable::People => self.people.len(),
            CatalogTable::MovieActors => self.movie_actors.len(),
            CatalogTable::MovieCrews => self.movie_crews.len(),
            CatalogTable::Ratings => self.ratings.len(),
        }
    }
}

pub const GENRES: &[GenreSeed] = &[
    GenreSeed::new(1, "Action"),
    GenreSeed::new(2, "Adventure"),
    GenreSeed::new(3, "Animation"),
    GenreSeed::new(4, "Comedy"),
    GenreSeed::new(5, "Crime"),
    GenreSeed::new(6, "Drama"),
    GenreSeed::new(7, "Fantasy"),
    GenreSeed::new(8, "Horror"),
    GenreSeed::new(9, "Mystery"),
    GenreSeed::new(10, "Science Fiction"),
    GenreSeed::new(11, "Thriller"),
    GenreSeed::new(12, "Family"),
];

pub const MOVIES: &[MovieSeed] = &[
    MovieSeed::new(1, "Harry Potter and the Sorcerer's Stone", MovieKind::Movie),
    MovieSeed::new(2, "Harry Potter and the Chamber of Secrets", MovieKind::Movie),
    MovieSeed::new(3, "The Dark Knight", MovieKind::Movie),
    MovieSeed::new(4, "Inception", MovieKind::Movie),
    MovieSeed::new(5, "Stranger Things", MovieKind::Series),
    MovieSeed::new(6, "Breaking Bad", MovieKind::Series),
    MovieSeed::new(7, "The Avengers", MovieKind::Series),
    MovieSeed::new(8, "Interstellar", MovieKind::Movie),
    MovieSeed::new(9, "Spirited Away", MovieKind::Movie),
    MovieSeed::new(10, "Parasite", MovieKind::Movie),
];

pub const MOVIE_GENRES: &[MovieGenreSeed] = &[
    MovieGenreSeed::new(2, 1),
    MovieGenreSeed::new(7, 1),
    MovieGenreSeed::new(12, 1),
    MovieGenreSeed::new(2, 2),
    MovieGenreSeed::new(7, 2),
    MovieGenreSeed::new(12, 2),
    MovieGenreSeed::new(1, 3),
    MovieGenreSeed::new(5, 3),
    MovieGenreSeed::new(6, 3),
    MovieGenreSeed::new(11, 3),
    MovieGenreSeed::new(1, 4),
    MovieGenreSeed::new(2, 4),
    MovieGenreSeed::new(10, 4),
    MovieGenreSeed::new(11, 4),
    MovieGenreSeed::new(6, 5),
    MovieGenreSeed::new(7, 5),
    MovieGenreSeed::new(8, 5),
    MovieGenreSeed::new(9, 5),
    MovieGenreSeed::new(10, 5),
    MovieGenreSeed::new(5, 6),
    MovieGenreSeed::new(6, 6),
    MovieGenreSeed::new(11, 6),
    MovieGenreSeed::new(1, 7),
    MovieGenreSeed::new(2, 7),
    MovieGenreSeed::new(10, 7),
    MovieGenreSeed::new(2, 8),
    MovieGenreSeed::new(6, 8),
    MovieGenreSeed::new(10, 8),
    MovieGenreSeed::new(3, 9),
    MovieGenreSeed::new(7, 9),
    MovieGenreSeed::new(12, 9),
    MovieGenreSeed::new(4, 10),
    MovieGenreSeed::new(6, 10),
    MovieGenreSeed::new(11, 10),
];

pub const SEASONS: &[SeasonSeed] = &[
    SeasonSeed {
        id: 1,
        movie_id: 1,
        season_number: 1,
        title: "Harry Potter and the Sorcerer's Stone",
        overview: "Cậu bé mồ côi Harry Potter phát hiện mình là phù thủy và bước vào năm học đầu tiên tại Hogwarts.",
        release_date: "2001-11-16",
        status: SeasonStatus::Completed,
        runtime: Some(152),
        slug: "harry-potter-1",
    },
    SeasonSeed {
        id: 2,
        movie_id: 2,
        season_number: 1,
        title: "Harry Potter and the Chamber of Secrets",
        overview: "Năm thứ hai của Harry tại Hogwarts bị đe dọa bởi những lời cảnh báo về Phòng chứa Bí mật.",
        release_date: "2002-11-15",
        status: SeasonStatus::Completed,
        runtime: Some(161),
        slug: "harry-potter-2",
    },
    SeasonSeed {
        id: 3,
        movie_id: 3,
        season_number: 1,
        title: "The Dark Knight",
        overview: "Batman đối đầu với Joker, kẻ muốn đẩy Gotham vào hỗn loạn.",
        release_date: "2008-07-18",
        status: SeasonStatus::Completed,
        runtime: Some(152),
        slug: "the-dark-knight",
    },
    SeasonSeed {
        id: 4,
        movie_id: 4,
        season_number: 1,
        title: "Inception",
        overview: "Một kẻ trộm chuyên đánh cắp bí mật trong giấc mơ nhận nhiệm vụ cấy một ý tưởng vào tâm trí người khác.",
        release_date: "2010-07-16",
        status: SeasonStatus::Completed,
        runtime: Some(148),
        slug: "inception",
    },
    SeasonSeed {
        id: 5,
        movie_id: 5,
        season_number: 1,
        title: "Stranger Things: Season 1",
        overview: "Một cậu bé mất tích ở thị trấn Hawkins, kéo theo những thí nghiệm bí mật và một cô bé có siêu năng lực.",
        release_date: "2016-07-15",
        status: SeasonStatus::Completed,
        runtime: Some(51),
        slug: "stranger-things-s1",
    },
    SeasonSeed {
        id: 6,
        movie_id: 5,
        season_number: 2,
        title: "Stranger Things: Season 2",
        overview: "Một năm sau, Will vẫn bị ám ảnh bởi Thế giới Ngược và một thế lực khổng lồ đang thức tỉnh.",
        release_date: "2017-10-27",
        status: SeasonStatus::Completed,
        runtime: Some(52),
        slug: "stranger-things-s2",
    },
    SeasonSeed {
        id: 7,
        movie_id: 6,
        season_number: 1,
        title: "Breaking Bad: Season 1",
        overview: "Thầy giáo hóa học Walter White mắc bệnh ung thư và quyết định sản xuất ma túy để lo cho gia đình.",
        release_date: "2008-01-20",
        status: SeasonStatus::Completed,
        runtime: Some(47),
        slug: "breaking-bad-s1",
    },
    SeasonSeed {
        id: 8,
        movie_id: 7,
        season_number: 1,
        title: "The Avengers",
        overview: "Nick Fury tập hợp các siêu anh hùng để ngăn Loki chiếm lấy Trái Đất.",
        release_date: "2012-05-04",
        status: SeasonStatus::Completed,
        runtime: Some(143),
        slug: "avengers-1",
    },
    SeasonSeed {
        id: 9,
        movie_id: 7,
        season_number: 2,
        title: "Avengers: Age of Ultron",
        overview: "Trí tuệ nhân tạo Ultron nổi loạn và các Avengers phải đoàn kết để cứu nhân loại.",
        release_date: "2015-05-01",
        status: SeasonStatus::Completed,
        runtime: Some(141),
        slug: "avengers-2",
    },
    SeasonSeed {
        id: 10,
        movie_id: 7,
        season_number: 3,
        title: "Avengers: Infinity War",
        overview: "Thanos truy lùng sáu Viên đá Vô cực để xóa sổ một nửa vũ trụ.",
        release_date: "2018-04-27",
        status: SeasonStatus::Completed,
        runtime: Some(149),
        slug: "avengers-3",
    },
    SeasonSeed {
        id: 11,
        movie_id: 7,
        season_number: 4,
        title: "Avengers: Endgame",
        overview: "Những Avengers còn sống sót tìm cách đảo ngược cú búng tay của Thanos.",
        release_date: "2019-04-26",
        status: SeasonStatus::Completed,
        runtime: Some(181),
        slug: "avengers-4",
    },
    SeasonSeed {
        id: 12,
        movie_id: 7,
        season_number: 5,
        title: "Avengers: Doomsday",
        overview: "Các Avengers đối mặt với Doctor Doom trong chương mới của Đa vũ trụ.",
        release_date: "2026-12-18",
        status: SeasonStatus::Upcoming,
        runtime: None,
        slug: "avengers-5",
    },
    SeasonSeed {
        id: 13,
        movie_id: 8,
        season_number: 1,
        title: "Interstellar",
        overview: "Một nhóm phi hành gia du hành qua hố giun để tìm ngôi nhà mới cho nhân loại.",
        release_date: "2014-11-07",
        status: SeasonStatus::Completed,
        runtime: Some(169),
        slug: "interstellar",
    },
    SeasonSeed {
        id: 14,
        movie_id: 9,
        season_number: 1,
        title: "Spirited Away",
        overview: "Cô bé Chihiro lạc vào thế giới linh hồn và phải làm việc trong nhà tắm của phù thủy Yubaba.",
        release_date: "2001-07-20",
        status: SeasonStatus::Completed,
        runtime: Some(125),
        slug: "spirited-away",
    },
    SeasonSeed {
        id: 15,
        movie_id: 10,
        season_number: 1,
        title: "Parasite",
        overview: "Gia đình nghèo nhà Kim lần lượt thâm nhập vào cuộc sống của gia đình giàu có nhà Park.",
        release_date: "2019-05-30",
        status: SeasonStatus::Completed,
        runtime: Some(132),
        slug: "parasite",
    },
];

#[rustfmt::skip]
pub const EPISODES: &[EpisodeSeed] = &[
    EpisodeSeed::new(1, 1, 1, "Harry Potter and the Sorcerer's Stone", 152, "2001-11-16")
        .with_overview("Cậu bé mồ côi Harry Potter phát hiện mình là phù thủy và bước vào năm học đầu tiên tại Hogwarts."),
    EpisodeSeed::new(2, 2, 1, "Harry Potter and the Chamber of Secrets", 161, "2002-11-15")
        .with_overview("Năm thứ hai của Harry tại Hogwarts bị đe dọa bởi những lời cảnh báo về Phòng chứa Bí mật."),
    EpisodeSeed::new(3, 3, 1, "The Dark Knight", 152, "2008-07-18")
        .with_overview("Batman đối đầu với Joker, kẻ muốn đẩy Gotham vào hỗn loạn."),
    EpisodeSeed::new(4, 4, 1, "Inception", 148, "2010-07-16")
        .with_overview("Một kẻ trộm chuyên đánh cắp bí mật trong giấc mơ nhận nhiệm vụ cấy một ý tưởng vào tâm trí người khác."),
    EpisodeSeed::new(5, 5, 1, "Chapter One: The Vanishing of Will Byers", 48, "2016-07-15")
        .with_overview("Trên đường về nhà, Will Byers biến mất một cách bí ẩn."),
    EpisodeSeed::new(6, 5, 2, "Chapter Two: The Weirdo on Maple Street", 55, "2016-07-15"),
    EpisodeSeed::new(7, 5, 3, "Chapter Three: Holly, Jolly", 51, "2016-07-15"),
    EpisodeSeed::new(8, 5, 4, "Chapter Four: The Body", 50, "2016-07-15"),
    EpisodeSeed::new(9, 5, 5, "Chapter Five: The Flea and the Acrobat", 52, "2016-07-15"),
    EpisodeSeed::new(10, 5, 6, "Chapter Six: The Monster", 46, "2016-07-15"),
    EpisodeSeed::new(11, 5, 7, "Chapter Seven: The Bathtub", 41, "2016-07-15"),
    EpisodeSeed::new(12, 5, 8, "Chapter Eight: The Upside Down", 54, "2016-07-15"),
    EpisodeSeed::new(13, 6, 1, "Chapter One: MADMAX", 48, "2017-10-27")
        .with_overview("Một cô gái mới chuyển đến Hawkins khiến nhóm bạn chú ý."),
    EpisodeSeed::new(14, 6, 2, "Chapter Two: Trick or Treat, Freak", 56, "2017-10-27"),
    EpisodeSeed::new(15, 6, 3, "Chapter Three: The Pollywog", 51, "2017-10-27"),
    EpisodeSeed::new(16, 6, 4, "Chapter Four: Will the Wise", 46, "2017-10-27"),
    EpisodeSeed::new(17, 6, 5, "Chapter Five: Dig Dug", 58, "2017-10-27"),
    EpisodeSeed::new(18, 6, 6, "Chapter Six: The Spy", 51, "2017-10-27"),
    EpisodeSeed::new(19, 6, 7, "Chapter Seven: The Lost Sister", 45, "2017-10-27"),
    EpisodeSeed::new(20, 6, 8, "Chapter Eight: The Mind Flayer", 48, "2017-10-27"),
    EpisodeSeed::new(21, 6, 9, "Chapter Nine: The Gate", 62, "2017-10-27"),
    EpisodeSeed::new(22, 7, 1, "Pilot", 58, "2008-01-20")
        .with_overview("Walter White nhận tin mình bị ung thư phổi giai đoạn cuối."),
    EpisodeSeed::new(23, 7, 2, "Cat's in the Bag...", 48, "2008-01-27"),
    EpisodeSeed::new(24, 7, 3, "...And the Bag's in the River", 48, "2008-02-10"),
    EpisodeSeed::new(25, 7, 4, "Cancer Man", 48, "2008-02-17"),
    EpisodeSeed::new(26, 7, 5, "Gray Matter", 48, "2008-02-24"),
    EpisodeSeed::new(27, 7, 6, "Crazy Handful of Nothin'", 48, "2008-03-02"),
    EpisodeSeed::new(28, 7, 7, "A No-Rough-Stuff-Type Deal", 48, "2008-03-09"),
    EpisodeSeed::new(29, 8, 1, "The Avengers", 143, "2012-05-04")
        .with_overview("Nick Fury tập hợp các siêu anh hùng để ngăn Loki chiếm lấy Trái Đất."),
    EpisodeSeed::new(30, 9, 1, "Avengers: Age of Ultron", 141, "2015-05-01")
        .with_overview("Trí tuệ nhân tạo Ultron nổi loạn và các Avengers phải đoàn kết để cứu nhân loại."),
    EpisodeSeed::new(31, 10, 1, "Avengers: Infinity War", 149, "2018-04-27")
        .with_overview("Thanos truy lùng sáu Viên đá Vô cực để xóa sổ một nửa vũ trụ."),
    EpisodeSeed::new(32, 11, 1, "Avengers: Endgame", 181, "2019-04-26")
        .with_overview("Những Avengers còn sống sót tìm cách đảo ngược cú búng tay của Thanos."),
    EpisodeSeed::new(33, 13, 1, "Interstellar", 169, "2014-11-07")
        .with_overview("Một nhóm phi hành gia du hành qua hố giun để tìm ngôi nhà mới cho nhân loại."),
    EpisodeSeed::new(34, 14, 1, "Spirited Away", 125, "2001-07-20")
        .with_overview("Cô bé Chihiro lạc vào thế giới linh hồn và phải làm việc trong nhà tắm của phù thủy Yubaba."),
    EpisodeSeed::new(35, 15, 1, "Parasite", 132, "2019-05-30")
        .with_overview("Gia đình nghèo nhà Kim lần lượt thâm nhập vào cuộc sống của gia đình giàu có nhà Park."),
];

#[rustfmt::skip]
pub const PEOPLE: &[PersonSeed] = &[
    PersonSeed::new(1, "Daniel Radcliffe", "1989-07-23", Gender::Male, "Nam diễn viên người Anh, nổi tiếng với vai Harry Potter."),
    PersonSeed::new(2, "Emma Watson", "1990-04-15", Gender::Female, "Nữ diễn viên người Anh, thủ vai Hermione Granger."),
    PersonSeed::new(3, "Rupert Grint", "1988-08-24", Gender::Male, "Nam diễn viên người Anh, thủ vai Ron Weasley."),
    PersonSeed::new(4, "Chris Columbus", "1958-09-10", Gender::Male, "Đạo diễn người Mỹ của hai phần đầu Harry Potter."),
    PersonSeed::new(5, "Christian Bale", "1974-01-30", Gender::Male, "Nam diễn viên người Anh, thủ vai Batman trong bộ ba The Dark Knight."),
    PersonSeed::new(6, "Heath Ledger", "1979-04-04", Gender::Male, "Nam diễn viên người Úc, đoạt giải Oscar với vai Joker."),
    PersonSeed::new(7, "Christopher Nolan", "1970-07-30", Gender::Male, "Đạo diễn và biên kịch người Anh-Mỹ."),
    PersonSeed::new(8, "Leonardo DiCaprio", "1974-11-11", Gender::Male, "Nam diễn viên người Mỹ, đoạt giải Oscar năm 2016."),
    PersonSeed::new(9, "Joseph Gordon-Levitt", "1981-02-17", Gender::Male, "Nam diễn viên người Mỹ."),
    PersonSeed::new(10, "Millie Bobby Brown", "2004-02-19", Gender::Female, "Nữ diễn viên người Anh, thủ vai Eleven."),
    PersonSeed::new(11, "Finn Wolfhard", "2002-12-23", Gender::Male, "Nam diễn viên người Canada, thủ vai Mike Wheeler."),
    PersonSeed::new(12, "David Harbour", "1975-04-10", Gender::Male, "Nam diễn viên người Mỹ, thủ vai cảnh sát trưởng Hopper."),
    PersonSeed::new(13, "Matt Duffer", "1984-02-15", Gender::Male, "Đồng sáng tạo Stranger Things."),
    PersonSeed::new(14, "Ross Duffer", "1984-02-15", Gender::Male, "Đồng sáng tạo Stranger Things."),
    PersonSeed::new(15, "Bryan Cranston", "1956-03-07", Gender::Male, "Nam diễn viên người Mỹ, thủ vai Walter White."),
    PersonSeed::new(16, "Aaron Paul", "1979-08-27", Gender::Male, "Nam diễn viên người Mỹ, thủ vai Jesse Pinkman."),
    PersonSeed::new(17, "Vince Gilligan", "1967-02-10", Gender::Male, "Nhà biên kịch và sản xuất, cha đẻ của Breaking Bad."),
    PersonSeed::new(18, "Robert Downey Jr.", "1965-04-04", Gender::Male, "Nam diễn viên người Mỹ, gắn liền với vai Iron Man."),
    PersonSeed::new(19, "Chris Evans", "1981-06-13", Gender::Male, "Nam diễn viên người Mỹ, thủ vai Captain America."),
    PersonSeed::new(20, "Scarlett Johansson", "1984-11-22", Gender::Female, "Nữ diễn viên người Mỹ, thủ vai Black Widow."),
    PersonSeed::new(21, "Joss Whedon", "1964-06-23", Gender::Male, "Đạo diễn hai phần đầu của The Avengers."),
    PersonSeed::new(22, "Anthony Russo", "1970-02-03", Gender::Male, "Đạo diễn người Mỹ, thường cộng tác với em trai Joe Russo."),
    PersonSeed::new(23, "Joe Russo", "1971-07-18", Gender::Male, "Đạo diễn người Mỹ, thường cộng tác với anh trai Anthony Russo."),
    PersonSeed::new(24, "Matthew McConaughey", "1969-11-04", Gender::Male, "Nam diễn viên người Mỹ, thủ vai Cooper."),
    PersonSeed::new(25, "Anne Hathaway", "1982-11-12", Gender::Female, "Nữ diễn viên người Mỹ, thủ vai tiến sĩ Brand."),
    PersonSeed::new(26, "Hayao Miyazaki", "1941-01-05", Gender::Male, "Họa sĩ hoạt hình, đồng sáng lập Studio Ghibli."),
    PersonSeed::new(27, "Rumi Hiiragi", "1987-08-01", Gender::Female, "Nữ diễn viên lồng tiếng cho Chihiro."),
    PersonSeed::new(28, "Song Kang-ho", "1967-01-17", Gender::Male, "Nam diễn viên Hàn Quốc, thủ vai Kim Ki-taek."),
    PersonSeed::new(29, "Bong Joon-ho", "1969-09-14", Gender::Male, "Đạo diễn Hàn Quốc, đoạt giải Oscar cho Parasite."),
    PersonSeed::new(30, "Choi Woo-shik", "1990-03-26", Gender::Male, "Nam diễn viên Hàn Quốc, thủ vai Kim Ki-woo."),
];

pub const MOVIE_ACTORS: &[MovieActorSeed] = &[
    MovieActorSeed::new(1, 1, 1, "Harry Potter"),
    MovieActorSeed::new(2, 1, 2, "Hermione Granger"),
    MovieActorSeed::new(3, 1, 3, "Ron Weasley"),
    MovieActorSeed::new(4, 2, 1, "Harry Potter"),
    MovieActorSeed::new(5, 2, 2, "Hermione Granger"),
    MovieActorSeed::new(6, 2, 3, "Ron Weasley"),
    MovieActorSeed::new(7, 3, 5, "Bruce Wayne / Batman"),
    MovieActorSeed::new(8, 3, 6, "Joker"),
    MovieActorSeed::new(9, 4, 8, "Dom Cobb"),
    MovieActorSeed::new(10, 4, 9, "Arthur"),
    MovieActorSeed::new(11, 5, 10, "Eleven"),
    MovieActorSeed::new(12, 5, 11, "Mike Wheeler"),
    MovieActorSeed::new(13, 5, 12, "Jim Hopper"),
    MovieActorSeed::new(14, 6, 10, "Eleven"),
    MovieActorSeed::new(15, 6, 11, "Mike Wheeler"),
    MovieActorSeed::new(16, 6, 12, "Jim Hopper"),
    MovieActorSeed::new(17, 7, 15, "Walter White"),
    MovieActorSeed::new(18, 7, 16, "Jesse Pinkman"),
    MovieActorSeed::new(19, 8, 18, "Tony Stark / Iron Man"),
    MovieActorSeed::new(20, 8, 19, "Steve Rogers / Captain America"),
    MovieActorSeed::new(21, 8, 20, "Natasha Romanoff / Black Widow"),
    MovieActorSeed::new(22, 9, 18, "Tony Stark / Iron Man"),
    MovieActorSeed::new(23, 9, 19, "Steve Rogers / Captain America"),
    MovieActorSeed::new(24, 9, 20, "Natasha Romanoff / Black Widow"),
    MovieActorSeed::new(25, 10, 18, "Tony Stark / Iron Man"),
    MovieActorSeed::new(26, 10, 19, "Steve Rogers / Captain America"),
    MovieActorSeed::new(27, 10, 20, "Natasha Romanoff / Black Widow"),
    MovieActorSeed::new(28, 11, 18, "Tony Stark / Iron Man"),
    MovieActorSeed::new(29, 11, 19, "Steve Rogers / Captain America"),
    MovieActorSeed::new(30, 11, 20, "Natasha Romanoff / Black Widow"),
    MovieActorSeed::new(31, 12, 18, "Victor von Doom / Doctor Doom"),
    MovieActorSeed::new(32, 13, 24, "Cooper"),
    MovieActorSeed::new(33, 13, 25, "Brand"),
    MovieActorSeed::new(34, 14, 27, "Chihiro Ogino"),
    MovieActorSeed::new(35, 15, 28, "Kim Ki-taek"),
    MovieActorSeed::new(36, 15, 30, "Kim Ki-woo"),
];

pub const MOVIE_CREWS: &[MovieCrewSeed] = &[
    MovieCrewSeed::new(1, 1, 4, DIRECTOR),
    MovieCrewSeed::new(2, 2, 4, DIRECTOR),
    MovieCrewSeed::new(3, 3, 7, DIRECTOR),
    MovieCrewSeed::new(4, 3, 7, WRITER),
    MovieCrewSeed::new(5, 4, 7, DIRECTOR),
    MovieCrewSeed::new(6, 4, 7, WRITER),
    MovieCrewSeed::new(7, 5, 13, DIRECTOR),
    MovieCrewSeed::new(8, 5, 14, DIRECTOR),
    MovieCrewSeed::new(9, 6, 13, DIRECTOR),
    MovieCrewSeed::new(10, 6, 14, DIRECTOR),
    MovieCrewSeed::new(11, 7, 17, WRITER),
    MovieCrewSeed::new(12, 7, 17, PRODUCER),
    MovieCrewSeed::new(13, 8, 21, DIRECTOR),
    MovieCrewSeed::new(14, 9, 21, DIRECTOR),
    MovieCrewSeed::new(15, 10, 22, DIRECTOR),
    MovieCrewSeed::new(16, 10, 23, DIRECTOR),
    MovieCrewSeed::new(17, 11, 22, DIRECTOR),
    MovieCrewSeed::new(18, 11, 23, DIRECTOR),
    MovieCrewSeed::new(19, 12, 22, DIRECTOR),
    MovieCrewSeed::new(20, 12, 23, DIRECTOR),
    MovieCrewSeed::new(21, 13, 7, DIRECTOR),
    MovieCrewSeed::new(22, 14, 26, DIRECTOR),
    MovieCrewSeed::new(23, 14, 26, WRITER),
    MovieCrewSeed::new(24, 15, 29, DIRECTOR),
    MovieCrewSeed::new(25, 15, 29, WRITER),
];

pub const RATINGS: &[RatingSeed] = &[
    RatingSeed::new(1, 4.5, 1, 1),
    RatingSeed::new(2, 5.0, 2, 1),
    RatingSeed::new(3, 4.0, 3, 2),
    RatingSeed::new(4, 9.0, 1, 3),
    RatingSeed::new(5, 10.0, 2, 3),
    RatingSeed::new(6, 8.5, 4, 4),
    RatingSeed::new(7, 4.5, 3, 5),
    RatingSeed::new(8, 4.0, 5, 5),
    RatingSeed::new(9, 3.5, 2, 6),
    RatingSeed::new(10, 9.5, 1, 7),
    RatingSeed::new(11, 4.0, 4, 8),
    RatingSeed::new(12, 3.0, 5, 9),
    RatingSeed::new(13, 8.0, 3, 10),
    RatingSeed::new(14, 9.0, 2, 11),
    RatingSeed::new(15, 5.0, 4, 11),
    RatingSeed::new(16, 9.5, 5, 13),
    RatingSeed::new(17, 4.5, 1, 14),
    RatingSeed::new(18, 10.0, 3, 14),
    RatingSeed::new(19, 8.5, 4, 15),
    RatingSeed::new(20, 1.0, 5, 2),
];
