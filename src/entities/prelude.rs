pub use super::episodes::Entity as Episodes;
pub use super::genres::Entity as Genres;
pub use super::movie_actors::Entity as MovieActors;
pub use super::movie_crews::Entity as MovieCrews;
pub use super::movie_genres::Entity as MovieGenres;
pub use super::movies::Entity as Movies;
pub use super::people::Entity as People;
pub use super::ratings::Entity as Ratings;
pub use super::seasons::Entity as Seasons;
