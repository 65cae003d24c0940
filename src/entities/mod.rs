pub mod prelude;

pub mod episodes;
pub mod genres;
pub mod movie_actors;
pub mod movie_crews;
pub mod movie_genres;
pub mod movies;
pub mod people;
pub mod ratings;
pub mod seasons;
