pub mod app;
pub mod find_movie;
pub mod movie_card;
pub mod movie_list;

pub use app::App;
pub use find_movie::FindMovie;
pub use movie_card::MovieCard;
pub use movie_list::MoviesList;
