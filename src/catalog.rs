use crate::models::Movie;

/// Append a movie to the catalog unless one with the same IMDb id is
/// already present. Uniqueness is enforced on insert only; duplicates
/// already in the list are left as they are.
pub fn add_unique(mut movies: Vec<Movie>, movie: Movie) -> Vec<Movie> {
    if movies.iter().any(|m| m.imdb_id == movie.imdb_id) {
        return movies;
    }

    movies.push(movie);
    movies
}
