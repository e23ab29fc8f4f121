use serde::{Deserialize, Serialize};

use crate::omdb::MoviePayload;

/// Shown in place of a poster when OMDb has none for the title.
pub const PLACEHOLDER_POSTER_URL: &str =
    "https://via.placeholder.com/360x270.png?text=no%20preview";

/// OMDb reports a missing poster as this literal string, not as an
/// absent field.
const POSTER_MISSING_SENTINEL: &str = "N/A";

const IMDB_TITLE_BASE_URL: &str = "https://www.imdb.com/title";

/// A movie in the catalog, normalized from the raw OMDb payload.
///
/// `imdb_id` is the uniqueness key for catalog membership.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub title: String,
    pub description: String,
    pub img_url: String,
    pub imdb_url: String,
    pub imdb_id: String,
}

impl From<MoviePayload> for Movie {
    fn from(payload: MoviePayload) -> Self {
        let img_url = if payload.poster == POSTER_MISSING_SENTINEL {
            PLACEHOLDER_POSTER_URL.to_string()
        } else {
            payload.poster
        };

        Movie {
            imdb_url: format!("{}/{}", IMDB_TITLE_BASE_URL, payload.imdb_id),
            title: payload.title,
            description: payload.plot,
            img_url,
            imdb_id: payload.imdb_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(poster: &str) -> MoviePayload {
        MoviePayload {
            title: "Blade Runner".to_string(),
            plot: "A blade runner must pursue and terminate four replicants."
                .to_string(),
            poster: poster.to_string(),
            imdb_id: "tt0083658".to_string(),
        }
    }

    #[test]
    fn real_poster_is_used_unchanged() {
        let movie = Movie::from(payload("https://m.media-amazon.com/images/br.jpg"));
        assert_eq!(movie.img_url, "https://m.media-amazon.com/images/br.jpg");
    }

    #[test]
    fn missing_poster_falls_back_to_placeholder() {
        let movie = Movie::from(payload("N/A"));
        assert_eq!(movie.img_url, PLACEHOLDER_POSTER_URL);
    }

    #[test]
    fn imdb_url_is_derived_from_the_id() {
        let movie = Movie::from(payload("N/A"));
        assert_eq!(movie.imdb_url, "https://www.imdb.com/title/tt0083658");
        assert_eq!(movie.imdb_id, "tt0083658");
    }

    #[test]
    fn title_and_plot_map_straight_through() {
        let movie = Movie::from(payload("N/A"));
        assert_eq!(movie.title, "Blade Runner");
        assert_eq!(
            movie.description,
            "A blade runner must pursue and terminate four replicants."
        );
    }
}
