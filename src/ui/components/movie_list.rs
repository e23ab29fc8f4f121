use dioxus::prelude::*;

use crate::models::Movie;

use super::movie_card::MovieCard;

/// The catalog grid.
#[component]
pub fn MoviesList(movies: Vec<Movie>) -> Element {
    rsx! {
        div { class: "container",
            h1 { class: "page-title", "Movies" }

            if movies.is_empty() {
                div { class: "empty-state",
                    p { "No movies in your list yet. Find one to get started!" }
                }
            } else {
                div { class: "movies-grid",
                    for movie in movies {
                        MovieCard { movie }
                    }
                }
            }
        }
    }
}
