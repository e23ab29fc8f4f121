use dioxus::prelude::*;

use crate::models::Movie;

/// Card for a single movie, used both in the catalog grid and as the
/// search preview.
#[component]
pub fn MovieCard(movie: Movie) -> Element {
    rsx! {
        div { class: "card",
            div { class: "card-image",
                img { src: "{movie.img_url}", alt: "{movie.title} poster" }
            }
            div { class: "card-content",
                h3 { class: "card-title", "{movie.title}" }
                p { class: "card-description", "{movie.description}" }
                a {
                    href: "{movie.imdb_url}",
                    target: "_blank",
                    class: "card-link",
                    "IMDB"
                }
            }
        }
    }
}
