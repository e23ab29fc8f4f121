use dioxus::prelude::*;
use tracing::debug;

use crate::catalog;
use crate::models::Movie;
use crate::ui::{AppContext, MAIN_CSS};

use super::find_movie::FindMovie;
use super::movie_list::MoviesList;

#[component]
pub fn App() -> Element {
    debug!("Rendering app component");

    let context = use_hook(AppContext::from_env);
    use_context_provider(|| context);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Catalog {}
    }
}

/// Main page: the catalog on one side, the find-movie form on the
/// other. The page owns the movie list; the form only hands movies up
/// through its callback and the list is extended with
/// [`catalog::add_unique`].
#[component]
fn Catalog() -> Element {
    let mut movies = use_signal(Vec::<Movie>::new);

    rsx! {
        div { class: "page",
            div { class: "page-content",
                MoviesList { movies: movies() }
            }
            div { class: "sidebar",
                FindMovie {
                    on_add_movie: move |movie: Movie| {
                        movies.set(catalog::add_unique(movies(), movie));
                    },
                }
            }
        }
    }
}
