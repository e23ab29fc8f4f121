use dioxus::prelude::*;
use tracing::warn;

use crate::models::Movie;
use crate::search::SearchForm;
use crate::ui::AppContext;

use super::movie_card::MovieCard;

/// Find-movie form: looks a title up on OMDb, previews the match, and
/// hands it to the parent through `on_add_movie` when the user adds it.
#[component]
pub fn FindMovie(on_add_movie: EventHandler<Movie>) -> Element {
    let context = use_context::<AppContext>();
    let mut form = use_signal(SearchForm::new);

    let query = form.read().query().to_string();
    let loading = form.read().loading();
    let error = form.read().error();
    let preview = form.read().result().cloned();

    let run_search = {
        let context = context.clone();
        move || {
            let Some((ticket, title)) = form.write().begin_search() else {
                return;
            };

            let lookup = context.lookup.clone();
            spawn(async move {
                match lookup.find_by_title(&title).await {
                    Ok(outcome) => {
                        form.write().resolve(ticket, outcome);
                    }
                    Err(e) => {
                        warn!("Lookup for '{}' failed: {}", title, e);
                        form.write().fail(ticket);
                    }
                }
            });
        }
    };

    rsx! {
        div { class: "find-movie",
            div { class: "field",
                label { class: "label", r#for: "movie-title-field", "Movie title" }
                input {
                    id: "movie-title-field",
                    class: "input",
                    placeholder: "Enter a title to search",
                    value: "{query}",
                    oninput: move |event: FormEvent| {
                        form.write().set_query(event.value());
                    },
                    onkeydown: {
                        let mut run_search = run_search.clone();
                        move |event: KeyboardEvent| {
                            if event.key() == Key::Enter {
                                run_search();
                            }
                        }
                    },
                }

                if error {
                    p { id: "movie-search-error", class: "error-message",
                        "Can't find a movie with such a title"
                    }
                }
            }

            div { class: "field is-grouped",
                button {
                    id: "movie-search-button",
                    class: "button",
                    disabled: query.is_empty(),
                    onclick: {
                        let mut run_search = run_search.clone();
                        move |_| run_search()
                    },
                    if loading {
                        "Searching..."
                    } else if preview.is_some() {
                        "Search again"
                    } else {
                        "Find a movie"
                    }
                }

                if preview.is_some() {
                    button {
                        id: "movie-add-button",
                        class: "button is-primary",
                        onclick: move |_| {
                            if let Some(movie) = form.write().take_result() {
                                on_add_movie.call(movie);
                            }
                        },
                        "Add to the list"
                    }
                }
            }
        }

        if let Some(movie) = preview {
            div { id: "movie-preview", class: "preview",
                h2 { class: "preview-title", "Preview" }
                MovieCard { movie }
            }
        }
    }
}
