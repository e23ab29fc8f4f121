#![cfg(feature = "test-utils")]

mod support;

use marquee::catalog::add_unique;
use marquee::models::{Movie, PLACEHOLDER_POSTER_URL};
use marquee::omdb::{Lookup, MovieLookup, MoviePayload, OmdbError};
use marquee::search::SearchForm;
use marquee::test_support::MockMovieLookup;
use support::tracing_init;

fn found(imdb_id: &str, title: &str, poster: &str) -> Lookup {
    Lookup::Found(MoviePayload {
        title: title.to_string(),
        plot: format!("{title} happens."),
        poster: poster.to_string(),
        imdb_id: imdb_id.to_string(),
    })
}

/// Submit the current query and complete it against the mock, exactly
/// the way the FindMovie component drives the form.
async fn submit(form: &mut SearchForm, lookup: &MockMovieLookup) {
    let Some((ticket, title)) = form.begin_search() else {
        return;
    };

    match lookup.find_by_title(&title).await {
        Ok(outcome) => {
            form.resolve(ticket, outcome);
        }
        Err(_) => form.fail(ticket),
    }
}

#[tokio::test]
async fn search_preview_and_add_flow() {
    tracing_init();

    let lookup = MockMovieLookup::new();
    lookup.enqueue(Ok(found("tt0078748", "Alien", "N/A")));

    let mut form = SearchForm::new();
    form.set_query("alien");
    submit(&mut form, &lookup).await;

    assert_eq!(lookup.requests(), vec!["alien".to_string()]);
    let preview = form.result().expect("search should produce a preview");
    assert_eq!(preview.title, "Alien");
    assert_eq!(preview.img_url, PLACEHOLDER_POSTER_URL);

    let movie = form.take_result().expect("preview should be takeable");
    let movies = add_unique(Vec::new(), movie);

    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].imdb_id, "tt0078748");
    assert_eq!(form.query(), "");
    assert!(form.result().is_none());
}

#[tokio::test]
async fn adding_the_same_movie_twice_keeps_one_copy() {
    tracing_init();

    let lookup = MockMovieLookup::new();
    lookup.enqueue(Ok(found(
        "tt0078748",
        "Alien",
        "https://m.media-amazon.com/images/alien.jpg",
    )));
    lookup.enqueue(Ok(found(
        "tt0078748",
        "Alien",
        "https://m.media-amazon.com/images/alien.jpg",
    )));

    let mut movies: Vec<Movie> = Vec::new();
    let mut form = SearchForm::new();

    for _ in 0..2 {
        form.set_query("alien");
        submit(&mut form, &lookup).await;
        let movie = form.take_result().expect("preview should be takeable");
        movies = add_unique(movies, movie);
    }

    assert_eq!(movies.len(), 1);
    assert_eq!(
        movies[0].img_url,
        "https://m.media-amazon.com/images/alien.jpg"
    );
}

#[tokio::test]
async fn not_found_then_retype_then_found() {
    tracing_init();

    let lookup = MockMovieLookup::new();
    lookup.enqueue(Ok(Lookup::NotFound("Movie not found!".to_string())));
    lookup.enqueue(Ok(found("tt0090605", "Aliens", "N/A")));

    let mut form = SearchForm::new();
    form.set_query("alienz");
    submit(&mut form, &lookup).await;

    assert!(form.error());
    assert!(form.result().is_none());

    // Typing clears the error before the next submission.
    form.set_query("aliens");
    assert!(!form.error());

    submit(&mut form, &lookup).await;
    assert!(!form.error());
    assert_eq!(form.result().unwrap().title, "Aliens");
}

#[tokio::test]
async fn transport_error_leaves_the_form_usable() {
    tracing_init();

    let lookup = MockMovieLookup::new();
    lookup.enqueue(Err(OmdbError::RateLimit));
    lookup.enqueue(Ok(found("tt0078748", "Alien", "N/A")));

    let mut form = SearchForm::new();
    form.set_query("alien");
    submit(&mut form, &lookup).await;

    // Transport failures are not surfaced as the not-found error; the
    // busy indicator just comes down and the form can retry.
    assert!(!form.loading());
    assert!(!form.error());
    assert!(form.result().is_none());

    submit(&mut form, &lookup).await;
    assert_eq!(form.result().unwrap().title, "Alien");
}
