//! Integration tests for the movie listing/retrieval core: filter
//! composition, semi-join dedup, hydration of active relations, and the
//! soft-delete read contract.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_unfiltered_list_equals_active_set() {
    let app = helpers::TestApp::new().await;

    let director = app.seed_director("Director A").await;
    let first = app.seed_movie("First", director, &[], &[]).await;
    let second = app.seed_movie("Second", director, &[], &[]).await;
    let gone = app.seed_movie("Gone", director, &[], &[]).await;
    app.rpc("/api/movies/delete", json!({ "id": gone })).await;

    let listing = app
        .rpc("/api/movies/list", json!({ "page": 0, "page_size": 50 }))
        .await;
    assert_eq!(listing.status, StatusCode::OK);
    assert_eq!(listing.body["is_ok"], true);

    let ids: Vec<i64> = listing.body["value"]
        .as_array()
        .expect("listing payload")
        .iter()
        .map(|m| m["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![first, second]);
}

#[tokio::test]
async fn test_title_filter_is_case_insensitive_substring() {
    let app = helpers::TestApp::new().await;

    let director = app.seed_director("Director B").await;
    let alien = app.seed_movie("Alien", director, &[], &[]).await;
    app.seed_movie("Blade Runner", director, &[], &[]).await;
    let aliens = app.seed_movie("Aliens", director, &[], &[]).await;

    let listing = app
        .rpc(
            "/api/movies/list",
            json!({
                "page": 0,
                "page_size": 50,
                "filter_criteria": { "movie_title": "ALIEN" }
            }),
        )
        .await;

    let ids: Vec<i64> = listing.body["value"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![alien, aliens]);
}

#[tokio::test]
async fn test_genre_filter_matches_each_movie_at_most_once() {
    let app = helpers::TestApp::new().await;

    let director = app.seed_director("Director C").await;
    // Both genre names contain "dra", so a naive join would duplicate
    // the movie row; the semi-join must not.
    let drama = app.seed_genre("Drama").await;
    let melodrama = app.seed_genre("Melodrama").await;
    let comedy = app.seed_genre("Comedy").await;

    let both = app
        .seed_movie("Both Genres", director, &[], &[drama, melodrama])
        .await;
    app.seed_movie("Comedy Only", director, &[], &[comedy]).await;

    let listing = app
        .rpc(
            "/api/movies/list",
            json!({
                "page": 0,
                "page_size": 50,
                "filter_criteria": { "genre_name": "dra" }
            }),
        )
        .await;

    let ids: Vec<i64> = listing.body["value"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![both]);
}

#[tokio::test]
async fn test_filters_are_additive() {
    let app = helpers::TestApp::new().await;

    let director = app.seed_director("Director D").await;
    let horror = app.seed_genre("Horror").await;

    let match_both = app.seed_movie("Alien", director, &[], &[horror]).await;
    app.seed_movie("Alien Nation", director, &[], &[]).await;
    app.seed_movie("The Shining", director, &[], &[horror]).await;

    let listing = app
        .rpc(
            "/api/movies/list",
            json!({
                "page": 0,
                "page_size": 50,
                "filter_criteria": { "movie_title": "alien", "genre_name": "horror" }
            }),
        )
        .await;

    let ids: Vec<i64> = listing.body["value"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![match_both]);
}

#[tokio::test]
async fn test_hydration_surfaces_only_active_relations() {
    let app = helpers::TestApp::new().await;

    let director = app.seed_director("Director E").await;
    let staying = app.seed_actor("Staying Actor").await;
    let leaving = app.seed_actor("Leaving Actor").await;
    let genre = app.seed_genre("Thriller").await;

    let movie = app
        .seed_movie("Hydrated", director, &[staying, leaving], &[genre])
        .await;

    app.rpc("/api/actors/delete", json!({ "id": leaving })).await;

    let response = app
        .rpc("/api/movies/get-by-id", json!({ "id": movie }))
        .await;
    assert_eq!(response.body["is_ok"], true);

    let actors = response.body["value"]["actors"].as_array().unwrap();
    assert_eq!(actors.len(), 1);
    assert_eq!(actors[0]["id"].as_i64().unwrap(), staying);

    let genres = response.body["value"]["genres"].as_array().unwrap();
    assert_eq!(genres.len(), 1);
    assert_eq!(response.body["value"]["director"]["name"], "Director E");
}

#[tokio::test]
async fn test_soft_deleted_director_is_absent_not_an_error() {
    let app = helpers::TestApp::new().await;

    let director = app.seed_director("Vanishing Director").await;
    let movie = app.seed_movie("Orphaned", director, &[], &[]).await;

    app.rpc("/api/directors/delete", json!({ "id": director }))
        .await;

    let response = app
        .rpc("/api/movies/get-by-id", json!({ "id": movie }))
        .await;
    assert_eq!(response.body["is_ok"], true);
    assert!(response.body["value"]["director"].is_null());
    // The raw reference is still on the row.
    assert_eq!(response.body["value"]["director_id"].as_i64().unwrap(), director);
}

#[tokio::test]
async fn test_duplicate_active_title_is_rejected() {
    let app = helpers::TestApp::new().await;

    let director = app.seed_director("Director F").await;
    app.seed_movie("Unique", director, &[], &[]).await;

    let duplicate = app
        .rpc(
            "/api/movies/insert",
            json!({
                "title": "Unique",
                "synopsis": "again",
                "year": 2001,
                "rating": 5.0,
                "duration": 90,
                "director_id": director,
            }),
        )
        .await;
    assert_eq!(duplicate.status, StatusCode::OK);
    assert_eq!(duplicate.body["is_ok"], false);
    assert_eq!(duplicate.body["status"], 400);
}

#[tokio::test]
async fn test_delete_then_get_by_id_is_not_found() {
    let app = helpers::TestApp::new().await;

    let director = app.seed_director("Director G").await;
    let movie = app.seed_movie("Ephemeral", director, &[], &[]).await;

    app.rpc("/api/movies/delete", json!({ "id": movie })).await;

    let response = app
        .rpc("/api/movies/get-by-id", json!({ "id": movie }))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["is_ok"], false);
    assert_eq!(response.body["status"], 404);

    let listing = app
        .rpc("/api/movies/list", json!({ "page": 0, "page_size": 50 }))
        .await;
    assert!(listing.body["value"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_pagination_is_zero_based() {
    let app = helpers::TestApp::new().await;

    let director = app.seed_director("Director H").await;
    for n in 0..5 {
        app.seed_movie(&format!("Movie {n}"), director, &[], &[])
            .await;
    }

    let first = app
        .rpc("/api/movies/list", json!({ "page": 0, "page_size": 2 }))
        .await;
    let second = app
        .rpc("/api/movies/list", json!({ "page": 1, "page_size": 2 }))
        .await;

    let first_ids: Vec<i64> = first.body["value"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_i64().unwrap())
        .collect();
    let second_ids: Vec<i64> = second.body["value"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_i64().unwrap())
        .collect();

    assert_eq!(first_ids.len(), 2);
    assert_eq!(second_ids.len(), 2);
    assert!(first_ids.iter().all(|id| !second_ids.contains(id)));
}
