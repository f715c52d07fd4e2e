//! Integration tests for the uniform CRUD surfaces (actors, directors,
//! genres): soft delete, duplicate handling, date validation, and the
//! avatar no-op contract.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_genre_lifecycle_duplicate_then_reinsert_after_delete() {
    let app = helpers::TestApp::new().await;

    // First insert succeeds with a fresh id.
    let first = app.rpc("/api/genres/insert", json!({ "name": "Drama" })).await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body["is_ok"], true);
    assert_eq!(first.body["status"], 201);
    assert_eq!(first.body["value"]["id"], 1);
    assert_eq!(first.body["value"]["state"], true);

    // A second active "Drama" is rejected through the envelope.
    let duplicate = app.rpc("/api/genres/insert", json!({ "name": "Drama" })).await;
    assert_eq!(duplicate.status, StatusCode::OK);
    assert_eq!(duplicate.body["is_ok"], false);
    assert_eq!(duplicate.body["status"], 400);

    // Soft-delete the first row.
    let deleted = app.rpc("/api/genres/delete", json!({ "id": 1 })).await;
    assert_eq!(deleted.body["is_ok"], true);

    // Now the name only collides with an inactive row, so it goes in.
    let reinserted = app.rpc("/api/genres/insert", json!({ "name": "Drama" })).await;
    assert_eq!(reinserted.body["is_ok"], true);
    assert_ne!(reinserted.body["value"]["id"], 1);
}

#[tokio::test]
async fn test_list_excludes_soft_deleted_rows() {
    let app = helpers::TestApp::new().await;

    let keep = app.seed_genre("Horror").await;
    let drop = app.seed_genre("Western").await;

    let removed = app.rpc("/api/genres/delete", json!({ "id": drop })).await;
    assert_eq!(removed.body["is_ok"], true);

    let listing = app
        .rpc("/api/genres/list", json!({ "page": 0, "page_size": 50 }))
        .await;
    assert_eq!(listing.body["is_ok"], true);

    let ids: Vec<i64> = listing.body["value"]
        .as_array()
        .expect("listing payload")
        .iter()
        .map(|g| g["id"].as_i64().unwrap())
        .collect();
    assert!(ids.contains(&keep));
    assert!(!ids.contains(&drop));

    for genre in listing.body["value"].as_array().unwrap() {
        assert_eq!(genre["state"], true);
    }
}

#[tokio::test]
async fn test_list_carries_total_page_count() {
    let app = helpers::TestApp::new().await;

    for name in ["Crime", "Noir", "Musical"] {
        app.seed_genre(name).await;
    }

    let listing = app
        .rpc("/api/genres/list", json!({ "page": 0, "page_size": 2 }))
        .await;
    assert_eq!(listing.body["is_ok"], true);
    assert_eq!(listing.body["value"].as_array().unwrap().len(), 2);
    // 3 active rows at 2 per page.
    assert_eq!(listing.body["count"], 2);

    let second_page = app
        .rpc("/api/genres/list", json!({ "page": 1, "page_size": 2 }))
        .await;
    assert_eq!(second_page.body["value"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_invalid_birthdate_is_an_input_error_not_a_fault() {
    let app = helpers::TestApp::new().await;

    let response = app
        .rpc(
            "/api/actors/insert",
            json!({ "name": "Nobody", "birthdate": "1990-02-30" }),
        )
        .await;

    // The transport call completes; only the envelope signals the failure.
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["is_ok"], false);
    assert_eq!(response.body["status"], 400);

    let malformed = app
        .rpc(
            "/api/actors/insert",
            json!({ "name": "Nobody", "birthdate": "15/06/1990" }),
        )
        .await;
    assert_eq!(malformed.body["status"], 400);
}

#[tokio::test]
async fn test_update_with_hosted_url_keeps_stored_avatar() {
    let app = helpers::TestApp::new().await;

    let hosted = "https://media.example.com/actor/original.png";
    let insert = app
        .rpc(
            "/api/actors/insert",
            json!({ "name": "Jodie Foster", "birthdate": "1962-11-19", "avatar": hosted }),
        )
        .await;
    assert_eq!(insert.body["is_ok"], true);
    let id = insert.body["value"]["id"].as_i64().unwrap();
    assert_eq!(insert.body["value"]["avatar"], hosted);

    // Sending the hosted URL back is a no-op for the avatar column.
    let update = app
        .rpc(
            "/api/actors/update",
            json!({ "id": id, "name": "Jodie Foster", "birthdate": "1962-11-19", "avatar": hosted }),
        )
        .await;
    assert_eq!(update.body["is_ok"], true);

    let stored: Option<String> =
        sqlx::query_scalar("SELECT avatar FROM actors WHERE id = $1")
            .bind(id)
            .fetch_one(&app.db_pool)
            .await
            .expect("avatar lookup");
    assert_eq!(stored.as_deref(), Some(hosted));
}

#[tokio::test]
async fn test_update_changes_scalar_fields() {
    let app = helpers::TestApp::new().await;

    let id = app.seed_director("Ridley Scott").await;

    let update = app
        .rpc(
            "/api/directors/update",
            json!({ "id": id, "name": "Sir Ridley Scott", "birthdate": "1937-11-30" }),
        )
        .await;
    assert_eq!(update.body["is_ok"], true);

    let listing = app
        .rpc("/api/directors/list", json!({ "page": 0, "page_size": 10 }))
        .await;
    let directors = listing.body["value"].as_array().unwrap();
    assert_eq!(directors.len(), 1);
    assert_eq!(directors[0]["name"], "Sir Ridley Scott");
    assert_eq!(directors[0]["birthdate"], "1937-11-30");
}

#[tokio::test]
async fn test_delete_unknown_id_still_reports_success() {
    let app = helpers::TestApp::new().await;

    let response = app.rpc("/api/actors/delete", json!({ "id": 424242 })).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["is_ok"], true);
}
