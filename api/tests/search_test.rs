mod helpers;

use axum::http::StatusCode;
use db::models::lesson::Model as Lesson;
use helpers::{get, make_test_app, response_json};
use tower::ServiceExt;

#[tokio::test]
async fn search_matches_subjects_case_insensitively() {
    let (app, db) = make_test_app().await;
    Lesson::create(&db, "Math", "London", 100, 5, "math.png")
        .await
        .unwrap();
    Lesson::create(&db, "Art", "York", 50, 5, "art.png")
        .await
        .unwrap();

    let response = app.oneshot(get("/search?q=math")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["message"], "Search completed successfully");

    let results = json["data"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["subject"], "Math");
}

#[tokio::test]
async fn search_matches_locations() {
    let (app, db) = make_test_app().await;
    Lesson::create(&db, "Math", "London", 100, 5, "math.png")
        .await
        .unwrap();
    Lesson::create(&db, "Art", "York", 50, 5, "art.png")
        .await
        .unwrap();

    let response = app.oneshot(get("/search?q=york")).await.unwrap();
    let json = response_json(response).await;

    let results = json["data"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["subject"], "Art");
}

#[tokio::test]
async fn numeric_search_matches_price_and_spaces() {
    let (app, db) = make_test_app().await;
    Lesson::create(&db, "Art", "York", 50, 5, "art.png")
        .await
        .unwrap();
    Lesson::create(&db, "Drama", "Leeds", 60, 50, "drama.png")
        .await
        .unwrap();
    Lesson::create(&db, "Music", "Manchester", 70, 5, "music.png")
        .await
        .unwrap();

    let response = app.oneshot(get("/search?q=50")).await.unwrap();
    let json = response_json(response).await;

    let results = json["data"].as_array().unwrap();
    let subjects: Vec<&str> = results
        .iter()
        .map(|l| l["subject"].as_str().unwrap())
        .collect();
    assert_eq!(subjects, vec!["Art", "Drama"]);
}

#[tokio::test]
async fn text_and_numeric_hits_are_deduplicated() {
    let (app, db) = make_test_app().await;
    // Matches "50" both as a location substring and as a price.
    Lesson::create(&db, "Art", "Studio 50", 50, 5, "art.png")
        .await
        .unwrap();

    let response = app.oneshot(get("/search?q=50")).await.unwrap();
    let json = response_json(response).await;

    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn non_numeric_query_only_matches_text_fields() {
    let (app, db) = make_test_app().await;
    Lesson::create(&db, "Chess", "Brighton", 40, 5, "chess.png")
        .await
        .unwrap();

    let response = app.oneshot(get("/search?q=bright")).await.unwrap();
    let json = response_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn unmatched_query_returns_an_empty_set() {
    let (app, db) = make_test_app().await;
    Lesson::create(&db, "Chess", "Brighton", 40, 5, "chess.png")
        .await
        .unwrap();

    let response = app.oneshot(get("/search?q=karate")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn search_without_a_query_is_rejected() {
    let (app, _db) = make_test_app().await;

    let response = app.oneshot(get("/search")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = response_json(response).await;
    assert_eq!(json["message"], "Missing search query parameter 'q'");
}

#[tokio::test]
async fn empty_query_matches_everything() {
    let (app, db) = make_test_app().await;
    Lesson::create(&db, "Math", "London", 100, 5, "math.png")
        .await
        .unwrap();
    Lesson::create(&db, "Art", "York", 50, 5, "art.png")
        .await
        .unwrap();

    let response = app.oneshot(get("/search?q=")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}
