mod helpers;

use axum::http::StatusCode;
use db::models::lesson::Model as Lesson;
use helpers::{get, json_request, make_test_app, response_json};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn listing_returns_the_seeded_catalogue() {
    let (app, db) = make_test_app().await;
    db::seeders::lesson_seeder::seed_if_empty(&db).await.unwrap();

    let response = app.oneshot(get("/lessons")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Lessons retrieved successfully");

    let lessons = json["data"].as_array().expect("data should be an array");
    assert_eq!(lessons.len(), 10);

    let subjects: Vec<&str> = lessons
        .iter()
        .map(|l| l["subject"].as_str().unwrap())
        .collect();
    assert!(subjects.contains(&"Math"));
    assert!(subjects.contains(&"Swimming"));

    // Every seeded lesson starts with five spaces.
    assert!(lessons.iter().all(|l| l["spaces"] == 5));
}

#[tokio::test]
async fn listing_is_empty_before_seeding() {
    let (app, _db) = make_test_app().await;

    let response = app.oneshot(get("/lessons")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn get_single_lesson_by_id() {
    let (app, db) = make_test_app().await;
    let lesson = Lesson::create(&db, "Math", "London", 100, 5, "math.png")
        .await
        .unwrap();

    let response = app
        .oneshot(get(&format!("/lessons/{}", lesson.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["data"]["subject"], "Math");
    assert_eq!(json["data"]["location"], "London");
    assert_eq!(json["data"]["price"], 100);
}

#[tokio::test]
async fn get_unknown_lesson_is_404() {
    let (app, _db) = make_test_app().await;

    let response = app.oneshot(get("/lessons/999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = response_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Lesson not found");
}

#[tokio::test]
async fn edit_lesson_changes_only_the_given_fields() {
    let (app, db) = make_test_app().await;
    let lesson = Lesson::create(&db, "Math", "London", 100, 5, "math.png")
        .await
        .unwrap();

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/lessons/{}", lesson.id),
            json!({ "spaces": 2 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["message"], "Lesson updated successfully");
    assert_eq!(json["data"]["updated_fields"], json!(["spaces"]));
    assert_eq!(json["data"]["lesson"]["spaces"], 2);

    let reloaded = Lesson::get_by_id(&db, lesson.id).await.unwrap().unwrap();
    assert_eq!(reloaded.spaces, 2);
    assert_eq!(reloaded.subject, "Math");
    assert_eq!(reloaded.location, "London");
    assert_eq!(reloaded.price, 100);
    assert_eq!(reloaded.image, "math.png");
}

#[tokio::test]
async fn edit_lesson_accepts_multiple_fields() {
    let (app, db) = make_test_app().await;
    let lesson = Lesson::create(&db, "Art", "York", 50, 5, "art.png")
        .await
        .unwrap();

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/lessons/{}", lesson.id),
            json!({ "price": 55, "location": "Durham" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let reloaded = Lesson::get_by_id(&db, lesson.id).await.unwrap().unwrap();
    assert_eq!(reloaded.price, 55);
    assert_eq!(reloaded.location, "Durham");
    assert_eq!(reloaded.subject, "Art");
}

#[tokio::test]
async fn edit_lesson_applies_values_verbatim() {
    // Update performs no bounds validation, so a negative space count goes
    // straight through.
    let (app, db) = make_test_app().await;
    let lesson = Lesson::create(&db, "Music", "Manchester", 70, 5, "music.png")
        .await
        .unwrap();

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/lessons/{}", lesson.id),
            json!({ "spaces": -3 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let reloaded = Lesson::get_by_id(&db, lesson.id).await.unwrap().unwrap();
    assert_eq!(reloaded.spaces, -3);
}

#[tokio::test]
async fn edit_lesson_rejects_an_empty_update() {
    let (app, db) = make_test_app().await;
    let lesson = Lesson::create(&db, "Math", "London", 100, 5, "math.png")
        .await
        .unwrap();

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/lessons/{}", lesson.id),
            json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = response_json(response).await;
    assert_eq!(json["message"], "No updatable fields provided");
}

#[tokio::test]
async fn edit_lesson_rejects_a_missing_body() {
    let (app, db) = make_test_app().await;
    let lesson = Lesson::create(&db, "Math", "London", 100, 5, "math.png")
        .await
        .unwrap();

    let request = axum::http::Request::builder()
        .method("PUT")
        .uri(format!("/lessons/{}", lesson.id))
        .body(axum::body::Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn edit_unknown_lesson_is_404() {
    let (app, _db) = make_test_app().await;

    let response = app
        .oneshot(json_request("PUT", "/lessons/999", json!({ "spaces": 2 })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
