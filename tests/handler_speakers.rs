mod common;

use axum::http::StatusCode;
use code_camp::infrastructure::persistence::InMemoryRepository;
use serde_json::{Value, json};

use common::{make_server, seed_speaker};

#[tokio::test]
async fn test_list_speakers_sorted_by_name() {
    let repo = InMemoryRepository::new();
    seed_speaker(&repo, "Shawn", "Wildermuth").await;
    seed_speaker(&repo, "Ada", "Lovelace").await;
    seed_speaker(&repo, "Resa", "Wildermuth").await;
    let server = make_server(repo);

    let response = server.get("/api/speakers").await;

    response.assert_status_ok();
    let names: Vec<String> = response
        .json::<Vec<Value>>()
        .iter()
        .map(|s| format!("{} {}", s["firstName"].as_str().unwrap(), s["lastName"].as_str().unwrap()))
        .collect();
    assert_eq!(names, ["Ada Lovelace", "Resa Wildermuth", "Shawn Wildermuth"]);
}

#[tokio::test]
async fn test_get_speaker() {
    let repo = InMemoryRepository::new();
    let speaker = seed_speaker(&repo, "Shawn", "Wildermuth").await;
    let server = make_server(repo);

    let response = server.get(&format!("/api/speakers/{}", speaker.id)).await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["lastName"], "Wildermuth");

    server.get("/api/speakers/4242").await.assert_status_not_found();
}

#[tokio::test]
async fn test_create_speaker() {
    let server = make_server(InMemoryRepository::new());

    let response = server
        .post("/api/speakers")
        .json(&json!({
            "speakerId": 999,
            "firstName": "Shawn",
            "lastName": "Wildermuth",
            "companyUrl": "https://wilderminds.com",
            "gitHub": "shawnwildermuth"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let json = response.json::<Value>();
    let id = json["speakerId"].as_i64().unwrap();
    assert_ne!(id, 999);
    assert_eq!(json["gitHub"], "shawnwildermuth");
    assert_eq!(
        response.header("location").to_str().unwrap(),
        format!("/api/speakers/{id}")
    );

    server.get(&format!("/api/speakers/{id}")).await.assert_status_ok();
}

#[tokio::test]
async fn test_create_speaker_validation() {
    let server = make_server(InMemoryRepository::new());

    let missing_name = server
        .post("/api/speakers")
        .json(&json!({ "firstName": "Shawn" }))
        .await;
    missing_name.assert_status_bad_request();

    let bad_url = server
        .post("/api/speakers")
        .json(&json!({ "firstName": "Shawn", "lastName": "Wildermuth", "blogUrl": "not a url" }))
        .await;
    bad_url.assert_status_bad_request();
    assert!(bad_url.json::<Value>()["error"]["details"].get("blog_url").is_some());
}

#[tokio::test]
async fn test_storage_failure_is_opaque_500() {
    let server = common::failing_server();

    let response = server.get("/api/speakers").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), "Database Failed");
}
