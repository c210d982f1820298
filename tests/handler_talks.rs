mod common;

use axum::http::StatusCode;
use code_camp::domain::repositories::TalkRepository;
use code_camp::infrastructure::persistence::InMemoryRepository;
use serde_json::{Value, json};

use common::{at_midnight, make_server, seed_camp, seed_speaker, seed_talk, talk_body};

// ─── LIST ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_talks_unknown_camp_is_empty() {
    let server = make_server(InMemoryRepository::new());

    let response = server.get("/api/camps/NOPE/talks").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_list_talks_with_speakers() {
    let repo = InMemoryRepository::new();
    let atl = seed_camp(&repo, "ATL2018", at_midnight(2018, 10, 18)).await;
    let sea = seed_camp(&repo, "SEA2018", at_midnight(2018, 6, 1)).await;
    let speaker = seed_speaker(&repo, "Shawn", "Wildermuth").await;
    seed_talk(&repo, &atl, &speaker, "First").await;
    seed_talk(&repo, &atl, &speaker, "Second").await;
    seed_talk(&repo, &sea, &speaker, "Elsewhere").await;
    let server = make_server(repo);

    let response = server.get("/api/camps/ATL2018/talks").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    let talks = json.as_array().unwrap();
    assert_eq!(talks.len(), 2);
    assert_eq!(talks[0]["title"], "First");
    assert_eq!(talks[0]["speaker"]["speakerId"], speaker.id);
    assert_eq!(talks[0]["speaker"]["firstName"], "Shawn");
}

// ─── GET ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_talk() {
    let repo = InMemoryRepository::new();
    let camp = seed_camp(&repo, "ATL2018", at_midnight(2018, 10, 18)).await;
    let speaker = seed_speaker(&repo, "Shawn", "Wildermuth").await;
    let talk = seed_talk(&repo, &camp, &speaker, "Entity Framework").await;
    let server = make_server(repo);

    let response = server.get(&format!("/api/camps/ATL2018/talks/{}", talk.id)).await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["talkId"], talk.id);
    assert_eq!(json["abstract"], "An abstract that is long enough to be valid");
    assert_eq!(json["level"], 200);
    assert_eq!(json["speaker"]["lastName"], "Wildermuth");
}

#[tokio::test]
async fn test_get_talk_of_another_camp_is_not_found() {
    let repo = InMemoryRepository::new();
    let atl = seed_camp(&repo, "ATL2018", at_midnight(2018, 10, 18)).await;
    seed_camp(&repo, "SEA2018", at_midnight(2018, 6, 1)).await;
    let speaker = seed_speaker(&repo, "Shawn", "Wildermuth").await;
    let talk = seed_talk(&repo, &atl, &speaker, "Atlanta only").await;
    let server = make_server(repo);

    let response = server.get(&format!("/api/camps/SEA2018/talks/{}", talk.id)).await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_get_talk_non_numeric_id() {
    let server = make_server(InMemoryRepository::new());

    let response = server.get("/api/camps/ATL2018/talks/abc").await;

    response.assert_status_bad_request();
}

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_talk() {
    let repo = InMemoryRepository::new();
    seed_camp(&repo, "ATL2018", at_midnight(2018, 10, 18)).await;
    let speaker = seed_speaker(&repo, "Shawn", "Wildermuth").await;
    let server = make_server(repo);

    let response = server
        .post("/api/camps/ATL2018/talks")
        .json(&talk_body(Some(speaker.id)))
        .await;

    response.assert_status(StatusCode::CREATED);
    let json = response.json::<Value>();
    let talk_id = json["talkId"].as_i64().unwrap();
    assert_eq!(json["speaker"]["speakerId"], speaker.id);
    assert_eq!(json["speaker"]["lastName"], "Wildermuth");

    let location = response.header("location");
    assert_eq!(
        location.to_str().unwrap(),
        format!("/api/camps/ATL2018/talks/{talk_id}")
    );

    let fetched = server.get(location.to_str().unwrap()).await;
    fetched.assert_status_ok();
    assert_eq!(fetched.json::<Value>()["title"], "Entity Framework From Scratch");
}

#[tokio::test]
async fn test_create_talk_ignores_client_talk_id() {
    let repo = InMemoryRepository::new();
    seed_camp(&repo, "ATL2018", at_midnight(2018, 10, 18)).await;
    let speaker = seed_speaker(&repo, "Shawn", "Wildermuth").await;
    let server = make_server(repo);

    let mut body = talk_body(Some(speaker.id));
    body["talkId"] = json!(999);
    let response = server.post("/api/camps/ATL2018/talks").json(&body).await;

    response.assert_status(StatusCode::CREATED);
    assert_ne!(response.json::<Value>()["talkId"], 999);
}

#[tokio::test]
async fn test_create_talk_business_rules() {
    let repo = InMemoryRepository::new();
    seed_camp(&repo, "ATL2018", at_midnight(2018, 10, 18)).await;
    let speaker = seed_speaker(&repo, "Shawn", "Wildermuth").await;
    let server = make_server(repo);

    let no_camp = server
        .post("/api/camps/NOPE/talks")
        .json(&talk_body(Some(speaker.id)))
        .await;
    no_camp.assert_status_bad_request();
    assert_eq!(no_camp.text(), "Camp does not exist");

    let no_speaker = server
        .post("/api/camps/ATL2018/talks")
        .json(&talk_body(None))
        .await;
    no_speaker.assert_status_bad_request();
    assert_eq!(no_speaker.text(), "Speaker ID is required");

    let unknown_speaker = server
        .post("/api/camps/ATL2018/talks")
        .json(&talk_body(Some(4242)))
        .await;
    unknown_speaker.assert_status_bad_request();
    assert_eq!(unknown_speaker.text(), "Speaker could not be found");

    let talks = server.get("/api/camps/ATL2018/talks").await;
    assert_eq!(talks.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_create_talk_under_unaddressable_moniker_stores_nothing() {
    let repo = InMemoryRepository::new();
    seed_camp(&repo, "ATL 2018", at_midnight(2018, 10, 18)).await;
    let speaker = seed_speaker(&repo, "Shawn", "Wildermuth").await;
    let server = make_server(repo.clone());

    let response = server
        .post("/api/camps/ATL%202018/talks")
        .json(&talk_body(Some(speaker.id)))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.text(), "Could not use current moniker");

    let stored = repo.find_talks_by_moniker("ATL 2018", false).await.unwrap();
    assert!(stored.is_empty());
}

#[tokio::test]
async fn test_create_talk_field_rules() {
    let repo = InMemoryRepository::new();
    seed_camp(&repo, "ATL2018", at_midnight(2018, 10, 18)).await;
    let speaker = seed_speaker(&repo, "Shawn", "Wildermuth").await;
    let server = make_server(repo);

    let cases = [
        ("title", json!("x".repeat(101))),
        ("title", json!("")),
        ("abstract", json!("too short")),
        ("abstract", json!("y".repeat(401))),
        ("level", json!(99)),
        ("level", json!(501)),
    ];

    for (field, value) in cases {
        let mut body = talk_body(Some(speaker.id));
        body[field] = value;

        let response = server.post("/api/camps/ATL2018/talks").json(&body).await;

        response.assert_status_bad_request();
        assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
    }

    let mut boundary = talk_body(Some(speaker.id));
    boundary["title"] = json!("x".repeat(100));
    boundary["abstract"] = json!("y".repeat(20));
    boundary["level"] = json!(500);
    let response = server.post("/api/camps/ATL2018/talks").json(&boundary).await;
    response.assert_status(StatusCode::CREATED);
}

// ─── UPDATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_talk_content() {
    let repo = InMemoryRepository::new();
    let camp = seed_camp(&repo, "ATL2018", at_midnight(2018, 10, 18)).await;
    let speaker = seed_speaker(&repo, "Shawn", "Wildermuth").await;
    let talk = seed_talk(&repo, &camp, &speaker, "Draft").await;
    let server = make_server(repo);

    let mut body = talk_body(None);
    body["title"] = json!("Final title");
    body["level"] = json!(300);
    let path = format!("/api/camps/ATL2018/talks/{}", talk.id);
    let response = server.put(&path).json(&body).await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["title"], "Final title");
    assert_eq!(json["level"], 300);
    assert_eq!(json["speaker"]["speakerId"], speaker.id);

    let fetched = server.get(&path).await.json::<Value>();
    assert_eq!(fetched["title"], "Final title");
}

#[tokio::test]
async fn test_update_talk_reassigns_known_speaker_only() {
    let repo = InMemoryRepository::new();
    let camp = seed_camp(&repo, "ATL2018", at_midnight(2018, 10, 18)).await;
    let original = seed_speaker(&repo, "Shawn", "Wildermuth").await;
    let replacement = seed_speaker(&repo, "Resa", "Wildermuth").await;
    let talk = seed_talk(&repo, &camp, &original, "Shared talk").await;
    let server = make_server(repo);
    let path = format!("/api/camps/ATL2018/talks/{}", talk.id);

    let unknown = server.put(&path).json(&talk_body(Some(4242))).await;
    unknown.assert_status_ok();
    assert_eq!(unknown.json::<Value>()["speaker"]["speakerId"], original.id);

    let known = server.put(&path).json(&talk_body(Some(replacement.id))).await;
    known.assert_status_ok();
    assert_eq!(known.json::<Value>()["speaker"]["firstName"], "Resa");

    let fetched = server.get(&path).await.json::<Value>();
    assert_eq!(fetched["speaker"]["speakerId"], replacement.id);
}

#[tokio::test]
async fn test_update_talk_not_found() {
    let repo = InMemoryRepository::new();
    seed_camp(&repo, "ATL2018", at_midnight(2018, 10, 18)).await;
    let server = make_server(repo);

    let response = server
        .put("/api/camps/ATL2018/talks/77")
        .json(&talk_body(None))
        .await;

    response.assert_status_not_found();
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_talk() {
    let repo = InMemoryRepository::new();
    let camp = seed_camp(&repo, "ATL2018", at_midnight(2018, 10, 18)).await;
    let speaker = seed_speaker(&repo, "Shawn", "Wildermuth").await;
    let talk = seed_talk(&repo, &camp, &speaker, "Cancelled").await;
    let server = make_server(repo);
    let path = format!("/api/camps/ATL2018/talks/{}", talk.id);

    server.delete(&path).await.assert_status_ok();
    server.get(&path).await.assert_status_not_found();
    server.delete(&path).await.assert_status_not_found();
}

// ─── STORAGE FAILURE ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_storage_failure_is_opaque_500() {
    let server = common::failing_server();

    let responses = [
        server.get("/api/camps/ATL2018/talks").await,
        server.get("/api/camps/ATL2018/talks/1").await,
        server
            .post("/api/camps/ATL2018/talks")
            .json(&talk_body(Some(1)))
            .await,
        server
            .put("/api/camps/ATL2018/talks/1")
            .json(&talk_body(Some(1)))
            .await,
        server.delete("/api/camps/ATL2018/talks/1").await,
    ];

    for response in responses {
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.text(), "Database Failed");
    }
}
