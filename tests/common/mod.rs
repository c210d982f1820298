#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::{NaiveDate, NaiveDateTime};
use code_camp::domain::entities::{
    Camp, CampInput, Location, NewSpeaker, NewTalk, Speaker, Talk,
};
use code_camp::domain::repositories::{
    CampRepository, SpeakerRepository, TalkRepository,
};
use code_camp::error::AppError;
use code_camp::infrastructure::persistence::InMemoryRepository;
use code_camp::routes::build_router;
use code_camp::state::AppState;
use serde_json::{Value, json};
use std::sync::Arc;

pub fn make_server(repo: InMemoryRepository) -> TestServer {
    TestServer::new(build_router(AppState::in_memory(repo))).unwrap()
}

/// Server whose storage fails every call.
pub fn failing_server() -> TestServer {
    let repo = Arc::new(FailingRepository);
    let state = AppState::new(repo.clone(), repo.clone(), repo);
    TestServer::new(build_router(state)).unwrap()
}

pub fn at_midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

pub async fn seed_camp(repo: &InMemoryRepository, moniker: &str, event_date: NaiveDateTime) -> Camp {
    repo.insert_camp(CampInput {
        name: format!("{moniker} Code Camp"),
        moniker: moniker.to_string(),
        event_date,
        length: 1,
        location: Location {
            venue_name: Some("Convention Center".to_string()),
            city_town: Some("Atlanta".to_string()),
            ..Location::default()
        },
    })
    .await
    .unwrap()
    .unwrap()
}

pub async fn seed_speaker(repo: &InMemoryRepository, first_name: &str, last_name: &str) -> Speaker {
    repo.insert_speaker(NewSpeaker {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        ..NewSpeaker::default()
    })
    .await
    .unwrap()
}

pub async fn seed_talk(repo: &InMemoryRepository, camp: &Camp, speaker: &Speaker, title: &str) -> Talk {
    repo.insert_talk(NewTalk {
        camp_id: camp.id,
        speaker_id: speaker.id,
        title: title.to_string(),
        abstract_text: "An abstract that is long enough to be valid".to_string(),
        level: 200,
    })
    .await
    .unwrap()
    .unwrap()
}

pub fn camp_body(moniker: &str) -> Value {
    json!({
        "name": "Atlanta Code Camp",
        "moniker": moniker,
        "eventDate": "2018-10-18T00:00:00",
        "length": 1,
        "venue": "Atlanta Convention Center",
        "locationCityTown": "Atlanta",
        "locationCountry": "USA"
    })
}

pub fn talk_body(speaker_id: Option<i64>) -> Value {
    let mut body = json!({
        "title": "Entity Framework From Scratch",
        "abstract": "Working with Entity Framework from the ground up",
        "level": 100
    });
    if let Some(id) = speaker_id {
        body["speaker"] = json!({ "speakerId": id });
    }
    body
}

/// Repository that reports a storage failure for every call.
pub struct FailingRepository;

fn storage_down() -> AppError {
    AppError::internal("Database error", json!({ "message": "connection refused" }))
}

#[async_trait]
impl CampRepository for FailingRepository {
    async fn list_camps(&self, _include_talks: bool) -> Result<Vec<Camp>, AppError> {
        Err(storage_down())
    }

    async fn find_camp(&self, _moniker: &str, _include_talks: bool) -> Result<Option<Camp>, AppError> {
        Err(storage_down())
    }

    async fn find_camps_by_event_date(
        &self,
        _date: NaiveDate,
        _include_talks: bool,
    ) -> Result<Vec<Camp>, AppError> {
        Err(storage_down())
    }

    async fn insert_camp(&self, _input: CampInput) -> Result<Option<Camp>, AppError> {
        Err(storage_down())
    }

    async fn update_camp(&self, _camp: &Camp) -> Result<bool, AppError> {
        Err(storage_down())
    }

    async fn delete_camp(&self, _camp_id: i64) -> Result<bool, AppError> {
        Err(storage_down())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(storage_down())
    }
}

#[async_trait]
impl TalkRepository for FailingRepository {
    async fn find_talks_by_moniker(
        &self,
        _moniker: &str,
        _include_speakers: bool,
    ) -> Result<Vec<Talk>, AppError> {
        Err(storage_down())
    }

    async fn find_talk_by_moniker(
        &self,
        _moniker: &str,
        _talk_id: i64,
        _include_speakers: bool,
    ) -> Result<Option<Talk>, AppError> {
        Err(storage_down())
    }

    async fn insert_talk(&self, _new_talk: NewTalk) -> Result<Option<Talk>, AppError> {
        Err(storage_down())
    }

    async fn update_talk(&self, _talk: &Talk) -> Result<bool, AppError> {
        Err(storage_down())
    }

    async fn delete_talk(&self, _talk_id: i64) -> Result<bool, AppError> {
        Err(storage_down())
    }
}

#[async_trait]
impl SpeakerRepository for FailingRepository {
    async fn find_speaker(&self, _speaker_id: i64) -> Result<Option<Speaker>, AppError> {
        Err(storage_down())
    }

    async fn list_speakers(&self) -> Result<Vec<Speaker>, AppError> {
        Err(storage_down())
    }

    async fn insert_speaker(&self, _new_speaker: NewSpeaker) -> Result<Speaker, AppError> {
        Err(storage_down())
    }
}
