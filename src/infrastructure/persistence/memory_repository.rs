//! In-memory implementation of the camp, talk and speaker repositories.
//!
//! Data lives in `BTreeMap`s behind one `Arc<RwLock<_>>`, so a single value can
//! be cloned into every service. Nothing is persisted; this backend exists for
//! tests and for running the API without PostgreSQL (`STORAGE_BACKEND=memory`).
//!
//! # Example
//!
//! ```rust,ignore
//! use code_camp::infrastructure::persistence::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::{Camp, CampInput, NewSpeaker, NewTalk, Speaker, Talk};
use crate::domain::repositories::{CampRepository, SpeakerRepository, TalkRepository};
use crate::error::AppError;

#[derive(Debug, Default)]
struct Store {
    camps: BTreeMap<i64, Camp>,
    talks: BTreeMap<i64, Talk>,
    speakers: BTreeMap<i64, Speaker>,
    next_camp_id: i64,
    next_talk_id: i64,
    next_speaker_id: i64,
}

impl Store {
    fn camp_by_moniker(&self, moniker: &str) -> Option<&Camp> {
        self.camps.values().find(|c| c.moniker == moniker)
    }

    /// Stored talks hold no speaker; attach a copy when asked to.
    fn hydrate_talk(&self, talk: &Talk, include_speaker: bool) -> Talk {
        let mut talk = talk.clone();
        talk.speaker = if include_speaker {
            self.speakers.get(&talk.speaker_id).cloned()
        } else {
            None
        };
        talk
    }

    fn hydrate_camp(&self, camp: &Camp, include_talks: bool) -> Camp {
        let mut camp = camp.clone();
        camp.talks = if include_talks {
            self.talks
                .values()
                .filter(|t| t.camp_id == camp.id)
                .map(|t| self.hydrate_talk(t, true))
                .collect()
        } else {
            Vec::new()
        };
        camp
    }

    fn talks_of(&self, moniker: &str) -> impl Iterator<Item = &Talk> {
        let camp_id = self.camp_by_moniker(moniker).map(|c| c.id);
        self.talks
            .values()
            .filter(move |t| Some(t.camp_id) == camp_id)
    }
}

/// In-memory storage backend.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CampRepository for InMemoryRepository {
    async fn list_camps(&self, include_talks: bool) -> Result<Vec<Camp>, AppError> {
        let store = self.store.read().await;
        let mut camps: Vec<Camp> = store
            .camps
            .values()
            .map(|c| store.hydrate_camp(c, include_talks))
            .collect();
        camps.sort_by(|a, b| b.event_date.cmp(&a.event_date).then(a.id.cmp(&b.id)));
        Ok(camps)
    }

    async fn find_camp(
        &self,
        moniker: &str,
        include_talks: bool,
    ) -> Result<Option<Camp>, AppError> {
        let store = self.store.read().await;
        Ok(store
            .camp_by_moniker(moniker)
            .map(|c| store.hydrate_camp(c, include_talks)))
    }

    async fn find_camps_by_event_date(
        &self,
        date: NaiveDate,
        include_talks: bool,
    ) -> Result<Vec<Camp>, AppError> {
        let store = self.store.read().await;
        let mut camps: Vec<Camp> = store
            .camps
            .values()
            .filter(|c| c.event_date.date() == date)
            .map(|c| store.hydrate_camp(c, include_talks))
            .collect();
        camps.sort_by(|a, b| a.event_date.cmp(&b.event_date).then(a.id.cmp(&b.id)));
        Ok(camps)
    }

    async fn insert_camp(&self, input: CampInput) -> Result<Option<Camp>, AppError> {
        let mut store = self.store.write().await;
        if store.camp_by_moniker(&input.moniker).is_some() {
            return Ok(None);
        }

        store.next_camp_id += 1;
        let camp = Camp::from_input(store.next_camp_id, input);
        store.camps.insert(camp.id, camp.clone());
        Ok(Some(camp))
    }

    async fn update_camp(&self, camp: &Camp) -> Result<bool, AppError> {
        let mut store = self.store.write().await;
        if store
            .camps
            .values()
            .any(|c| c.id != camp.id && c.moniker == camp.moniker)
        {
            return Ok(false);
        }
        match store.camps.get_mut(&camp.id) {
            Some(stored) => {
                let mut updated = camp.clone();
                updated.talks = Vec::new();
                *stored = updated;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_camp(&self, camp_id: i64) -> Result<bool, AppError> {
        let mut store = self.store.write().await;
        if store.camps.remove(&camp_id).is_none() {
            return Ok(false);
        }
        store.talks.retain(|_, t| t.camp_id != camp_id);
        Ok(true)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[async_trait]
impl TalkRepository for InMemoryRepository {
    async fn find_talks_by_moniker(
        &self,
        moniker: &str,
        include_speakers: bool,
    ) -> Result<Vec<Talk>, AppError> {
        let store = self.store.read().await;
        Ok(store
            .talks_of(moniker)
            .map(|t| store.hydrate_talk(t, include_speakers))
            .collect())
    }

    async fn find_talk_by_moniker(
        &self,
        moniker: &str,
        talk_id: i64,
        include_speakers: bool,
    ) -> Result<Option<Talk>, AppError> {
        let store = self.store.read().await;
        Ok(store
            .talks_of(moniker)
            .find(|t| t.id == talk_id)
            .map(|t| store.hydrate_talk(t, include_speakers)))
    }

    async fn insert_talk(&self, new_talk: NewTalk) -> Result<Option<Talk>, AppError> {
        let mut store = self.store.write().await;
        if !store.camps.contains_key(&new_talk.camp_id)
            || !store.speakers.contains_key(&new_talk.speaker_id)
        {
            return Ok(None);
        }

        store.next_talk_id += 1;
        let talk = Talk {
            id: store.next_talk_id,
            camp_id: new_talk.camp_id,
            speaker_id: new_talk.speaker_id,
            title: new_talk.title,
            abstract_text: new_talk.abstract_text,
            level: new_talk.level,
            speaker: None,
        };
        store.talks.insert(talk.id, talk.clone());
        Ok(Some(talk))
    }

    async fn update_talk(&self, talk: &Talk) -> Result<bool, AppError> {
        let mut store = self.store.write().await;
        let Some(stored) = store.talks.get_mut(&talk.id) else {
            return Ok(false);
        };

        stored.title = talk.title.clone();
        stored.abstract_text = talk.abstract_text.clone();
        stored.level = talk.level;
        stored.speaker_id = talk.speaker_id;
        Ok(true)
    }

    async fn delete_talk(&self, talk_id: i64) -> Result<bool, AppError> {
        let mut store = self.store.write().await;
        Ok(store.talks.remove(&talk_id).is_some())
    }
}

#[async_trait]
impl SpeakerRepository for InMemoryRepository {
    async fn find_speaker(&self, speaker_id: i64) -> Result<Option<Speaker>, AppError> {
        let store = self.store.read().await;
        Ok(store.speakers.get(&speaker_id).cloned())
    }

    async fn list_speakers(&self) -> Result<Vec<Speaker>, AppError> {
        let store = self.store.read().await;
        let mut speakers: Vec<Speaker> = store.speakers.values().cloned().collect();
        speakers.sort_by(|a, b| {
            (&a.last_name, &a.first_name, a.id).cmp(&(&b.last_name, &b.first_name, b.id))
        });
        Ok(speakers)
    }

    async fn insert_speaker(&self, new_speaker: NewSpeaker) -> Result<Speaker, AppError> {
        let mut store = self.store.write().await;
        store.next_speaker_id += 1;
        let speaker = Speaker::from_new(store.next_speaker_id, new_speaker);
        store.speakers.insert(speaker.id, speaker.clone());
        Ok(speaker)
    }
}
