//! Shared application state handed to every handler.

use std::sync::Arc;

use crate::application::services::{CampService, SpeakerService, TalkService};
use crate::domain::repositories::{CampRepository, SpeakerRepository, TalkRepository};
use crate::infrastructure::persistence::InMemoryRepository;

pub type DynCampService = CampService<dyn CampRepository>;
pub type DynTalkService = TalkService<dyn CampRepository, dyn TalkRepository, dyn SpeakerRepository>;
pub type DynSpeakerService = SpeakerService<dyn SpeakerRepository>;

/// Services backed by whichever storage the server was started with.
#[derive(Clone)]
pub struct AppState {
    pub camp_service: Arc<DynCampService>,
    pub talk_service: Arc<DynTalkService>,
    pub speaker_service: Arc<DynSpeakerService>,
}

impl AppState {
    pub fn new(
        camps: Arc<dyn CampRepository>,
        talks: Arc<dyn TalkRepository>,
        speakers: Arc<dyn SpeakerRepository>,
    ) -> Self {
        Self {
            camp_service: Arc::new(CampService::new(camps.clone())),
            talk_service: Arc::new(TalkService::new(camps, talks, speakers.clone())),
            speaker_service: Arc::new(SpeakerService::new(speakers)),
        }
    }

    /// State whose three repositories share one in-process store.
    pub fn in_memory(repository: InMemoryRepository) -> Self {
        let repository = Arc::new(repository);
        Self::new(repository.clone(), repository.clone(), repository)
    }
}
