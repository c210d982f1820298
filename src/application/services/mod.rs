//! Business logic services for the application layer.

pub mod camp_service;
pub mod speaker_service;
pub mod talk_service;

pub use camp_service::CampService;
pub use speaker_service::SpeakerService;
pub use talk_service::TalkService;
