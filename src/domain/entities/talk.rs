//! Talk entity: a presentation at one camp by one speaker.

use super::speaker::Speaker;

/// A scheduled presentation.
///
/// `speaker_id` is always set; `speaker` is only populated when the repository
/// was asked to include speakers.
#[derive(Debug, Clone)]
pub struct Talk {
    pub id: i64,
    pub camp_id: i64,
    pub speaker_id: i64,
    pub title: String,
    pub abstract_text: String,
    pub level: i32,
    pub speaker: Option<Speaker>,
}

impl Talk {
    /// Overwrites title, abstract and level. Camp and speaker links are untouched.
    pub fn apply(&mut self, input: &TalkInput) {
        self.title = input.title.clone();
        self.abstract_text = input.abstract_text.clone();
        self.level = input.level;
    }

    /// Points the talk at a different speaker.
    pub fn attach_speaker(&mut self, speaker: Speaker) {
        self.speaker_id = speaker.id;
        self.speaker = Some(speaker);
    }
}

/// Client-supplied talk fields.
///
/// `speaker_id` is the optional speaker reference carried in the payload.
#[derive(Debug, Clone)]
pub struct TalkInput {
    pub title: String,
    pub abstract_text: String,
    pub level: i32,
    pub speaker_id: Option<i64>,
}

/// A talk with its camp and speaker resolved, ready to be stored.
#[derive(Debug, Clone)]
pub struct NewTalk {
    pub camp_id: i64,
    pub speaker_id: i64,
    pub title: String,
    pub abstract_text: String,
    pub level: i32,
}
