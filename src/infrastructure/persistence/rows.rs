//! Row types shared by the PostgreSQL repositories.
//!
//! Queries are built at runtime with `query_as`, so rows are decoded through
//! `FromRow` rather than the compile-time checked macros.

use chrono::NaiveDateTime;
use sqlx::FromRow;

use crate::domain::entities::{Camp, Location, Speaker, Talk};

pub(crate) const CAMP_COLUMNS: &str = "id, name, moniker, event_date, length, venue_name, \
     address1, address2, address3, city_town, state_province, postal_code, country";

pub(crate) const TALK_COLUMNS: &str =
    "t.id, t.camp_id, t.speaker_id, t.title, t.abstract AS abstract_text, t.level";

pub(crate) const SPEAKER_COLUMNS: &str =
    "id, first_name, last_name, middle_name, company, company_url, blog_url, twitter, github";

/// Talk columns plus the joined speaker's columns (aliased `s`).
pub(crate) const TALK_WITH_SPEAKER_COLUMNS: &str = "t.id, t.camp_id, t.speaker_id, t.title, \
     t.abstract AS abstract_text, t.level, s.first_name, s.last_name, s.middle_name, \
     s.company, s.company_url, s.blog_url, s.twitter, s.github";

#[derive(Debug, FromRow)]
pub(crate) struct CampRow {
    pub id: i64,
    pub name: String,
    pub moniker: String,
    pub event_date: NaiveDateTime,
    pub length: i32,
    pub venue_name: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub address3: Option<String>,
    pub city_town: Option<String>,
    pub state_province: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

impl From<CampRow> for Camp {
    fn from(r: CampRow) -> Self {
        Camp {
            id: r.id,
            name: r.name,
            moniker: r.moniker,
            event_date: r.event_date,
            length: r.length,
            location: Location {
                venue_name: r.venue_name,
                address1: r.address1,
                address2: r.address2,
                address3: r.address3,
                city_town: r.city_town,
                state_province: r.state_province,
                postal_code: r.postal_code,
                country: r.country,
            },
            talks: Vec::new(),
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct TalkRow {
    pub id: i64,
    pub camp_id: i64,
    pub speaker_id: i64,
    pub title: String,
    pub abstract_text: String,
    pub level: i32,
}

impl From<TalkRow> for Talk {
    fn from(r: TalkRow) -> Self {
        Talk {
            id: r.id,
            camp_id: r.camp_id,
            speaker_id: r.speaker_id,
            title: r.title,
            abstract_text: r.abstract_text,
            level: r.level,
            speaker: None,
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct TalkWithSpeakerRow {
    #[sqlx(flatten)]
    pub talk: TalkRow,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub company: Option<String>,
    pub company_url: Option<String>,
    pub blog_url: Option<String>,
    pub twitter: Option<String>,
    pub github: Option<String>,
}

impl From<TalkWithSpeakerRow> for Talk {
    fn from(r: TalkWithSpeakerRow) -> Self {
        let speaker = Speaker {
            id: r.talk.speaker_id,
            first_name: r.first_name,
            last_name: r.last_name,
            middle_name: r.middle_name,
            company: r.company,
            company_url: r.company_url,
            blog_url: r.blog_url,
            twitter: r.twitter,
            github: r.github,
        };

        let mut talk = Talk::from(r.talk);
        talk.speaker = Some(speaker);
        talk
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct SpeakerRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub company: Option<String>,
    pub company_url: Option<String>,
    pub blog_url: Option<String>,
    pub twitter: Option<String>,
    pub github: Option<String>,
}

impl From<SpeakerRow> for Speaker {
    fn from(r: SpeakerRow) -> Self {
        Speaker {
            id: r.id,
            first_name: r.first_name,
            last_name: r.last_name,
            middle_name: r.middle_name,
            company: r.company,
            company_url: r.company_url,
            blog_url: r.blog_url,
            twitter: r.twitter,
            github: r.github,
        }
    }
}
