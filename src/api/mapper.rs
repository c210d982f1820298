//! Conversions between domain entities and wire models.
//!
//! Outbound: [`Camp`] → [`CampModel`], [`Talk`] → [`TalkModel`],
//! [`Speaker`] → [`SpeakerModel`].
//!
//! Inbound: [`CampModel`] → [`CampInput`], [`TalkModel`] → [`TalkInput`],
//! [`SpeakerModel`] → [`NewSpeaker`]. Inbound conversions drop server-owned
//! fields (`talkId`, `speakerId` of a new speaker, nested `talks`).

use crate::api::dto::{CampModel, SpeakerModel, TalkModel};
use crate::domain::entities::{
    Camp, CampInput, Location, NewSpeaker, Speaker, Talk, TalkInput,
};

impl From<Camp> for CampModel {
    fn from(camp: Camp) -> Self {
        let Location {
            venue_name,
            address1,
            address2,
            address3,
            city_town,
            state_province,
            postal_code,
            country,
        } = camp.location;

        CampModel {
            name: camp.name,
            moniker: camp.moniker,
            event_date: camp.event_date,
            length: camp.length,
            venue: venue_name,
            location_address1: address1,
            location_address2: address2,
            location_address3: address3,
            location_city_town: city_town,
            location_state_province: state_province,
            location_postal_code: postal_code,
            location_country: country,
            talks: camp.talks.into_iter().map(TalkModel::from).collect(),
        }
    }
}

impl From<CampModel> for CampInput {
    fn from(model: CampModel) -> Self {
        CampInput {
            name: model.name,
            moniker: model.moniker,
            event_date: model.event_date,
            length: model.length,
            location: Location {
                venue_name: model.venue,
                address1: model.location_address1,
                address2: model.location_address2,
                address3: model.location_address3,
                city_town: model.location_city_town,
                state_province: model.location_state_province,
                postal_code: model.location_postal_code,
                country: model.location_country,
            },
        }
    }
}

impl From<Talk> for TalkModel {
    fn from(talk: Talk) -> Self {
        TalkModel {
            talk_id: talk.id,
            title: talk.title,
            abstract_text: talk.abstract_text,
            level: talk.level,
            speaker: talk.speaker.map(SpeakerModel::from),
        }
    }
}

impl From<TalkModel> for TalkInput {
    fn from(model: TalkModel) -> Self {
        TalkInput {
            title: model.title,
            abstract_text: model.abstract_text,
            level: model.level,
            speaker_id: model.speaker.map(|s| s.speaker_id),
        }
    }
}

impl From<Speaker> for SpeakerModel {
    fn from(speaker: Speaker) -> Self {
        SpeakerModel {
            speaker_id: speaker.id,
            first_name: speaker.first_name,
            last_name: speaker.last_name,
            middle_name: speaker.middle_name,
            company: speaker.company,
            company_url: speaker.company_url,
            blog_url: speaker.blog_url,
            twitter: speaker.twitter,
            github: speaker.github,
        }
    }
}

impl From<SpeakerModel> for NewSpeaker {
    fn from(model: SpeakerModel) -> Self {
        NewSpeaker {
            first_name: model.first_name,
            last_name: model.last_name,
            middle_name: model.middle_name,
            company: model.company,
            company_url: model.company_url,
            blog_url: model.blog_url,
            twitter: model.twitter,
            github: model.github,
        }
    }
}
