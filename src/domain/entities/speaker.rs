//! Speaker entity.

/// A person who gives talks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Speaker {
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

impl Speaker {
    /// Builds a stored speaker from its creation input.
    pub fn from_new(id: i64, new_speaker: NewSpeaker) -> Self {
        Self {
            id,
            first_name: new_speaker.first_name,
            last_name: new_speaker.last_name,
            middle_name: new_speaker.middle_name,
            company: new_speaker.company,
            company_url: new_speaker.company_url,
            blog_url: new_speaker.blog_url,
            twitter: new_speaker.twitter,
            github: new_speaker.github,
        }
    }

    /// "First Last" display form.
    pub fn full_name(&self) -> String {
        match &self.middle_name {
            Some(middle) if !middle.is_empty() => {
                format!("{} {} {}", self.first_name, middle, self.last_name)
            }
            _ => format!("{} {}", self.first_name, self.last_name),
        }
    }
}

/// Input data for creating a speaker.
#[derive(Debug, Clone, Default)]
pub struct NewSpeaker {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub company: Option<String>,
    pub company_url: Option<String>,
    pub blog_url: Option<String>,
    pub twitter: Option<String>,
    pub github: Option<String>,
}
