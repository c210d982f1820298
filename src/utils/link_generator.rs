//! Location paths for created resources.
//!
//! A camp moniker becomes a raw path segment, so only monikers made of URL
//! unreserved characters produce a path. `search` is excluded because
//! `/api/camps/search` is the search route and would shadow the camp.

use regex::Regex;
use std::sync::LazyLock;

static MONIKER_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._~-]+$").unwrap());

const RESERVED_MONIKERS: &[&str] = &["search", ".", ".."];

/// Path of a camp resource, or `None` if the moniker cannot be addressed.
pub fn camp_path(moniker: &str) -> Option<String> {
    if !MONIKER_SEGMENT.is_match(moniker)
        || RESERVED_MONIKERS
            .iter()
            .any(|r| r.eq_ignore_ascii_case(moniker))
    {
        return None;
    }

    Some(format!("/api/camps/{moniker}"))
}

/// Path of a talk resource nested under a camp path from [`camp_path`].
pub fn talk_path(camp_location: &str, talk_id: i64) -> String {
    format!("{camp_location}/talks/{talk_id}")
}

/// Path of a speaker resource.
pub fn speaker_path(speaker_id: i64) -> String {
    format!("/api/speakers/{speaker_id}")
}
