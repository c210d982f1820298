//! Query-string parameters.

use serde::{Deserialize, Deserializer, de::Error};

/// `?includeTalks=true|false` (default `false`, case-insensitive).
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncludeTalksQuery {
    #[serde(default, deserialize_with = "bool_ignore_case")]
    pub include_talks: bool,
}

/// Parameters of `GET /api/camps/search`.
///
/// `theDate` is kept raw and parsed by the handler so that a bad value gets
/// the same validation response as a bad body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub the_date: String,
    #[serde(default, deserialize_with = "bool_ignore_case")]
    pub include_talks: bool,
}

/// Accepts `true`/`false` in any letter case.
fn bool_ignore_case<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let raw = String::deserialize(deserializer)?;
    if raw.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(D::Error::custom(format!("invalid boolean: {raw}")))
    }
}
