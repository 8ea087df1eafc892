// Module name shadows the `serde` crate — use `::serde` for the external crate.
use ::serde::Serializer;
use chrono::{DateTime, SecondsFormat, Utc};

/// Field serializer for `DateTime<Utc>`: RFC 3339, exactly three fractional
/// digits, `Z` suffix. Attach with `#[serde(serialize_with = "to_rfc3339_ms")]`
/// so every timestamp leaving a service reads the same.
pub fn to_rfc3339_ms<S>(dt: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}
