//! Time utilities: timestamp parsing, the ISO-8601 storage format and
//! local-time rendering.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDateTime, SecondsFormat, TimeZone, Utc};

/// Accepted local (offset-less) input formats, `datetime-local` style first.
const LOCAL_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Storage representation: UTC with millisecond precision and a `Z` suffix,
/// e.g. `2026-01-05T08:00:00.000Z`.
pub fn to_iso(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse a user supplied timestamp.
///
/// RFC 3339 strings keep their offset; `YYYY-MM-DDTHH:MM[:SS]` and
/// `YYYY-MM-DD HH:MM[:SS]` are interpreted in the local time zone.
pub fn parse_timestamp(s: &str) -> AppResult<DateTime<Utc>> {
    let raw = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    for fmt in LOCAL_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return local_to_utc(&naive).ok_or_else(|| AppError::InvalidTimestamp(raw.to_string()));
        }
    }

    Err(AppError::InvalidTimestamp(raw.to_string()))
}

/// Resolve a wall-clock time in the local zone. Ambiguous times (DST fall-back)
/// take the earlier instant; non-existent ones (spring-forward gap) yield None.
pub fn local_to_utc(naive: &NaiveDateTime) -> Option<DateTime<Utc>> {
    Local
        .from_local_datetime(naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

/// `YYYY-MM-DD HH:MM` in local time, for tables.
pub fn fmt_local(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

/// `HH:MM:SS` in local time ("since …" in the status line).
pub fn fmt_local_time(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%H:%M:%S").to_string()
}

/// Serde adapter for `DateTime<Utc>` fields stored as ISO-8601 strings.
pub mod iso_millis {
    use super::to_iso;
    use chrono::{DateTime, Utc};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&to_iso(ts))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(D::Error::custom)
    }

    /// Same contract for nullable fields (`null` ⇔ None).
    pub mod option {
        use super::super::to_iso;
        use chrono::{DateTime, Utc};
        use serde::de::Error;
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            ts: &Option<DateTime<Utc>>,
            s: S,
        ) -> Result<S::Ok, S::Error> {
            match ts {
                Some(ts) => s.serialize_str(&to_iso(ts)),
                None => s.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            d: D,
        ) -> Result<Option<DateTime<Utc>>, D::Error> {
            let raw: Option<String> = Option::deserialize(d)?;
            raw.map(|r| {
                DateTime::parse_from_rfc3339(&r)
                    .map(|dt| dt.with_timezone(&Utc))
                    .map_err(D::Error::custom)
            })
            .transpose()
        }
    }
}
