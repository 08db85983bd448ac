use std::env;

use chrono::{DateTime, Locale, NaiveDateTime, TimeZone};
use tracing::warn;

use crate::sun_times::RawSunTimes;

/// Locale codes offered to the caller, in presentation order.
pub const SUPPORTED_LOCALES: &[&str] = &["zh", "en"];

// 12-hour clock with AM/PM marker, e.g. "06:48 AM"
const TIME_PATTERN: &str = "%I:%M %p";

/// Which of the two daily events to read from a fetched record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SunField {
    Sunrise,
    Sunset,
}

/// Parses one UTC timestamp out of a fetched record and converts it to
/// wall-clock time in the given zone.
///
/// A missing record or a malformed timestamp yields `None`; upstream data
/// must never crash the caller, so the parse failure is logged and swallowed.
pub fn localize_in<Tz: TimeZone>(
    raw: Option<&RawSunTimes>,
    field: SunField,
    tz: &Tz,
) -> Option<NaiveDateTime> {
    let raw = raw?;
    let timestamp = match field {
        SunField::Sunrise => &raw.sunrise_utc,
        SunField::Sunset => &raw.sunset_utc,
    };

    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(instant) => Some(instant.with_timezone(tz).naive_local()),
        Err(e) => {
            warn!("Ignoring malformed {:?} timestamp {:?}: {}", field, timestamp, e);
            None
        }
    }
}

/// Converts one field of a fetched record to the system local time zone.
pub fn localize(raw: Option<&RawSunTimes>, field: SunField) -> Option<NaiveDateTime> {
    localize_in(raw, field, &chrono::Local)
}

/// Renders a local date-time as a 12-hour clock string under the given
/// locale's textual conventions (AM/PM strings).
///
/// Falls back to the environment's default language when `locale` is `None`,
/// and to English for codes outside [`SUPPORTED_LOCALES`].
pub fn format(time: &NaiveDateTime, locale: Option<&str>) -> String {
    let language = match locale {
        Some(code) => code.to_owned(),
        None => default_language(),
    };
    time.and_utc()
        .format_localized(TIME_PATTERN, chrono_locale(&language))
        .to_string()
}

/// Language code used when the caller does not pick a locale explicitly.
fn default_language() -> String {
    env::var("LANG")
        .ok()
        .and_then(|v| v.split(['_', '.']).next().map(str::to_owned))
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "en".to_owned())
}

fn chrono_locale(language: &str) -> Locale {
    match language {
        "zh" => Locale::zh_CN,
        _ => Locale::en_US,
    }
}

#[cfg(test)]
mod tests {
    use chrono::FixedOffset;

    use super::*;

    fn sample_times() -> RawSunTimes {
        RawSunTimes {
            sunrise_utc: "2024-06-21T13:48:00+00:00".to_owned(),
            sunset_utc: "2024-06-22T03:35:12+00:00".to_owned(),
        }
    }

    fn utc_minus_seven() -> FixedOffset {
        FixedOffset::west_opt(7 * 3600).expect("valid offset")
    }

    #[test]
    fn localizes_sunrise_into_target_zone() {
        let raw = sample_times();
        let local = localize_in(Some(&raw), SunField::Sunrise, &utc_minus_seven())
            .expect("timestamp should parse");

        assert_eq!(local.to_string(), "2024-06-21 06:48:00");
    }

    #[test]
    fn localizes_sunset_into_target_zone() {
        let raw = sample_times();
        let local = localize_in(Some(&raw), SunField::Sunset, &utc_minus_seven())
            .expect("timestamp should parse");

        assert_eq!(local.to_string(), "2024-06-21 20:35:12");
    }

    #[test]
    fn absent_record_localizes_to_none() {
        assert_eq!(localize_in(None, SunField::Sunrise, &utc_minus_seven()), None);
        assert_eq!(localize(None, SunField::Sunset), None);
    }

    #[test]
    fn malformed_timestamp_localizes_to_none() {
        let raw = RawSunTimes {
            sunrise_utc: "not-a-date".to_owned(),
            sunset_utc: "2024-06-22T03:35:12+00:00".to_owned(),
        };

        assert_eq!(localize_in(Some(&raw), SunField::Sunrise, &utc_minus_seven()), None);
        // the other field is unaffected
        assert!(localize_in(Some(&raw), SunField::Sunset, &utc_minus_seven()).is_some());
    }

    #[test]
    fn formats_english_morning_time() {
        let raw = sample_times();
        let local = localize_in(Some(&raw), SunField::Sunrise, &utc_minus_seven())
            .expect("timestamp should parse");

        assert_eq!(format(&local, Some("en")), "06:48 AM");
    }

    #[test]
    fn formats_english_evening_time() {
        let raw = sample_times();
        let local = localize_in(Some(&raw), SunField::Sunset, &utc_minus_seven())
            .expect("timestamp should parse");

        assert_eq!(format(&local, Some("en")), "08:35 PM");
    }

    #[test]
    fn formatting_is_deterministic() {
        let raw = sample_times();
        let local = localize_in(Some(&raw), SunField::Sunrise, &utc_minus_seven())
            .expect("timestamp should parse");

        assert_eq!(format(&local, Some("zh")), format(&local, Some("zh")));
    }

    #[test]
    fn locale_switch_changes_only_the_period_marker() {
        let raw = sample_times();
        let local = localize_in(Some(&raw), SunField::Sunrise, &utc_minus_seven())
            .expect("timestamp should parse");

        let english = format(&local, Some("en"));
        let chinese = format(&local, Some("zh"));

        assert_ne!(english, chinese);
        // same clock reading under both conventions
        assert!(english.starts_with("06:48"));
        assert!(chinese.starts_with("06:48"));
        assert!(chinese.contains("上午"));
    }

    #[test]
    fn unknown_locale_falls_back_to_english() {
        let raw = sample_times();
        let local = localize_in(Some(&raw), SunField::Sunrise, &utc_minus_seven())
            .expect("timestamp should parse");

        assert_eq!(format(&local, Some("tlh")), "06:48 AM");
    }
}
