//! Natural-language date normalization against a fixed-offset "today".
//!
//! The reference timezone is the Philippines (UTC+8, no DST), so a plain
//! `FixedOffset` is enough. A phrase resolves, in order: "today",
//! "tomorrow", Tagalog weekday substitution, then a pattern parse with the
//! year defaulting to the current one. Anything unparseable maps to the
//! empty-string sentinel — no error escapes this module.

use chrono::{Datelike, Duration, FixedOffset, NaiveDate, Utc, Weekday};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

static MANILA: Lazy<FixedOffset> = Lazy::new(|| FixedOffset::east_opt(8 * 3600).unwrap());

/// Tagalog weekday tokens and their English equivalents. Substitution is a
/// naive substring replace, so an unrelated word containing one of these
/// tokens gets corrupted. Known latent bug, kept as-is.
const TAGALOG_WEEKDAYS: &[(&str, &str)] = &[
    ("lunes", "monday"),
    ("martes", "tuesday"),
    ("miyerkules", "wednesday"),
    ("huwebes", "thursday"),
    ("biyernes", "friday"),
    ("sabado", "saturday"),
    ("linggo", "sunday"),
];

// Compiled date patterns (compiled once, reused).
static ISO_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{4})-(\d{1,2})-(\d{1,2})\b").unwrap());
static SLASH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{1,2})/(\d{1,2})(?:/(\d{4}))?\b").unwrap());
static MONTH_DAY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(january|february|march|april|may|june|july|august|september|october|november|december|jan|feb|mar|apr|jun|jul|aug|sep|sept|oct|nov|dec)\.?\s+(\d{1,2})(?:st|nd|rd|th)?(?:,?\s*(\d{4}))?\b",
    )
    .unwrap()
});
static DAY_MONTH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(\d{1,2})(?:st|nd|rd|th)?\s+(?:of\s+)?(january|february|march|april|may|june|july|august|september|october|november|december|jan|feb|mar|apr|jun|jul|aug|sep|sept|oct|nov|dec)\.?(?:,?\s*(\d{4}))?\b",
    )
    .unwrap()
});
static WEEKDAY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(monday|tuesday|wednesday|thursday|friday|saturday|sunday)\b").unwrap()
});

/// Today's date in the Philippines.
pub fn manila_today() -> NaiveDate {
    Utc::now().with_timezone(&*MANILA).date_naive()
}

/// Replace Tagalog weekday tokens with English equivalents. Input is
/// expected lowercased; replacement is plain substring substitution.
pub fn translate_weekdays(phrase: &str) -> String {
    let mut out = phrase.to_string();
    for (tagalog, english) in TAGALOG_WEEKDAYS {
        out = out.replace(tagalog, english);
    }
    out
}

/// Normalize a free-text date phrase to `YYYY-MM-DD`, or `""` when it
/// cannot be resolved.
pub fn normalize_date(phrase: &str, today: NaiveDate) -> String {
    let lowered = phrase.trim().to_lowercase();
    if lowered.is_empty() {
        return String::new();
    }

    if lowered.contains("today") {
        return today.format("%Y-%m-%d").to_string();
    }
    if lowered.contains("tomorrow") {
        return (today + Duration::days(1)).format("%Y-%m-%d").to_string();
    }

    let translated = translate_weekdays(&lowered);
    match parse_phrase(&translated, today) {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => {
            warn!("Unparseable date expression: {:?}", phrase);
            String::new()
        }
    }
}

/// Pattern parse: ISO, slash, month-name (either order), bare weekday.
/// Year defaults to the current one when absent.
fn parse_phrase(phrase: &str, today: NaiveDate) -> Option<NaiveDate> {
    if let Some(caps) = ISO_RE.captures(phrase) {
        return NaiveDate::from_ymd_opt(
            caps[1].parse().ok()?,
            caps[2].parse().ok()?,
            caps[3].parse().ok()?,
        );
    }

    if let Some(caps) = SLASH_RE.captures(phrase) {
        let year = match caps.get(3) {
            Some(y) => y.as_str().parse().ok()?,
            None => today.year(),
        };
        return NaiveDate::from_ymd_opt(year, caps[1].parse().ok()?, caps[2].parse().ok()?);
    }

    if let Some(caps) = MONTH_DAY_RE.captures(phrase) {
        let month = month_number(&caps[1])?;
        let day = caps[2].parse().ok()?;
        let year = match caps.get(3) {
            Some(y) => y.as_str().parse().ok()?,
            None => today.year(),
        };
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    if let Some(caps) = DAY_MONTH_RE.captures(phrase) {
        let day = caps[1].parse().ok()?;
        let month = month_number(&caps[2])?;
        let year = match caps.get(3) {
            Some(y) => y.as_str().parse().ok()?,
            None => today.year(),
        };
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    if let Some(caps) = WEEKDAY_RE.captures(phrase) {
        let target = weekday_from_name(&caps[1])?;
        return Some(next_weekday(today, target));
    }

    None
}

fn month_number(name: &str) -> Option<u32> {
    let n = match &name[..3.min(name.len())] {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(n)
}

fn weekday_from_name(name: &str) -> Option<Weekday> {
    match name {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

/// First occurrence of `target` on or after `today`.
fn next_weekday(today: NaiveDate, target: Weekday) -> NaiveDate {
    let ahead = (target.num_days_from_monday() + 7 - today.weekday().num_days_from_monday()) % 7;
    today + Duration::days(ahead as i64)
}
