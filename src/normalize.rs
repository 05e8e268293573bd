//! Text cleaning for the scraped fragments.
//!
//! Wikipedia cells are free text: grouped thousands, placeholder dashes for
//! "no statistic", stray newlines, en-dashes in season ranges. Everything
//! here is total over arbitrary input; malformed text is a normal case.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, ScrapeError};

/// Em-dash placeholder used for "no statistic recorded".
const PLACEHOLDER_DASH: char = '\u{2014}';

/// Parse a career-statistics cell into a number.
///
/// Placeholder dashes and thousands separators are stripped first. An empty
/// or non-numeric remainder means "no value", never an error.
pub fn clean_statistic_number(raw: &str) -> Option<i64> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| *c != PLACEHOLDER_DASH && *c != ',')
        .collect();

    if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    cleaned.parse().ok()
}

/// Translate an infobox label into a stable snake_case attribute key.
///
/// Only case and spaces are normalized; punctuation in labels passes through
/// verbatim ("Shoots / Catches" becomes "shoots_/_catches").
pub fn clean_attribute_name(raw: &str) -> String {
    raw.to_lowercase().replace(' ', "_")
}

/// Strip newlines and map the Unicode en-dash to an ASCII hyphen.
pub fn clean_attribute_value(raw: &str) -> String {
    raw.replace('\n', "").replace('\u{2013}', "-")
}

static METRIC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([\d,]+)\u{a0}").unwrap());

/// Extract the parenthesized metric value from a height or weight cell.
///
/// The display text looks like `6 ft 2 in (188 cm)` with a non-breaking
/// space before the unit. Missing punctuation fails the field.
pub fn parse_metric(raw: &str) -> Result<i64> {
    let caps = METRIC_RE
        .captures(raw)
        .ok_or_else(|| ScrapeError::Parse(format!("no metric value in {raw:?}")))?;

    caps[1]
        .replace(',', "")
        .parse()
        .map_err(|e| ScrapeError::Parse(format!("metric value in {raw:?}: {e}")))
}

/// Parse the machine-readable birth date (`YYYY-MM-DD`).
pub fn parse_birth_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}
