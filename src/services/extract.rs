use std::sync::LazyLock;

use regex::Regex;

use crate::models::Appointment;

/// Month names and their common abbreviations, matched case-insensitively
/// when the month precedes the day ("May 5").
const MONTH_PATTERN: &str = r"(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)";

/// A time token: 1-2 digits, optional `:MM`, then an AM/PM marker in any
/// case. 24-hour times without a marker are not recognized.
const TIME_PATTERN: &str = r"\d{1,2}(?::\d{2})?\s*(?i:am|pm)";

/// Full date + time pattern. The date half is 1-2 digits, optionally led by
/// a month name and lazily followed by up to two words (month and/or
/// weekday) and a 4-digit year. Between date and time, plain whitespace and
/// an optional "at" connective are skipped, so "May 5 at 10 AM" yields the
/// tokens ("May 5", "10 AM").
static DATE_TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    let date = format!(
        r"(?:(?i:{MONTH_PATTERN})\s+)?\d{{1,2}}(?:\s+[A-Za-z]+){{0,2}}?(?:\s+\d{{4}})?"
    );
    Regex::new(&format!(r"({date})\s+(?i:at\s+)?({TIME_PATTERN})"))
        .expect("date/time pattern is valid")
});

/// Best-effort scan for an appointment request embedded anywhere in free
/// text. Only the first (leftmost) occurrence is considered; there is no
/// candidate ranking or disambiguation.
///
/// This is a fixed-format heuristic, not a date parser: tokens are returned
/// verbatim, and stray numbers followed by a word and an AM/PM token can
/// still match ("2 fillings at 3 PM" extracts date "2 fillings").
pub fn extract_appointment(text: &str) -> Option<Appointment> {
    let caps = DATE_TIME_RE.captures(text)?;
    let date = caps.get(1)?.as_str().to_string();
    let time = caps.get(2)?.as_str().to_string();
    Some(Appointment { date, time })
}
