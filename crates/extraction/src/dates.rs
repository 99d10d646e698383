//! Due date resolver - resolve temporal expressions against a reference time
//!
//! Scans a clause for relative date expressions and resolves each to an
//! absolute instant relative to the supplied reference time, never to the
//! wall clock. Resolution runs an ordered rule list over a locale
//! vocabulary; adding a rule means appending to [`RULES`], callers are
//! untouched. When several expressions match, the chronologically earliest
//! resolved instant wins (the soonest commitment). No match is not an error.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc, Weekday};
use chrono_tz::Tz;
use tracing::debug;

use crate::config::Locale;

/// Weekday-name and relative-phrase vocabulary for one locale
#[derive(Debug)]
pub struct DateVocabulary {
    weekdays: &'static [(&'static str, Weekday)],
    tomorrow: &'static [&'static str],
    day_after_tomorrow: &'static [&'static str],
    today: &'static [&'static str],
    next_week: &'static [&'static str],
    in_word: &'static str,
    day_units: &'static [&'static str],
    week_units: &'static [&'static str],
}

static ENGLISH: DateVocabulary = DateVocabulary {
    weekdays: &[
        ("monday", Weekday::Mon),
        ("tuesday", Weekday::Tue),
        ("wednesday", Weekday::Wed),
        ("thursday", Weekday::Thu),
        ("friday", Weekday::Fri),
        ("saturday", Weekday::Sat),
        ("sunday", Weekday::Sun),
    ],
    tomorrow: &["tomorrow"],
    day_after_tomorrow: &["day after tomorrow"],
    today: &["today", "end of day", "tonight"],
    next_week: &["next week"],
    in_word: "in",
    day_units: &["day", "days"],
    week_units: &["week", "weeks"],
};

static GERMAN: DateVocabulary = DateVocabulary {
    weekdays: &[
        ("montag", Weekday::Mon),
        ("dienstag", Weekday::Tue),
        ("mittwoch", Weekday::Wed),
        ("donnerstag", Weekday::Thu),
        ("freitag", Weekday::Fri),
        ("samstag", Weekday::Sat),
        ("sonntag", Weekday::Sun),
    ],
    tomorrow: &["morgen"],
    day_after_tomorrow: &["übermorgen"],
    today: &["heute"],
    next_week: &["nächste woche", "nächsten woche"],
    in_word: "in",
    day_units: &["tag", "tage", "tagen"],
    week_units: &["woche", "wochen"],
};

impl Locale {
    /// Vocabulary used by the date resolver for this locale
    #[must_use]
    pub const fn date_vocabulary(&self) -> &'static DateVocabulary {
        match self {
            Self::English => &ENGLISH,
            Self::German => &GERMAN,
        }
    }
}

/// One resolution rule: candidate due dates for a clause
type DateRule = fn(&DateVocabulary, &str, NaiveDate) -> Vec<NaiveDate>;

/// Ordered rule list; extend here to support new expressions
const RULES: &[DateRule] = &[
    weekday_rule,
    relative_day_rule,
    today_rule,
    next_week_rule,
    offset_rule,
];

/// Resolves temporal expressions to absolute, timezone-aware instants
#[derive(Debug, Clone, Copy)]
pub struct DueDateResolver {
    tz: Tz,
    vocab: &'static DateVocabulary,
}

impl DueDateResolver {
    /// Create a resolver for the given timezone and locale
    #[must_use]
    pub const fn new(tz: Tz, locale: Locale) -> Self {
        Self {
            tz,
            vocab: locale.date_vocabulary(),
        }
    }

    /// Resolve the due instant for a clause, if it names one
    ///
    /// Times default to end-of-day (23:59:59) in the resolver's timezone
    /// unless the clause names a specific time ("at 5pm", "at 17:30").
    #[must_use]
    pub fn resolve(&self, clause_lower: &str, reference: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let local_ref = reference.with_timezone(&self.tz);
        let time = parse_time_of_day(clause_lower).unwrap_or_else(end_of_day);

        let mut candidates = Vec::new();
        for rule in RULES {
            candidates.extend(rule(self.vocab, clause_lower, local_ref.date_naive()));
        }

        let due = candidates
            .into_iter()
            .filter_map(|date| self.at_time(date, time))
            .min()?;

        debug!(clause = %clause_lower, due = %due, "Resolved due date");
        Some(due.with_timezone(&Utc))
    }

    /// Anchor a local date and time in the resolver's timezone
    ///
    /// Returns `None` for instants that fall into a DST gap.
    fn at_time(&self, date: NaiveDate, time: NaiveTime) -> Option<DateTime<Tz>> {
        let local = date.and_time(time);
        local
            .and_local_timezone(self.tz)
            .earliest()
            .or_else(|| local.and_local_timezone(self.tz).latest())
    }
}

/// Weekday names resolve to the next occurrence strictly after the reference
///
/// If the reference day is that weekday, the expression means next week's
/// occurrence, never today.
fn weekday_rule(vocab: &DateVocabulary, clause: &str, reference: NaiveDate) -> Vec<NaiveDate> {
    let current = i64::from(reference.weekday().num_days_from_monday());
    vocab
        .weekdays
        .iter()
        .filter(|(name, _)| contains_word(clause, name))
        .filter_map(|(_, weekday)| {
            let target = i64::from(weekday.num_days_from_monday());
            let mut ahead = (target - current).rem_euclid(7);
            if ahead == 0 {
                ahead = 7;
            }
            reference.checked_add_signed(Duration::days(ahead))
        })
        .collect()
}

/// "tomorrow" and "day after tomorrow" (and their locale equivalents)
fn relative_day_rule(vocab: &DateVocabulary, clause: &str, reference: NaiveDate) -> Vec<NaiveDate> {
    // "day after tomorrow" contains "tomorrow" (and "übermorgen" contains
    // "morgen"), so the two-day form suppresses the one-day form
    if vocab
        .day_after_tomorrow
        .iter()
        .any(|phrase| clause.contains(phrase))
    {
        return reference.checked_add_signed(Duration::days(2)).into_iter().collect();
    }
    if vocab.tomorrow.iter().any(|phrase| clause.contains(phrase)) {
        return reference.checked_add_signed(Duration::days(1)).into_iter().collect();
    }
    Vec::new()
}

/// "today" / "end of day" resolve to the reference date itself
fn today_rule(vocab: &DateVocabulary, clause: &str, reference: NaiveDate) -> Vec<NaiveDate> {
    if vocab.today.iter().any(|phrase| clause.contains(phrase)) {
        vec![reference]
    } else {
        Vec::new()
    }
}

/// "next week" resolves to the reference date plus seven days
fn next_week_rule(vocab: &DateVocabulary, clause: &str, reference: NaiveDate) -> Vec<NaiveDate> {
    if vocab.next_week.iter().any(|phrase| clause.contains(phrase)) {
        reference.checked_add_signed(Duration::days(7)).into_iter().collect()
    } else {
        Vec::new()
    }
}

/// "in N days" / "in N weeks" offsets from the reference date
fn offset_rule(vocab: &DateVocabulary, clause: &str, reference: NaiveDate) -> Vec<NaiveDate> {
    let tokens: Vec<&str> = clause.split_whitespace().collect();
    let mut dates = Vec::new();

    for window in tokens.windows(3) {
        if window[0] != vocab.in_word {
            continue;
        }
        let Ok(count) = window[1].parse::<i64>() else {
            continue;
        };
        if count <= 0 {
            continue;
        }
        let unit = window[2].trim_matches(|c: char| !c.is_alphanumeric());
        let offset = if vocab.day_units.contains(&unit) {
            Duration::try_days(count)
        } else if vocab.week_units.contains(&unit) {
            Duration::try_weeks(count)
        } else {
            None
        };
        // absurd counts overflow the date arithmetic; drop the candidate
        if let Some(date) = offset.and_then(|delta| reference.checked_add_signed(delta)) {
            dates.push(date);
        }
    }
    dates
}

/// Parse a specific time of day following "at" ("at 5pm", "at 17:30")
fn parse_time_of_day(clause: &str) -> Option<NaiveTime> {
    for (idx, _) in clause.match_indices("at ") {
        // "at" must be its own word ("flat 3" is not a time)
        let starts_word = idx == 0
            || clause[..idx]
                .chars()
                .next_back()
                .is_none_or(|c| !c.is_alphanumeric());
        if !starts_word {
            continue;
        }
        if let Some(time) = parse_clock(&clause[idx + 3..]) {
            return Some(time);
        }
    }
    None
}

/// Parse a clock expression like "5pm", "5 pm", "17:30", "9:15am"
fn parse_clock(rest: &str) -> Option<NaiveTime> {
    let mut tokens = rest.split_whitespace();
    let first = tokens
        .next()?
        .trim_end_matches(|c: char| ",.;:!?".contains(c));

    let digit_end = first
        .find(|c: char| !c.is_ascii_digit() && c != ':')
        .unwrap_or(first.len());
    let (clock, suffix) = first.split_at(digit_end);
    if clock.is_empty() {
        return None;
    }

    let (hour_str, minute_str) = match clock.split_once(':') {
        Some((h, m)) => (h, Some(m)),
        None => (clock, None),
    };
    let hour: u32 = hour_str.parse().ok()?;
    let minute: u32 = match minute_str {
        Some(m) => m.parse().ok()?,
        None => 0,
    };

    let meridiem = if suffix.is_empty() {
        tokens
            .next()
            .map(|t| t.trim_matches(|c: char| ",.;:!?".contains(c)))
    } else {
        Some(suffix)
    };

    let hour = match meridiem {
        Some("pm") if hour < 12 => hour + 12,
        Some("am") if hour == 12 => 0,
        _ => hour,
    };
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Substring match bounded by non-alphanumeric characters
fn contains_word(haystack: &str, needle: &str) -> bool {
    haystack.match_indices(needle).any(|(idx, _)| {
        let before_ok = idx == 0
            || haystack[..idx]
                .chars()
                .next_back()
                .is_none_or(|c| !c.is_alphanumeric());
        let end = idx + needle.len();
        let after_ok = end == haystack.len()
            || haystack[end..]
                .chars()
                .next()
                .is_none_or(|c| !c.is_alphanumeric());
        before_ok && after_ok
    })
}

#[allow(clippy::expect_used)] // 23:59:59 is always a valid time
fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 59).expect("valid end-of-day time")
}
