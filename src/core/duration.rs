// src/core/duration.rs
//! Free-text length → approximate study hours.
//!
//! The catalogue's "Length" column is hand-written: "16 hours", "5hrs",
//! "5 hours a day for 3 days", "35 videos roughly 50 mins each",
//! "one semester", "12 weeks". Each phrasing is a [`Rule`]: a regex plus a
//! conversion. Rules are tried in a fixed order and the first one that
//! matches *and* converts cleanly wins. Several patterns overlap, so order
//! is part of the contract:
//!
//! | # | phrasing                              | hours                   |
//! |---|---------------------------------------|-------------------------|
//! | 1 | `N hour(s) a day for M day(s)`        | N × M                   |
//! | 2 | `N hr(s)`                             | N                       |
//! | 3 | `N hour(s)`                           | N                       |
//! | 4 | `N video(s) roughly A–B min`          | N × avg(A, B) / 60      |
//! | 5 | `N video(s) roughly A min`            | N × A / 60              |
//! | 6 | `N min(ute)(s)`                       | N / 60                  |
//! | 7 | `N week(s)`                           | N × hours_per_week      |
//! | 8 | `one semester` / `a semester`         | semester_hours          |
//! | 9 | `half a semester`                     | half_semester_hours     |
//! | 10| `N month(s)`                          | N × hours_per_month     |
//! | 11| `N year(s)`                           | N × hours_per_year      |
//!
//! Anything else is `None`. Nothing here returns an error or panics on
//! input: a capture that fails to convert just skips that rule.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

/// Rough study-hour equivalents for calendar-ish lengths.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DurationHeuristics {
    pub hours_per_week: f64,
    pub semester_hours: f64,
    pub half_semester_hours: f64,
    pub hours_per_month: f64,
    pub hours_per_year: f64,
}

impl Default for DurationHeuristics {
    fn default() -> Self {
        Self {
            hours_per_week: 5.0,
            semester_hours: 45.0,
            half_semester_hours: 22.5,
            hours_per_month: 10.0,
            hours_per_year: 120.0,
        }
    }
}

type Convert = fn(&Captures<'_>, &DurationHeuristics) -> Option<f64>;

struct Rule {
    name: &'static str,
    pattern: Regex,
    convert: Convert,
}

impl Rule {
    fn new(name: &'static str, pattern: &str, convert: Convert) -> Self {
        Self { name, pattern: Regex::new(pattern).unwrap(), convert }
    }

    fn apply(&self, text: &str, h: &DurationHeuristics) -> Option<f64> {
        let caps = self.pattern.captures(text)?;
        (self.convert)(&caps, h)
            .filter(|v| v.is_finite())
            .and_then(round1)
    }
}

fn num(caps: &Captures<'_>, i: usize) -> Option<f64> {
    caps.get(i)?.as_str().parse().ok()
}

/// One decimal, rounded on the exact binary value with ties to even.
fn round1(v: f64) -> Option<f64> {
    format!("{v:.1}").parse().ok()
}

static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::new(
            "hours_a_day",
            r"(\d+(?:\.\d+)?)\s*hours?\s*a\s*day\s*for\s*(\d+)\s*days?",
            |c, _| Some(num(c, 1)? * num(c, 2)?),
        ),
        Rule::new("hrs", r"(\d+(?:\.\d+)?)\s*hrs?\b", |c, _| num(c, 1)),
        Rule::new("hours", r"(\d+(?:\.\d+)?)\s*hours?\b", |c, _| num(c, 1)),
        Rule::new(
            "videos_range",
            r"(\d+)\s*videos?\s*roughly\s*([\d.]+)\s*[-–]\s*([\d.]+)\s*min",
            |c, _| Some(num(c, 1)? * (num(c, 2)? + num(c, 3)?) / 2.0 / 60.0),
        ),
        Rule::new(
            "videos",
            r"(\d+)\s*videos?\s*roughly\s*([\d.]+)\s*min",
            |c, _| Some(num(c, 1)? * num(c, 2)? / 60.0),
        ),
        Rule::new(
            "minutes",
            r"(\d+(?:\.\d+)?)\s*min(?:ute)?s?\b",
            |c, _| Some(num(c, 1)? / 60.0),
        ),
        Rule::new("weeks", r"(\d+)\s*weeks?\b", |c, h| Some(num(c, 1)? * h.hours_per_week)),
        // "half a semester" also contains "a semester"; bow out so rule 9 sees it.
        Rule::new(
            "semester",
            r"(half\s+)?(?:one|a)\s+semester",
            |c, h| c.get(1).is_none().then_some(h.semester_hours),
        ),
        Rule::new("half_semester", r"half\s+a\s+semester", |_, h| Some(h.half_semester_hours)),
        Rule::new("months", r"(\d+)\s*months?\b", |c, h| Some(num(c, 1)? * h.hours_per_month)),
        Rule::new("years", r"(\d+)\s*years?\b", |c, h| Some(num(c, 1)? * h.hours_per_year)),
    ]
});

/// Which rule produced a value, for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DurationMatch {
    pub rule: &'static str,
    pub hours: f64,
}

/// Parse with the default heuristics.
pub fn parse_duration(raw: &str) -> Option<f64> {
    parse_duration_with(raw, &DurationHeuristics::default())
}

pub fn parse_duration_with(raw: &str, h: &DurationHeuristics) -> Option<f64> {
    explain_duration(raw, h).map(|m| m.hours)
}

/// Like [`parse_duration_with`] but also reports the winning rule.
pub fn explain_duration(raw: &str, h: &DurationHeuristics) -> Option<DurationMatch> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }
    let text = text.to_lowercase();

    RULES.iter().find_map(|rule| {
        rule.apply(&text, h).map(|hours| DurationMatch { rule: rule.name, hours })
    })
}

/// Rule names in evaluation order.
pub fn rule_names() -> impl Iterator<Item = &'static str> {
    RULES.iter().map(|r| r.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compound_rule_beats_bare_hours() {
        assert_eq!(parse_duration("5 hours a day for 3 days"), Some(15.0));
        assert_eq!(parse_duration("2.5 hours a day for 4 days"), Some(10.0));
    }

    #[test]
    fn hour_shorthands() {
        assert_eq!(parse_duration("4 hrs"), Some(4.0));
        assert_eq!(parse_duration("5hrs"), Some(5.0));
        assert_eq!(parse_duration("1 hr"), Some(1.0));
        assert_eq!(parse_duration("5hours"), Some(5.0));
        assert_eq!(parse_duration("16 Hours"), Some(16.0));
        assert_eq!(parse_duration("Approx. 1.5 hours"), Some(1.5));
    }

    #[test]
    fn video_rules() {
        assert_eq!(parse_duration("16 videos roughly 4–17 min each"), Some(2.8));
        assert_eq!(parse_duration("16 videos roughly 4-17 min each"), Some(2.8));
        assert_eq!(parse_duration("35 videos roughly 50 mins each"), Some(29.2));
        assert_eq!(parse_duration("1 video roughly 30 min"), Some(0.5));
    }

    #[test]
    fn minutes_weeks_and_calendar_units() {
        assert_eq!(parse_duration("90 min"), Some(1.5));
        assert_eq!(parse_duration("45 minutes"), Some(0.8));
        assert_eq!(parse_duration("30 mins"), Some(0.5));
        assert_eq!(parse_duration("12 weeks"), Some(60.0));
        assert_eq!(parse_duration("1 week"), Some(5.0));
        assert_eq!(parse_duration("3 months"), Some(30.0));
        assert_eq!(parse_duration("2 years"), Some(240.0));
    }

    #[test]
    fn exact_halves_round_to_even() {
        assert_eq!(parse_duration("15 min"), Some(0.2));
        assert_eq!(parse_duration("75 min"), Some(1.2));
        assert_eq!(parse_duration("0.25 hours"), Some(0.2));
        assert_eq!(parse_duration("1.15 hours"), Some(1.1));
        assert_eq!(parse_duration("45 min"), Some(0.8));
    }

    #[test]
    fn semesters() {
        assert_eq!(parse_duration("one semester"), Some(45.0));
        assert_eq!(parse_duration("A semester"), Some(45.0));
        assert_eq!(parse_duration("half a semester"), Some(22.5));
        assert_eq!(parse_duration("About half a semester"), Some(22.5));
    }

    #[test]
    fn unmatched_is_none() {
        for s in ["", "   ", "TBD", "varies", "self-paced", "N/A"] {
            assert_eq!(parse_duration(s), None, "{s:?}");
        }
    }

    #[test]
    fn bad_capture_falls_through_to_next_rule() {
        // "4.5.6" is captured by the single-length video rule but does not parse;
        // the minutes rule then finds "5.6 min".
        let m = explain_duration("3 videos roughly 4.5.6 min", &DurationHeuristics::default());
        assert_eq!(m, Some(DurationMatch { rule: "minutes", hours: 0.1 }));
    }

    #[test]
    fn word_boundaries_hold() {
        // "hrs?\b" must not fire inside "hours"; "weeks?\b" not inside "weekstudy".
        let m = explain_duration("3 hours", &DurationHeuristics::default()).unwrap();
        assert_eq!(m.rule, "hours");
        assert_eq!(parse_duration("3 weekstudy"), None);
    }

    #[test]
    fn heuristics_are_tunable() {
        let h = DurationHeuristics { hours_per_week: 8.0, semester_hours: 60.0, ..Default::default() };
        assert_eq!(parse_duration_with("2 weeks", &h), Some(16.0));
        assert_eq!(parse_duration_with("one semester", &h), Some(60.0));
        assert_eq!(parse_duration_with("half a semester", &h), Some(22.5));
    }

    #[test]
    fn rule_order_is_fixed() {
        let names: Vec<_> = rule_names().collect();
        assert_eq!(names.first(), Some(&"hours_a_day"));
        assert_eq!(names.last(), Some(&"years"));
        assert_eq!(names.len(), 11);
    }
}
