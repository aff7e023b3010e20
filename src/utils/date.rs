//! Date label formatting
//!
//! Wish dates are free-form labels. When a label happens to be a `YYYY-MM-DD`
//! date it is shown relative to today ("today", "next Friday", "in 12 days");
//! anything else is shown exactly as entered.

use chrono::{Datelike, Local, NaiveDate, Weekday};

/// Date format recognised in wish date labels
pub const YMD_FORMAT: &str = "%Y-%m-%d";

/// Parse a label in YYYY-MM-DD format
pub fn parse_ymd(label: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(label.trim(), YMD_FORMAT).ok()
}

/// Human-readable form of a date label, relative to the local date
pub fn format_label(label: &str) -> String {
    format_label_relative_to(label, Local::now().date_naive())
}

/// Human-readable form of a date label, relative to `today`
pub fn format_label_relative_to(label: &str, today: NaiveDate) -> String {
    let Some(date) = parse_ymd(label) else {
        return label.to_string();
    };

    match (date - today).num_days() {
        -1 => "yesterday".to_string(),
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        diff if diff > 1 && diff <= 7 => format!("next {}", weekday_name(date.weekday())),
        diff if (-7..-1).contains(&diff) => format!("last {}", weekday_name(date.weekday())),
        diff if diff > 7 && diff <= 30 => format!("in {} days", diff),
        diff if (-30..-7).contains(&diff) => format!("{} days ago", -diff),
        _ => {
            if date.year() == today.year() {
                date.format("%b %d").to_string()
            } else {
                date.format("%b %d, %Y").to_string()
            }
        }
    }
}

/// "start → end", collapsing whichever side is blank
pub fn format_range(start: &str, end: &str) -> String {
    match (start.trim().is_empty(), end.trim().is_empty()) {
        (true, true) => String::new(),
        (false, true) => format_label(start),
        (true, false) => format!("until {}", format_label(end)),
        (false, false) => format!("{} → {}", format_label(start), format_label(end)),
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
