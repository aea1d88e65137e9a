//! Date label formatting utilities for board headers and exports.
//!
//! Converts viewing dates into the short human labels shown above each
//! board and in exported data. All labels are locale-independent English
//! abbreviations so that console output and export files stay stable.
//!
//! ## Label formats
//!
//! - Daily: `"5 Jan"`
//! - Weekly: `"Jan 5-Jan 11"` (weeks start on Monday)
//! - Monthly: `"January"`
//! - Quarterly: `"Q1 2024"`
//! - Yearly: `"2024"`
//! - Lifelong: `"Life"`

use crate::libs::board::Timeframe;
use chrono::{Datelike, Duration, NaiveDate};

/// Short day label, e.g. "5 Jan".
pub fn day_label(date: NaiveDate) -> String {
    format!("{} {}", date.day(), date.format("%b"))
}

/// Monday-to-Sunday range containing `date`, e.g. "Jan 5-Jan 11".
pub fn week_label(date: NaiveDate) -> String {
    let monday = date - Duration::days(date.weekday().num_days_from_monday() as i64);
    let sunday = monday + Duration::days(6);
    format!("{} {}-{} {}", monday.format("%b"), monday.day(), sunday.format("%b"), sunday.day())
}

/// Full month name, e.g. "January".
pub fn month_label(date: NaiveDate) -> String {
    date.format("%B").to_string()
}

/// Calendar quarter with year, e.g. "Q1 2024".
pub fn quarter_label(date: NaiveDate) -> String {
    let quarter = date.month0() / 3 + 1;
    format!("Q{} {}", quarter, date.year())
}

/// Year label, e.g. "2024".
pub fn year_label(date: NaiveDate) -> String {
    date.year().to_string()
}

/// Dispatches to the per-timeframe label.
pub fn board_title(timeframe: Timeframe, date: NaiveDate) -> String {
    match timeframe {
        Timeframe::Daily => day_label(date),
        Timeframe::Weekly => week_label(date),
        Timeframe::Monthly => month_label(date),
        Timeframe::Quarterly => quarter_label(date),
        Timeframe::Yearly => year_label(date),
        Timeframe::Lifelong => "Life".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_label() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(day_label(date), "5 Jan");
    }

    #[test]
    fn test_week_label_monday_start() {
        // 2024-01-10 is a Wednesday; its week runs Jan 8 to Jan 14.
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        assert_eq!(week_label(date), "Jan 8-Jan 14");
    }

    #[test]
    fn test_quarter_label() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
        assert_eq!(quarter_label(date), "Q2 2024");
    }

    #[test]
    fn test_board_title_lifelong() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(board_title(Timeframe::Lifelong, date), "Life");
    }
}
