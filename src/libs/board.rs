use crate::libs::formatter;
use chrono::{Duration, Months, NaiveDate, NaiveDateTime};
use std::fmt;

/// The six timeframes a goal board can be scoped to.
///
/// Navigation steps one period at a time; the lifelong board has no date
/// axis and never moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Timeframe {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
    Lifelong,
}

impl Timeframe {
    pub const ALL: [Timeframe; 6] = [
        Timeframe::Daily,
        Timeframe::Weekly,
        Timeframe::Monthly,
        Timeframe::Quarterly,
        Timeframe::Yearly,
        Timeframe::Lifelong,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::Daily => "daily",
            Timeframe::Weekly => "weekly",
            Timeframe::Monthly => "monthly",
            Timeframe::Quarterly => "quarterly",
            Timeframe::Yearly => "yearly",
            Timeframe::Lifelong => "lifelong",
        }
    }

    pub fn parse(s: &str) -> Option<Timeframe> {
        match s {
            "daily" => Some(Timeframe::Daily),
            "weekly" => Some(Timeframe::Weekly),
            "monthly" => Some(Timeframe::Monthly),
            "quarterly" => Some(Timeframe::Quarterly),
            "yearly" => Some(Timeframe::Yearly),
            "lifelong" => Some(Timeframe::Lifelong),
            _ => None,
        }
    }

    /// Only daily tasks are pinned to a calendar day.
    pub fn requires_schedule(&self) -> bool {
        matches!(self, Timeframe::Daily)
    }

    /// Steps the viewing date one period forward.
    pub fn next_date(&self, date: NaiveDate) -> NaiveDate {
        match self {
            Timeframe::Daily => date.checked_add_signed(Duration::days(1)).unwrap_or(date),
            Timeframe::Weekly => date.checked_add_signed(Duration::days(7)).unwrap_or(date),
            Timeframe::Monthly => date.checked_add_months(Months::new(1)).unwrap_or(date),
            Timeframe::Quarterly => date.checked_add_months(Months::new(3)).unwrap_or(date),
            Timeframe::Yearly => date.checked_add_months(Months::new(12)).unwrap_or(date),
            Timeframe::Lifelong => date,
        }
    }

    /// Steps the viewing date one period back.
    pub fn previous_date(&self, date: NaiveDate) -> NaiveDate {
        match self {
            Timeframe::Daily => date.checked_sub_signed(Duration::days(1)).unwrap_or(date),
            Timeframe::Weekly => date.checked_sub_signed(Duration::days(7)).unwrap_or(date),
            Timeframe::Monthly => date.checked_sub_months(Months::new(1)).unwrap_or(date),
            Timeframe::Quarterly => date.checked_sub_months(Months::new(3)).unwrap_or(date),
            Timeframe::Yearly => date.checked_sub_months(Months::new(12)).unwrap_or(date),
            Timeframe::Lifelong => date,
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A goal board: one per timeframe, created idempotently on first use.
///
/// `view_date` is the date the user has navigated to and is independent of
/// the real-world current date.
#[derive(Debug, Clone)]
pub struct Board {
    pub id: i64,
    pub timeframe: Timeframe,
    pub view_date: NaiveDate,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl Board {
    /// Human title for the board header, derived from timeframe and
    /// viewing date ("5 Jan", "Jan 1-Jan 7", "Q1 2024", "Life", ...).
    pub fn title(&self) -> String {
        formatter::board_title(self.timeframe, self.view_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_daily_and_weekly_stepping() {
        let start = date(2024, 1, 3);
        assert_eq!(Timeframe::Daily.next_date(start), date(2024, 1, 4));
        assert_eq!(Timeframe::Daily.previous_date(start), date(2024, 1, 2));
        assert_eq!(Timeframe::Weekly.next_date(start), date(2024, 1, 10));
        assert_eq!(Timeframe::Weekly.previous_date(start), date(2023, 12, 27));
    }

    #[test]
    fn test_month_based_stepping() {
        let start = date(2024, 1, 31);
        // Clamped to the shorter month end
        assert_eq!(Timeframe::Monthly.next_date(start), date(2024, 2, 29));
        assert_eq!(Timeframe::Quarterly.next_date(start), date(2024, 4, 30));
        assert_eq!(Timeframe::Yearly.next_date(start), date(2025, 1, 31));
        assert_eq!(Timeframe::Yearly.previous_date(start), date(2023, 1, 31));
    }

    #[test]
    fn test_lifelong_never_moves() {
        let start = date(2024, 1, 3);
        assert_eq!(Timeframe::Lifelong.next_date(start), start);
        assert_eq!(Timeframe::Lifelong.previous_date(start), start);
    }

    #[test]
    fn test_timeframe_parse_round_trip() {
        for timeframe in Timeframe::ALL {
            assert_eq!(Timeframe::parse(timeframe.as_str()), Some(timeframe));
        }
        assert_eq!(Timeframe::parse("fortnightly"), None);
    }
}
