use super::date_codec;
use chrono::{Days, NaiveDate};
use serde::Serialize;

/// the inclusive date range a feed is valid for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceWindow {
    #[serde(serialize_with = "date_codec::serialize_naive_date")]
    pub start_date: NaiveDate,
    #[serde(serialize_with = "date_codec::serialize_naive_date")]
    pub end_date: NaiveDate,
}

impl ServiceWindow {
    /// clips a configured date range. a missing start is the run date; a
    /// missing end, or one more than `max_span_days` past the start, becomes
    /// start + `max_span_days`.
    pub fn clip(
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        max_span_days: u32,
        run_date: NaiveDate,
    ) -> ServiceWindow {
        let start_date = start_date.unwrap_or(run_date);
        let furthest = start_date
            .checked_add_days(Days::new(u64::from(max_span_days)))
            .unwrap_or(NaiveDate::MAX);
        let end_date = match end_date {
            Some(end) if end <= furthest => end,
            _ => furthest,
        };
        if end_date < start_date {
            log::warn!("service window ends ({end_date}) before it starts ({start_date})");
        }
        ServiceWindow {
            start_date,
            end_date,
        }
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.start_date <= *date && *date <= self.end_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn test_missing_start_uses_run_date() {
        let w = ServiceWindow::clip(None, Some(date(2026, 12, 1)), 364, date(2026, 10, 19));
        assert_eq!(w.start_date, date(2026, 10, 19));
        assert_eq!(w.end_date, date(2026, 12, 1));
    }

    #[test]
    fn test_missing_end_is_start_plus_span() {
        let w = ServiceWindow::clip(Some(date(2026, 1, 1)), None, 364, date(2020, 1, 1));
        assert_eq!(w.end_date, date(2026, 12, 31));
    }

    #[test]
    fn test_long_range_is_clipped() {
        let w = ServiceWindow::clip(
            Some(date(2026, 1, 1)),
            Some(date(2028, 1, 1)),
            90,
            date(2020, 1, 1),
        );
        assert_eq!((w.end_date - w.start_date).num_days(), 90);
        assert!(w.contains(&date(2026, 3, 1)));
        assert!(!w.contains(&date(2026, 6, 1)));
    }
}
