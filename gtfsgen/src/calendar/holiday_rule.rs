use chrono::{Datelike, Days, NaiveDate, Weekday};

/// moves a fixed-date holiday that falls on a weekend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observance {
    None,
    /// saturday is observed on friday, sunday on monday
    NearestWorkday,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NthWeekday {
    /// 1-based occurrence within the month
    Nth(u8),
    Last,
}

#[derive(Debug, Clone)]
pub enum HolidayRule {
    Fixed {
        month: u32,
        day: u32,
        observance: Observance,
    },
    NthWeekday {
        month: u32,
        weekday: Weekday,
        nth: NthWeekday,
    },
    /// a number of days before (negative) or after easter sunday
    EasterOffset { days: i64 },
    /// any other rule, as a function of the year
    Custom(fn(i32) -> NaiveDate),
}

/// a labeled rule. labels are what configured holiday names match against.
#[derive(Debug, Clone)]
pub struct Holiday {
    pub name: &'static str,
    pub rule: HolidayRule,
}

impl Observance {
    pub fn apply(&self, date: NaiveDate) -> NaiveDate {
        match (self, date.weekday()) {
            (Observance::NearestWorkday, Weekday::Sat) => date.pred_opt().unwrap_or(date),
            (Observance::NearestWorkday, Weekday::Sun) => date.succ_opt().unwrap_or(date),
            _ => date,
        }
    }
}

impl HolidayRule {
    /// the (observed) date of this rule in a year, if that year has one
    pub fn date_in(&self, year: i32) -> Option<NaiveDate> {
        match self {
            HolidayRule::Fixed {
                month,
                day,
                observance,
            } => {
                let date = NaiveDate::from_ymd_opt(year, *month, *day)?;
                Some(observance.apply(date))
            }
            HolidayRule::NthWeekday {
                month,
                weekday,
                nth: NthWeekday::Nth(n),
            } => NaiveDate::from_weekday_of_month_opt(year, *month, *weekday, *n),
            HolidayRule::NthWeekday {
                month,
                weekday,
                nth: NthWeekday::Last,
            } => last_weekday_of_month(year, *month, *weekday),
            HolidayRule::EasterOffset { days } => {
                let easter = easter_sunday(year)?;
                if *days >= 0 {
                    easter.checked_add_days(Days::new(days.unsigned_abs()))
                } else {
                    easter.checked_sub_days(Days::new(days.unsigned_abs()))
                }
            }
            HolidayRule::Custom(rule) => Some(rule(year)),
        }
    }
}

fn last_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> Option<NaiveDate> {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    let last = first_of_next.pred_opt()?;
    let back = (7 + last.weekday().num_days_from_monday() - weekday.num_days_from_monday()) % 7;
    last.checked_sub_days(Days::new(u64::from(back)))
}

/// western (gregorian) easter sunday, by the anonymous gregorian algorithm
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn test_easter() {
        assert_eq!(easter_sunday(2024), Some(date(2024, 3, 31)));
        assert_eq!(easter_sunday(2025), Some(date(2025, 4, 20)));
        assert_eq!(easter_sunday(2026), Some(date(2026, 4, 5)));
    }

    #[test]
    fn test_nearest_workday() {
        let christmas = HolidayRule::Fixed {
            month: 12,
            day: 25,
            observance: Observance::NearestWorkday,
        };
        assert_eq!(christmas.date_in(2022), Some(date(2022, 12, 26)));
        assert_eq!(christmas.date_in(2026), Some(date(2026, 12, 25)));
        let independence = HolidayRule::Fixed {
            month: 7,
            day: 4,
            observance: Observance::NearestWorkday,
        };
        assert_eq!(independence.date_in(2026), Some(date(2026, 7, 3)));
    }

    #[test]
    fn test_weekday_rules() {
        let memorial = HolidayRule::NthWeekday {
            month: 5,
            weekday: Weekday::Mon,
            nth: NthWeekday::Last,
        };
        assert_eq!(memorial.date_in(2026), Some(date(2026, 5, 25)));
        let thanksgiving = HolidayRule::NthWeekday {
            month: 11,
            weekday: Weekday::Thu,
            nth: NthWeekday::Nth(4),
        };
        assert_eq!(thanksgiving.date_in(2026), Some(date(2026, 11, 26)));
        let last_december_friday = HolidayRule::NthWeekday {
            month: 12,
            weekday: Weekday::Fri,
            nth: NthWeekday::Last,
        };
        assert_eq!(last_december_friday.date_in(2026), Some(date(2026, 12, 25)));
    }

    #[test]
    fn test_easter_offsets() {
        let good_friday = HolidayRule::EasterOffset { days: -2 };
        let easter_monday = HolidayRule::EasterOffset { days: 1 };
        assert_eq!(good_friday.date_in(2026), Some(date(2026, 4, 3)));
        assert_eq!(easter_monday.date_in(2026), Some(date(2026, 4, 6)));
    }
}
