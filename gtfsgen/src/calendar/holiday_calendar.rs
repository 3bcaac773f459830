use super::{Holiday, HolidayRule, NthWeekday, Observance, ServiceWindow};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

/// one dated occurrence of a labeled holiday
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HolidayOccurrence {
    pub name: &'static str,
    #[serde(serialize_with = "super::date_codec::serialize_naive_date")]
    pub date: NaiveDate,
}

/// a fixed table of holiday rules
#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    holidays: Vec<Holiday>,
}

impl Default for HolidayCalendar {
    fn default() -> Self {
        HolidayCalendar::usa_wv()
    }
}

impl HolidayCalendar {
    /// federal holidays plus the West Virginia state and election days
    pub fn usa_wv() -> HolidayCalendar {
        use HolidayRule::{Custom, EasterOffset, Fixed};
        let fixed = |month, day| Fixed {
            month,
            day,
            observance: Observance::NearestWorkday,
        };
        let nth = |month, weekday, n| HolidayRule::NthWeekday {
            month,
            weekday,
            nth: NthWeekday::Nth(n),
        };
        let holidays = vec![
            Holiday {
                name: "New Years Day",
                rule: fixed(1, 1),
            },
            Holiday {
                name: "Birthday of Martin Luther King, Jr.",
                rule: nth(1, Weekday::Mon, 3),
            },
            Holiday {
                name: "Washington's Birthday",
                rule: nth(2, Weekday::Mon, 3),
            },
            Holiday {
                name: "Memorial Day",
                rule: HolidayRule::NthWeekday {
                    month: 5,
                    weekday: Weekday::Mon,
                    nth: NthWeekday::Last,
                },
            },
            Holiday {
                name: "July 4th",
                rule: fixed(7, 4),
            },
            Holiday {
                name: "Independence Day",
                rule: fixed(7, 4),
            },
            Holiday {
                name: "Labor Day",
                rule: nth(9, Weekday::Mon, 1),
            },
            Holiday {
                name: "Columbus Day",
                rule: nth(10, Weekday::Mon, 2),
            },
            Holiday {
                name: "Veterans Day",
                rule: fixed(11, 11),
            },
            Holiday {
                name: "Thanksgiving Day",
                rule: nth(11, Weekday::Thu, 4),
            },
            Holiday {
                name: "Day After Thanksgiving Day",
                rule: nth(11, Weekday::Fri, 4),
            },
            Holiday {
                name: "Christmas",
                rule: fixed(12, 25),
            },
            Holiday {
                name: "Good Friday",
                rule: EasterOffset { days: -2 },
            },
            Holiday {
                name: "Easter Monday",
                rule: EasterOffset { days: 1 },
            },
            Holiday {
                name: "US Election Day",
                rule: Custom(general_election_day),
            },
            Holiday {
                name: "WV Primary Election Day",
                rule: Custom(primary_election_day),
            },
            Holiday {
                name: "WV Day",
                rule: Fixed {
                    month: 6,
                    day: 20,
                    observance: Observance::None,
                },
            },
        ];
        HolidayCalendar { holidays }
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.holidays.iter().map(|h| h.name)
    }

    /// every occurrence of every rule inside the window, ordered by date.
    /// years on both sides of the window are evaluated too, since an
    /// observed date can cross a year boundary.
    pub fn occurrences(&self, window: &ServiceWindow) -> Vec<HolidayOccurrence> {
        let years = (window.start_date.year() - 1)..=(window.end_date.year() + 1);
        let mut occurrences = vec![];
        for year in years {
            for holiday in self.holidays.iter() {
                if let Some(date) = holiday.rule.date_in(year) {
                    if window.contains(&date) {
                        occurrences.push(HolidayOccurrence {
                            name: holiday.name,
                            date,
                        });
                    }
                }
            }
        }
        occurrences.sort_by_key(|o| o.date);
        occurrences
    }
}

/// returned for years without an election. it lies outside any realistic
/// service window and so drops out of the occurrence table.
fn no_election() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// tuesday after the first monday of the month, in even years only
fn election_day(year: i32, month: u32) -> NaiveDate {
    if year % 2 != 0 {
        return no_election();
    }
    NaiveDate::from_weekday_of_month_opt(year, month, Weekday::Mon, 1)
        .and_then(|monday| monday.succ_opt())
        .unwrap_or_else(no_election)
}

fn general_election_day(year: i32) -> NaiveDate {
    election_day(year, 11)
}

fn primary_election_day(year: i32) -> NaiveDate {
    election_day(year, 5)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn window(start: NaiveDate, end: NaiveDate) -> ServiceWindow {
        ServiceWindow {
            start_date: start,
            end_date: end,
        }
    }

    #[test]
    fn test_election_days() {
        assert_eq!(general_election_day(2024), date(2024, 11, 5));
        assert_eq!(general_election_day(2026), date(2026, 11, 3));
        assert_eq!(primary_election_day(2026), date(2026, 5, 5));
        assert_eq!(general_election_day(2025), date(2000, 1, 1));
    }

    #[test]
    fn test_occurrences_in_one_year() {
        let calendar = HolidayCalendar::usa_wv();
        let found = calendar.occurrences(&window(date(2026, 1, 1), date(2026, 12, 31)));
        let named = |name: &str| {
            found
                .iter()
                .filter(|o| o.name == name)
                .map(|o| o.date)
                .collect::<Vec<_>>()
        };
        assert_eq!(
            named("Birthday of Martin Luther King, Jr."),
            vec![date(2026, 1, 19)]
        );
        assert_eq!(named("Labor Day"), vec![date(2026, 9, 7)]);
        assert_eq!(
            named("Day After Thanksgiving Day"),
            vec![date(2026, 11, 27)]
        );
        assert_eq!(named("WV Day"), vec![date(2026, 6, 20)]);
        assert_eq!(named("US Election Day"), vec![date(2026, 11, 3)]);
        assert!(found.windows(2).all(|w| w[0].date <= w[1].date));
    }

    #[test]
    fn test_observed_date_from_next_year() {
        // new year 2022 is a saturday, observed friday 2021-12-31
        let calendar = HolidayCalendar::usa_wv();
        let found = calendar.occurrences(&window(date(2021, 12, 1), date(2021, 12, 31)));
        assert!(found
            .iter()
            .any(|o| o.name == "New Years Day" && o.date == date(2021, 12, 31)));
    }

    #[test]
    fn test_odd_year_election_sentinel_is_outside_window() {
        let calendar = HolidayCalendar::usa_wv();
        let found = calendar.occurrences(&window(date(2027, 1, 1), date(2027, 12, 31)));
        assert!(found.iter().all(|o| o.name != "US Election Day"));
    }
}
