use super::{
    CalendarEntry, CalendarException, HolidayCalendar, HolidayOccurrence, ServicePattern,
    ServiceWindow, SERVICE_REMOVED,
};
use crate::report::GeneratorException;
use chrono::NaiveDate;
use indexmap::IndexSet;

/// the calendar rows of one unit
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCalendar {
    pub entry: CalendarEntry,
    pub exceptions: Vec<CalendarException>,
    pub issues: Vec<GeneratorException>,
}

/// turns a service pattern into a date-bounded calendar entry plus one
/// service-removed exception per configured holiday in the window.
#[derive(Debug, Clone)]
pub struct CalendarResolver {
    calendar: HolidayCalendar,
    holiday_names: Vec<String>,
    max_span_days: u32,
}

impl CalendarResolver {
    pub fn new(
        calendar: HolidayCalendar,
        holiday_names: Vec<String>,
        max_span_days: u32,
    ) -> CalendarResolver {
        let known: Vec<&str> = calendar.names().collect();
        for name in holiday_names
            .iter()
            .filter(|n| !known.contains(&n.as_str()))
        {
            log::warn!("holiday '{name}' is not in the holiday calendar and will never match");
        }
        CalendarResolver {
            calendar,
            holiday_names,
            max_span_days,
        }
    }

    pub fn service_window(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        run_date: NaiveDate,
    ) -> ServiceWindow {
        ServiceWindow::clip(start_date, end_date, self.max_span_days, run_date)
    }

    /// occurrences of the configured holidays in the window, ascending, one
    /// per date. labels must match exactly.
    pub fn holidays(&self, window: &ServiceWindow) -> Vec<HolidayOccurrence> {
        let mut dates = IndexSet::new();
        self.calendar
            .occurrences(window)
            .into_iter()
            .filter(|o| self.holiday_names.iter().any(|n| n == o.name))
            .filter(|o| dates.insert(o.date))
            .collect()
    }

    /// distinct dates, ascending, of the configured holidays in the window
    pub fn holiday_dates(&self, window: &ServiceWindow) -> Vec<NaiveDate> {
        self.holidays(window).into_iter().map(|o| o.date).collect()
    }

    pub fn resolve(&self, service: &ServicePattern, window: &ServiceWindow) -> ResolvedCalendar {
        let mut issues = vec![];
        if service.is_blank() {
            issues.push(GeneratorException::missing_fields(
                "calendar",
                &["service_id", "weekdays"],
            ));
        }
        let [monday, tuesday, wednesday, thursday, friday, saturday, sunday] = service.weekdays;
        let entry = CalendarEntry {
            service_id: service.service_id.clone(),
            monday,
            tuesday,
            wednesday,
            thursday,
            friday,
            saturday,
            sunday,
            start_date: window.start_date,
            end_date: window.end_date,
        };
        let exceptions = self
            .holiday_dates(window)
            .into_iter()
            .map(|date| CalendarException {
                service_id: service.service_id.clone(),
                date,
                exception_type: SERVICE_REMOVED,
            })
            .collect();
        ResolvedCalendar {
            entry,
            exceptions,
            issues,
        }
    }
}
