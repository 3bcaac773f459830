mod calendar_record;
mod calendar_resolver;
pub mod date_codec;
mod holiday_calendar;
mod holiday_rule;
mod service_pattern;
mod service_window;

pub use calendar_record::{CalendarEntry, CalendarException, SERVICE_REMOVED};
pub use calendar_resolver::{CalendarResolver, ResolvedCalendar};
pub use holiday_calendar::{HolidayCalendar, HolidayOccurrence};
pub use holiday_rule::{easter_sunday, Holiday, HolidayRule, NthWeekday, Observance};
pub use service_pattern::ServicePattern;
pub use service_window::ServiceWindow;
