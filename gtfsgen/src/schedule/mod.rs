mod departure_time;
mod route;
mod schedule_decoder;
mod stop;
mod stop_time;
mod trip;
mod worksheet_matrix;
mod worksheet_schema;
mod worksheet_source;

pub use departure_time::{normalize_departure, DepartureTimeError, HourBucket};
pub use route::Route;
pub use schedule_decoder::{DecodedSchedule, ScheduleDecoder};
pub use stop::Stop;
pub use stop_time::StopTime;
pub use trip::Trip;
pub use worksheet_matrix::WorksheetMatrix;
pub use worksheet_schema::{
    CalendarColumns, RouteColumns, StopColumns, TripColumns, UnitLayout, WorksheetSchema,
};
pub use worksheet_source::{CsvWorksheetSource, WorksheetSource, WorksheetSourceError};
