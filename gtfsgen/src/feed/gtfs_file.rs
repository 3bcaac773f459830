use std::fmt::Display;

/// the eleven files of a generated feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GtfsFile {
    Agency,
    Calendar,
    CalendarDates,
    FareAttributes,
    FareRules,
    FeedInfo,
    Routes,
    Shapes,
    StopTimes,
    Stops,
    Trips,
}

impl GtfsFile {
    pub const ALL: [GtfsFile; 11] = [
        GtfsFile::Agency,
        GtfsFile::Calendar,
        GtfsFile::CalendarDates,
        GtfsFile::FareAttributes,
        GtfsFile::FareRules,
        GtfsFile::FeedInfo,
        GtfsFile::Routes,
        GtfsFile::Shapes,
        GtfsFile::StopTimes,
        GtfsFile::Stops,
        GtfsFile::Trips,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            GtfsFile::Agency => "agency",
            GtfsFile::Calendar => "calendar",
            GtfsFile::CalendarDates => "calendar_dates",
            GtfsFile::FareAttributes => "fare_attributes",
            GtfsFile::FareRules => "fare_rules",
            GtfsFile::FeedInfo => "feed_info",
            GtfsFile::Routes => "routes",
            GtfsFile::Shapes => "shapes",
            GtfsFile::StopTimes => "stop_times",
            GtfsFile::Stops => "stops",
            GtfsFile::Trips => "trips",
        }
    }

    pub fn filename(&self) -> String {
        format!("{}.txt", self.name())
    }

    /// the single header line every copy of this file starts with
    pub fn header(&self) -> &'static str {
        match self {
            GtfsFile::Agency => {
                "agency_id,agency_name,agency_url,agency_timezone,agency_lang,agency_phone"
            }
            GtfsFile::Calendar => {
                "service_id,monday,tuesday,wednesday,thursday,friday,saturday,sunday,start_date,end_date"
            }
            GtfsFile::CalendarDates => "service_id,date,exception_type",
            GtfsFile::FareAttributes => {
                "fare_id,price,currency_type,payment_method,transfers,transfer_duration"
            }
            GtfsFile::FareRules => "fare_id,route_id,origin_id,destination_id,contains_id",
            GtfsFile::FeedInfo => {
                "feed_publisher_name,feed_publisher_url,feed_lang,feed_start_date,feed_end_date,feed_version"
            }
            GtfsFile::Routes => {
                "route_id,agency_id,route_short_name,route_long_name,route_desc,route_type,route_url,route_color,route_text_color"
            }
            GtfsFile::Shapes => {
                "shape_id,shape_pt_lat,shape_pt_lon,shape_pt_sequence,shape_dist_traveled"
            }
            GtfsFile::StopTimes => {
                "trip_id,arrival_time,departure_time,stop_id,stop_sequence,stop_headsign,pickup_type,drop_off_type,shape_dist_traveled"
            }
            GtfsFile::Stops => {
                "stop_id,stop_code,stop_name,stop_desc,stop_lat,stop_lon,zone_id,stop_url,location_type,parent_station,stop_timezone,wheelchair_boarding"
            }
            GtfsFile::Trips => {
                "route_id,service_id,trip_id,trip_headsign,trip_short_name,direction_id,block_id,shape_id,wheelchair_accessible,bikes_allowed"
            }
        }
    }
}

impl Display for GtfsFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.filename())
    }
}
