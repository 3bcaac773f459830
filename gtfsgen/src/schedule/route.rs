use serde::Serialize;

/// a row of routes.txt, built from a worksheet header row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub route_id: String,
    pub agency_id: String,
    pub route_short_name: String,
    pub route_long_name: String,
    pub route_desc: String,
    pub route_type: String,
    pub route_url: String,
    pub route_color: String,
    pub route_text_color: String,
}
