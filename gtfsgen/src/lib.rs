//! Generates a static GTFS feed from three transit-authority inputs: a
//! worksheet matrix describing turn-by-turn schedules, KML route lines and a
//! configured holiday calendar. Each worksheet is decoded into its own feed
//! directory before all unit feeds are merged into one master archive.
pub mod app;
pub mod calendar;
pub mod config;
pub mod feed;
pub mod report;
pub mod schedule;
pub mod shape;
