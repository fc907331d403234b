//! Views derived from the raw datasets for display purposes.

use chrono::DateTime;
use serde::Serialize;
use skyroute_shared::{Bundle, Flight, Station};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightSummary<'a> {
    #[serde(flatten)]
    pub flight: &'a Flight,
    pub duration_minutes: Option<i64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub available_bundles: Vec<Bundle>,
}

impl<'a> FlightSummary<'a> {
    pub fn new(flight: &'a Flight) -> Self {
        let mut available_bundles = Vec::new();
        for fare in &flight.fares {
            if !available_bundles.contains(&fare.bundle) {
                available_bundles.push(fare.bundle);
            }
        }

        Self {
            flight,
            duration_minutes: duration_minutes(flight),
            min_price: flight.min_price(),
            max_price: flight.max_price(),
            available_bundles,
        }
    }
}

/// Block time between departure and arrival. Timestamps carry their own
/// offsets, so flights across timezones are measured correctly.
pub fn duration_minutes(flight: &Flight) -> Option<i64> {
    let departure = DateTime::parse_from_rfc3339(&flight.departure_date_time).ok()?;
    let arrival = DateTime::parse_from_rfc3339(&flight.arrival_date_time).ok()?;
    Some((arrival - departure).num_minutes())
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationTraffic<'a> {
    #[serde(flatten)]
    pub station: &'a Station,
    pub departure_count: usize,
    pub arrival_count: usize,
    pub total_flights: usize,
}

impl<'a> StationTraffic<'a> {
    pub fn new(station: &'a Station, flights: &[&Flight]) -> Self {
        let departure_count = flights
            .iter()
            .filter(|f| station.has_code(&f.departure_station))
            .count();
        let arrival_count = flights
            .iter()
            .filter(|f| station.has_code(&f.arrival_station))
            .count();

        Self {
            station,
            departure_count,
            arrival_count,
            total_flights: departure_count + arrival_count,
        }
    }
}
