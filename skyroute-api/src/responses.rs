use serde::{Deserialize, Serialize};
use skyroute_core::{FlightFilters, StationFilters};
use skyroute_shared::{Flight, Station};

// ============================================================================
// Envelopes
// ============================================================================

/// Flight listing. Carries the effective filters, or the route/station
/// the listing was looked up by.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightSearchResponse {
    pub data: Vec<Flight>,
    pub count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<FlightFilters>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub station: Option<String>,
}

impl FlightSearchResponse {
    pub fn new(flights: Vec<&Flight>) -> Self {
        let data: Vec<Flight> = flights.into_iter().cloned().collect();
        Self {
            count: data.len(),
            data,
            filters: None,
            route: None,
            station: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationSearchResponse {
    pub data: Vec<Station>,
    pub count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<StationFilters>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
}

impl StationSearchResponse {
    pub fn new(stations: Vec<&Station>) -> Self {
        let data: Vec<Station> = stations.into_iter().cloned().collect();
        Self {
            count: data.len(),
            data,
            filters: None,
            search_term: None,
        }
    }
}

/// Listing of derived views, serialized straight from borrowed data.
#[derive(Debug, Serialize)]
pub struct SummaryResponse<T, F> {
    pub data: Vec<T>,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<F>,
}

impl<T, F> SummaryResponse<T, F> {
    pub fn new(data: Vec<T>, filters: Option<F>) -> Self {
        Self {
            count: data.len(),
            data,
            filters,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SingleStationResponse {
    pub data: Station,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ConnectionsResponse {
    pub data: Vec<String>,
    pub count: usize,
    pub station: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: None,
            path: None,
            method: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}
