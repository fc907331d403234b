use serde::{Deserialize, Serialize};
use skyroute_shared::{Bundle, Flight, Station};

use crate::{CoreError, CoreResult};

// ============================================================================
// Typed criteria
// ============================================================================

/// Optional flight criteria. Present fields are ANDed, absent fields
/// impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure_station: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival_station: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundle: Option<Bundle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_only: Option<bool>,
}

impl FlightFilters {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, flight: &Flight) -> bool {
        if let Some(code) = &self.departure_station {
            if !flight.departure_station.eq_ignore_ascii_case(code) {
                return false;
            }
        }
        if let Some(code) = &self.arrival_station {
            if !flight.arrival_station.eq_ignore_ascii_case(code) {
                return false;
            }
        }
        if let Some(date) = &self.departure_date {
            if !flight.departure_date_time.starts_with(date.as_str()) {
                return false;
            }
        }
        if let Some(bundle) = self.bundle {
            if !flight.has_bundle(bundle) {
                return false;
            }
        }
        if self.available_only == Some(true) && !flight.is_available() {
            return false;
        }
        self.matches_price(flight)
    }

    /// The cheapest fare is held to `min_price` and the dearest fare to
    /// `max_price`. A flight without fares fails any bound.
    fn matches_price(&self, flight: &Flight) -> bool {
        if let Some(min) = self.min_price {
            match flight.min_price() {
                Some(lowest) if lowest >= min => {}
                _ => return false,
            }
        }
        if let Some(max) = self.max_price {
            match flight.max_price() {
                Some(highest) if highest <= max => {}
                _ => return false,
            }
        }
        true
    }
}

/// Optional station criteria, ANDed like [`FlightFilters`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iata: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_connection: Option<String>,
}

impl StationFilters {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, station: &Station) -> bool {
        if let Some(code) = &self.iata {
            if !station.has_code(code) {
                return false;
            }
        }
        if let Some(term) = &self.name {
            if !name_contains(station, term) {
                return false;
            }
        }
        if let Some(code) = &self.has_connection {
            if !station.connects_to(code) {
                return false;
            }
        }
        true
    }
}

pub(crate) fn name_contains(station: &Station, term: &str) -> bool {
    station
        .short_name
        .to_lowercase()
        .contains(&term.to_lowercase())
}

// ============================================================================
// Raw query-string criteria
// ============================================================================

/// Flight criteria exactly as received in a query string.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightQuery {
    pub departure_station: Option<String>,
    pub arrival_station: Option<String>,
    pub departure_date: Option<String>,
    pub bundle: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub available_only: Option<String>,
}

impl TryFrom<FlightQuery> for FlightFilters {
    type Error = CoreError;

    fn try_from(query: FlightQuery) -> CoreResult<Self> {
        let bundle = present(query.bundle)
            .map(|raw| raw.parse::<Bundle>())
            .transpose()
            .map_err(|e| CoreError::ValidationError(e.to_string()))?;

        Ok(Self {
            departure_station: present(query.departure_station),
            arrival_station: present(query.arrival_station),
            departure_date: present(query.departure_date),
            bundle,
            min_price: present(query.min_price)
                .map(|raw| parse_price("minPrice", &raw))
                .transpose()?,
            max_price: present(query.max_price)
                .map(|raw| parse_price("maxPrice", &raw))
                .transpose()?,
            available_only: present(query.available_only)
                .map(|raw| parse_flag("availableOnly", &raw))
                .transpose()?,
        })
    }
}

/// Station criteria exactly as received in a query string.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationQuery {
    pub iata: Option<String>,
    pub name: Option<String>,
    pub has_connection: Option<String>,
}

impl From<StationQuery> for StationFilters {
    fn from(query: StationQuery) -> Self {
        Self {
            iata: present(query.iata),
            name: present(query.name),
            has_connection: present(query.has_connection),
        }
    }
}

/// Empty query values count as absent.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn parse_price(field: &str, raw: &str) -> CoreResult<f64> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CoreError::ValidationError(format!(
            "{} must be a number, got '{}'",
            field, raw
        ))),
    }
}

fn parse_flag(field: &str, raw: &str) -> CoreResult<bool> {
    if raw.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(CoreError::ValidationError(format!(
            "{} must be true or false, got '{}'",
            field, raw
        )))
    }
}
