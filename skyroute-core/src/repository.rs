use skyroute_shared::{Flight, Station};

use crate::filters::{FlightFilters, StationFilters};

/// Read-only access to the flight dataset
pub trait FlightRepository: Send + Sync {
    fn find_all(&self, filters: Option<&FlightFilters>) -> Vec<&Flight>;

    /// Flights from `departure` to `arrival`, in that direction only.
    fn find_by_route(&self, departure: &str, arrival: &str) -> Vec<&Flight>;

    /// Flights that depart from or arrive at `station`.
    fn find_by_station(&self, station: &str) -> Vec<&Flight>;
}

/// Read-only access to the station dataset
pub trait StationRepository: Send + Sync {
    fn find_all(&self, filters: Option<&StationFilters>) -> Vec<&Station>;

    fn find_by_iata(&self, iata: &str) -> Option<&Station>;

    /// Connections of the station, empty when it has none or does not exist.
    fn find_connections(&self, iata: &str) -> &[String];

    fn search_by_name(&self, name: &str) -> Vec<&Station>;
}
