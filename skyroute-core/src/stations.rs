use skyroute_shared::Station;
use tracing::trace;

use crate::filters::{name_contains, StationFilters};
use crate::repository::StationRepository;

/// Station dataset held in memory for the lifetime of the process.
///
/// Codes are expected to be unique ignoring case; the loader enforces
/// this. Lookups still resolve to the first match in collection order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStationRepository {
    stations: Vec<Station>,
}

impl InMemoryStationRepository {
    pub fn new(stations: Vec<Station>) -> Self {
        Self { stations }
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

impl StationRepository for InMemoryStationRepository {
    fn find_all(&self, filters: Option<&StationFilters>) -> Vec<&Station> {
        let result: Vec<&Station> = match filters {
            Some(filters) if !filters.is_empty() => {
                self.stations.iter().filter(|s| filters.matches(s)).collect()
            }
            _ => self.stations.iter().collect(),
        };
        trace!(?filters, matched = result.len(), "station filter applied");
        result
    }

    fn find_by_iata(&self, iata: &str) -> Option<&Station> {
        self.stations.iter().find(|s| s.has_code(iata))
    }

    fn find_connections(&self, iata: &str) -> &[String] {
        self.find_by_iata(iata)
            .map(|s| s.connections.as_slice())
            .unwrap_or_default()
    }

    fn search_by_name(&self, name: &str) -> Vec<&Station> {
        self.stations
            .iter()
            .filter(|s| name_contains(s, name))
            .collect()
    }
}
