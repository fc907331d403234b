use serde::de::DeserializeOwned;
use skyroute_core::{InMemoryFlightRepository, InMemoryStationRepository};
use skyroute_shared::{Flight, Station};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::app_config::DataConfig;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed data in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate station code {code} (already defined as {existing})")]
    DuplicateStation { code: String, existing: String },
}

/// Both static datasets, ready to be served.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub flights: InMemoryFlightRepository,
    pub stations: InMemoryStationRepository,
}

impl Dataset {
    pub fn load(config: &DataConfig) -> Result<Self, StoreError> {
        let flights = load_flights(&config.flights)?;
        let stations = load_stations(&config.stations)?;
        info!(flights = flights.len(), stations = stations.len(), "Dataset loaded");

        Ok(Self {
            flights: InMemoryFlightRepository::new(flights),
            stations: InMemoryStationRepository::new(stations),
        })
    }
}

pub fn load_flights<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Flight>, StoreError> {
    let mut flights = Vec::new();
    for path in paths {
        let batch: Vec<Flight> = read_json(path.as_ref())?;
        info!("Loaded {} flights from {}", batch.len(), path.as_ref().display());
        flights.extend(batch);
    }

    for flight in flights.iter().filter(|f| f.fares.is_empty()) {
        warn!(
            "Flight {} -> {} at {} has no fares",
            flight.departure_station, flight.arrival_station, flight.departure_date_time
        );
    }

    Ok(flights)
}

pub fn load_stations(path: &Path) -> Result<Vec<Station>, StoreError> {
    let stations: Vec<Station> = read_json(path)?;
    validate_stations(&stations)?;
    Ok(stations)
}

/// Station codes must be unique ignoring case.
pub fn validate_stations(stations: &[Station]) -> Result<(), StoreError> {
    let mut seen: HashMap<String, &str> = HashMap::new();
    for station in stations {
        if let Some(existing) = seen.insert(station.iata.to_ascii_uppercase(), &station.iata) {
            return Err(StoreError::DuplicateStation {
                code: station.iata.clone(),
                existing: existing.to_string(),
            });
        }
    }
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let raw = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
