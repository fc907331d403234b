use std::sync::Arc;
use std::time::Instant;
use skyroute_core::{FlightRepository, StationRepository};
use skyroute_store::Dataset;

#[derive(Clone)]
pub struct AppState {
    pub flight_repo: Arc<dyn FlightRepository>,
    pub station_repo: Arc<dyn StationRepository>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            flight_repo: Arc::new(dataset.flights),
            station_repo: Arc::new(dataset.stations),
            started_at: Instant::now(),
        }
    }
}
