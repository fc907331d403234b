pub mod filters;
pub mod flights;
pub mod repository;
pub mod stations;
pub mod summary;

pub use filters::{FlightFilters, FlightQuery, StationFilters, StationQuery};
pub use flights::InMemoryFlightRepository;
pub use repository::{FlightRepository, StationRepository};
pub use stations::InMemoryStationRepository;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
