pub mod flight;
pub mod station;

pub use flight::{Bundle, Fare, Flight, ParseBundleError, Price};
pub use station::Station;
