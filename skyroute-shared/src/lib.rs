pub mod models;

pub use models::{Bundle, Fare, Flight, ParseBundleError, Price, Station};
