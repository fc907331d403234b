pub mod app_config;
pub mod dataset;

pub use dataset::{Dataset, StoreError};
