use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    pub amount: f64,
    pub currency_code: String,
}

/// Fare tiers sold on a flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bundle {
    Basic,
    Standard,
    Plus,
}

impl Bundle {
    pub const ALL: [Bundle; 3] = [Bundle::Basic, Bundle::Standard, Bundle::Plus];

    pub fn as_str(&self) -> &'static str {
        match self {
            Bundle::Basic => "basic",
            Bundle::Standard => "standard",
            Bundle::Plus => "plus",
        }
    }
}

impl fmt::Display for Bundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown bundle '{0}', expected one of basic, standard, plus")]
pub struct ParseBundleError(pub String);

impl FromStr for Bundle {
    type Err = ParseBundleError;

    /// Wire values are lower-case; any other spelling is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Bundle::ALL
            .into_iter()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| ParseBundleError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fare {
    pub price: Price,
    pub remaining_tickets: u32,
    pub bundle: Bundle,
}

/// A scheduled flight with its fares.
///
/// Timestamps are kept as the ISO-8601 text found in the dataset so that
/// date filters can match on the textual prefix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub departure_station: String,
    pub arrival_station: String,
    pub departure_date_time: String,
    pub arrival_date_time: String,
    pub fares: Vec<Fare>,
}

impl Flight {
    /// Lowest fare price, `None` when the flight carries no fares.
    pub fn min_price(&self) -> Option<f64> {
        self.fares.iter().map(|f| f.price.amount).reduce(f64::min)
    }

    /// Highest fare price, `None` when the flight carries no fares.
    pub fn max_price(&self) -> Option<f64> {
        self.fares.iter().map(|f| f.price.amount).reduce(f64::max)
    }

    pub fn has_bundle(&self, bundle: Bundle) -> bool {
        self.fares.iter().any(|f| f.bundle == bundle)
    }

    pub fn is_available(&self) -> bool {
        self.fares.iter().any(|f| f.remaining_tickets > 0)
    }
}
