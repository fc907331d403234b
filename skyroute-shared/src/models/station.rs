use serde::{Deserialize, Serialize};

/// An airport with the stations it has direct service to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub iata: String,
    pub short_name: String,
    pub connections: Vec<String>,
}

impl Station {
    pub fn has_code(&self, code: &str) -> bool {
        self.iata.eq_ignore_ascii_case(code)
    }

    pub fn connects_to(&self, code: &str) -> bool {
        self.connections.iter().any(|c| c.eq_ignore_ascii_case(code))
    }
}
