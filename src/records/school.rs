use serde::{Deserialize, Serialize};

/// Static display fields printed in every document header. Pass-through
/// only; the engine never interprets them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolInfo {
    pub school_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phones: Vec<String>,
}

impl SchoolInfo {
    pub fn new(school_name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            school_name: school_name.into(),
            address: address.into(),
            phones: Vec::new(),
        }
    }

    /// Phone numbers joined for a single header line.
    pub fn phone_line(&self) -> String {
        self.phones.join(" / ")
    }
}
