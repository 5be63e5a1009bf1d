use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The kind of record a reminder, budget or expense is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Horse,
    Rider,
    Competition,
}

impl EntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Horse => "horse",
            Self::Rider => "rider",
            Self::Competition => "competition",
        }
    }
}

impl Default for EntityType {
    fn default() -> Self {
        Self::Horse
    }
}

impl Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
