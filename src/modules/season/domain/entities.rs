use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Quarterly release window name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeasonName {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl SeasonName {
    /// Parse a season name (case insensitive); accepts "autumn" for Fall
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "winter" => Some(Self::Winter),
            "spring" => Some(Self::Spring),
            "summer" => Some(Self::Summer),
            "fall" | "autumn" => Some(Self::Fall),
            _ => None,
        }
    }
}

impl std::fmt::Display for SeasonName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeasonName::Winter => write!(f, "winter"),
            SeasonName::Spring => write!(f, "spring"),
            SeasonName::Summer => write!(f, "summer"),
            SeasonName::Fall => write!(f, "fall"),
        }
    }
}

/// A quarterly release window grouping anime by air date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Season {
    pub id: Uuid,
    pub name: SeasonName,
    pub year: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
