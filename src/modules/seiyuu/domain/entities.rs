use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::anime::domain::entities::Anime;

/// A voice actor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seiyuu {
    pub id: Uuid,
    pub mal_id: i64,
    pub name: String,
    pub japanese_name: Option<String>,
    pub image_url: Option<String>,
    pub about: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An anime character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimeCharacter {
    pub id: Uuid,
    pub mal_id: i64,
    pub name: String,
    pub image_url: Option<String>,
}

/// Significance of a voice-acting credit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleType {
    Main,
    Supporting,
}

impl RoleType {
    /// Weight used when ranking aggregated season entries
    pub fn significance_value(&self) -> u32 {
        match self {
            RoleType::Main => 10,
            RoleType::Supporting => 1,
        }
    }
}

impl std::fmt::Display for RoleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoleType::Main => write!(f, "main"),
            RoleType::Supporting => write!(f, "supporting"),
        }
    }
}

impl std::str::FromStr for RoleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "main" => Ok(RoleType::Main),
            "supporting" => Ok(RoleType::Supporting),
            _ => Err(format!("Invalid role type: {}", s)),
        }
    }
}

/// One voice-acting credit: a seiyuu performing a character in an anime.
/// `seiyuu` is absent for credits the upstream catalog has not assigned yet.
#[derive(Debug, Clone)]
pub struct AnimeRole {
    pub id: Uuid,
    pub seiyuu: Option<Seiyuu>,
    pub anime: Anime,
    pub character: AnimeCharacter,
    pub role_type: RoleType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_type_round_trips_through_strings() {
        assert_eq!("main".parse::<RoleType>().unwrap(), RoleType::Main);
        assert_eq!(
            "Supporting".parse::<RoleType>().unwrap(),
            RoleType::Supporting
        );
        assert!("lead".parse::<RoleType>().is_err());

        assert_eq!(RoleType::Main.to_string(), "main");
        assert_eq!(RoleType::Supporting.to_string(), "supporting");
    }

    #[test]
    fn main_roles_outweigh_supporting_roles() {
        assert!(RoleType::Main.significance_value() > RoleType::Supporting.significance_value());
    }
}
