use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Anime release format, as reported by the metadata provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimeType {
    Tv,
    Movie,
    Ova,
    Ona,
    Special,
    Music,
    Unknown,
}

impl std::fmt::Display for AnimeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnimeType::Tv => write!(f, "tv"),
            AnimeType::Movie => write!(f, "movie"),
            AnimeType::Ova => write!(f, "ova"),
            AnimeType::Ona => write!(f, "ona"),
            AnimeType::Special => write!(f, "special"),
            AnimeType::Music => write!(f, "music"),
            AnimeType::Unknown => write!(f, "unknown"),
        }
    }
}

impl std::str::FromStr for AnimeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tv" => Ok(AnimeType::Tv),
            "movie" => Ok(AnimeType::Movie),
            "ova" => Ok(AnimeType::Ova),
            "ona" => Ok(AnimeType::Ona),
            "special" => Ok(AnimeType::Special),
            "music" => Ok(AnimeType::Music),
            _ => Ok(AnimeType::Unknown),
        }
    }
}

/// Type filter applied when listing the anime of a season
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimeTypeFilter {
    TvOnly,
    AllTypes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anime {
    pub id: Uuid,
    pub mal_id: i64,
    pub title: String,
    pub anime_type: AnimeType,
    pub image_url: Option<String>,
    pub about: Option<String>,
    pub season_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anime_type_parses_known_values() {
        assert_eq!("TV".parse::<AnimeType>().unwrap(), AnimeType::Tv);
        assert_eq!("movie".parse::<AnimeType>().unwrap(), AnimeType::Movie);
        assert_eq!("ONA".parse::<AnimeType>().unwrap(), AnimeType::Ona);
    }

    #[test]
    fn unrecognized_anime_type_falls_back_to_unknown() {
        // Providers occasionally introduce new formats (e.g. "cm", "pv");
        // those must not fail catalog updates.
        assert_eq!("pv".parse::<AnimeType>().unwrap(), AnimeType::Unknown);
    }
}
