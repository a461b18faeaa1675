use crate::modules::anime::domain::entities::AnimeType;
use crate::modules::season::domain::entities::SeasonName;

use super::dto::{JikanAnimeData, JikanPersonData};

/// Fresh anime metadata fetched from the provider, not yet attached to a
/// catalog row
#[derive(Debug, Clone)]
pub struct AnimeMetadata {
    pub mal_id: i64,
    pub title: String,
    pub anime_type: AnimeType,
    pub image_url: Option<String>,
    pub about: Option<String>,
    pub season: Option<(SeasonName, i32)>,
}

/// Fresh seiyuu metadata fetched from the provider
#[derive(Debug, Clone)]
pub struct SeiyuuMetadata {
    pub mal_id: i64,
    pub name: String,
    pub japanese_name: Option<String>,
    pub image_url: Option<String>,
    pub about: Option<String>,
}

pub struct JikanMapper;

impl JikanMapper {
    pub fn to_anime_metadata(data: JikanAnimeData) -> AnimeMetadata {
        let season = match (data.season.as_deref().and_then(SeasonName::parse), data.year) {
            (Some(name), Some(year)) => Some((name, year)),
            _ => None,
        };

        AnimeMetadata {
            mal_id: data.mal_id,
            title: data.title,
            anime_type: data
                .anime_type
                .as_deref()
                .and_then(|t| t.parse().ok())
                .unwrap_or(AnimeType::Unknown),
            image_url: data.images.and_then(|i| i.jpg.image_url),
            about: data.synopsis,
            season,
        }
    }

    pub fn to_seiyuu_metadata(data: JikanPersonData) -> SeiyuuMetadata {
        // MAL lists the native name as "family given"
        let japanese_name = match (&data.family_name, &data.given_name) {
            (Some(family), Some(given)) => Some(format!("{} {}", family, given)),
            (Some(single), None) | (None, Some(single)) => Some(single.clone()),
            (None, None) => None,
        };

        SeiyuuMetadata {
            mal_id: data.mal_id,
            name: data.name,
            japanese_name,
            image_url: data.images.and_then(|i| i.jpg.image_url),
            about: data.about,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::provider::jikan::dto::{JikanImageSet, JikanImages};

    fn anime_data() -> JikanAnimeData {
        JikanAnimeData {
            mal_id: 40748,
            title: "Jujutsu Kaisen".to_string(),
            anime_type: Some("TV".to_string()),
            images: Some(JikanImages {
                jpg: JikanImageSet {
                    image_url: Some("https://cdn.example/jjk.jpg".to_string()),
                    large_image_url: None,
                },
            }),
            synopsis: Some("Cursed energy.".to_string()),
            season: Some("fall".to_string()),
            year: Some(2020),
        }
    }

    #[test]
    fn maps_anime_payload_to_metadata() {
        let metadata = JikanMapper::to_anime_metadata(anime_data());

        assert_eq!(metadata.mal_id, 40748);
        assert_eq!(metadata.anime_type, AnimeType::Tv);
        assert_eq!(metadata.season, Some((SeasonName::Fall, 2020)));
        assert_eq!(metadata.image_url.as_deref(), Some("https://cdn.example/jjk.jpg"));
    }

    #[test]
    fn missing_year_drops_the_season() {
        let mut data = anime_data();
        data.year = None;

        let metadata = JikanMapper::to_anime_metadata(data);
        assert_eq!(metadata.season, None);
    }

    #[test]
    fn person_native_name_is_family_then_given() {
        let data = JikanPersonData {
            mal_id: 99,
            name: "Hanazawa, Kana".to_string(),
            given_name: Some("香菜".to_string()),
            family_name: Some("花澤".to_string()),
            alternate_names: Vec::new(),
            about: None,
            images: None,
        };

        let metadata = JikanMapper::to_seiyuu_metadata(data);
        assert_eq!(metadata.japanese_name.as_deref(), Some("花澤 香菜"));
    }
}
