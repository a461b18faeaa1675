//! Output projections for season queries. Mapping is pure: DTOs carry no
//! identity beyond the entity data they were built from.

use serde::{Deserialize, Serialize};

use crate::modules::anime::domain::entities::Anime;
use crate::modules::season::domain::summary::{AnimeCharacterPair, SeasonSummaryEntry};
use crate::modules::seiyuu::domain::entities::{AnimeCharacter, Seiyuu};

const MAL_ANIME_BASE_URL: &str = "https://myanimelist.net/anime/";
const MAL_CHARACTER_BASE_URL: &str = "https://myanimelist.net/character/";
const MAL_PEOPLE_BASE_URL: &str = "https://myanimelist.net/people/";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeiyuuDto {
    pub mal_id: i64,
    pub name: String,
    pub image_url: Option<String>,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimeDto {
    pub mal_id: i64,
    pub title: String,
    pub image_url: Option<String>,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimeCharacterDto {
    pub mal_id: i64,
    pub name: String,
    pub image_url: Option<String>,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimeCharacterPairDto {
    pub anime: AnimeDto,
    pub character: AnimeCharacterDto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonSummaryEntryDto {
    pub seiyuu: SeiyuuDto,
    pub anime_character_pairs: Vec<AnimeCharacterPairDto>,
}

impl From<&Seiyuu> for SeiyuuDto {
    fn from(seiyuu: &Seiyuu) -> Self {
        Self {
            mal_id: seiyuu.mal_id,
            name: seiyuu.name.clone(),
            image_url: seiyuu.image_url.clone(),
            url: format!("{}{}", MAL_PEOPLE_BASE_URL, seiyuu.mal_id),
        }
    }
}

impl From<&Anime> for AnimeDto {
    fn from(anime: &Anime) -> Self {
        Self {
            mal_id: anime.mal_id,
            title: anime.title.clone(),
            image_url: anime.image_url.clone(),
            url: format!("{}{}", MAL_ANIME_BASE_URL, anime.mal_id),
        }
    }
}

impl From<&AnimeCharacter> for AnimeCharacterDto {
    fn from(character: &AnimeCharacter) -> Self {
        Self {
            mal_id: character.mal_id,
            name: character.name.clone(),
            image_url: character.image_url.clone(),
            url: format!("{}{}", MAL_CHARACTER_BASE_URL, character.mal_id),
        }
    }
}

impl From<&AnimeCharacterPair> for AnimeCharacterPairDto {
    fn from(pair: &AnimeCharacterPair) -> Self {
        Self {
            anime: AnimeDto::from(&pair.anime),
            character: AnimeCharacterDto::from(&pair.character),
        }
    }
}

impl From<&SeasonSummaryEntry> for SeasonSummaryEntryDto {
    fn from(entry: &SeasonSummaryEntry) -> Self {
        Self {
            seiyuu: SeiyuuDto::from(&entry.seiyuu),
            anime_character_pairs: entry
                .anime_character_pairs
                .iter()
                .map(AnimeCharacterPairDto::from)
                .collect(),
        }
    }
}
