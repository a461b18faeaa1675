//! Entity factories shared by the season domain tests

use chrono::Utc;
use uuid::Uuid;

use crate::modules::anime::domain::entities::{Anime, AnimeType};
use crate::modules::seiyuu::domain::entities::{AnimeCharacter, AnimeRole, RoleType, Seiyuu};

pub fn seiyuu(name: &str) -> Seiyuu {
    let now = Utc::now();
    Seiyuu {
        id: Uuid::new_v4(),
        mal_id: 1,
        name: name.to_string(),
        japanese_name: None,
        image_url: None,
        about: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn anime(title: &str) -> Anime {
    let now = Utc::now();
    Anime {
        id: Uuid::new_v4(),
        mal_id: 1,
        title: title.to_string(),
        anime_type: AnimeType::Tv,
        image_url: None,
        about: None,
        season_id: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn character(name: &str) -> AnimeCharacter {
    AnimeCharacter {
        id: Uuid::new_v4(),
        mal_id: 1,
        name: name.to_string(),
        image_url: None,
    }
}

pub fn role(seiyuu: &Seiyuu, anime: &Anime, character: &AnimeCharacter, role_type: RoleType) -> AnimeRole {
    AnimeRole {
        id: Uuid::new_v4(),
        seiyuu: Some(seiyuu.clone()),
        anime: anime.clone(),
        character: character.clone(),
        role_type,
    }
}

pub fn unassigned_role(anime: &Anime, character: &AnimeCharacter) -> AnimeRole {
    AnimeRole {
        id: Uuid::new_v4(),
        seiyuu: None,
        anime: anime.clone(),
        character: character.clone(),
        role_type: RoleType::Supporting,
    }
}
