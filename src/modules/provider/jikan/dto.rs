//! Subset of the Jikan v4 JSON shapes consumed by the catalog jobs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JikanAnimeResponse {
    pub data: JikanAnimeData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JikanAnimeListResponse {
    pub data: Vec<JikanAnimeData>,
    pub pagination: Option<JikanPagination>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JikanPagination {
    pub last_visible_page: i32,
    pub has_next_page: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JikanAnimeData {
    pub mal_id: i64,
    pub title: String,
    #[serde(rename = "type")]
    pub anime_type: Option<String>,
    pub images: Option<JikanImages>,
    pub synopsis: Option<String>,
    pub season: Option<String>,
    pub year: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JikanImages {
    pub jpg: JikanImageSet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JikanImageSet {
    pub image_url: Option<String>,
    pub large_image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JikanPersonResponse {
    pub data: JikanPersonData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JikanPersonData {
    pub mal_id: i64,
    pub name: String,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    #[serde(default)]
    pub alternate_names: Vec<String>,
    pub about: Option<String>,
    pub images: Option<JikanImages>,
}
