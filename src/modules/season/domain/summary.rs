use crate::modules::anime::domain::entities::Anime;
use crate::modules::seiyuu::domain::entities::{AnimeCharacter, RoleType, Seiyuu};

/// One (anime, character) credit folded into a season summary entry
#[derive(Debug, Clone)]
pub struct AnimeCharacterPair {
    pub anime: Anime,
    pub character: AnimeCharacter,
}

/// Aggregated season roles of a single voice actor.
///
/// Built up by the grouping engine; pairs keep first-encounter order. The
/// same (anime, character) pair is never recorded twice.
#[derive(Debug, Clone)]
pub struct SeasonSummaryEntry {
    pub seiyuu: Seiyuu,
    pub anime_character_pairs: Vec<AnimeCharacterPair>,
    total_significance: u32,
}

impl SeasonSummaryEntry {
    pub fn new(seiyuu: Seiyuu, anime: Anime, character: AnimeCharacter, role_type: RoleType) -> Self {
        let mut entry = Self {
            seiyuu,
            anime_character_pairs: Vec::new(),
            total_significance: 0,
        };
        entry.add_pair(anime, character, role_type);
        entry
    }

    /// Append a credit. A pair matching an already recorded (anime,
    /// character) combination is dropped and contributes no significance.
    pub fn add_pair(&mut self, anime: Anime, character: AnimeCharacter, role_type: RoleType) {
        let already_recorded = self
            .anime_character_pairs
            .iter()
            .any(|pair| pair.anime.id == anime.id && pair.character.id == character.id);

        if already_recorded {
            return;
        }

        self.total_significance += role_type.significance_value();
        self.anime_character_pairs.push(AnimeCharacterPair { anime, character });
    }

    pub fn pair_count(&self) -> usize {
        self.anime_character_pairs.len()
    }

    /// Ranking weight of this entry; derived, never persisted
    pub fn total_significance_value(&self) -> u32 {
        self.total_significance
    }
}
