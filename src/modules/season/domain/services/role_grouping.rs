//! Role grouping engine: collapses the flat role list of a season into one
//! aggregated entry per voice actor.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use log::warn;
use uuid::Uuid;

use crate::modules::season::domain::summary::SeasonSummaryEntry;
use crate::modules::seiyuu::domain::entities::AnimeRole;

/// Group roles by voice actor, preserving first-encounter order.
///
/// The first role seen for a seiyuu creates the entry; later roles append
/// their (anime, character) pair to it. Lookup is keyed by seiyuu id, so a
/// season of n roles aggregates in O(n).
///
/// Roles without an assigned seiyuu are filtered out upstream by the role
/// repository; any that still arrive are skipped rather than grouped.
pub fn group_roles(roles: Vec<AnimeRole>) -> Vec<SeasonSummaryEntry> {
    let mut entries: Vec<SeasonSummaryEntry> = Vec::new();
    let mut entry_index_by_seiyuu: HashMap<Uuid, usize> = HashMap::new();

    for role in roles {
        let Some(seiyuu) = role.seiyuu else {
            warn!(
                "Skipping unassigned role for character '{}' in '{}'",
                role.character.name, role.anime.title
            );
            continue;
        };

        match entry_index_by_seiyuu.entry(seiyuu.id) {
            Entry::Occupied(slot) => {
                entries[*slot.get()].add_pair(role.anime, role.character, role.role_type);
            }
            Entry::Vacant(slot) => {
                slot.insert(entries.len());
                entries.push(SeasonSummaryEntry::new(
                    seiyuu,
                    role.anime,
                    role.character,
                    role.role_type,
                ));
            }
        }
    }

    entries
}
