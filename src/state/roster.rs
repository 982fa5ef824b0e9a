use crate::types::*;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeSet;

pub fn default_player_name(index: usize) -> String {
    format!("Player {}", index + 1)
}

/// Choose `impostor_count` distinct seat indices out of `player_count`.
///
/// Draws with replacement and discards duplicates until the set is full.
/// The count is capped below `player_count` so at least one crewmate exists.
pub fn pick_impostor_indices<R: Rng + ?Sized>(
    player_count: usize,
    impostor_count: usize,
    rng: &mut R,
) -> BTreeSet<usize> {
    let target = impostor_count.min(player_count.saturating_sub(1));
    let mut picked = BTreeSet::new();
    while picked.len() < target {
        picked.insert(rng.random_range(0..player_count));
    }
    picked
}

/// Random permutation of `0..player_count` (Fisher-Yates)
pub fn shuffled_order<R: Rng + ?Sized>(player_count: usize, rng: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = (0..player_count).collect();
    order.shuffle(rng);
    order
}

/// Build a fresh roster: ids 1..=n, custom names where given, impostors
/// holding [`IMPOSTOR_WORD`] instead of the secret word.
pub fn create_players(
    player_count: usize,
    impostors: &BTreeSet<usize>,
    secret_word: &str,
    player_names: &[String],
) -> Vec<Player> {
    (0..player_count)
        .map(|index| {
            let is_impostor = impostors.contains(&index);
            let display_name = player_names
                .get(index)
                .map(|name| name.trim())
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| default_player_name(index));

            Player {
                id: index as PlayerId + 1,
                display_name,
                is_impostor,
                secret_word: if is_impostor {
                    IMPOSTOR_WORD.to_string()
                } else {
                    secret_word.to_string()
                },
                has_seen_role: false,
                has_voted: false,
                voted_for: None,
                is_eliminated: false,
                votes_received: 0,
            }
        })
        .collect()
}
