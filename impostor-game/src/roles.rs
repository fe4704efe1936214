//! Role assignment: who gets the secret word and who plays blind.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, GameConfig};

/// Stable per-session player identifier, assigned at role-assignment
/// time and never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player-{}", self.0)
    }
}

/// One seat at the table. `word` is `None` exactly when the player is
/// an impostor; `is_impostor` is fixed for the whole game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub is_impostor: bool,
    pub is_eliminated: bool,
    pub word: Option<String>,
}

/// Mark `impostor_count` of `names` as impostors, uniformly at random,
/// and hand the shared word to everyone else.
///
/// Output order equals input order; the list is both the seating order
/// and the reveal order, so it is never shuffled.
///
/// # Errors
///
/// Returns `ConfigError::NotEnoughPlayers` when fewer than
/// `impostor_count + 2` names are given, and `ConfigError::NoImpostors`
/// when `impostor_count` is zero.
pub fn assign_roles(
    names: &[String],
    impostor_count: usize,
    word: &str,
    rng: &mut impl Rng,
) -> Result<Vec<Player>, ConfigError> {
    if impostor_count < 1 {
        return Err(ConfigError::NoImpostors);
    }
    let required = GameConfig::min_players(impostor_count);
    if names.len() < required {
        return Err(ConfigError::NotEnoughPlayers {
            required,
            actual: names.len(),
        });
    }

    // Partial Fisher-Yates: after k swaps the first k slots hold a
    // uniform k-subset of the indices.
    let mut indices: Vec<usize> = (0..names.len()).collect();
    for i in 0..impostor_count {
        let j = rng.gen_range(i..indices.len());
        indices.swap(i, j);
    }
    let impostors = &indices[..impostor_count];

    Ok(names
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let is_impostor = impostors.contains(&index);
            Player {
                id: PlayerId(u32::try_from(index).unwrap_or(u32::MAX)),
                name: name.clone(),
                is_impostor,
                is_eliminated: false,
                word: (!is_impostor).then(|| word.to_string()),
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn exactly_impostor_count_players_are_marked() {
        let mut rng = SmallRng::seed_from_u64(11);
        let players =
            assign_roles(&names(&["Ana", "Beto", "Cat", "Dan", "Eli"]), 2, "León", &mut rng)
                .unwrap();
        assert_eq!(players.len(), 5);
        assert_eq!(players.iter().filter(|p| p.is_impostor).count(), 2);
        for player in &players {
            assert!(!player.is_eliminated);
            assert_eq!(player.word.is_none(), player.is_impostor);
            if let Some(word) = &player.word {
                assert_eq!(word, "León");
            }
        }
    }

    #[test]
    fn output_order_matches_input_order() {
        let mut rng = SmallRng::seed_from_u64(3);
        let input = names(&["Ana", "Beto", "Cat", "Dan"]);
        let players = assign_roles(&input, 1, "Tigre", &mut rng).unwrap();
        let got: Vec<&str> = players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(got, ["Ana", "Beto", "Cat", "Dan"]);
        let ids: Vec<u32> = players.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, [0, 1, 2, 3]);
    }

    #[test]
    fn selection_has_no_positional_bias() {
        // Over many seeded draws every seat should be picked roughly
        // equally often; a sort-comparator shuffle fails this badly.
        let input = names(&["Ana", "Beto", "Cat", "Dan", "Eli"]);
        let mut hits = [0u32; 5];
        for seed in 0..5_000u64 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let players = assign_roles(&input, 1, "Oso", &mut rng).unwrap();
            let index = players.iter().position(|p| p.is_impostor).unwrap();
            hits[index] += 1;
        }
        for count in hits {
            // Expected 1000 per seat; allow a generous band.
            assert!((700..=1300).contains(&count), "biased seat count {count}");
        }
    }

    #[test]
    fn ratio_preconditions_are_enforced() {
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(
            assign_roles(&names(&["Ana", "Beto"]), 1, "León", &mut rng),
            Err(ConfigError::NotEnoughPlayers {
                required: 3,
                actual: 2
            })
        );
        assert_eq!(
            assign_roles(&names(&["Ana", "Beto", "Cat"]), 0, "León", &mut rng),
            Err(ConfigError::NoImpostors)
        );
    }
}
