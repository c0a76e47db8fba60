use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use ark_game::PuzzleId;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    puzzles: Vec<CatalogEntry>,
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    id: PuzzleId,
    accepted: Vec<String>,
}

/// Accepted answers per puzzle, read from the web front end's content file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerKey {
    accepted: BTreeMap<PuzzleId, Vec<String>>,
}

impl AnswerKey {
    pub fn load_default() -> Self {
        Self::load_from_assets().unwrap_or_else(|| {
            log::warn!("puzzle content not found; using built-in answers");
            Self::fallback()
        })
    }

    fn assets_data_root() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("ark-web")
            .join("static")
            .join("assets")
            .join("data")
    }

    fn load_from_assets() -> Option<Self> {
        let json = fs::read_to_string(Self::assets_data_root().join("puzzles.json")).ok()?;
        Self::from_json(&json)
    }

    fn from_json(json: &str) -> Option<Self> {
        let file: CatalogFile = serde_json::from_str(json).ok()?;
        let accepted: BTreeMap<_, _> = file
            .puzzles
            .into_iter()
            .filter(|entry| !entry.accepted.is_empty())
            .map(|entry| (entry.id, entry.accepted))
            .collect();
        PuzzleId::ALL
            .iter()
            .all(|puzzle| accepted.contains_key(puzzle))
            .then_some(Self { accepted })
    }

    fn fallback() -> Self {
        let accepted = [
            (PuzzleId::Fiume, "tell me a story about your home"),
            (PuzzleId::Gelata, "we dance to keep warm"),
            (PuzzleId::Nuvola, "the mist carries our words"),
            (PuzzleId::Scoglio, "our hands speak where air is scarce"),
        ]
        .into_iter()
        .map(|(puzzle, answer)| (puzzle, vec![answer.to_string()]))
        .collect();
        Self { accepted }
    }

    pub fn accepted(&self, puzzle: PuzzleId) -> &[String] {
        self.accepted.get(&puzzle).map_or(&[], Vec::as_slice)
    }

    /// The first accepted answer, used as the player's canonical solution.
    pub fn primary(&self, puzzle: PuzzleId) -> &str {
        self.accepted(puzzle).first().map_or("", String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_answers_for_every_puzzle() {
        let key = AnswerKey::load_default();
        for puzzle in PuzzleId::ALL {
            assert!(!key.primary(puzzle).is_empty());
            assert!(ark_game::verify(key.primary(puzzle), key.accepted(puzzle)));
        }
    }

    #[test]
    fn incomplete_catalogs_are_rejected() {
        let json = r#"{ "puzzles": [ { "id": "fiume", "accepted": ["x"] } ] }"#;
        assert!(AnswerKey::from_json(json).is_none());
    }

    #[test]
    fn fallback_matches_bundled_primary_answers() {
        let fallback = AnswerKey::fallback();
        let loaded = AnswerKey::load_default();
        for puzzle in PuzzleId::ALL {
            assert_eq!(fallback.primary(puzzle), loaded.primary(puzzle));
        }
    }
}
