//! Static puzzle content bundled with the build.

use ark_game::{PuzzleId, normalize};
use serde::{Deserialize, Serialize};

const PUZZLES_JSON: &str = include_str!("../static/assets/data/puzzles.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Audio,
    Image,
    Symbol,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub kind: MediaKind,
    pub src: String,
    pub label: String,
}

/// One reference-sheet row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub sign: String,
    pub meaning: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleEntry {
    pub id: PuzzleId,
    pub designation: String,
    pub image: String,
    pub blurb: String,
    #[serde(default)]
    pub media: Vec<MediaItem>,
    #[serde(default)]
    pub vocabulary: Vec<VocabularyEntry>,
    pub accepted: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no content for puzzle {0}")]
    Missing(PuzzleId),
    #[error("accepted answer {answer:?} for {puzzle} is not normalized")]
    UnnormalizedAnswer { puzzle: PuzzleId, answer: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleCatalog {
    pub puzzles: Vec<PuzzleEntry>,
}

impl PuzzleCatalog {
    /// Parse and validate catalog JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, a puzzle has no entry, or
    /// an accepted answer would never match normalized input.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// The catalog compiled into the binary. Falls back to an empty catalog
    /// (every puzzle unsolvable) if it fails to validate.
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_json(PUZZLES_JSON).unwrap_or_else(|err| {
            log::error!("bundled puzzle content is invalid: {err}");
            Self::default()
        })
    }

    #[must_use]
    pub fn entry(&self, puzzle: PuzzleId) -> Option<&PuzzleEntry> {
        self.puzzles.iter().find(|entry| entry.id == puzzle)
    }

    #[must_use]
    pub fn accepted(&self, puzzle: PuzzleId) -> Vec<String> {
        self.entry(puzzle)
            .map(|entry| entry.accepted.clone())
            .unwrap_or_default()
    }

    fn validate(&self) -> Result<(), CatalogError> {
        for puzzle in PuzzleId::ALL {
            let entry = self.entry(puzzle).ok_or(CatalogError::Missing(puzzle))?;
            if let Some(answer) = entry
                .accepted
                .iter()
                .find(|answer| answer.is_empty() || normalize(answer) != **answer)
            {
                return Err(CatalogError::UnnormalizedAnswer {
                    puzzle,
                    answer: answer.clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_covers_every_puzzle() {
        let catalog = PuzzleCatalog::from_json(PUZZLES_JSON).unwrap();
        for puzzle in PuzzleId::ALL {
            let entry = catalog.entry(puzzle).unwrap();
            assert!(!entry.accepted.is_empty());
            assert!(!entry.vocabulary.is_empty());
        }
        assert_eq!(PuzzleCatalog::embedded(), catalog);
    }

    #[test]
    fn fiume_accepts_the_example_phrase() {
        let catalog = PuzzleCatalog::embedded();
        let accepted = catalog.accepted(PuzzleId::Fiume);
        assert!(ark_game::verify(
            "Tell Me A Story, About Your Home!",
            &accepted
        ));
    }

    #[test]
    fn rejects_missing_puzzles() {
        let err = PuzzleCatalog::from_json(r#"{ "puzzles": [] }"#).unwrap_err();
        assert!(matches!(err, CatalogError::Missing(PuzzleId::Fiume)));
    }

    #[test]
    fn rejects_answers_with_punctuation() {
        let mut catalog = PuzzleCatalog::embedded();
        catalog.puzzles[1].accepted = vec!["We dance!".to_string()];
        let json = serde_json::to_string(&catalog).unwrap();
        let err = PuzzleCatalog::from_json(&json).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::UnnormalizedAnswer {
                puzzle: PuzzleId::Gelata,
                ..
            }
        ));
    }
}
