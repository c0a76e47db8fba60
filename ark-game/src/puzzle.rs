use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four alien-language puzzles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PuzzleId {
    Fiume,
    Gelata,
    Nuvola,
    Scoglio,
}

impl PuzzleId {
    pub const ALL: [Self; 4] = [Self::Fiume, Self::Gelata, Self::Nuvola, Self::Scoglio];

    /// Lowercase name used in storage keys and routes.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fiume => "fiume",
            Self::Gelata => "gelata",
            Self::Nuvola => "nuvola",
            Self::Scoglio => "scoglio",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Fiume => "Fiume",
            Self::Gelata => "Gelata",
            Self::Nuvola => "Nuvola",
            Self::Scoglio => "Scoglio",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|id| id.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::PuzzleId;

    #[test]
    fn names_round_trip() {
        for id in PuzzleId::ALL {
            assert_eq!(PuzzleId::from_name(id.name()), Some(id));
        }
        assert_eq!(PuzzleId::from_name(" Gelata "), Some(PuzzleId::Gelata));
        assert!(PuzzleId::from_name("marea").is_none());
    }

    #[test]
    fn serializes_as_lowercase_name() {
        let json = serde_json::to_string(&PuzzleId::Scoglio).unwrap();
        assert_eq!(json, "\"scoglio\"");
    }
}
