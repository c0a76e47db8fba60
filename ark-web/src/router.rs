use ark_game::PuzzleId;
use yew_router::prelude::*;

#[derive(Clone, Copy, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/fiume")]
    Fiume,
    #[at("/gelata")]
    Gelata,
    #[at("/nuvola")]
    Nuvola,
    #[at("/scoglio")]
    Scoglio,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    #[must_use]
    pub const fn for_puzzle(puzzle: PuzzleId) -> Self {
        match puzzle {
            PuzzleId::Fiume => Self::Fiume,
            PuzzleId::Gelata => Self::Gelata,
            PuzzleId::Nuvola => Self::Nuvola,
            PuzzleId::Scoglio => Self::Scoglio,
        }
    }

    /// The puzzle a route renders, if it is a puzzle screen.
    #[must_use]
    pub const fn puzzle(&self) -> Option<PuzzleId> {
        match self {
            Self::Fiume => Some(PuzzleId::Fiume),
            Self::Gelata => Some(PuzzleId::Gelata),
            Self::Nuvola => Some(PuzzleId::Nuvola),
            Self::Scoglio => Some(PuzzleId::Scoglio),
            Self::Home | Self::NotFound => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Route;
    use ark_game::PuzzleId;
    use yew_router::Routable;

    #[test]
    fn puzzle_routes_round_trip() {
        for puzzle in PuzzleId::ALL {
            let route = Route::for_puzzle(puzzle);
            assert_eq!(route.puzzle(), Some(puzzle));
            assert_eq!(route.to_path(), format!("/{}", puzzle.name()));
        }
        assert!(Route::Home.puzzle().is_none());
        assert!(Route::NotFound.puzzle().is_none());
    }
}
