use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

/// Board size used when the caller does not pick one.
pub const DEFAULT_SIZE: Coord2 = (15, 15);

/// Mine-count presets. The counts are tuned for the default 15x15 board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    pub const fn mines(self) -> CellCount {
        match self {
            Self::Easy => 27,
            Self::Medium => 43,
            Self::Hard => 64,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.name().eq_ignore_ascii_case(s))
            .ok_or(GameError::UnknownDifficulty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("hard".parse(), Ok(Difficulty::Hard));
        assert_eq!("Medium".parse(), Ok(Difficulty::Medium));
        assert_eq!("nightmare".parse::<Difficulty>(), Err(GameError::UnknownDifficulty));
    }

    #[test]
    fn presets_fit_the_default_board() {
        for difficulty in Difficulty::ALL {
            let config = GameConfig::from_difficulty(DEFAULT_SIZE, difficulty).unwrap();
            assert_eq!(config.mines, difficulty.mines());
        }
    }

    #[test]
    fn presets_can_overflow_small_boards() {
        assert_eq!(
            GameConfig::from_difficulty((5, 5), Difficulty::Easy),
            Err(GameError::TooManyMines)
        );
    }
}
