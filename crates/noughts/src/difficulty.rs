//! Difficulty levels for the computer player.

use serde::{Deserialize, Serialize};

/// Selects which move strategy the computer uses.
///
/// Parsing is case-insensitive and also accepts the classic level names
/// `idiot`, `average` and `genius`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Plays a random empty square.
    #[strum(to_string = "Easy", serialize = "idiot")]
    #[serde(alias = "idiot")]
    Easy,
    /// Flips a coin between Easy and Hard on every move.
    #[default]
    #[strum(to_string = "Medium", serialize = "average")]
    #[serde(alias = "average")]
    Medium,
    /// Greedy single-ply line heuristic.
    #[strum(to_string = "Hard", serialize = "genius")]
    #[serde(alias = "genius")]
    Hard,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_display_names() {
        assert_eq!(Difficulty::Easy.to_string(), "Easy");
        assert_eq!(Difficulty::Hard.to_string(), "Hard");
    }

    #[test]
    fn test_parse_accepts_classic_names() {
        assert_eq!(Difficulty::from_str("genius").unwrap(), Difficulty::Hard);
        assert_eq!(Difficulty::from_str("Idiot").unwrap(), Difficulty::Easy);
        assert_eq!(Difficulty::from_str("MEDIUM").unwrap(), Difficulty::Medium);
        assert!(Difficulty::from_str("impossible").is_err());
    }

    #[test]
    fn test_default_is_medium() {
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }
}
