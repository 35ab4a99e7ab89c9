//! Difficulty tiers for the computer opponent.

use serde::{Deserialize, Serialize};

/// How strongly the computer plays.
///
/// Persists across rounds until changed; changing it resets the round.
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
    clap::ValueEnum,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    /// Random squares.
    #[default]
    Easy,
    /// Greedy half of the time, random otherwise.
    Medium,
    /// Always greedy: win, else block, else random.
    Hard,
}

impl Difficulty {
    /// Maps the console shortcut letter (`e`, `m`, `h`) to a tier.
    pub fn from_shortcut(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'e' => Some(Difficulty::Easy),
            'm' => Some(Difficulty::Medium),
            'h' => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_default_is_easy() {
        assert_eq!(Difficulty::default(), Difficulty::Easy);
    }

    #[test]
    fn test_display_lowercase() {
        let names: Vec<String> = Difficulty::iter().map(|d| d.to_string()).collect();
        assert_eq!(names, vec!["easy", "medium", "hard"]);
    }

    #[test]
    fn test_shortcuts() {
        assert_eq!(Difficulty::from_shortcut('E'), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_shortcut('m'), Some(Difficulty::Medium));
        assert_eq!(Difficulty::from_shortcut('h'), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_shortcut('x'), None);
    }
}
