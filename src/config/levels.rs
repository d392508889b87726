//! Static level table: level number to target round count.

use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Maps a level to the number of rounds needed to win it.
///
/// # Example
///
/// ```rust
/// use simon::config::LevelTable;
///
/// let table = LevelTable::default();
/// assert_eq!(table.target_rounds(1), Ok(8));
/// assert_eq!(table.target_rounds(4), Ok(31));
/// assert!(table.target_rounds(5).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelTable {
    targets: BTreeMap<u8, usize>,
}

impl LevelTable {
    /// Build a table from explicit `(level, target)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (u8, usize)>,
    {
        Self {
            targets: pairs.into_iter().collect(),
        }
    }

    /// Target round count for `level`.
    pub fn target_rounds(&self, level: u8) -> Result<usize, GameError> {
        self.targets
            .get(&level)
            .copied()
            .ok_or(GameError::InvalidLevel { level })
    }

    pub fn contains(&self, level: u8) -> bool {
        self.targets.contains_key(&level)
    }

    /// Levels in ascending order.
    pub fn levels(&self) -> impl Iterator<Item = u8> + '_ {
        self.targets.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.targets.iter().map(|(&level, &target)| (level, target))
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl Default for LevelTable {
    fn default() -> Self {
        Self::from_pairs([(1, 8), (2, 14), (3, 20), (4, 31)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_matches_classic_levels() {
        let table = LevelTable::default();
        let pairs: Vec<_> = table.iter().collect();
        assert_eq!(pairs, vec![(1, 8), (2, 14), (3, 20), (4, 31)]);
    }

    #[test]
    fn unknown_levels_are_rejected() {
        let table = LevelTable::default();
        for level in [0, 5, 9, u8::MAX] {
            assert_eq!(
                table.target_rounds(level),
                Err(GameError::InvalidLevel { level })
            );
            assert!(!table.contains(level));
        }
    }

    #[test]
    fn deserializes_from_json_object() {
        let table: LevelTable = serde_json::from_str(r#"{"1": 3, "2": 5}"#).unwrap();
        assert_eq!(table.target_rounds(1), Ok(3));
        assert_eq!(table.target_rounds(2), Ok(5));
        assert_eq!(table.levels().collect::<Vec<_>>(), vec![1, 2]);
    }
}
