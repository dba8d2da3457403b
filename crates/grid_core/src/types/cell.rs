//! Grid positions for the calculation grid.
//!
//! A calculation run is organised as a grid: each row is a calculation
//! target and each column is a requested measure. `CellKey` identifies one
//! position in that grid and is used to key per-cell data such as scenario
//! index lists.

use std::fmt;

/// Immutable identifier of one position in the calculation grid.
///
/// Pairs a row index (calculation target) with a column index (requested
/// measure). Equality and hashing are structural, so a `CellKey` built
/// anywhere from the same indices identifies the same cell.
///
/// # Examples
///
/// ```
/// use grid_core::types::CellKey;
///
/// let key = CellKey::new(2, 5);
/// assert_eq!(key.row(), 2);
/// assert_eq!(key.column(), 5);
/// assert_eq!(format!("{}", key), "(2, 5)");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellKey {
    row: usize,
    column: usize,
}

impl CellKey {
    /// Creates a new cell key from row and column indices.
    #[inline]
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Returns the row index (calculation target).
    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the column index (requested measure).
    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }
}

impl From<(usize, usize)> for CellKey {
    fn from((row, column): (usize, usize)) -> Self {
        Self::new(row, column)
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_cell_key_creation() {
        let key = CellKey::new(3, 7);
        assert_eq!(key.row(), 3);
        assert_eq!(key.column(), 7);
    }

    #[test]
    fn test_cell_key_from_tuple() {
        let key: CellKey = (1, 2).into();
        assert_eq!(key, CellKey::new(1, 2));
    }

    #[test]
    fn test_cell_key_display() {
        assert_eq!(format!("{}", CellKey::new(0, 0)), "(0, 0)");
        assert_eq!(format!("{}", CellKey::new(12, 4)), "(12, 4)");
    }

    #[test]
    fn test_cell_key_equality() {
        let a = CellKey::new(1, 2);
        let b = CellKey::new(1, 2);
        let c = CellKey::new(2, 1);
        assert_eq!(a, b);
        assert_ne!(a, c); // Transposed indices are a different cell
    }

    #[test]
    fn test_cell_key_hash() {
        let mut set = HashSet::new();
        set.insert(CellKey::new(0, 0));
        set.insert(CellKey::new(0, 1));
        set.insert(CellKey::new(0, 0)); // Duplicate
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_cell_key_ordering() {
        let mut keys = vec![CellKey::new(1, 0), CellKey::new(0, 2), CellKey::new(0, 1)];
        keys.sort();
        assert_eq!(
            keys,
            vec![CellKey::new(0, 1), CellKey::new(0, 2), CellKey::new(1, 0)]
        );
    }

    #[test]
    fn test_cell_key_copy() {
        let a = CellKey::new(4, 4);
        let b = a; // Copy
        assert_eq!(a, b);
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_cell_key_serde_roundtrip() {
            let key = CellKey::new(3, 9);
            let json = serde_json::to_string(&key).unwrap();
            let parsed: CellKey = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, key);
        }
    }
}
