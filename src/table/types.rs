//! Immutable town/distance lookup.

use crate::error::{Error, Result};

/// Symmetric distance lookup over a list of named towns.
///
/// Distances are kept as a lower-triangular matrix: row `i` holds the
/// `i + 1` cells `d(i, 0) ..= d(i, i)`. A lookup `distance(i, j)` reads
/// the cell `[max(i, j)][min(i, j)]`, so the upper triangle is never
/// stored. The diagonal is stored as 0 and is never queried by the
/// search (a tour visits each town once).
///
/// Indices are taken modulo the town count, which lets tour code address
/// positions cyclically — position `N` is position 0 — without
/// special-casing the closing edge.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceTable {
    towns: Vec<String>,
    distances: Vec<Vec<u32>>,
}

impl DistanceTable {
    /// Builds a table from town names and a lower-triangular matrix.
    ///
    /// The shape is validated here once, so the lookup methods can index
    /// unchecked thereafter.
    pub fn new(towns: Vec<String>, distances: Vec<Vec<u32>>) -> Result<Self> {
        if distances.len() != towns.len() {
            return Err(Error::MalformedTable(format!(
                "{} towns but {} matrix rows",
                towns.len(),
                distances.len()
            )));
        }
        for (i, row) in distances.iter().enumerate() {
            if row.len() != i + 1 {
                return Err(Error::MalformedTable(format!(
                    "row {} has {} cells, expected {}",
                    i,
                    row.len(),
                    i + 1
                )));
            }
        }
        Ok(Self { towns, distances })
    }

    /// Number of towns.
    pub fn size(&self) -> usize {
        self.towns.len()
    }

    /// Name of the town at `index`, taken modulo the town count.
    pub fn town(&self, index: usize) -> &str {
        &self.towns[index % self.towns.len()]
    }

    /// Distance between two towns, both indices taken modulo the town
    /// count. Symmetric: `distance(i, j) == distance(j, i)`.
    pub fn distance(&self, i: usize, j: usize) -> u32 {
        let n = self.towns.len();
        let (i, j) = (i % n, j % n);
        if i < j {
            self.distances[j][i]
        } else {
            self.distances[i][j]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_towns() -> DistanceTable {
        DistanceTable::new(
            vec!["A".into(), "B".into(), "C".into()],
            vec![vec![0], vec![25, 0], vec![150, 120, 0]],
        )
        .expect("valid table")
    }

    #[test]
    fn test_size_and_names() {
        let table = three_towns();
        assert_eq!(table.size(), 3);
        assert_eq!(table.town(0), "A");
        assert_eq!(table.town(2), "C");
    }

    #[test]
    fn test_distance_is_symmetric() {
        let table = three_towns();
        assert_eq!(table.distance(1, 0), 25);
        assert_eq!(table.distance(0, 1), 25);
        assert_eq!(table.distance(2, 1), 120);
        assert_eq!(table.distance(1, 2), 120);
    }

    #[test]
    fn test_indices_wrap_modulo_size() {
        let table = three_towns();
        assert_eq!(table.town(3), "A");
        assert_eq!(table.town(5), "C");
        assert_eq!(table.distance(0, 3), table.distance(0, 0));
        assert_eq!(table.distance(4, 2), table.distance(1, 2));
    }

    #[test]
    fn test_rejects_row_count_mismatch() {
        let result = DistanceTable::new(vec!["A".into(), "B".into()], vec![vec![0]]);
        assert!(matches!(result, Err(Error::MalformedTable(_))));
    }

    #[test]
    fn test_rejects_non_triangular_row() {
        let result = DistanceTable::new(
            vec!["A".into(), "B".into()],
            vec![vec![0], vec![5, 0, 7]],
        );
        assert!(matches!(result, Err(Error::MalformedTable(_))));
    }
}
