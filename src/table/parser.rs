//! Distance-file parsing.
//!
//! The format is two blank-line-separated parts: first one town name per
//! line, then the lower-triangular distance rows. Row `i` lists the
//! distances to towns `0 ..= i`; `-` marks a cell with no value (the
//! diagonal, typically). Missing and `-` cells default to 0.
//!
//! ```text
//! Winterthur
//! Zurich
//! Bern
//!
//! -
//! 25 -
//! 150 120 -
//! ```

use std::fs;
use std::path::Path;

use super::types::DistanceTable;
use crate::error::{Error, Result};

/// Reads and parses a distance file.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<DistanceTable> {
    let text = fs::read_to_string(path)?;
    parse_str(&text)
}

/// Parses distance-file text.
pub fn parse_str(input: &str) -> Result<DistanceTable> {
    let mut towns: Vec<String> = Vec::new();
    let mut rows: Vec<Vec<u32>> = Vec::new();
    let mut in_names = true;

    for (idx, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            in_names = false;
            continue;
        }

        if in_names {
            towns.push(line.trim().to_string());
            continue;
        }

        let i = rows.len();
        let mut row = vec![0u32; i + 1];
        for (j, cell) in line.split_whitespace().take(i + 1).enumerate() {
            // j == i is the diagonal slot; left at 0 whatever the file says
            if j == i || cell == "-" {
                continue;
            }
            row[j] = cell.parse().map_err(|e| Error::Parse {
                line: idx + 1,
                message: format!("bad distance {cell:?}: {e}"),
            })?;
        }
        rows.push(row);
    }

    DistanceTable::new(towns, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Winterthur
Zurich
Bern

-
25 -
150 120 -
";

    #[test]
    fn test_parses_sample() {
        let table = parse_str(SAMPLE).expect("sample parses");
        assert_eq!(table.size(), 3);
        assert_eq!(table.town(0), "Winterthur");
        assert_eq!(table.town(2), "Bern");
        assert_eq!(table.distance(0, 1), 25);
        assert_eq!(table.distance(0, 2), 150);
        assert_eq!(table.distance(1, 2), 120);
    }

    #[test]
    fn test_missing_cells_default_to_zero() {
        let table = parse_str("A\nB\nC\n\n-\n7\n9\n").expect("short rows parse");
        assert_eq!(table.distance(0, 1), 7);
        assert_eq!(table.distance(0, 2), 9);
        // row 2 only had one cell; the rest stays 0
        assert_eq!(table.distance(1, 2), 0);
    }

    #[test]
    fn test_extra_cells_are_ignored() {
        let table = parse_str("A\nB\n\n-\n4 - 99 99\n").expect("long rows parse");
        assert_eq!(table.size(), 2);
        assert_eq!(table.distance(1, 0), 4);
    }

    #[test]
    fn test_bad_distance_reports_line() {
        let err = parse_str("A\nB\n\n-\nx -\n").expect_err("bad cell rejected");
        match err {
            Error::Parse { line, .. } => assert_eq!(line, 5),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_lines_after_matrix_are_tolerated() {
        let table = parse_str("A\nB\n\n-\n3 -\n\n").expect("trailing blank parses");
        assert_eq!(table.distance(0, 1), 3);
    }
}
