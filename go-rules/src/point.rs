use serde::{Deserialize, Serialize};
use std::fmt;

/// A board intersection. Rows and columns are 1-indexed; row 1 is the
/// bottom of the board as conventionally printed.
///
/// Coordinates are signed so the neighbors of an edge point (row or
/// column 0) are representable values rather than arithmetic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    pub const fn new(row: i32, col: i32) -> Self {
        Point { row, col }
    }

    /// The four orthogonally adjacent points, with no bounds filtering.
    /// Callers keep only the ones `Board::is_on_grid` accepts.
    pub fn neighbors(self) -> [Point; 4] {
        [
            Point::new(self.row - 1, self.col),
            Point::new(self.row + 1, self.col),
            Point::new(self.row, self.col - 1),
            Point::new(self.row, self.col + 1),
        ]
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn neighbors_of_interior_point() {
        let neighbors = Point::new(3, 3).neighbors();
        let expected = [
            Point::new(2, 3),
            Point::new(4, 3),
            Point::new(3, 2),
            Point::new(3, 4),
        ];
        assert_eq!(neighbors, expected);
    }

    #[test]
    fn neighbors_of_corner_are_unfiltered() {
        let neighbors = Point::new(1, 1).neighbors();
        assert!(neighbors.contains(&Point::new(0, 1)));
        assert!(neighbors.contains(&Point::new(1, 0)));
    }

    #[test]
    fn value_equality_and_hashing() {
        let mut set = HashSet::new();
        set.insert(Point::new(2, 5));
        set.insert(Point::new(2, 5));
        assert_eq!(set.len(), 1);
        assert!(set.contains(&Point::new(2, 5)));
        assert!(!set.contains(&Point::new(5, 2)));
    }

    #[test]
    fn display() {
        assert_eq!(Point::new(4, 17).to_string(), "(4, 17)");
    }
}
