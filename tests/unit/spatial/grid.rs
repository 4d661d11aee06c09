//! Tests for bounds-checked grid storage and emission order

#[cfg(test)]
mod tests {
    use cavewright::spatial::grid::{DOOR, EMPTY, GridMap, WALL};

    // Tests that reads and writes outside the grid are harmless
    // Verified by removing the bounds check in set
    #[test]
    fn test_out_of_bounds_access_is_ignored() {
        let mut grid = GridMap::filled(3, 2, WALL);

        assert_eq!(grid.get(-1, 0), None);
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 2), None);
        assert!(!grid.set(5, 5, EMPTY));
        assert!(!grid.is(-1, -1, WALL));
        assert_eq!(grid.count(WALL), 6);

        assert!(grid.set(2, 1, DOOR));
        assert_eq!(grid.get(2, 1), Some(DOOR));
    }

    // Tests packed keys round trip through point_of
    // Verified by swapping x and y in index_of
    #[test]
    fn test_index_of_is_row_major() {
        let grid = GridMap::new(5, 3);

        assert_eq!(grid.index_of(0, 0), Some(0));
        assert_eq!(grid.index_of(4, 0), Some(4));
        assert_eq!(grid.index_of(0, 1), Some(5));
        assert_eq!(grid.index_of(2, 2), Some(12));
        assert_eq!(grid.index_of(5, 0), None);
        assert_eq!(grid.point_of(12), [2, 2]);
        assert_eq!(grid.point_of(7), [2, 1]);
    }

    // Tests emit walks columns outer
    // Verified by swapping the loops in emit
    #[test]
    fn test_emission_order() {
        let grid = GridMap::new(2, 2);

        let mut columns = Vec::new();
        grid.emit(|x, y, _| columns.push([x, y]));
        assert_eq!(columns, vec![[0, 0], [0, 1], [1, 0], [1, 1]]);
    }

    #[test]
    fn test_fill_and_count() {
        let mut grid = GridMap::new(4, 4);
        assert_eq!(grid.count(EMPTY), 16);
        assert_eq!(grid.area(), 16);

        grid.fill(WALL);
        grid.set(1, 1, EMPTY);
        assert_eq!(grid.count(WALL), 15);
        assert_eq!(grid.count(EMPTY), 1);
        assert_eq!((grid.width(), grid.height()), (4, 4));
    }
}
