//! Tests for corridor validation, truncation and priority walls

#[cfg(test)]
mod tests {
    use cavewright::features::{Corridor, Feature, FeatureSizes};
    use cavewright::math::random::RandomSelector;
    use cavewright::spatial::grid::{EMPTY, GridMap, WALL};
    use cavewright::spatial::topology::Direction;

    fn validate(corridor: &mut Corridor, grid: &GridMap) -> bool {
        let width = grid.width() as i32;
        let height = grid.height() as i32;
        corridor.is_valid(
            |x, y| grid.is(x, y, WALL),
            |x, y| x > 0 && y > 0 && x < width - 1 && y < height - 1 && grid.is(x, y, WALL),
        )
    }

    #[test]
    fn test_new_covers_both_endpoints() {
        let corridor = Corridor::new([5, 5], Direction::East, 4);

        assert_eq!(corridor.start(), [5, 5]);
        assert_eq!(corridor.end(), [9, 5]);
        assert_eq!(corridor.cell_count(), 5);
        assert_eq!(corridor.direction(), Direction::East);
    }

    // Tests a corridor into solid rock is valid and ends with a wall
    #[test]
    fn test_valid_in_solid_rock() {
        let grid = GridMap::filled(20, 20, WALL);
        let mut corridor = Corridor::new([5, 5], Direction::South, 3);

        assert!(validate(&mut corridor, &grid));
        assert!(corridor.ends_with_wall());

        let mut dug = Vec::new();
        corridor.create(|x, y, value| {
            assert_eq!(value, EMPTY);
            dug.push([x, y]);
        });
        assert_eq!(dug, vec![[5, 5], [5, 6], [5, 7], [5, 8]]);
    }

    // Tests validation pulls the end back in front of an obstacle
    // Verified by not updating end when the walk stops
    #[test]
    fn test_truncates_at_open_space() {
        let mut grid = GridMap::filled(20, 20, WALL);
        grid.set(8, 5, EMPTY);
        let mut corridor = Corridor::new([5, 5], Direction::East, 6);

        assert!(validate(&mut corridor, &grid));
        assert_eq!(corridor.end(), [7, 5]);
        assert_eq!(corridor.cell_count(), 3);
        assert!(!corridor.ends_with_wall());
    }

    // Tests a single remaining cell is never a corridor
    // Verified by accepting length 1 when the far cell is a wall
    #[test]
    fn test_rejects_single_cell() {
        let mut grid = GridMap::filled(20, 20, WALL);
        grid.set(6, 5, EMPTY);
        let mut into_open = Corridor::new([5, 5], Direction::East, 4);
        assert!(!validate(&mut into_open, &grid));

        let mut blocked = GridMap::filled(20, 20, WALL);
        blocked.set(6, 4, EMPTY);
        let mut against_side = Corridor::new([5, 5], Direction::East, 4);
        assert!(!validate(&mut against_side, &blocked));
    }

    // Tests length counts covered cells: one step spans two cells and may
    // break through, zero steps is a lone cell and may not
    #[test]
    fn test_length_counts_cells_not_steps() {
        let mut grid = GridMap::filled(20, 20, WALL);
        grid.set(7, 5, EMPTY);
        let mut one_step = Corridor::new([5, 5], Direction::East, 1);

        assert!(validate(&mut one_step, &grid));
        assert_eq!(one_step.cell_count(), 2);
        assert!(!one_step.ends_with_wall());

        grid.set(6, 5, EMPTY);
        let mut lone = Corridor::new([5, 5], Direction::East, 0);
        assert_eq!(lone.cell_count(), 1);
        assert!(!validate(&mut lone, &grid));
    }

    // Tests an end that would clip a room corner is rejected
    // Verified by removing the corner check
    #[test]
    fn test_rejects_corner_clip() {
        let mut grid = GridMap::filled(20, 20, WALL);
        grid.set(7, 4, EMPTY);
        let mut corridor = Corridor::new([5, 5], Direction::East, 1);

        assert!(!validate(&mut corridor, &grid));
    }

    // Tests priority walls sit ahead of and beside the end
    #[test]
    fn test_priority_walls() {
        let corridor = Corridor::new([5, 5], Direction::East, 3);
        let mut marked = Vec::new();

        corridor.create_priority_walls(|x, y| marked.push([x, y]));

        assert_eq!(marked, vec![[9, 5], [8, 4], [8, 6]]);
    }

    #[test]
    fn test_no_priority_walls_when_open_ended() {
        let mut grid = GridMap::filled(20, 20, WALL);
        grid.set(5, 9, EMPTY);
        let mut corridor = Corridor::new([5, 5], Direction::South, 6);

        assert!(validate(&mut corridor, &grid));
        let mut marked = 0;
        corridor.create_priority_walls(|_, _| marked += 1);
        assert_eq!(marked, 0);
    }

    #[test]
    fn test_random_length_in_range() {
        let sizes = FeatureSizes {
            room_width: [3, 9],
            room_height: [3, 5],
            corridor_length: [3, 10],
        };
        let mut rng = RandomSelector::new(8);

        for _ in 0..100 {
            let corridor = Corridor::random_toward([10, 10], Direction::West, &sizes, &mut rng);
            assert!((4..=11).contains(&corridor.cell_count()));
            assert!(Corridor::random_at(1, 1, 0, 2, &sizes, &mut rng).is_err());
        }
    }
}
