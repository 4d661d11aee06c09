//! Tests for the cellular automaton and its connectivity repair

#[cfg(test)]
mod tests {
    use cavewright::GenerationError;
    use cavewright::algorithm::MapGenerator;
    use cavewright::algorithm::cellular::{Cellular, CellularOptions};
    use cavewright::analysis::statistics::MapStatistics;
    use cavewright::spatial::grid::{EMPTY, WALL};
    use cavewright::spatial::topology::Topology;

    fn solid(width: usize, height: usize, options: CellularOptions) -> Cellular {
        let mut cellular =
            Cellular::new(width, height, options, 1).expect("options must be valid");
        cellular.randomize(1.0).expect("probability must be valid");
        cellular
    }

    #[test]
    fn test_rejects_counts_above_neighbourhood() {
        let born_nine = CellularOptions {
            born: vec![9],
            ..CellularOptions::default()
        };
        assert!(matches!(
            Cellular::new(10, 10, born_nine, 1),
            Err(GenerationError::InvalidParameter { .. })
        ));

        let hex_seven = CellularOptions {
            survive: vec![7],
            topology: Topology::Six,
            ..CellularOptions::default()
        };
        assert!(Cellular::new(10, 10, hex_seven, 1).is_err());
    }

    #[test]
    fn test_randomize_extremes() {
        let mut cellular =
            Cellular::new(6, 4, CellularOptions::default(), 2).expect("options must be valid");

        cellular.randomize(1.0).expect("probability must be valid");
        assert_eq!(cellular.snapshot().count(WALL), 24);

        cellular.randomize(0.0).expect("probability must be valid");
        assert_eq!(cellular.snapshot().count(EMPTY), 24);

        assert!(cellular.randomize(1.5).is_err());
    }

    // Tests one generation of the default rule on a solid map: corners starve,
    // everything else survives
    // Verified by counting out-of-bounds neighbours as live
    #[test]
    fn test_generation_applies_rule() {
        let mut cellular = solid(5, 5, CellularOptions::default());
        let mut cells = Vec::new();
        cellular.create(|x, y, value| cells.push((x, y, value)));

        assert_eq!(cells.len(), 25);
        for &(x, y, value) in &cells {
            let corner = (x == 0 || x == 4) && (y == 0 || y == 4);
            assert_eq!(value, if corner { EMPTY } else { WALL }, "cell ({x}, {y})");
        }
    }

    // Tests cells are reported rows outer
    #[test]
    fn test_emission_order_rows_outer() {
        let mut cellular = solid(3, 2, CellularOptions::default());
        let mut order = Vec::new();
        cellular.create(|x, y, _| order.push([x, y]));

        assert_eq!(order, vec![[0, 0], [1, 0], [2, 0], [0, 1], [1, 1], [2, 1]]);
    }

    // Tests hex grids only report cells whose column parity matches the row
    #[test]
    fn test_hex_emits_parity_cells() {
        let options = CellularOptions {
            born: vec![4, 5, 6],
            survive: vec![3, 4, 5, 6],
            topology: Topology::Six,
        };
        let mut cellular = solid(6, 4, options);
        let mut cells = Vec::new();
        cellular.create(|x, y, _| cells.push([x, y]));

        assert_eq!(cells.len(), 12);
        assert!(cells.iter().all(|[x, y]| (x + y) % 2 == 0));
    }

    #[test]
    fn test_set_get_and_options() {
        let mut cellular = solid(4, 4, CellularOptions::default());
        cellular.set(2, 1, EMPTY);

        assert_eq!(cellular.get(2, 1), Some(EMPTY));
        assert_eq!(cellular.get(9, 9), None);
        assert_eq!(cellular.dimensions(), (4, 4));

        let four = CellularOptions {
            born: vec![3],
            survive: vec![2, 3],
            topology: Topology::Four,
        };
        assert!(cellular.set_options(four).is_ok());
        assert_eq!(cellular.options().topology, Topology::Four);

        let broken = CellularOptions {
            born: vec![5],
            survive: vec![],
            topology: Topology::Four,
        };
        assert!(cellular.set_options(broken).is_err());
        assert_eq!(cellular.options().topology, Topology::Four);
    }

    // Tests two separate caves end up joined by a tunnel
    // Verified by skipping the tunnel in connect
    #[test]
    fn test_connect_joins_regions() {
        let mut cellular = solid(14, 9, CellularOptions::default());
        for [x, y] in [[1, 1], [2, 1], [1, 2], [2, 2], [10, 5], [11, 5], [11, 6]] {
            cellular.set(x, y, EMPTY);
        }
        let free_before = cellular.snapshot().count(EMPTY);

        let mut connections = Vec::new();
        let mut reported = 0;
        cellular.connect(|_, _, _| reported += 1, EMPTY, |from, to| {
            connections.push((from, to));
        });

        let grid = cellular.snapshot();
        assert_eq!(reported, 14 * 9);
        assert!(!connections.is_empty());
        assert!(grid.count(EMPTY) > free_before);
        assert!(MapStatistics::from_grid(&grid).is_connected());
    }

    #[test]
    fn test_connect_single_region_adds_nothing() {
        let mut cellular = solid(8, 8, CellularOptions::default());
        for x in 2..6 {
            cellular.set(x, 3, EMPTY);
        }

        let mut connections = 0;
        cellular.connect(|_, _, _| {}, EMPTY, |_, _| connections += 1);

        assert_eq!(connections, 0);
        assert_eq!(cellular.snapshot().count(EMPTY), 4);
    }

    #[test]
    fn test_connect_without_free_cells() {
        let mut cellular = solid(5, 5, CellularOptions::default());
        let mut reported = 0;
        cellular.connect(|_, _, _| reported += 1, EMPTY, |_, _| {});

        assert_eq!(reported, 25);
        assert_eq!(cellular.snapshot().count(WALL), 25);
    }

    // Tests hex tunnels keep to hex cells and join the caves
    #[test]
    fn test_connect_hex_regions() {
        let options = CellularOptions {
            born: vec![4],
            survive: vec![3],
            topology: Topology::Six,
        };
        let mut cellular = solid(13, 8, options);
        for [x, y] in [[2, 2], [8, 2], [3, 5], [12, 6]] {
            cellular.set(x, y, EMPTY);
        }

        cellular.connect(|_, _, _| {}, EMPTY, |_, _| {});

        let grid = cellular.snapshot();
        let statistics = MapStatistics::with_topology(&grid, Topology::Six);
        assert!(statistics.is_connected());
        assert!(statistics.floor >= 4);
    }

    // Tests a two-column hex grid zigzags between rows while a single column,
    // which has no hex path at all, is left untouched
    // Verified by letting the zigzag step left of column 0
    #[test]
    fn test_connect_narrow_hex_grids() {
        let options = CellularOptions {
            born: vec![4],
            survive: vec![3],
            topology: Topology::Six,
        };

        let mut pair = solid(2, 5, options.clone());
        pair.set(0, 0, EMPTY);
        pair.set(0, 4, EMPTY);
        let mut tunnels = 0;
        pair.connect(|_, _, _| {}, EMPTY, |_, _| tunnels += 1);

        let grid = pair.snapshot();
        assert_eq!(tunnels, 1);
        assert!(MapStatistics::with_topology(&grid, Topology::Six).is_connected());
        assert!(grid.is(1, 1, EMPTY) && grid.is(0, 2, EMPTY) && grid.is(1, 3, EMPTY));

        let mut column = solid(1, 5, options);
        for y in [0, 2, 4] {
            column.set(0, y, EMPTY);
        }
        let before = column.snapshot();
        let mut tunnels = 0;
        column.connect(|_, _, _| {}, EMPTY, |_, _| tunnels += 1);

        assert_eq!(tunnels, 0);
        assert_eq!(column.snapshot(), before);
    }
}
