//! Tests for the prioritised wall frontier

#[cfg(test)]
mod tests {
    use cavewright::algorithm::frontier::{Priority, WallFrontier};
    use cavewright::math::random::RandomSelector;

    fn drain(frontier: &mut WallFrontier, rng: &mut RandomSelector) -> Vec<[i32; 2]> {
        std::iter::from_fn(|| frontier.pop(rng)).collect()
    }

    // Tests re-inserting a wall moves it between buckets instead of duplicating it
    // Verified by skipping the removal from the previous bucket
    #[test]
    fn test_insert_replaces_priority() {
        let mut frontier = WallFrontier::new();
        let mut rng = RandomSelector::new(1);
        frontier.insert([1, 1], Priority::Normal);
        frontier.insert([1, 1], Priority::Elevated);

        assert!(frontier.has_elevated());
        assert_eq!(drain(&mut frontier, &mut rng), vec![[1, 1]]);

        frontier.insert([1, 1], Priority::Elevated);
        frontier.insert([1, 1], Priority::Normal);
        assert!(!frontier.has_elevated());
        assert_eq!(drain(&mut frontier, &mut rng), vec![[1, 1]]);
    }

    // Tests elevated walls are always taken before normal ones
    #[test]
    fn test_pop_prefers_elevated() {
        let mut frontier = WallFrontier::new();
        let mut rng = RandomSelector::new(3);
        for x in 0..10 {
            frontier.insert([x, 0], Priority::Normal);
        }
        frontier.insert([4, 4], Priority::Elevated);
        frontier.insert([5, 5], Priority::Elevated);

        let first = frontier.pop(&mut rng);
        let second = frontier.pop(&mut rng);
        let mut elevated = vec![first, second];
        elevated.sort();
        assert_eq!(elevated, vec![Some([4, 4]), Some([5, 5])]);
        assert!(!frontier.has_elevated());

        let rest = drain(&mut frontier, &mut rng);
        assert_eq!(rest.len(), 10);
        assert!(rest.iter().all(|&[_, y]| y == 0));
    }

    #[test]
    fn test_pop_empty_frontier() {
        let mut frontier = WallFrontier::new();
        let mut rng = RandomSelector::new(3);

        assert_eq!(frontier.pop(&mut rng), None);
        assert!(!frontier.has_elevated());
    }

    #[test]
    fn test_remove() {
        let mut frontier = WallFrontier::new();
        let mut rng = RandomSelector::new(3);
        frontier.insert([2, 3], Priority::Elevated);
        frontier.insert([4, 5], Priority::Normal);

        assert_eq!(frontier.remove([2, 3]), Some(Priority::Elevated));
        assert_eq!(frontier.remove([2, 3]), None);
        assert!(!frontier.has_elevated());
        assert_eq!(drain(&mut frontier, &mut rng), vec![[4, 5]]);
    }
}
