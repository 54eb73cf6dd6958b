//! Tests for automated move selection

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tilemerge::algorithm::policy::PREFERRED_ORDER;
    use tilemerge::algorithm::{Direction, MovePolicy, ScoreRule, legal_moves};
    use tilemerge::spatial::Grid;

    fn grid(rows: [[u32; 4]; 4]) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn test_ordered_prefers_down() {
        let g = grid([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let mut rng = StdRng::seed_from_u64(0);

        assert_eq!(MovePolicy::default(), MovePolicy::Ordered);
        assert_eq!(
            MovePolicy::Ordered.choose(&g, ScoreRule::LastMerge, &mut rng),
            Some(Direction::Down)
        );
    }

    // Tests ordered play falls through to the first legal direction
    #[test]
    fn test_ordered_skips_blocked_directions() {
        // Nothing can go down or left
        let g = grid([[0; 4], [0; 4], [0; 4], [2, 4, 0, 0]]);
        let mut rng = StdRng::seed_from_u64(0);

        assert_eq!(
            MovePolicy::Ordered.choose(&g, ScoreRule::LastMerge, &mut rng),
            Some(Direction::Right)
        );
    }

    // Tests greedy picks the scoring move and breaks ties by preference
    #[test]
    fn test_greedy_picks_highest_score() {
        let g = grid([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let mut rng = StdRng::seed_from_u64(0);

        // Left and Right both score 4; Left comes first in the preference order
        assert_eq!(
            MovePolicy::Greedy.choose(&g, ScoreRule::LastMerge, &mut rng),
            Some(Direction::Left)
        );

        let vertical = grid([[0, 0, 0, 8], [0, 0, 0, 8], [0; 4], [2, 0, 0, 0]]);
        assert_eq!(
            MovePolicy::Greedy.choose(&vertical, ScoreRule::LastMerge, &mut rng),
            Some(Direction::Down)
        );
    }

    #[test]
    fn test_random_returns_legal_move() {
        let g = grid([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let legal = legal_moves(&g);
        let mut rng = StdRng::seed_from_u64(21);

        for _ in 0..50 {
            let choice = MovePolicy::Random
                .choose(&g, ScoreRule::LastMerge, &mut rng)
                .unwrap();
            assert!(legal.contains(&choice));
        }
    }

    #[test]
    fn test_no_choice_when_game_over() {
        let g = grid([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        let mut rng = StdRng::seed_from_u64(0);

        for policy in [MovePolicy::Ordered, MovePolicy::Random, MovePolicy::Greedy] {
            assert_eq!(policy.choose(&g, ScoreRule::Cumulative, &mut rng), None);
        }
    }

    #[test]
    fn test_preferred_order_covers_all_directions() {
        for direction in Direction::ALL {
            assert!(PREFERRED_ORDER.contains(&direction));
        }
    }
}
