//! Tests for game-over, win and legal-move detection

#[cfg(test)]
mod tests {
    use tilemerge::algorithm::{Direction, can_move, has_winning_tile, is_game_over, legal_moves};
    use tilemerge::spatial::{Grid, empty_board};

    fn grid(rows: [[u32; 4]; 4]) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    fn checkerboard() -> Grid {
        grid([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]])
    }

    #[test]
    fn test_checkerboard_is_game_over() {
        let g = checkerboard();

        assert!(is_game_over(&g));
        assert!(legal_moves(&g).is_empty());
        for direction in Direction::ALL {
            assert!(!can_move(&g, direction));
        }
    }

    // Tests a single equal pair keeps a full grid alive in either orientation
    #[test]
    fn test_full_grid_with_equal_neighbours_not_over() {
        let horizontal = grid([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 8, 8]]);
        assert!(!is_game_over(&horizontal));
        assert_eq!(legal_moves(&horizontal), vec![Direction::Left, Direction::Right]);

        let vertical = grid([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 8], [4, 2, 4, 8]]);
        assert!(!is_game_over(&vertical));
        assert_eq!(legal_moves(&vertical), vec![Direction::Up, Direction::Down]);
    }

    #[test]
    fn test_empty_cell_not_over() {
        let mut rows = [[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]];
        rows[3][3] = 0;

        assert!(!is_game_over(&grid(rows)));
        assert!(!is_game_over(&empty_board()));
    }

    // Tests a pair of top tiles cannot merge, so it does not keep the game alive
    #[test]
    fn test_top_tile_pair_is_game_over() {
        let top = 1 << 31;
        let g = grid([[top, top, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);

        assert!(legal_moves(&g).is_empty());
        assert!(is_game_over(&g));

        let vertical = grid([[top, 4, 2, 4], [top, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        assert!(legal_moves(&vertical).is_empty());
        assert!(is_game_over(&vertical));
    }

    #[test]
    fn test_has_winning_tile() {
        let g = grid([[1024, 0, 0, 0], [0; 4], [0; 4], [0, 0, 0, 2]]);

        assert!(!has_winning_tile(&g, 2048));
        assert!(has_winning_tile(&g, 1024));
        assert!(has_winning_tile(&g, 16));

        let beyond = grid([[4096, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        assert!(has_winning_tile(&beyond, 2048));
        assert!(!has_winning_tile(&empty_board(), 2));
    }

    // Tests a lone corner tile can only move away from its corner
    #[test]
    fn test_can_move_corner_tile() {
        let g = grid([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);

        assert!(!can_move(&g, Direction::Left));
        assert!(!can_move(&g, Direction::Up));
        assert!(can_move(&g, Direction::Down));
        assert!(can_move(&g, Direction::Right));
        assert_eq!(legal_moves(&g), vec![Direction::Down, Direction::Right]);
    }

    #[test]
    fn test_empty_board_has_no_legal_moves() {
        assert!(legal_moves(&empty_board()).is_empty());
    }
}
