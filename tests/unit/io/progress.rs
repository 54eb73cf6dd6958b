//! Tests for progress tracking across batches of games

#[cfg(test)]
mod tests {
    use tilemerge::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
    use tilemerge::io::progress::ProgressManager;

    // Tests a single game runs through every stage
    #[test]
    fn test_single_game_lifecycle() {
        let mut pm = ProgressManager::new();
        pm.initialize(1);
        assert_eq!(pm.game_count(), 1);

        pm.start_game(0, 42, 100);
        pm.update_moves(0, 10);
        pm.update_moves(0, 55);
        pm.complete_game(0, 1024);
        pm.finish();
    }

    #[test]
    fn test_default_matches_new() {
        let mut pm = ProgressManager::default();
        assert_eq!(pm.game_count(), 0);

        pm.initialize(0);
        pm.finish();
    }

    // Tests batches larger than the bar limit roll through the window
    #[test]
    fn test_batch_mode() {
        let games = MAX_INDIVIDUAL_PROGRESS_BARS + 3;
        let mut pm = ProgressManager::new();
        pm.initialize(games);

        for index in 0..games {
            pm.start_game(index, index as u64, 20);
            pm.update_moves(index, 20);
            pm.complete_game(index, 64);
        }
        pm.finish();

        assert_eq!(pm.game_count(), games);
    }

    // Tests updates for games never started are ignored
    #[test]
    fn test_unknown_game_updates() {
        let mut pm = ProgressManager::new();
        pm.initialize(2);

        pm.update_moves(7, 3);
        pm.complete_game(7, 0);
        pm.start_game(1, 5, 10);
        pm.finish();
    }
}
