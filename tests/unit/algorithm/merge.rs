//! Tests for row compression, left merging and score rules

#[cfg(test)]
mod tests {
    use tilemerge::algorithm::{ScoreRule, can_merge, compress, merge_left};
    use tilemerge::spatial::Grid;

    fn grid(rows: [[u32; 4]; 4]) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    fn single_row(row: [u32; 4]) -> Grid {
        grid([row, [0; 4], [0; 4], [0; 4]])
    }

    // Tests values slide toward column 0 keeping their order
    #[test]
    fn test_compress_slides_left() {
        let g = grid([[0, 2, 0, 4], [8, 0, 0, 2], [0, 0, 0, 16], [2, 4, 8, 16]]);
        let (compressed, changed) = compress(&g);

        assert!(changed);
        assert_eq!(
            compressed.to_rows(),
            vec![
                vec![2, 4, 0, 0],
                vec![8, 2, 0, 0],
                vec![16, 0, 0, 0],
                vec![2, 4, 8, 16],
            ]
        );
    }

    // Tests a compressed grid reports no change and is returned as is
    #[test]
    fn test_compress_already_compressed() {
        let g = grid([[2, 4, 0, 0], [8, 0, 0, 0], [0; 4], [2, 4, 8, 16]]);
        let (compressed, changed) = compress(&g);

        assert!(!changed);
        assert_eq!(compressed, g);
    }

    // Tests the scan re-examines the emptied cell, giving two disjoint merges
    #[test]
    fn test_merge_left_uncompressed_run_of_four() {
        let (merged, changed, score) = merge_left(single_row([2, 2, 2, 2]), ScoreRule::LastMerge);

        assert!(changed);
        assert_eq!(merged.to_rows()[0], vec![4, 0, 4, 0]);
        assert_eq!(score, 4);
    }

    // Tests a merged tile is not merged again with its right neighbour
    #[test]
    fn test_merge_left_no_chain_merge() {
        let (merged, _, score) = merge_left(single_row([4, 4, 8, 0]), ScoreRule::LastMerge);

        assert_eq!(merged.to_rows()[0], vec![8, 0, 8, 0]);
        assert_eq!(score, 8);
    }

    // Tests the score holds only the last merge of the scan
    #[test]
    fn test_merge_left_last_merge_score() {
        let (_, _, score) = merge_left(single_row([2, 2, 4, 4]), ScoreRule::LastMerge);
        assert_eq!(score, 8);

        // Scan order runs row by row, so the later row wins
        let g = grid([[8, 8, 0, 0], [2, 2, 0, 0], [0; 4], [0; 4]]);
        let (_, _, score) = merge_left(g, ScoreRule::LastMerge);
        assert_eq!(score, 4);
    }

    #[test]
    fn test_merge_left_cumulative_score() {
        let (merged, _, score) = merge_left(single_row([2, 2, 4, 4]), ScoreRule::Cumulative);
        assert_eq!(merged.to_rows()[0], vec![4, 0, 8, 0]);
        assert_eq!(score, 12);

        let g = grid([[8, 8, 0, 0], [2, 2, 0, 0], [0; 4], [0; 4]]);
        let (_, _, score) = merge_left(g, ScoreRule::Cumulative);
        assert_eq!(score, 20);
    }

    #[test]
    fn test_merge_left_nothing_to_merge() {
        let g = grid([[2, 4, 8, 16], [2, 0, 2, 0], [0; 4], [0; 4]]);
        let (merged, changed, score) = merge_left(g.clone(), ScoreRule::LastMerge);

        assert!(!changed);
        assert_eq!(score, 0);
        assert_eq!(merged, g);
    }

    // Tests tiles at the top power of two never overflow when paired
    #[test]
    fn test_merge_left_top_tile_does_not_overflow() {
        let top = 1 << 31;
        let g = single_row([top, top, 0, 0]);
        let (merged, changed, score) = merge_left(g.clone(), ScoreRule::LastMerge);

        assert!(!changed);
        assert_eq!(score, 0);
        assert_eq!(merged, g);
    }

    #[test]
    fn test_can_merge() {
        assert!(can_merge(2, 2));
        assert!(can_merge(1 << 30, 1 << 30));
        assert!(!can_merge(2, 4));
        assert!(!can_merge(0, 0));
        assert!(!can_merge(1 << 31, 1 << 31));
    }

    #[test]
    fn test_score_rule_accumulate() {
        assert_eq!(ScoreRule::default(), ScoreRule::LastMerge);
        assert_eq!(ScoreRule::LastMerge.accumulate(100, 8), 8);
        assert_eq!(ScoreRule::Cumulative.accumulate(100, 8), 108);
        assert_eq!(ScoreRule::Cumulative.accumulate(u64::MAX, 8), u64::MAX);
    }
}
