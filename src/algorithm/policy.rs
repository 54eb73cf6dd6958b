//! Move selection for automated play

use clap::ValueEnum;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::algorithm::merge::ScoreRule;
use crate::algorithm::moves::{Direction, apply_move};
use crate::spatial::Grid;

/// Preference order used by `Ordered` and for breaking `Greedy` ties
pub const PREFERRED_ORDER: [Direction; 4] = [
    Direction::Down,
    Direction::Left,
    Direction::Right,
    Direction::Up,
];

/// Strategy for picking the next move without a player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum MovePolicy {
    /// First legal move in `PREFERRED_ORDER`
    #[default]
    Ordered,
    /// Uniformly random legal move
    Random,
    /// Legal move with the highest score, ties broken by `PREFERRED_ORDER`
    Greedy,
}

impl MovePolicy {
    /// Pick a move that changes `grid`, or `None` if no move does
    pub fn choose<R: Rng + ?Sized>(
        self,
        grid: &Grid,
        rule: ScoreRule,
        rng: &mut R,
    ) -> Option<Direction> {
        let legal: Vec<(Direction, u64)> = PREFERRED_ORDER
            .into_iter()
            .filter_map(|direction| {
                let result = apply_move(grid, direction, rule);
                result.changed.then_some((direction, result.score))
            })
            .collect();

        match self {
            Self::Ordered => legal.first().map(|&(direction, _)| direction),
            Self::Random => legal.choose(rng).map(|&(direction, _)| direction),
            Self::Greedy => legal
                .iter()
                .copied()
                .reduce(|best, candidate| if candidate.1 > best.1 { candidate } else { best })
                .map(|(direction, _)| direction),
        }
    }
}
