/// Row compression, merging and score rules
pub mod merge;
/// Directional moves built from the left move
pub mod moves;
/// Move selection for automated play
pub mod policy;
/// Random tile spawning
pub mod spawn;
/// Game over and win detection
pub mod terminal;

pub use merge::{ScoreRule, can_merge, compress, merge_left};
pub use moves::{
    Direction, MoveResult, apply_move, move_down, move_left, move_right, move_up,
};
pub use policy::MovePolicy;
pub use spawn::{SpawnDistribution, SpawnedTile, spawn_random_tile};
pub use terminal::{can_move, has_winning_tile, is_game_over, legal_moves};
