//! Per-game state kept by a front end on top of the pure engine
//!
//! The engine itself holds nothing between calls. A `Session` is what a
//! presentation layer owns: the current grid, the running score, one undo
//! snapshot, the game-over and win flags, and the best score seen so far.

use rand::Rng;

use crate::algorithm::merge::ScoreRule;
use crate::algorithm::moves::{Direction, apply_move};
use crate::algorithm::spawn::{SpawnDistribution, SpawnedTile, spawn_random_tile};
use crate::algorithm::terminal::{has_winning_tile, is_game_over};
use crate::io::configuration::{DEFAULT_INITIAL_TILES, WIN_TILE};
use crate::spatial::Grid;

/// Rules a session plays by
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    /// Tile value that sets the win flag
    pub target: u32,
    /// How move scores are counted
    pub score_rule: ScoreRule,
    /// Odds for spawned tile values
    pub spawn: SpawnDistribution,
    /// Tiles placed when a game starts
    pub initial_tiles: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            target: WIN_TILE,
            score_rule: ScoreRule::default(),
            spawn: SpawnDistribution::default(),
            initial_tiles: DEFAULT_INITIAL_TILES,
        }
    }
}

/// Grid and score before the last changing move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Grid before the move
    pub grid: Grid,
    /// Score before the move
    pub score: u64,
}

/// What a single `Session::play` call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Whether the move changed the grid
    pub changed: bool,
    /// Points added to the score
    pub score_gained: u64,
    /// Tile spawned after the move, if any
    pub spawned: Option<SpawnedTile>,
    /// No move can change the grid any more
    pub game_over: bool,
    /// A tile has reached the target
    pub won: bool,
    /// The score passed the previous high score on this turn
    pub new_high_score: bool,
}

/// One game in progress
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    grid: Grid,
    score: u64,
    previous: Option<Snapshot>,
    game_over: bool,
    won: bool,
    high_score: u64,
    moves: usize,
}

impl Session {
    /// Start a game on an empty board seeded with `config.initial_tiles` tiles
    pub fn new<R: Rng + ?Sized>(config: SessionConfig, high_score: u64, rng: &mut R) -> Self {
        let mut session = Self::from_grid(Grid::empty(), config, high_score);
        session.seed_tiles(rng);
        session
    }

    /// Resume from an existing grid with a zero score
    pub fn from_grid(grid: Grid, config: SessionConfig, high_score: u64) -> Self {
        let game_over = is_game_over(&grid);
        let won = has_winning_tile(&grid, config.target);
        Self {
            config,
            grid,
            score: 0,
            previous: None,
            game_over,
            won,
            high_score,
            moves: 0,
        }
    }

    /// Throw the current game away and start a fresh one
    ///
    /// The high score survives.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.grid = Grid::empty();
        self.score = 0;
        self.previous = None;
        self.game_over = false;
        self.won = false;
        self.moves = 0;
        self.seed_tiles(rng);
    }

    fn seed_tiles<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for _ in 0..self.config.initial_tiles {
            if spawn_random_tile(&mut self.grid, &self.config.spawn, rng).is_none() {
                break;
            }
        }
    }

    /// Play one move
    ///
    /// A move that changes nothing leaves the whole session untouched,
    /// including the undo snapshot, and spawns no tile.
    pub fn play<R: Rng + ?Sized>(&mut self, direction: Direction, rng: &mut R) -> TurnOutcome {
        let result = apply_move(&self.grid, direction, self.config.score_rule);
        if !result.changed {
            return TurnOutcome {
                changed: false,
                score_gained: 0,
                spawned: None,
                game_over: self.game_over,
                won: self.won,
                new_high_score: false,
            };
        }

        let previous_grid = std::mem::replace(&mut self.grid, result.grid);
        self.previous = Some(Snapshot {
            grid: previous_grid,
            score: self.score,
        });

        let spawned = spawn_random_tile(&mut self.grid, &self.config.spawn, rng);
        self.score = self.score.saturating_add(result.score);
        self.moves += 1;

        let new_high_score = self.score > self.high_score;
        if new_high_score {
            self.high_score = self.score;
        }

        self.game_over = is_game_over(&self.grid);
        self.won |= has_winning_tile(&self.grid, self.config.target);

        TurnOutcome {
            changed: true,
            score_gained: result.score,
            spawned,
            game_over: self.game_over,
            won: self.won,
            new_high_score,
        }
    }

    /// Step back to the snapshot taken before the last changing move
    ///
    /// Only one level is kept; returns false when there is nothing to undo.
    /// The high score is not rolled back.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.previous.take() else {
            return false;
        };

        self.grid = snapshot.grid;
        self.score = snapshot.score;
        self.game_over = false;
        self.won = has_winning_tile(&self.grid, self.config.target);
        self.moves = self.moves.saturating_sub(1);
        true
    }

    /// Current grid
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Cumulative score of this game
    pub const fn score(&self) -> u64 {
        self.score
    }

    /// Best score across games, including this one
    pub const fn high_score(&self) -> u64 {
        self.high_score
    }

    /// True once no move can change the grid
    pub const fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// True once a tile has reached the target
    pub const fn has_won(&self) -> bool {
        self.won
    }

    /// True if `undo` would restore a snapshot
    pub const fn can_undo(&self) -> bool {
        self.previous.is_some()
    }

    /// Snapshot `undo` would restore
    pub const fn previous(&self) -> Option<&Snapshot> {
        self.previous.as_ref()
    }

    /// Changing moves played in this game
    pub const fn moves(&self) -> usize {
        self.moves
    }

    /// Rules this session plays by
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }
}
