//! Command-line interface for batches of automated games

use crate::algorithm::merge::ScoreRule;
use crate::algorithm::policy::MovePolicy;
use crate::algorithm::spawn::SpawnDistribution;
use crate::io::board_file::load_board;
use crate::io::configuration::{
    DEFAULT_FOUR_PROBABILITY, DEFAULT_GAMES, DEFAULT_INITIAL_TILES, DEFAULT_MAX_MOVES,
    DEFAULT_SEED, OUTPUT_PREFIX, WIN_TILE,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_grid_as_png;
use crate::io::progress::ProgressManager;
use crate::session::{
    FileHighScoreStore, HighScoreStore, MemoryHighScoreStore, Session, SessionConfig,
};
use crate::spatial::Grid;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "tilemerge")]
#[command(
    author,
    version,
    about = "Play automated games of the sliding-tile merge puzzle"
)]
/// Command-line arguments for automated play
pub struct Cli {
    /// Random seed of the first game (game N uses seed + N)
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of games to play
    #[arg(short, long, default_value_t = DEFAULT_GAMES)]
    pub games: usize,

    /// Maximum moves per game
    #[arg(short, long, default_value_t = DEFAULT_MAX_MOVES)]
    pub max_moves: usize,

    /// Strategy used to pick each move
    #[arg(short, long, value_enum, default_value_t = MovePolicy::Ordered)]
    pub policy: MovePolicy,

    /// Tile value that counts as a win
    #[arg(short, long, default_value_t = WIN_TILE)]
    pub target: u32,

    /// Probability that a spawned tile is a 4
    #[arg(short, long, default_value_t = DEFAULT_FOUR_PROBABILITY)]
    pub four_probability: f64,

    /// Tiles placed on the empty board at the start of a game
    #[arg(short, long, default_value_t = DEFAULT_INITIAL_TILES)]
    pub initial_tiles: usize,

    /// Score every merge of a move instead of only the last one
    #[arg(short, long)]
    pub cumulative_score: bool,

    /// Start every game from this board file instead of an empty board
    #[arg(short, long, value_name = "FILE")]
    pub board: Option<PathBuf>,

    /// Read and update the high score kept in this file
    #[arg(short = 'H', long, value_name = "FILE")]
    pub high_score: Option<PathBuf>,

    /// Write each final board as a PNG into this directory
    #[arg(short, long, value_name = "DIR")]
    pub export: Option<PathBuf>,

    /// End a game as soon as the target tile appears
    #[arg(short = 'w', long)]
    pub stop_on_win: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Scoring selected by the flags
    pub const fn score_rule(&self) -> ScoreRule {
        if self.cumulative_score {
            ScoreRule::Cumulative
        } else {
            ScoreRule::LastMerge
        }
    }

    /// Validate the rule arguments into a session configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the target is not a tile value or the spawn
    /// probability lies outside `[0, 1]`
    pub fn session_config(&self) -> Result<SessionConfig> {
        if self.target < 2 || !self.target.is_power_of_two() {
            return Err(invalid_parameter(
                "target",
                &self.target,
                &"must be a power of two of at least 2",
            ));
        }

        Ok(SessionConfig {
            target: self.target,
            score_rule: self.score_rule(),
            spawn: SpawnDistribution::new(self.four_probability)?,
            initial_tiles: self.initial_tiles,
        })
    }
}

/// Final state of one automated game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    /// Position of the game in the batch
    pub index: usize,
    /// Seed the game's random source started from
    pub seed: u64,
    /// Final score
    pub score: u64,
    /// Highest tile reached
    pub max_tile: u32,
    /// Changing moves played
    pub moves: usize,
    /// Whether the target tile was reached
    pub won: bool,
    /// Whether the game ended with no legal move
    pub game_over: bool,
    /// Board at the end of the game
    pub grid: Grid,
}

impl fmt::Display for GameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match (self.won, self.game_over) {
            (true, true) => "won, game over",
            (true, false) => "won",
            (false, true) => "game over",
            (false, false) => "move limit",
        };
        write!(
            f,
            "game {} (seed {}): score {}, max tile {}, {} moves, {status}",
            self.index, self.seed, self.score, self.max_tile, self.moves
        )
    }
}

/// Orchestrates a batch of automated games with progress tracking
pub struct GameRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl GameRunner {
    /// Create a new runner with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Play all games and print one summary line per game
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, board loading, high score
    /// persistence or PNG export fails
    // Results are the program's output
    #[allow(clippy::print_stdout)]
    pub fn process(&mut self) -> Result<()> {
        for summary in self.run()? {
            println!("{summary}");
        }
        Ok(())
    }

    /// Play all games and return their summaries
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, board loading, high score
    /// persistence or PNG export fails
    // Allow print for user feedback on a new high score
    #[allow(clippy::print_stderr)]
    pub fn run(&mut self) -> Result<Vec<GameSummary>> {
        let config = self.cli.session_config()?;
        let start_grid = self.cli.board.as_deref().map(load_board).transpose()?;

        let mut store: Box<dyn HighScoreStore> = match &self.cli.high_score {
            Some(path) => Box::new(FileHighScoreStore::new(path.clone())),
            None => Box::new(MemoryHighScoreStore::default()),
        };
        let mut high_score = store.load()?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.games);
        }

        let mut summaries = Vec::with_capacity(self.cli.games);
        for index in 0..self.cli.games {
            let summary = self.play_game(index, config, start_grid.as_ref(), high_score)?;
            high_score = high_score.max(summary.score);
            summaries.push(summary);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        if store.record(high_score)? && self.cli.high_score.is_some() && !self.cli.quiet {
            eprintln!("New high score: {high_score}");
        }

        Ok(summaries)
    }

    fn play_game(
        &mut self,
        index: usize,
        config: SessionConfig,
        start_grid: Option<&Grid>,
        high_score: u64,
    ) -> Result<GameSummary> {
        let seed = self.cli.seed.wrapping_add(index as u64);
        let policy = self.cli.policy;
        let mut rng = StdRng::seed_from_u64(seed);

        let mut session = match start_grid {
            Some(grid) => Session::from_grid(grid.clone(), config, high_score),
            None => Session::new(config, high_score, &mut rng),
        };

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_game(index, seed, self.cli.max_moves);
        }

        while session.moves() < self.cli.max_moves && !session.is_game_over() {
            if self.cli.stop_on_win && session.has_won() {
                break;
            }
            let Some(direction) = policy.choose(session.grid(), config.score_rule, &mut rng)
            else {
                break;
            };
            session.play(direction, &mut rng);

            if let Some(ref mut pm) = self.progress_manager {
                pm.update_moves(index, session.moves());
            }
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_game(index, session.score());
        }

        if let Some(dir) = &self.cli.export {
            export_grid_as_png(session.grid(), &Self::get_export_path(dir, index))?;
        }

        Ok(GameSummary {
            index,
            seed,
            score: session.score(),
            max_tile: session.grid().max_tile(),
            moves: session.moves(),
            won: session.has_won(),
            game_over: session.is_game_over(),
            grid: session.grid().clone(),
        })
    }

    /// Path of the PNG written for game `index` under `dir`
    pub fn get_export_path(dir: &Path, index: usize) -> PathBuf {
        dir.join(format!("{OUTPUT_PREFIX}_{index:03}.png"))
    }
}
