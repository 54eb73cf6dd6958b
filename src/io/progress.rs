//! Multi-game progress tracking with automatic batching for large runs

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Coordinates progress display for a batch of automated games
///
/// Shows one bar per game for small batches and adds a single batch bar
/// once the game count would flood the terminal
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    game_bars: Vec<ProgressBar>,
    game_count: usize,
    /// Stores (`label`, `moves_played`, `max_moves`) for rolling window display
    game_states: Vec<(String, usize, usize)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Games: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            game_bars: Vec::new(),
            game_count: 0,
            game_states: Vec::new(),
        }
    }

    /// Initialize progress bars based on game count
    pub fn initialize(&mut self, game_count: usize) {
        self.game_count = game_count;

        if game_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(game_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        let bars_to_create = game_count.min(MAX_INDIVIDUAL_PROGRESS_BARS);
        for _ in 0..bars_to_create {
            let pb = ProgressBar::new(0);
            pb.set_style(PROGRESS_STYLE.clone());
            self.game_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Number of games the manager was initialized for
    pub const fn game_count(&self) -> usize {
        self.game_count
    }

    /// Configure a progress bar for a new game
    pub fn start_game(&mut self, index: usize, seed: u64, max_moves: usize) {
        if index >= self.game_states.len() {
            self.game_states.resize(index + 1, (String::new(), 0, 0));
        }
        if let Some(state) = self.game_states.get_mut(index) {
            *state = (format!("game {index} (seed {seed})"), 0, max_moves);
        }
        self.update_bars();
    }

    /// Report how many moves a game has played
    pub fn update_moves(&mut self, index: usize, moves: usize) {
        if let Some(state) = self.game_states.get_mut(index) {
            state.1 = moves;
        }
        self.update_bars();
    }

    /// Mark a game as finished and update batch progress
    pub fn complete_game(&mut self, index: usize, score: u64) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.game_states.get_mut(index) {
            state.0 = format!("✓ {} score {score}", state.0);
            state.2 = state.1;
        }
        self.update_bars();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All games played");
        }
        let _ = self.multi_progress.clear();
    }

    /// Update all progress bars to show the last N active games
    fn update_bars(&self) {
        let active_games: Vec<&(String, usize, usize)> = self
            .game_states
            .iter()
            .filter(|(label, _, _)| !label.is_empty())
            .collect();

        let start_idx = active_games
            .len()
            .saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible_games = active_games.get(start_idx..).unwrap_or(&[]);

        for (bar_idx, (label, current, max)) in visible_games.iter().enumerate() {
            if let Some(bar) = self.game_bars.get(bar_idx) {
                bar.set_length(*max as u64);
                bar.set_position(*current as u64);
                let max_width = max.to_string().len();
                bar.set_message(format!("{current:>max_width$}/{max}"));
                bar.set_prefix(label.clone());
            }
        }

        for bar_idx in visible_games.len()..self.game_bars.len() {
            if let Some(bar) = self.game_bars.get(bar_idx) {
                bar.set_length(0);
                bar.set_position(0);
                bar.set_message(String::new());
                bar.set_prefix(String::new());
            }
        }
    }
}
