//! Engine constants and runtime configuration defaults

/// Side length of the square board
pub const GRID_SIZE: usize = 4;

/// Tile value that counts as a win
pub const WIN_TILE: u32 = 2048;

// 2 and 4 come up with even odds
/// Probability that a spawned tile is a 4 rather than a 2
pub const DEFAULT_FOUR_PROBABILITY: f64 = 0.5;

/// Tiles placed on an empty board when a game starts
pub const DEFAULT_INITIAL_TILES: usize = 1;

// Default values for configurable parameters
/// Fixed seed for reproducible play
pub const DEFAULT_SEED: u64 = 42;

/// Number of automated games played by default
pub const DEFAULT_GAMES: usize = 1;

/// Move cap for a single automated game
pub const DEFAULT_MAX_MOVES: usize = 10_000;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Prefix for exported board images
pub const OUTPUT_PREFIX: &str = "game";

/// Edge length of a rendered cell in pixels
pub const CELL_PIXELS: u32 = 32;
/// Gap between rendered cells in pixels
pub const CELL_GAP_PIXELS: u32 = 4;

/// Frame colour behind the cells
pub const BACKGROUND_COLOR: [u8; 4] = [0, 0, 0, 255];
/// Colour of an empty cell
pub const EMPTY_CELL_COLOR: [u8; 4] = [255, 255, 255, 255];

/// Tile colours for 2, 4, 8, ..., 2048 (index = log2(value) - 1)
pub const TILE_COLORS: [[u8; 4]; 11] = [
    [0xf0, 0xf6, 0xf6, 0xff],
    [0xd1, 0xe4, 0xe5, 0xff],
    [0xb3, 0xd0, 0xd1, 0xff],
    [0xa4, 0xc9, 0xcb, 0xff],
    [0xad, 0xc3, 0xc4, 0xff],
    [0xb5, 0xbc, 0xbc, 0xff],
    [0xbd, 0xb5, 0xb5, 0xff],
    [0xc3, 0xaf, 0xae, 0xff],
    [0xc9, 0xa8, 0xa7, 0xff],
    [0xcf, 0xa1, 0xa0, 0xff],
    [0xb8, 0x8b, 0x8a, 0xff],
];
