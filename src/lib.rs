//! Triple Tray - a tile-matching tray puzzle
//!
//! Core modules:
//! - `sim`: Game-state engine (board, tray, clock, screens, controller)
//! - `ui`: Fixed pixel layout and per-screen hit testing
//! - `settings`: Tunable game configuration

pub mod settings;
pub mod sim;
pub mod ui;

pub use settings::Settings;
pub use sim::{Flow, GameController, Screen, UiAction};

/// Game configuration constants
pub mod consts {
    /// Blocks on the board
    pub const NUM_BLOCKS: usize = 11;
    /// Tiles stacked in each block at creation
    pub const TILES_PER_BLOCK: usize = 3;
    /// Columns of the block grid
    pub const GRID_COLUMNS: usize = 4;
    /// Tray capacity; reaching it loses the session
    pub const TRAY_CAPACITY: usize = 7;
    /// Entries that form a match run
    pub const MATCH_LEN: usize = 3;
    /// Distinct tile patterns
    pub const PATTERN_COUNT: u8 = 3;

    /// Countdown durations (ms)
    pub const EASY_DURATION_MS: u64 = 90 * 1000;
    pub const HARD_DURATION_MS: u64 = 20 * 1000;
    /// One-shot bonus added by the +10s item (ms)
    pub const BONUS_MS: u64 = 10 * 1000;

    /// Presentation frame rate
    pub const FPS: u32 = 30;
    /// Frame duration in ms at `FPS`
    pub const FRAME_MS: u64 = 1000 / FPS as u64;
}

/// Rows needed to lay out `count` blocks in `columns` columns
#[inline]
pub fn grid_rows(count: usize, columns: usize) -> usize {
    count.div_ceil(columns)
}

/// Grid (row, column) of a block index, or `None` if out of range
#[inline]
pub fn grid_position(index: usize, count: usize, columns: usize) -> Option<(usize, usize)> {
    if index >= count || columns == 0 {
        return None;
    }
    Some((index / columns, index % columns))
}
