//! Screen layout and hit testing
//!
//! Fixed 800x800 layout shared by every front end. Clicks are only ever
//! interpreted against the widgets of the current screen.

use crate::consts::*;
use crate::grid_rows;
use crate::sim::{Difficulty, Screen, UiAction};

pub const WIDTH: f32 = 800.0;
pub const HEIGHT: f32 = 800.0;
pub const TILE_SIZE: f32 = 80.0;
/// Gap between blocks; stacked layers are offset by half of it
pub const BLOCK_SPACING: f32 = 30.0;
/// Grid cell pitch
pub const BLOCK_PITCH: f32 = TILE_SIZE + BLOCK_SPACING;
/// Tray slot pitch
pub const SLOT_WIDTH: f32 = TILE_SIZE + 10.0;

/// Axis-aligned rectangle (half-open on the right and bottom edges)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

// Menu and difficulty screens share button positions
pub const UPPER_BUTTON: Rect = Rect::new(300.0, 300.0, 200.0, 50.0);
pub const LOWER_BUTTON: Rect = Rect::new(300.0, 400.0, 200.0, 50.0);
// Result screens
pub const RESTART_BUTTON: Rect = Rect::new(300.0, 500.0, 200.0, 50.0);
pub const RESULT_QUIT_BUTTON: Rect = Rect::new(300.0, 600.0, 200.0, 50.0);

/// Timer text anchor
pub const TIMER_POS: (f32, f32) = (WIDTH - 250.0, 60.0);

/// Top-left corner of the block grid
pub fn grid_origin() -> (f32, f32) {
    let rows = grid_rows(NUM_BLOCKS, GRID_COLUMNS) as f32;
    let cols = GRID_COLUMNS as f32;
    (
        ((WIDTH - BLOCK_PITCH * cols) / 2.0).floor(),
        ((HEIGHT - BLOCK_PITCH * rows) / 2.0).floor(),
    )
}

/// Top-left corner of a block's bottom layer
pub fn block_origin(index: usize) -> Option<(f32, f32)> {
    let (row, col) = crate::grid_position(index, NUM_BLOCKS, GRID_COLUMNS)?;
    let (x0, y0) = grid_origin();
    Some((x0 + col as f32 * BLOCK_PITCH, y0 + row as f32 * BLOCK_PITCH))
}

/// Offset of stacked layer `layer` relative to the block origin
pub fn layer_offset(layer: usize) -> f32 {
    layer as f32 * (BLOCK_SPACING / 2.0).floor()
}

/// The +10s item, centered over the grid just above the first row
pub fn bonus_button() -> Rect {
    let (_, y0) = grid_origin();
    let center_x = WIDTH / 2.0;
    Rect::new(center_x - 50.0, y0 - 60.0, 100.0, 50.0)
}

/// Tray slot `i`
pub fn slot_rect(i: usize) -> Rect {
    let x = 50.0 + i as f32 * SLOT_WIDTH;
    let y = HEIGHT - TILE_SIZE - 50.0;
    Rect::new(x, y, SLOT_WIDTH, TILE_SIZE)
}

/// Grid cell under a point, or `None` outside the grid
pub fn block_at(x: f32, y: f32) -> Option<usize> {
    let (x0, y0) = grid_origin();
    let col = ((x - x0) / BLOCK_PITCH).floor();
    let row = ((y - y0) / BLOCK_PITCH).floor();
    if col < 0.0 || row < 0.0 || col >= GRID_COLUMNS as f32 {
        return None;
    }
    let index = row as usize * GRID_COLUMNS + col as usize;
    (index < NUM_BLOCKS).then_some(index)
}

/// Interpret a click at (x, y) for the given screen
pub fn hit_test(screen: Screen, x: f32, y: f32) -> Option<UiAction> {
    match screen {
        Screen::AtMenu => {
            if UPPER_BUTTON.contains(x, y) {
                Some(UiAction::Start)
            } else if LOWER_BUTTON.contains(x, y) {
                Some(UiAction::Quit)
            } else {
                None
            }
        }
        Screen::SelectingDifficulty => {
            if UPPER_BUTTON.contains(x, y) {
                Some(UiAction::Select(Difficulty::Easy))
            } else if LOWER_BUTTON.contains(x, y) {
                Some(UiAction::Select(Difficulty::Hard))
            } else {
                None
            }
        }
        Screen::Playing => {
            if bonus_button().contains(x, y) {
                Some(UiAction::Bonus)
            } else {
                block_at(x, y).map(UiAction::PickBlock)
            }
        }
        Screen::Won | Screen::Lost => {
            if RESTART_BUTTON.contains(x, y) {
                Some(UiAction::Restart)
            } else if RESULT_QUIT_BUTTON.contains(x, y) {
                Some(UiAction::Quit)
            } else {
                None
            }
        }
    }
}

/// Button labels for a screen, top to bottom
pub fn button_labels(screen: Screen) -> &'static [(&'static str, Rect)] {
    match screen {
        Screen::AtMenu => &[("Start", UPPER_BUTTON), ("Quit", LOWER_BUTTON)],
        Screen::SelectingDifficulty => &[("Easy", UPPER_BUTTON), ("Hard", LOWER_BUTTON)],
        Screen::Playing => &[],
        Screen::Won | Screen::Lost => &[
            ("Restart", RESTART_BUTTON),
            ("Quit", RESULT_QUIT_BUTTON),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_origin() {
        assert_eq!(grid_origin(), (180.0, 235.0));
        assert_eq!(block_origin(0), Some((180.0, 235.0)));
        assert_eq!(block_origin(5), Some((290.0, 345.0)));
        assert_eq!(block_origin(11), None);
    }

    #[test]
    fn test_block_at() {
        assert_eq!(block_at(180.0, 235.0), Some(0));
        assert_eq!(block_at(289.0, 344.0), Some(0));
        assert_eq!(block_at(290.0, 345.0), Some(5));
        assert_eq!(block_at(400.0, 455.0), Some(10));
        // Twelfth cell of the last row is empty
        assert_eq!(block_at(510.0, 455.0), None);
        // Left of, above, and right of the grid
        assert_eq!(block_at(179.0, 300.0), None);
        assert_eq!(block_at(200.0, 234.0), None);
        assert_eq!(block_at(620.0, 240.0), None);
    }

    #[test]
    fn test_hit_test_is_screen_gated() {
        let (x, y) = UPPER_BUTTON.center();
        assert_eq!(hit_test(Screen::AtMenu, x, y), Some(UiAction::Start));
        assert_eq!(
            hit_test(Screen::SelectingDifficulty, x, y),
            Some(UiAction::Select(Difficulty::Easy))
        );
        // Same point is a board cell during play
        assert_eq!(hit_test(Screen::Playing, x, y), Some(UiAction::PickBlock(2)));
        assert_eq!(hit_test(Screen::Won, x, y), None);

        let (x, y) = LOWER_BUTTON.center();
        assert_eq!(hit_test(Screen::AtMenu, x, y), Some(UiAction::Quit));
        assert_eq!(
            hit_test(Screen::SelectingDifficulty, x, y),
            Some(UiAction::Select(Difficulty::Hard))
        );
    }

    #[test]
    fn test_result_and_bonus_buttons() {
        let (x, y) = RESTART_BUTTON.center();
        assert_eq!(hit_test(Screen::Lost, x, y), Some(UiAction::Restart));
        assert_eq!(hit_test(Screen::AtMenu, x, y), None);
        let (x, y) = RESULT_QUIT_BUTTON.center();
        assert_eq!(hit_test(Screen::Won, x, y), Some(UiAction::Quit));

        let bonus = bonus_button();
        assert_eq!(bonus, Rect::new(350.0, 175.0, 100.0, 50.0));
        let (x, y) = bonus.center();
        assert_eq!(hit_test(Screen::Playing, x, y), Some(UiAction::Bonus));
        assert_eq!(hit_test(Screen::AtMenu, x, y), None);
    }

    #[test]
    fn test_slots_fit_window() {
        let last = slot_rect(TRAY_CAPACITY - 1);
        assert!(last.x + last.w <= WIDTH);
        assert_eq!(slot_rect(0).y, 670.0);
    }
}
