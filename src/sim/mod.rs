//! Game-state engine
//!
//! All gameplay logic lives here. This module is pure and deterministic:
//! - Time only enters through explicit `now` timestamps
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod autoplay;
pub mod board;
pub mod clock;
pub mod controller;
pub mod state;
pub mod tile;
pub mod tray;

pub use autoplay::choose_block;
pub use board::{Board, generate};
pub use clock::{GameClock, format_mmss};
pub use controller::{GameController, Snapshot};
pub use state::{Difficulty, Flow, GameEvent, LossReason, Screen, UiAction};
pub use tile::{Block, Pattern};
pub use tray::{Tray, has_match, resolve};
