//! Game controller
//!
//! Owns the board, tray, clock, and current screen of one game. All mutation
//! goes through here; invalid actions are ignored without touching state.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::board::{Board, generate};
use super::clock::GameClock;
use super::state::{Difficulty, Flow, GameEvent, LossReason, Screen, UiAction};
use super::tray::Tray;
use crate::settings::Settings;

/// Read-only copy of everything a renderer needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub screen: Screen,
    pub difficulty: Option<Difficulty>,
    pub board: Board,
    pub tray: Tray,
    pub clock: GameClock,
    pub bonus_used: bool,
    pub session: u64,
}

#[derive(Debug, Clone)]
pub struct GameController {
    settings: Settings,
    /// Base seed; each session derives its board RNG from it
    seed: u64,
    /// Session counter (increments on restart)
    session: u64,
    screen: Screen,
    difficulty: Option<Difficulty>,
    board: Board,
    tray: Tray,
    clock: GameClock,
    bonus_used: bool,
    events: Vec<GameEvent>,
}

impl GameController {
    /// Create a controller at the title menu with a freshly generated board
    pub fn new(settings: Settings, seed: u64) -> Self {
        let mut controller = Self {
            tray: Tray::new(settings.tray_capacity),
            clock: GameClock::new(settings.easy_duration_ms, 0),
            settings,
            seed,
            session: 0,
            screen: Screen::AtMenu,
            difficulty: None,
            board: Board::default(),
            bonus_used: false,
            events: Vec::new(),
        };
        controller.board = controller.generate_board();
        log::info!("Game created with seed {}", seed);
        controller
    }

    fn generate_board(&self) -> Board {
        let session_seed = self
            .seed
            .wrapping_add(self.session.wrapping_mul(2654435761));
        let mut rng = Pcg32::seed_from_u64(session_seed);
        generate(
            &self.settings.patterns(),
            self.settings.block_count,
            self.settings.tiles_per_block,
            &mut rng,
        )
    }

    fn set_screen(&mut self, to: Screen) {
        let from = self.screen;
        if from == to {
            return;
        }
        self.screen = to;
        log::info!("Screen: {} -> {}", from.as_str(), to.as_str());
        self.events.push(GameEvent::ScreenChanged { from, to });
    }

    fn lose(&mut self, reason: LossReason) {
        log::info!("Game lost: {:?}", reason);
        self.events.push(GameEvent::GameLost(reason));
        self.set_screen(Screen::Lost);
    }

    fn win(&mut self) {
        log::info!(
            "Game won with {} left",
            super::clock::format_mmss(self.clock.remaining_ms())
        );
        self.events.push(GameEvent::GameWon);
        self.set_screen(Screen::Won);
    }

    /// Dispatch a UI action according to the current screen.
    ///
    /// Actions that do not belong to the current screen are ignored.
    pub fn handle(&mut self, action: UiAction, now: u64) -> Flow {
        match (self.screen, action) {
            (Screen::AtMenu, UiAction::Start) => self.set_screen(Screen::SelectingDifficulty),
            (Screen::AtMenu | Screen::Won | Screen::Lost, UiAction::Quit) => {
                log::info!("Quit requested");
                return Flow::Quit;
            }
            (Screen::SelectingDifficulty, UiAction::Select(difficulty)) => {
                self.select_difficulty(difficulty, now);
            }
            (Screen::Playing, UiAction::PickBlock(index)) => {
                self.pick_tile(index);
            }
            (Screen::Playing, UiAction::Bonus) => {
                self.use_bonus();
            }
            (Screen::Won | Screen::Lost, UiAction::Restart) => self.restart(),
            (screen, action) => {
                log::debug!("Ignoring {:?} on {} screen", action, screen.as_str());
            }
        }
        Flow::Continue
    }

    /// Choose a difficulty and start the countdown at `now`
    pub fn select_difficulty(&mut self, difficulty: Difficulty, now: u64) -> bool {
        if self.screen != Screen::SelectingDifficulty {
            return false;
        }
        self.difficulty = Some(difficulty);
        self.clock.start(difficulty.duration_ms(&self.settings), now);
        log::info!(
            "Difficulty {} ({} ms)",
            difficulty.as_str(),
            self.clock.remaining_ms()
        );
        self.set_screen(Screen::Playing);
        true
    }

    /// Move the top tile of `block_index` into the tray.
    ///
    /// Returns false (and changes nothing) outside play, for an out-of-range
    /// index, or for an exhausted block.
    pub fn pick_tile(&mut self, block_index: usize) -> bool {
        if self.screen != Screen::Playing || self.tray.is_full() {
            return false;
        }
        let Some(pattern) = self.board.block_mut(block_index).and_then(|b| b.pop_top()) else {
            log::debug!("Ignoring pick on block {}", block_index);
            return false;
        };

        self.tray.push(pattern);
        self.events.push(GameEvent::TilePicked {
            block: block_index,
            pattern,
        });

        if self.tray.has_match() {
            let removed = self.tray.resolve();
            log::debug!("Matched {} tiles, tray now {}", removed, self.tray.len());
            self.events.push(GameEvent::Matched { removed });
        }

        // Tray overflow wins the tie against a cleared board.
        if self.tray.is_full() {
            self.lose(LossReason::TrayFull);
        } else if self.board.is_cleared() {
            self.win();
        }
        true
    }

    /// Apply the one-shot time bonus. Returns false if unavailable.
    pub fn use_bonus(&mut self) -> bool {
        if self.screen != Screen::Playing || self.bonus_used {
            return false;
        }
        let added_ms = self.settings.bonus_ms;
        self.clock.add_bonus(added_ms);
        self.bonus_used = true;
        log::info!("Bonus applied: +{} ms", added_ms);
        self.events.push(GameEvent::BonusApplied { added_ms });
        true
    }

    /// Advance the countdown to `now`; running out of time loses the game
    pub fn update(&mut self, now: u64) {
        if self.screen != Screen::Playing {
            return;
        }
        if self.clock.tick(now) == 0 {
            self.lose(LossReason::TimeUp);
        }
    }

    /// Start a new session at the title menu with a fresh board
    pub fn restart(&mut self) {
        self.session = self.session.wrapping_add(1);
        self.board = self.generate_board();
        self.tray.clear();
        self.clock = GameClock::new(self.settings.easy_duration_ms, self.clock.last_tick_ms());
        self.difficulty = None;
        self.bonus_used = false;
        log::info!("Restarted (session {})", self.session);
        self.set_screen(Screen::AtMenu);
    }

    /// Take the events produced since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            screen: self.screen,
            difficulty: self.difficulty,
            board: self.board.clone(),
            tray: self.tray.clone(),
            clock: self.clock,
            bonus_used: self.bonus_used,
            session: self.session,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn tray(&self) -> &Tray {
        &self.tray
    }

    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    pub fn bonus_used(&self) -> bool {
        self.bonus_used
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn session(&self) -> u64 {
        self.session
    }

    /// Replace board and tray (scripted scenarios and tests)
    pub fn load_position(&mut self, board: Board, tray: Tray) {
        self.board = board;
        self.tray = tray;
    }
}
