//! Screens, difficulties, and the actions that move between them

use serde::{Deserialize, Serialize};

use crate::settings::Settings;

/// Top-level screen. Exactly one is active; it decides how clicks are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Screen {
    /// Title menu (start / quit)
    #[default]
    AtMenu,
    /// Difficulty picker (easy / hard)
    SelectingDifficulty,
    /// Active play (board, tray, bonus item)
    Playing,
    /// Board cleared in time
    Won,
    /// Tray filled or time ran out
    Lost,
}

impl Screen {
    /// Result screens accept restart / quit
    pub fn is_result(self) -> bool {
        matches!(self, Screen::Won | Screen::Lost)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Screen::AtMenu => "menu",
            Screen::SelectingDifficulty => "difficulty",
            Screen::Playing => "playing",
            Screen::Won => "won",
            Screen::Lost => "lost",
        }
    }
}

/// Difficulty chosen on the selection screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Hard,
}

impl Difficulty {
    /// Initial countdown for this difficulty
    pub fn duration_ms(self, settings: &Settings) -> u64 {
        match self {
            Difficulty::Easy => settings.easy_duration_ms,
            Difficulty::Hard => settings.hard_duration_ms,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Hard => "hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// A named UI action, already resolved from a pointer position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiAction {
    Start,
    Quit,
    Select(Difficulty),
    PickBlock(usize),
    Bonus,
    Restart,
}

/// Whether the frame loop should keep going after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Why a session was lost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossReason {
    TrayFull,
    TimeUp,
}

/// Things that happened during an update, for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    ScreenChanged { from: Screen, to: Screen },
    TilePicked { block: usize, pattern: super::Pattern },
    Matched { removed: usize },
    BonusApplied { added_ms: u64 },
    GameWon,
    GameLost(LossReason),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_durations() {
        let settings = Settings::default();
        assert_eq!(Difficulty::Easy.duration_ms(&settings), 90_000);
        assert_eq!(Difficulty::Hard.duration_ms(&settings), 20_000);
    }

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!(Difficulty::from_str("EASY"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_str("hard"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_str("nightmare"), None);
    }

    #[test]
    fn test_result_screens() {
        assert!(Screen::Won.is_result());
        assert!(Screen::Lost.is_result());
        assert!(!Screen::Playing.is_result());
        assert_eq!(Screen::default(), Screen::AtMenu);
    }
}
