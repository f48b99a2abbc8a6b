//! End-to-end sessions driven through the public API

use proptest::prelude::*;

use triple_tray::consts::*;
use triple_tray::sim::{Difficulty, GameController, GameEvent, LossReason, Screen, choose_block};
use triple_tray::ui;
use triple_tray::{Flow, Settings, UiAction};

fn start(seed: u64, difficulty: Difficulty) -> GameController {
    let mut game = GameController::new(Settings::default(), seed);
    game.handle(UiAction::Start, 0);
    game.handle(UiAction::Select(difficulty), 0);
    game
}

/// Play with the bot until the session ends, checking tray behaviour on
/// every pick. Returns whether a match was seen.
fn play_checked(game: &mut GameController) -> bool {
    let mut matched = false;
    while game.screen() == Screen::Playing {
        let Some(index) = choose_block(game.board(), game.tray()) else {
            break;
        };
        let before = game.tray().len();
        let (tail, run) = game.tray().tail_run();
        let top = game.board().block(index).and_then(|b| b.peek_top());
        let completes_run = top.is_some() && top == tail && run == 2;

        assert!(game.pick_tile(index));

        if completes_run {
            assert_eq!(game.tray().len(), before - 2, "third tile clears the run");
            matched = true;
        } else {
            assert_eq!(game.tray().len(), before + 1);
        }
        assert!(game.tray().len() <= game.tray().capacity());
        assert!(!game.tray().has_match());
    }
    matched
}

#[test]
fn easy_session_clears_runs_immediately() {
    let mut saw_match = false;
    for seed in 0..20 {
        let mut game = start(seed, Difficulty::Easy);
        assert_eq!(game.clock().remaining_ms(), 90_000);
        saw_match |= play_checked(&mut game);
        assert!(game.screen().is_result());
    }
    assert!(saw_match);
}

#[test]
fn won_sessions_end_with_cleared_board_and_roomy_tray() {
    for seed in 0..50 {
        let mut game = start(seed, Difficulty::Easy);
        play_checked(&mut game);
        let events = game.drain_events();
        match game.screen() {
            Screen::Won => {
                assert!(game.board().is_cleared());
                assert!(game.tray().len() < TRAY_CAPACITY);
                assert!(events.contains(&GameEvent::GameWon));
            }
            Screen::Lost => {
                assert_eq!(game.tray().len(), TRAY_CAPACITY);
                assert!(events.contains(&GameEvent::GameLost(LossReason::TrayFull)));
            }
            other => panic!("unexpected screen {:?}", other),
        }
    }
}

#[test]
fn clicks_drive_the_whole_flow() {
    let mut game = GameController::new(Settings::default(), 42);
    let click = |game: &mut GameController, (x, y): (f32, f32), now: u64| {
        match ui::hit_test(game.screen(), x, y) {
            Some(action) => game.handle(action, now),
            None => Flow::Continue,
        }
    };

    // Empty space on the menu does nothing
    click(&mut game, (10.0, 10.0), 0);
    assert_eq!(game.screen(), Screen::AtMenu);

    click(&mut game, ui::UPPER_BUTTON.center(), 0);
    assert_eq!(game.screen(), Screen::SelectingDifficulty);

    click(&mut game, ui::LOWER_BUTTON.center(), 1_000);
    assert_eq!(game.screen(), Screen::Playing);
    assert_eq!(game.difficulty(), Some(Difficulty::Hard));

    click(&mut game, ui::bonus_button().center(), 1_000);
    click(&mut game, ui::bonus_button().center(), 1_000);
    assert_eq!(game.clock().remaining_ms(), 30_000);

    // Pick block 0 by clicking its top-left cell
    let (bx, by) = ui::block_origin(0).unwrap();
    let remaining = game.board().remaining_tiles();
    click(&mut game, (bx + 1.0, by + 1.0), 1_500);
    assert_eq!(game.board().remaining_tiles(), remaining - 1);

    // Run the clock out
    game.update(40_000);
    assert_eq!(game.screen(), Screen::Lost);

    // Result screen: the board area is dead, restart goes to the menu
    let before = game.snapshot();
    click(&mut game, (bx + 1.0, by + 1.0), 40_000);
    assert_eq!(game.snapshot(), before);

    click(&mut game, ui::RESTART_BUTTON.center(), 40_000);
    assert_eq!(game.screen(), Screen::AtMenu);
    assert_eq!(click(&mut game, ui::LOWER_BUTTON.center(), 40_000), Flow::Quit);
}

#[test]
fn custom_settings_flow_through() {
    let settings = Settings::from_json(
        r#"{ "easy_duration_ms": 5000, "bonus_ms": 2500, "tray_capacity": 4, "seed": 9 }"#,
    )
    .unwrap();
    let mut game = GameController::new(settings, 9);
    game.handle(UiAction::Start, 0);
    game.handle(UiAction::Select(Difficulty::Easy), 0);
    assert_eq!(game.clock().remaining_ms(), 5_000);
    game.use_bonus();
    assert_eq!(game.clock().remaining_ms(), 7_500);
    assert_eq!(game.tray().capacity(), 4);
}

proptest! {
    #[test]
    fn prop_any_seed_reaches_a_result(seed in any::<u64>(), hard in any::<bool>()) {
        let difficulty = if hard { Difficulty::Hard } else { Difficulty::Easy };
        let mut game = start(seed, difficulty);
        play_checked(&mut game);
        prop_assert!(game.screen().is_result());
        prop_assert!(game.tray().len() <= TRAY_CAPACITY);
    }

    #[test]
    fn prop_invalid_index_never_mutates(seed in any::<u64>(), index in NUM_BLOCKS..usize::MAX) {
        let mut game = start(seed, Difficulty::Easy);
        let before = game.snapshot();
        prop_assert!(!game.pick_tile(index));
        game.handle(UiAction::PickBlock(index), 0);
        prop_assert_eq!(game.snapshot(), before);
    }
}
