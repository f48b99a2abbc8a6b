//! Triple Tray entry point
//!
//! Web: canvas front end driven by requestAnimationFrame.
//! Native: headless demo session played by the autoplay bot.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

    use triple_tray::sim::{GameController, GameEvent, Pattern, Screen, format_mmss};
    use triple_tray::ui::{self, HEIGHT, TILE_SIZE, WIDTH};
    use triple_tray::{Flow, Settings};

    const PATTERN_COLORS: [&str; 6] = [
        "#e4572e", "#29335c", "#f3a712", "#669bbc", "#a8c686", "#8e5572",
    ];

    fn pattern_color(pattern: Pattern) -> &'static str {
        PATTERN_COLORS[pattern.index() % PATTERN_COLORS.len()]
    }

    /// Game instance holding all state
    struct Game {
        controller: GameController,
        ctx: CanvasRenderingContext2d,
        /// Canvas CSS size, for mapping pointer positions into layout space
        client_size: (f32, f32),
        quit: bool,
    }

    impl Game {
        fn new(ctx: CanvasRenderingContext2d, seed: u64) -> Self {
            Self {
                controller: GameController::new(Settings::default(), seed),
                ctx,
                client_size: (WIDTH, HEIGHT),
                quit: false,
            }
        }

        /// Route a click to whatever the current screen shows at that point
        fn click(&mut self, x: f32, y: f32, now: u64) {
            let x = x * WIDTH / self.client_size.0.max(1.0);
            let y = y * HEIGHT / self.client_size.1.max(1.0);
            let Some(action) = ui::hit_test(self.controller.screen(), x, y) else {
                return;
            };
            if self.controller.handle(action, now) == Flow::Quit {
                self.quit = true;
            }
        }

        fn update(&mut self, now: u64) {
            self.controller.update(now);
            for event in self.controller.drain_events() {
                match event {
                    GameEvent::GameWon => log::info!("You win!"),
                    GameEvent::GameLost(reason) => log::info!("You lose ({:?})", reason),
                    other => log::debug!("{:?}", other),
                }
            }
        }

        fn render(&self) {
            let ctx = &self.ctx;
            ctx.set_fill_style_str("#fdf6e3");
            ctx.fill_rect(0.0, 0.0, WIDTH as f64, HEIGHT as f64);

            if self.quit {
                self.text("Goodbye", WIDTH / 2.0, HEIGHT / 2.0, 60, "#000000");
                return;
            }

            match self.controller.screen() {
                Screen::Playing => self.render_board(),
                Screen::Won => self.text("WIN", WIDTH / 2.0, HEIGHT / 2.0, 80, "#ff0000"),
                Screen::Lost => self.text("LOSE", WIDTH / 2.0, HEIGHT / 2.0, 80, "#ff0000"),
                Screen::AtMenu | Screen::SelectingDifficulty => {}
            }

            for (label, rect) in ui::button_labels(self.controller.screen()) {
                ctx.set_fill_style_str("#c8c8c8");
                ctx.fill_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
                let (cx, cy) = rect.center();
                self.text(label, cx, cy, 32, "#000000");
            }
        }

        fn render_board(&self) {
            let ctx = &self.ctx;
            let board = self.controller.board();

            // Bonus item
            let bonus = ui::bonus_button();
            let bonus_color = if self.controller.bonus_used() { "#bdbdbd" } else { "#ffff00" };
            ctx.set_fill_style_str(bonus_color);
            ctx.fill_rect(bonus.x as f64, bonus.y as f64, bonus.w as f64, bonus.h as f64);
            let (cx, cy) = bonus.center();
            self.text("+10s", cx, cy, 28, "#ff0000");

            // Blocks, bottom layer first
            for (i, block) in board.blocks().iter().enumerate() {
                let Some((bx, by)) = ui::block_origin(i) else {
                    continue;
                };
                for (layer, &pattern) in block.tiles().iter().enumerate() {
                    let offset = ui::layer_offset(layer);
                    self.tile(pattern, bx + offset, by + offset);
                }
            }

            // Tray
            let capacity = self.controller.tray().capacity();
            for i in 0..capacity {
                let slot = ui::slot_rect(i);
                ctx.set_fill_style_str("#ffffff");
                ctx.fill_rect(slot.x as f64, slot.y as f64, slot.w as f64, slot.h as f64);
                ctx.set_stroke_style_str("#000000");
                ctx.stroke_rect(slot.x as f64, slot.y as f64, slot.w as f64, slot.h as f64);
            }
            for (i, &pattern) in self.controller.tray().entries().iter().enumerate() {
                let slot = ui::slot_rect(i);
                self.tile(pattern, slot.x + 5.0, slot.y);
            }

            // Timer
            let (tx, ty) = ui::TIMER_POS;
            let remaining = format_mmss(self.controller.clock().remaining_ms());
            self.text(&remaining, tx + 100.0, ty + 30.0, 56, "#ff0000");
        }

        fn tile(&self, pattern: Pattern, x: f32, y: f32) {
            let ctx = &self.ctx;
            let size = TILE_SIZE as f64;
            ctx.set_fill_style_str(pattern_color(pattern));
            ctx.fill_rect(x as f64, y as f64, size, size);
            ctx.set_stroke_style_str("#222222");
            ctx.stroke_rect(x as f64, y as f64, size, size);
        }

        fn text(&self, text: &str, x: f32, y: f32, size: u32, color: &str) {
            let ctx = &self.ctx;
            ctx.set_fill_style_str(color);
            ctx.set_font(&format!("{size}px sans-serif"));
            ctx.set_text_align("center");
            ctx.set_text_baseline("middle");
            if let Err(e) = ctx.fill_text(text, x as f64, y as f64) {
                log::warn!("fill_text failed: {:?}", e);
            }
        }
    }

    fn now_ms() -> u64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now() as u64)
            .unwrap_or_else(|| js_sys::Date::now() as u64)
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("logger init failed: {e}").into());
        }

        log::info!("Triple Tray starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document; cannot start");
            return;
        };
        let Some(canvas) = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No #canvas element found");
            return;
        };
        canvas.set_width(WIDTH as u32);
        canvas.set_height(HEIGHT as u32);

        let Some(ctx) = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
        else {
            log::error!("2D canvas context unavailable");
            return;
        };

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(ctx, seed)));
        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&canvas, game.clone());
        request_animation_frame(game);

        log::info!("Triple Tray running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let mut g = game.borrow_mut();
            g.client_size = (
                canvas_clone.client_width() as f32,
                canvas_clone.client_height() as f32,
            );
            g.click(event.offset_x() as f32, event.offset_y() as f32, now_ms());
        });
        let _ = canvas.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let quit = {
            let mut g = game.borrow_mut();
            g.update(now_ms());
            g.render();
            g.quit
        };

        if quit {
            log::info!("Stopped");
            return;
        }
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use triple_tray::Settings;
    use triple_tray::sim::Difficulty;

    env_logger::init();
    log::info!("Triple Tray (native) starting...");
    log::info!("Native mode plays a demo session - build for wasm32 to play in a browser");

    let config_path = std::env::args().nth(1).map(std::path::PathBuf::from);
    let settings = Settings::load(config_path.as_deref());
    let difficulty = std::env::var("TRIPLE_TRAY_DIFFICULTY")
        .ok()
        .and_then(|s| Difficulty::from_str(&s))
        .unwrap_or(Difficulty::Easy);
    let seed = settings.seed.unwrap_or_else(time_seed);

    let summary = demo::play(settings, seed, difficulty);
    println!(
        "\nDemo finished: {} after {} picks, {} on the clock (seed {})",
        summary.outcome, summary.picks, summary.remaining, seed
    );
}

#[cfg(not(target_arch = "wasm32"))]
fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use triple_tray::consts::FRAME_MS;
    use triple_tray::sim::{Difficulty, GameController, GameEvent, Screen, choose_block, format_mmss};
    use triple_tray::{Settings, UiAction};

    /// Frames between bot picks (~0.5s at 30 FPS)
    const PICK_EVERY_FRAMES: u64 = 15;
    /// Upper bound on simulated frames
    const MAX_FRAMES: u64 = 30 * 60 * 10;

    pub struct Summary {
        pub outcome: &'static str,
        pub picks: u32,
        pub remaining: String,
    }

    /// Play one session with simulated frame time, the way a front end would
    pub fn play(settings: Settings, seed: u64, difficulty: Difficulty) -> Summary {
        let mut game = GameController::new(settings, seed);
        let mut now = 0;
        let mut picks = 0;

        game.handle(UiAction::Start, now);
        game.handle(UiAction::Select(difficulty), now);

        for frame in 1..=MAX_FRAMES {
            now += FRAME_MS;
            game.update(now);

            if game.screen() == Screen::Playing && frame % PICK_EVERY_FRAMES == 0 {
                if let Some(index) = choose_block(game.board(), game.tray()) {
                    game.handle(UiAction::PickBlock(index), now);
                    picks += 1;
                }
            }

            for event in game.drain_events() {
                match event {
                    GameEvent::TilePicked { block, pattern } => {
                        log::debug!("Picked {:?} from block {}", pattern, block)
                    }
                    GameEvent::Matched { removed } => log::info!("Matched {} tiles", removed),
                    other => log::info!("{:?}", other),
                }
            }

            if game.screen().is_result() {
                break;
            }
        }

        let outcome = match game.screen() {
            Screen::Won => "WIN",
            Screen::Lost => "LOSE",
            _ => "unfinished",
        };
        if let Ok(json) = serde_json::to_string(&game.snapshot()) {
            log::debug!("Final state: {}", json);
        }

        Summary {
            outcome,
            picks,
            remaining: format_mmss(game.clock().remaining_ms()),
        }
    }
}
