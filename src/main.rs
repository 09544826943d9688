//! Astro Strike entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use astro_strike::input::InputTracker;
    use astro_strike::renderer::CanvasRenderer;
    use astro_strike::settings::Settings;
    use astro_strike::sim::{tick, GamePhase, GameState};

    /// Game instance holding all state. Every mutation happens inside the
    /// frame callback; handlers only record intents.
    struct Game {
        state: GameState,
        tracker: InputTracker,
        renderer: CanvasRenderer,
        settings: Settings,
        // One-shot intents from UI buttons, drained each frame
        start_pending: bool,
        resume_pending: bool,
        quit_pending: bool,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(seed: u64, renderer: CanvasRenderer, settings: Settings) -> Self {
            Self {
                state: GameState::new(seed),
                tracker: InputTracker::new(),
                renderer,
                settings,
                start_pending: false,
                resume_pending: false,
                quit_pending: false,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// One atomic frame: drain input, step the simulation, draw
        fn frame(&mut self, time: f64) {
            let mut input = self.tracker.drain_frame();
            input.start |= std::mem::take(&mut self.start_pending);
            input.pause |= std::mem::take(&mut self.resume_pending);
            input.quit |= std::mem::take(&mut self.quit_pending);

            let now_ms = js_sys::Date::now();
            tick(&mut self.state, &input, now_ms);
            self.renderer.draw(&self.state, &self.settings);

            // Frame-time ring buffer for the FPS readout
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;
            let oldest = self.frame_times[self.frame_index];
            if oldest > 0.0 {
                let elapsed = time - oldest;
                if elapsed > 0.0 {
                    self.fps = (60_000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Push score/health/phase/banner into the DOM overlay
        fn update_hud(&self, document: &Document) {
            if let Some(el) = document.get_element_by_id("hud-score") {
                el.set_text_content(Some(&format!("Score: {}", self.state.score)));
            }
            if let Some(el) = document.get_element_by_id("hud-health") {
                el.set_text_content(Some(&format!("Health: {}", self.state.health)));
            }

            if let Some(el) = document.get_element_by_id("hud-fps") {
                if self.settings.show_fps {
                    el.set_text_content(Some(&format!("FPS: {}", self.fps)));
                    let _ = el.set_attribute("class", "hud-item");
                } else {
                    let _ = el.set_attribute("class", "hud-item hidden");
                }
            }

            // Celebration banner, only while actually playing
            let banner_visible = self.settings.effective_banners()
                && self.state.celebration_visible()
                && self.state.phase == GamePhase::Running;
            if let Some(el) = document.get_element_by_id("banner") {
                if banner_visible {
                    let _ = el.set_attribute("class", "banner");
                    if let Some(msg) = document.get_element_by_id("banner-message") {
                        let text = self.state.celebration.map(|c| c.message).unwrap_or("");
                        msg.set_text_content(Some(text));
                    }
                    if let Some(score) = document.get_element_by_id("banner-score") {
                        score.set_text_content(Some(&format!("Score: {}", self.state.score)));
                    }
                } else {
                    let _ = el.set_attribute("class", "banner hidden");
                }
            }

            show_screen(document, "start-screen", self.state.phase == GamePhase::Idle);
            show_screen(document, "pause-screen", self.state.phase == GamePhase::Paused);
            let game_over = self.state.phase == GamePhase::GameOver;
            show_screen(document, "game-over", game_over);
            if game_over {
                if let Some(el) = document.get_element_by_id("final-score") {
                    el.set_text_content(Some(&self.state.score.to_string()));
                }
            }
        }
    }

    fn show_screen(document: &Document, id: &str, visible: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.set_attribute("class", if visible { "screen" } else { "screen hidden" });
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Astro Strike starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // A missing render surface is fatal; abort before entering the loop
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        let renderer = CanvasRenderer::new(&canvas).expect("no 2d context");

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, renderer, settings)));

        log::info!("Game initialized with seed: {}", seed);

        setup_key_handlers(game.clone());
        setup_buttons(game.clone());

        request_animation_frame(game);

        log::info!("Astro Strike running!");
    }

    fn setup_key_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if game.borrow_mut().tracker.key_down(&event.code()) {
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().tracker.key_up(&event.code());
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Blur drops key-up events, so release everything
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().tracker.clear();
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        // Start and restart share one intent; the reset is identical
        on_click(game.clone(), "start-btn", |g| g.start_pending = true);
        on_click(game.clone(), "restart-btn", |g| g.start_pending = true);
        on_click(game.clone(), "resume-btn", |g| g.resume_pending = true);
        on_click(game, "quit-btn", |g| g.quit_pending = true);
    }

    fn on_click(game: Rc<RefCell<Game>>, id: &str, set: impl Fn(&mut Game) + 'static) {
        let document = web_sys::window().unwrap().document().unwrap();
        if let Some(btn) = document.get_element_by_id(id) {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                set(&mut game.borrow_mut());
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let document = web_sys::window().unwrap().document().unwrap();
            let mut g = game.borrow_mut();
            g.frame(time);
            g.update_hud(&document);
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
    use astro_strike::sim::{tick, GameState, TickInput};
    use std::time::{SystemTime, UNIX_EPOCH};

    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("Astro Strike (native) starting with seed {seed}");

    // Headless smoke run: hold fire and strafe for ten simulated seconds
    let mut state = GameState::new(seed);
    let mut now_ms = 0.0;
    tick(
        &mut state,
        &TickInput {
            start: true,
            ..Default::default()
        },
        now_ms,
    );
    for frame in 0..600u32 {
        let input = TickInput {
            move_left: (frame / 60) % 2 == 0,
            move_right: (frame / 60) % 2 == 1,
            fire: true,
            ..Default::default()
        };
        now_ms += 1000.0 / 60.0;
        tick(&mut state, &input, now_ms);
    }

    log::info!(
        "after 600 frames: score {}, health {}, {} bullets, {} enemies in flight",
        state.score,
        state.health,
        state.bullets.len(),
        state.enemies.len()
    );
    println!("score: {}  health: {}", state.score, state.health);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
