//! Balloon Pump entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, PointerEvent};

    use balloon_pump::assets::Letter;
    use balloon_pump::audio::AudioManager;
    use balloon_pump::consts::*;
    use balloon_pump::renderer::RenderState;
    use balloon_pump::scene::SpriteWorld;
    use balloon_pump::sim::{GameEvent, GameState, InputEvent, TickInput, Viewport, tick};
    use balloon_pump::{Settings, Tuning};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        world: SpriteWorld,
        render_state: Option<RenderState>,
        accumulator: f32,
        last_time: f64,
        /// Events queued by callbacks since the last tick
        input: TickInput,
        canvas: HtmlCanvasElement,
        settings: Settings,
        audio: AudioManager,
        last_letter: Option<Letter>,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(seed: u64, canvas: HtmlCanvasElement, settings: Settings) -> Self {
            let viewport = css_viewport(&canvas);
            let mut world = SpriteWorld::new();
            let state = GameState::new(seed, viewport, Tuning::load(), &mut world);

            let mut audio = AudioManager::new();
            audio.apply_settings(&settings);

            Self {
                state,
                world,
                render_state: None,
                accumulator: 0.0,
                last_time: 0.0,
                input: TickInput::new(viewport),
                canvas,
                settings,
                audio,
                last_letter: None,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// Queue an input event for the next tick
        fn push(&mut self, event: InputEvent) {
            self.input.push(event);
        }

        /// Pick up canvas size changes (window resize, DPR change)
        fn sync_canvas_size(&mut self) {
            let viewport = css_viewport(&self.canvas);
            if viewport == self.input.viewport {
                return;
            }
            self.input.viewport = viewport;

            let (width, height) = backing_size(&self.canvas);
            self.canvas.set_width(width);
            self.canvas.set_height(height);
            if let Some(render_state) = &mut self.render_state {
                render_state.resize(width, height);
            }
            log::info!("Canvas resized to {}x{}", viewport.width, viewport.height);
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32, time: f64) {
            let dt = dt.min(MAX_FRAME_DT);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                tick(&mut self.state, &self.input, &mut self.world);
                self.accumulator -= SIM_DT;
                substeps += 1;

                // Queued events apply exactly once
                self.input.events.clear();

                self.audio.play_events(&self.state.events);
                for event in &self.state.events {
                    if let GameEvent::BalloonPopped { letter, .. } = event {
                        self.last_letter = Some(*letter);
                    }
                }
            }

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            // Calculate FPS from oldest to newest frame
            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let view = self.state.viewport.size();
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render_world(&self.world, view) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(hud) = document.get_element_by_id("hud") {
                let class = if self.settings.show_hud { "" } else { "hidden" };
                let _ = hud.set_attribute("class", class);
            }
            if !self.settings.show_hud {
                return;
            }

            if let Some(el) = document.get_element_by_id("hud-popped") {
                el.set_text_content(Some(&self.state.popped.to_string()));
            }
            if let Some(el) = document.get_element_by_id("hud-letter") {
                let letter = self.last_letter.map(|l| l.as_char().to_string()).unwrap_or_default();
                el.set_text_content(Some(&letter));
            }
            if let Some(el) = document.get_element_by_id("hud-fps") {
                if self.settings.show_fps {
                    let _ = el.set_attribute("class", "");
                    el.set_text_content(Some(&self.fps.to_string()));
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }
        }

        /// Focus lost: let go of the pump, maybe mute
        fn on_blur(&mut self) {
            self.push(InputEvent::PointerLeave);
            if self.settings.mute_on_blur {
                self.audio.set_muted(true);
            }
        }

        fn on_focus(&mut self) {
            self.audio.set_muted(false);
            // Don't feed the time spent in the background to the accumulator
            self.last_time = 0.0;
        }
    }

    /// Canvas size in CSS pixels; this is the simulation's coordinate space
    fn css_viewport(canvas: &HtmlCanvasElement) -> Viewport {
        Viewport::new(
            canvas.client_width().max(1) as f32,
            canvas.client_height().max(1) as f32,
        )
    }

    /// Canvas size in device pixels
    fn backing_size(canvas: &HtmlCanvasElement) -> (u32, u32) {
        let dpr = web_sys::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
        let width = (canvas.client_width().max(1) as f64 * dpr) as u32;
        let height = (canvas.client_height().max(1) as f64 * dpr) as u32;
        (width, height)
    }

    /// Pointer position relative to the canvas, in CSS pixels
    fn canvas_point(canvas: &HtmlCanvasElement, event: &PointerEvent) -> Vec2 {
        let rect = canvas.get_bounding_client_rect();
        Vec2::new(
            event.client_x() as f32 - rect.left() as f32,
            event.client_y() as f32 - rect.top() as f32,
        )
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Balloon Pump starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let (width, height) = backing_size(&canvas);
        canvas.set_width(width);
        canvas.set_height(height);

        // Initialize game
        let seed = js_sys::Date::now() as u64;
        let settings = Settings::load();
        let game = Rc::new(RefCell::new(Game::new(seed, canvas.clone(), settings)));

        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height)
            .await
            .expect("Failed to create device");
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&canvas, game.clone());
        setup_focus_handlers(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Balloon Pump running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Press: pops a balloon or grabs the pump
        {
            let game = game.clone();
            let target = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                event.prevent_default();
                let mut g = game.borrow_mut();
                // First gesture unlocks audio
                g.audio.resume();
                let pos = canvas_point(&target, &event);
                g.push(InputEvent::PointerDown(pos));
            });
            let _ = canvas
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Release anywhere in the window
        {
            let game = game.clone();
            let target = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                let pos = canvas_point(&target, &event);
                game.borrow_mut().push(InputEvent::PointerUp(pos));
            });
            let _ = window
                .add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Move (for pointer-out of the pump)
        {
            let game = game.clone();
            let target = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                let pos = canvas_point(&target, &event);
                game.borrow_mut().push(InputEvent::PointerMove(pos));
            });
            let _ = canvas
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Leaving the canvas lets go of the pump
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: PointerEvent| {
                game.borrow_mut().push(InputEvent::PointerLeave);
            });
            let _ = canvas
                .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Space works the pump; F/H/M flip persisted settings
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.repeat() {
                    if event.code() == "Space" {
                        event.prevent_default();
                    }
                    return;
                }
                let mut g = game.borrow_mut();
                if event.code() == "Space" {
                    event.prevent_default();
                    g.audio.resume();
                    g.push(InputEvent::PumpKey(true));
                } else if g.settings.toggle_for_key(&event.code()) {
                    g.settings.save();
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.code() == "Space" {
                    game.borrow_mut().push(InputEvent::PumpKey(false));
                }
            });
            let _ = document
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_focus_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Visibility change (tab switch, minimize)
        {
            let game = game.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let mut g = game.borrow_mut();
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    g.on_blur();
                    log::info!("Tab hidden");
                } else {
                    g.on_focus();
                }
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Window blur (click outside)
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().on_blur();
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().on_focus();
            });
            let _ = window.add_event_listener_with_callback("focus", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.sync_canvas_size();
            g.update(dt, time);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Balloon Pump (native) starting...");
    log::info!("The playable build targets wasm32; running a headless session instead");

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(42);
    headless_session(seed);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Pump three balloons off the nozzle, pop the first, and report
#[cfg(not(target_arch = "wasm32"))]
fn headless_session(seed: u64) {
    use balloon_pump::renderer::world_vertices;
    use balloon_pump::scene::SpriteWorld;
    use balloon_pump::sim::{GameEvent, GameState, InputEvent, TickInput, Viewport, tick};
    use balloon_pump::Tuning;

    let viewport = Viewport::new(1280.0, 720.0);
    let tuning = Tuning::load();
    let release_ticks = tuning.ticks_to_release();
    let mut world = SpriteWorld::new();
    let mut state = GameState::new(seed, viewport, tuning, &mut world);
    log::info!("Seed {}, {} ticks per balloon", seed, release_ticks);

    let mut input = TickInput::new(viewport);
    input.push(InputEvent::PumpKey(true));
    for _ in 0..release_ticks * 3 {
        tick(&mut state, &input, &mut world);
        input.events.clear();
        for event in &state.events {
            if let GameEvent::BalloonReleased(id) = event {
                log::info!("Balloon {:?} released at tick {}", id, state.time_ticks);
            }
        }
    }
    input.push(InputEvent::PumpKey(false));

    // Let them drift a while, then pop the oldest
    for _ in 0..120 {
        tick(&mut state, &input, &mut world);
        input.events.clear();
    }
    if let Some(first) = state.balloons.first().map(|b| b.pos) {
        input.push(InputEvent::PointerDown(first));
        input.push(InputEvent::PointerUp(first));
        tick(&mut state, &input, &mut world);
        for event in &state.events {
            if let GameEvent::BalloonPopped { id, letter, color } = event {
                log::info!("Popped {:?}: {} on {}", id, letter.as_char(), color.as_str());
            }
        }
    }

    log::info!(
        "After {} ticks: {} balloons ({} floating), {} popped, {} sprites live, {} destroyed, {} vertices",
        state.time_ticks,
        state.balloons.len(),
        state.floating_count(),
        state.popped,
        world.len(),
        world.destroyed_count(),
        world_vertices(&world).len()
    );
}
