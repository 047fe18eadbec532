//! Pixel Invaders entry point
//!
//! Native window setup and the fixed-timestep game loop.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowId};

use pixel_invaders::consts::*;
use pixel_invaders::highscores::HighScores;
use pixel_invaders::input::{KeyTracker, Side};
use pixel_invaders::renderer::{HudInfo, RenderState, build_frame};
use pixel_invaders::settings::{SETTINGS_FILE, Settings};
use pixel_invaders::sim::{GamePhase, GameState, TickInput, tick};

/// Game instance holding all state
struct Game {
    window: Arc<Window>,
    render_state: RenderState,
    state: GameState,
    keys: KeyTracker,
    fire_pending: bool,
    pause_pending: bool,
    accumulator: f32,
    last_frame: Instant,
    start: Instant,
    // FPS tracking
    frame_times: [f64; 60],
    frame_index: usize,
    fps: u32,
    // Track phase and level so transitions are logged once
    last_phase: GamePhase,
    last_level: u32,
    highscores: HighScores,
}

impl Game {
    fn new(window: Arc<Window>, render_state: RenderState, seed: u64) -> Self {
        let now = Instant::now();
        Self {
            window,
            render_state,
            state: GameState::new(seed),
            keys: KeyTracker::default(),
            fire_pending: false,
            pause_pending: false,
            accumulator: 0.0,
            last_frame: now,
            start: now,
            frame_times: [0.0; 60],
            frame_index: 0,
            fps: 0,
            last_phase: GamePhase::Playing,
            last_level: 0,
            highscores: HighScores::new(),
        }
    }

    /// Run simulation ticks
    fn update(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32().min(0.1);
        self.last_frame = now;
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = TickInput {
                move_dir: self.keys.move_dir(),
                fire: self.fire_pending,
                pause: self.pause_pending,
            };
            tick(&mut self.state, &input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.fire_pending = false;
            self.pause_pending = false;
        }

        // Track frame times for FPS
        let time = self.start.elapsed().as_secs_f64() * 1000.0;
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

        // Announce difficulty ramps
        let level = self.state.level();
        if level != self.last_level {
            log::info!(
                "Level {} (invader speed {:.0} px/s)",
                level + 1,
                GameState::enemy_speed_for_level(level)
            );
            self.last_level = level;
        }

        // Log phase transitions; record the run on the one into GameOver
        let current_phase = self.state.phase;
        if current_phase != self.last_phase {
            match current_phase {
                GamePhase::Paused => log::info!("Paused"),
                GamePhase::Playing => log::info!("Resumed"),
                GamePhase::GameOver => {
                    match self.highscores.add_score(
                        self.state.score,
                        self.state.level(),
                        self.state.time_ticks,
                    ) {
                        Some(rank) => {
                            log::info!("Game over: score {} (rank {})", self.state.score, rank)
                        }
                        None => log::info!("Game over: score {}", self.state.score),
                    }
                }
            }
            self.last_phase = current_phase;
        }
    }

    /// Render the current frame
    fn render(&mut self, settings: &Settings, event_loop: &ActiveEventLoop) {
        let hud = HudInfo {
            fps: self.fps,
            best: self.highscores.top_score(),
        };
        let vertices = build_frame(&self.state, settings, &hud);
        match self.render_state.render(&vertices) {
            Ok(_) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let (w, h) = self.render_state.size;
                self.render_state.resize(w, h);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }

    /// Reset game state for a fresh run
    fn restart(&mut self) {
        let seed = rand::random::<u64>();
        self.state = GameState::new(seed);
        self.accumulator = 0.0;
        self.keys = KeyTracker::default();
        self.fire_pending = false;
        self.pause_pending = false;
        self.last_phase = GamePhase::Playing;
        self.last_level = 0;
        log::info!("Game restarted with seed: {}", seed);
    }

    fn track(&mut self, side: Side, pressed: bool) {
        if pressed {
            self.keys.press(side);
        } else {
            self.keys.release(side);
        }
    }

    fn handle_key(&mut self, event: KeyEvent) {
        let pressed = event.state == ElementState::Pressed;
        // Held movement comes from tracked key state, not OS repeats
        if pressed && event.repeat {
            return;
        }

        match event.logical_key.as_ref() {
            Key::Named(NamedKey::ArrowLeft) => self.track(Side::Left, pressed),
            Key::Named(NamedKey::ArrowRight) => self.track(Side::Right, pressed),
            Key::Character("a") | Key::Character("A") => self.track(Side::Left, pressed),
            Key::Character("d") | Key::Character("D") => self.track(Side::Right, pressed),
            Key::Named(NamedKey::Space) => {
                if pressed {
                    self.fire_pending = true;
                }
            }
            Key::Named(NamedKey::Escape) | Key::Character("p") | Key::Character("P") => {
                if pressed {
                    self.pause_pending = true;
                }
            }
            Key::Character("r") | Key::Character("R") | Key::Named(NamedKey::Enter) => {
                if pressed && self.state.phase == GamePhase::GameOver {
                    self.restart();
                }
            }
            _ => {}
        }
    }
}

struct App {
    game: Option<Game>,
    settings: Settings,
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.game.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("Pixel Invaders")
            .with_inner_size(LogicalSize::new(WORLD_WIDTH as f64, WORLD_HEIGHT as f64));
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .expect("Failed to create window"),
        );

        let size = window.inner_size();
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance
            .create_surface(window.clone())
            .expect("Failed to create surface");

        let render_state = pollster::block_on(async {
            let adapter = instance
                .request_adapter(&wgpu::RequestAdapterOptions {
                    power_preference: wgpu::PowerPreference::HighPerformance,
                    compatible_surface: Some(&surface),
                    force_fallback_adapter: false,
                })
                .await
                .expect("Failed to get adapter");

            log::info!("Using adapter: {:?}", adapter.get_info().name);

            RenderState::new(surface, &adapter, size.width.max(1), size.height.max(1)).await
        });

        let seed = rand::random::<u64>();
        log::info!("Game initialized with seed: {}", seed);

        let game = Game::new(window.clone(), render_state, seed);
        self.game = Some(game);

        window.request_redraw();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(game) = self.game.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                self.settings.save(Path::new(SETTINGS_FILE));
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                log::debug!("Resized to {}x{}", size.width, size.height);
                game.render_state.resize(size.width, size.height);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                game.handle_key(event);
            }
            WindowEvent::RedrawRequested => {
                game.update();
                game.render(&self.settings, event_loop);

                // Emits a new redraw requested event.
                game.window.request_redraw();
            }
            _ => {}
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Pixel Invaders starting...");

    let settings = Settings::load(Path::new(SETTINGS_FILE)).with_env_override();

    let event_loop = EventLoop::new().expect("Failed to create event loop");

    // Render as fast as the surface allows; the sim itself is fixed-step.
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App {
        game: None,
        settings,
    };
    event_loop.run_app(&mut app).expect("Event loop error");
}
