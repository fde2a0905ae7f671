#![deny(clippy::all)]
#![forbid(unsafe_code)]

use error_iter::ErrorIter as _;
use log::{debug, error, info};
use pixels::{Pixels, SurfaceTexture};
use simple_invaders::{load_assets, Config, Controls, Game};
use std::sync::Arc;
use winit::{
    dpi::LogicalSize,
    event_loop::{ControlFlow, EventLoop},
    keyboard::KeyCode,
    window::WindowBuilder,
};
use winit_input_helper::WinitInputHelper;

/// Uber-struct representing the windowed game.
struct App {
    /// Software renderer.
    pixels: Pixels,
    /// Window-independent game controller.
    game: Game,
    /// Event manager.
    input: WinitInputHelper,
}

impl App {
    fn new(pixels: Pixels, game: Game) -> Self {
        Self {
            pixels,
            game,
            input: WinitInputHelper::new(),
        }
    }

    fn read_controls(&self) -> Controls {
        controls_from(|key| self.input.key_held(key))
    }

    /// Quit, pause, and reset keys.
    fn handle_commands(&mut self) {
        let commands = commands_from(
            |key| self.input.key_pressed(key),
            self.input.close_requested(),
        );

        if commands.quit {
            self.game.stop();
            return;
        }
        if commands.pause {
            self.game.toggle_pause();
        }
        if commands.reset {
            self.game.reset();
        }
    }
}

/// Non-movement requests collected during one frame.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
struct Commands {
    quit: bool,
    pause: bool,
    reset: bool,
}

/// Keyboard controls; WASD and the arrow keys are interchangeable.
fn controls_from<F>(held: F) -> Controls
where
    F: Fn(KeyCode) -> bool,
{
    let either = |a, b| held(a) || held(b);

    Controls::from_keys(
        either(KeyCode::KeyA, KeyCode::ArrowLeft),
        either(KeyCode::KeyD, KeyCode::ArrowRight),
        either(KeyCode::KeyW, KeyCode::ArrowUp),
        either(KeyCode::KeyS, KeyCode::ArrowDown),
    )
}

/// Escape or a close request quits; `P` or `Pause` toggles pause; `R` resets.
fn commands_from<F>(pressed: F, close_requested: bool) -> Commands
where
    F: Fn(KeyCode) -> bool,
{
    Commands {
        quit: close_requested || pressed(KeyCode::Escape),
        pause: pressed(KeyCode::Pause) || pressed(KeyCode::KeyP),
        reset: pressed(KeyCode::KeyR),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let config = Config::from_env();
    info!(
        "Starting with a {}x{} screen at {} fps, background from {}",
        config.screen.width,
        config.screen.height,
        config.fps,
        config.assets.background.display()
    );

    let assets = load_assets(&config.assets)?;
    let event_loop = EventLoop::new()?;

    let window = {
        let size = LogicalSize::new(config.screen.width as f64, config.screen.height as f64);
        let window = WindowBuilder::new()
            .with_title("Space Invaders")
            .with_inner_size(size)
            .with_min_inner_size(size)
            .build(&event_loop)?;
        Arc::new(window)
    };

    let pixels = {
        let window_size = window.inner_size();
        let surface_texture =
            SurfaceTexture::new(window_size.width, window_size.height, &*window);
        Pixels::new(
            config.screen.width as u32,
            config.screen.height as u32,
            surface_texture,
        )?
    };

    let mut app = App::new(pixels, Game::new(config, assets));

    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop.run(move |event, elwt| {
        // Let winit_input_helper collect events to build its state.
        // It returns `true` once all pending events have been drained.
        if !app.input.update(&event) {
            return;
        }

        let dt = app.game.tick();

        app.handle_commands();
        if !app.game.is_running() {
            debug!("Leaving the event loop");
            elwt.exit();
            return;
        }

        // Resize the window
        if let Some(size) = app.input.window_resized() {
            if let Err(err) = app.pixels.resize_surface(size.width, size.height) {
                log_error("pixels.resize_surface", err);
                app.game.stop();
                elwt.exit();
                return;
            }
        }

        let controls = app.read_controls();
        app.game.update(dt, &controls);

        app.game.draw(app.pixels.frame_mut());
        if let Err(err) = app.pixels.render() {
            log_error("pixels.render", err);
            app.game.stop();
            elwt.exit();
        }
    })?;

    Ok(())
}

fn log_error<E: std::error::Error + 'static>(method_name: &str, err: E) {
    error!("{method_name}() failed: {err}");
    for source in err.sources().skip(1) {
        error!("  Caused by: {source}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simple_invaders::{Horizontal, Vertical};

    fn keys(down: &[KeyCode]) -> impl Fn(KeyCode) -> bool + '_ {
        move |key| down.contains(&key)
    }

    #[test]
    fn wasd_and_arrows_are_interchangeable() {
        let cases = [
            (KeyCode::KeyA, Horizontal::Left, Vertical::Still),
            (KeyCode::ArrowLeft, Horizontal::Left, Vertical::Still),
            (KeyCode::KeyD, Horizontal::Right, Vertical::Still),
            (KeyCode::ArrowRight, Horizontal::Right, Vertical::Still),
            (KeyCode::KeyW, Horizontal::Still, Vertical::Up),
            (KeyCode::ArrowUp, Horizontal::Still, Vertical::Up),
            (KeyCode::KeyS, Horizontal::Still, Vertical::Down),
            (KeyCode::ArrowDown, Horizontal::Still, Vertical::Down),
        ];

        for (key, horizontal, vertical) in cases {
            let controls = controls_from(keys(&[key]));
            assert_eq!(controls.horizontal, horizontal, "{:?}", key);
            assert_eq!(controls.vertical, vertical, "{:?}", key);
        }

        assert_eq!(controls_from(keys(&[])), Controls::default());
        assert_eq!(controls_from(keys(&[KeyCode::Space])), Controls::default());
    }

    #[test]
    fn opposing_keys_cancel() {
        let pairs = [
            [KeyCode::KeyA, KeyCode::KeyD],
            [KeyCode::ArrowLeft, KeyCode::KeyD],
            [KeyCode::KeyA, KeyCode::ArrowRight],
            [KeyCode::KeyW, KeyCode::KeyS],
            [KeyCode::ArrowUp, KeyCode::KeyS],
            [KeyCode::KeyW, KeyCode::ArrowDown],
        ];

        for pair in pairs {
            assert_eq!(controls_from(keys(&pair)), Controls::default(), "{:?}", pair);
        }

        let controls = controls_from(keys(&[KeyCode::KeyA, KeyCode::ArrowLeft, KeyCode::KeyS]));
        assert_eq!(controls.horizontal, Horizontal::Left);
        assert_eq!(controls.vertical, Vertical::Down);
    }

    #[test]
    fn quit_on_escape_or_close() {
        assert_eq!(commands_from(keys(&[]), false), Commands::default());

        let commands = commands_from(keys(&[KeyCode::Escape]), false);
        assert!(commands.quit);

        let commands = commands_from(keys(&[]), true);
        assert!(commands.quit);
        assert!(!commands.pause);
        assert!(!commands.reset);
    }

    #[test]
    fn pause_and_reset_keys() {
        assert!(commands_from(keys(&[KeyCode::KeyP]), false).pause);
        assert!(commands_from(keys(&[KeyCode::Pause]), false).pause);

        let commands = commands_from(keys(&[KeyCode::KeyR]), false);
        assert_eq!(
            commands,
            Commands {
                quit: false,
                pause: false,
                reset: true,
            }
        );
    }
}
