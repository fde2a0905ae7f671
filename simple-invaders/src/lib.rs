//! Game logic for a tiny Space Invaders clone.
//!
//! Nothing in this crate knows about windows or GPUs. The [`Game`] controller owns a [`World`]
//! full of entities and a [`FrameClock`]; drive it once per frame with [`Game::tick`],
//! [`Game::update`], and [`Game::draw`] into any RGBA frame buffer of [`WIDTH`] x [`HEIGHT`]
//! pixels.

#![deny(clippy::all)]
#![forbid(unsafe_code)]

use std::path::PathBuf;

pub use crate::clock::{pacing_delay, FrameClock};
pub use crate::config::{AssetPaths, Config, DEFAULT_ASSET_DIR};
pub use crate::controls::{Controls, Horizontal, Vertical};
pub use crate::entity::{Entity, Kind};
pub use crate::geo::{Point, Size, Vec2D};
pub use crate::loader::{load_assets, Assets};
pub use crate::sprites::Sprite;
use log::{debug, warn};
use thiserror::Error;

mod clock;
mod config;
mod controls;
mod debug;
mod entity;
mod geo;
mod loader;
mod sprites;

/// The screen width is constant (units are in pixels)
pub const WIDTH: usize = 600;
/// The screen height is constant (units are in pixels)
pub const HEIGHT: usize = 800;
/// Target frames per second.
pub const FPS: u32 = 60;

// Enemy positioning
const START: Vec2D = Vec2D::new(75.0, 0.0);
const GRID: Vec2D = Vec2D::new(50.0, 50.0);
const ROWS: usize = 5;
const COLS: usize = 10;

/// All the ways in which starting the game can fail.
#[derive(Error, Debug)]
pub enum Error {
    /// An asset file could not be read.
    #[error("Unable to read asset `{}`", .path.display())]
    ReadAsset {
        path: PathBuf,
        source: std::io::Error,
    },
    /// An asset file is not a supported image.
    #[error("Unable to decode asset `{}`", .path.display())]
    DecodeAsset {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// Whether the game loop should keep going.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum State {
    Running,
    Stopped,
}

/// The player, the enemy fleet, and the background they are drawn over.
#[derive(Debug)]
pub struct World {
    player: Entity,
    enemies: Vec<Entity>,
    assets: Assets,
    config: Config,
}

/// The game controller.
///
/// Owns the world and paces the loop. The only state transition is `Running` to `Stopped`.
#[derive(Debug)]
pub struct Game {
    world: World,
    clock: FrameClock,
    state: State,
    paused: bool,
}

impl World {
    /// Create a new simple-invaders `World`.
    pub fn new(config: Config, assets: Assets) -> World {
        let player = spawn_player(&config, &assets);
        let enemies = spawn_enemies(&config, &assets);

        World {
            player,
            enemies,
            assets,
            config,
        }
    }

    /// Put every entity back where it spawned.
    pub fn reset(&mut self) {
        self.player = spawn_player(&self.config, &self.assets);
        self.enemies = spawn_enemies(&self.config, &self.assets);
    }

    /// Update the internal state.
    pub fn update(&mut self, dt: f32, controls: &Controls) {
        let screen = self.config.screen;

        self.player.input(controls, self.config.player_speed);
        self.player.update(dt, screen);

        for enemy in self.enemies.iter_mut().rev() {
            enemy.update(dt, screen);
        }
    }

    /// Draw the internal state to the screen.
    pub fn draw(&self, screen: &mut [u8]) {
        let size = self.config.screen;
        debug_assert_eq!(screen.len(), size.frame_len());

        clear(screen);
        sprites::blit(screen, size, Point::default(), self.assets.background());

        self.player.render(screen, size);
        for enemy in &self.enemies {
            enemy.render(screen, size);
        }

        if self.config.debug {
            debug::draw_player(screen, size, &self.player);
            debug::draw_enemies(screen, size, &self.enemies);
        }
    }

    pub fn player(&self) -> &Entity {
        &self.player
    }

    /// Enemies in spawn order: row by row, left to right.
    pub fn enemies(&self) -> &[Entity] {
        &self.enemies
    }
}

impl Game {
    /// Create a running game.
    ///
    /// A frame rate of 0 is treated as 1 frame per second.
    pub fn new(config: Config, assets: Assets) -> Game {
        if config.fps == 0 {
            warn!("Frame rate of 0 requested; pacing at 1 fps");
        }

        Game {
            clock: FrameClock::new(config.fps.max(1)),
            world: World::new(config, assets),
            state: State::Running,
            paused: false,
        }
    }

    /// Wait for the next frame and return the elapsed time in seconds.
    pub fn tick(&mut self) -> f32 {
        self.clock.tick().as_secs_f32()
    }

    /// Advance the world, unless paused or stopped.
    pub fn update(&mut self, dt: f32, controls: &Controls) {
        if self.state == State::Running && !self.paused {
            self.world.update(dt, controls);
        }
    }

    /// Draw the world into an RGBA frame buffer.
    pub fn draw(&self, screen: &mut [u8]) {
        self.world.draw(screen);
    }

    /// End the game. There is no way back.
    pub fn stop(&mut self) {
        if self.state == State::Running {
            debug!("Stopping the game");
            self.state = State::Stopped;
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == State::Running
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        debug!("Paused: {}", self.paused);
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn reset(&mut self) {
        debug!("Resetting the world");
        self.world.reset();
    }

    pub fn world(&self) -> &World {
        &self.world
    }
}

/// Clear the screen
fn clear(screen: &mut [u8]) {
    for (i, byte) in screen.iter_mut().enumerate() {
        *byte = if i % 4 == 3 { 255 } else { 0 };
    }
}

/// The player starts near the bottom of the screen, centered horizontally.
fn spawn_player(config: &Config, assets: &Assets) -> Entity {
    let spawn = Vec2D::new(
        config.screen.width as f32 / 2.0,
        config.screen.height as f32 * 0.9,
    );

    Entity::player(spawn, assets.player().clone())
}

/// Create a grid of enemies, row by row.
fn spawn_enemies(config: &Config, assets: &Assets) -> Vec<Entity> {
    (0..ROWS)
        .flat_map(|y| (0..COLS).map(move |x| (x, y)))
        .map(|(x, y)| {
            let spawn = START + GRID * Vec2D::new(x as f32, y as f32);

            Entity::enemy(spawn, config.enemy_velocity, assets.enemy().clone())
        })
        .collect()
}
