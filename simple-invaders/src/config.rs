//! Game configuration.
//!
//! Defaults describe the classic layout. A few settings can be overridden with environment
//! variables:
//!
//! * `DEBUG`: set to `true` to draw bounding boxes around every entity.
//! * `INVADERS_ASSETS`: directory holding `bg.png`, `spaceship.png`, and `alien1.png`.

use std::env;
use std::path::{Path, PathBuf};

use crate::geo::{Size, Vec2D};
use crate::{FPS, HEIGHT, WIDTH};

/// Where assets are found when `INVADERS_ASSETS` is not set, relative to the working directory.
pub const DEFAULT_ASSET_DIR: &str = "./assets/texture";

/// Player speed on each axis, in units per second.
const PLAYER_SPEED: f32 = 200.0;
/// Every enemy drifts down the screen at this velocity.
const ENEMY_VELOCITY: Vec2D = Vec2D::new(0.0, 50.0);

/// Locations of the image files loaded at startup.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetPaths {
    pub background: PathBuf,
    pub player: PathBuf,
    pub enemy: PathBuf,
}

/// Everything the game needs to know before it starts.
#[derive(Clone, Debug)]
pub struct Config {
    /// Size of the pixel buffer.
    pub screen: Size,
    /// Target frame rate.
    pub fps: u32,
    pub player_speed: f32,
    pub enemy_velocity: Vec2D,
    pub assets: AssetPaths,
    /// Draw bounding boxes.
    pub debug: bool,
}

impl AssetPaths {
    /// Use the standard file names inside `dir`.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> AssetPaths {
        let dir = dir.as_ref();

        AssetPaths {
            background: dir.join("bg.png"),
            player: dir.join("spaceship.png"),
            enemy: dir.join("alien1.png"),
        }
    }
}

impl Default for AssetPaths {
    fn default() -> Self {
        AssetPaths::in_dir(DEFAULT_ASSET_DIR)
    }
}

impl Config {
    /// Read overrides from the process environment.
    pub fn from_env() -> Config {
        Config::from_vars(|key| env::var(key).ok())
    }

    fn from_vars<F>(var: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let debug = var("DEBUG")
            .unwrap_or_else(|| "false".to_string())
            .parse()
            .unwrap_or(false);
        let assets = var("INVADERS_ASSETS")
            .map(AssetPaths::in_dir)
            .unwrap_or_default();

        Config {
            assets,
            debug,
            ..Config::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            screen: Size::new(WIDTH, HEIGHT),
            fps: FPS,
            player_speed: PLAYER_SPEED,
            enemy_velocity: ENEMY_VELOCITY,
            assets: AssetPaths::default(),
            debug: false,
        }
    }
}
