use std::fs;
use std::path::Path;

use crate::config::AssetPaths;
use crate::sprites::Sprite;
use crate::Error;
use log::debug;

/// The images loaded into memory at startup.
#[derive(Clone, Debug)]
pub struct Assets {
    background: Sprite,
    player: Sprite,
    enemy: Sprite,
}

impl Assets {
    /// Bundle already decoded sprites.
    pub fn new(background: Sprite, player: Sprite, enemy: Sprite) -> Assets {
        Assets {
            background,
            player,
            enemy,
        }
    }

    pub fn background(&self) -> &Sprite {
        &self.background
    }

    pub fn player(&self) -> &Sprite {
        &self.player
    }

    pub fn enemy(&self) -> &Sprite {
        &self.enemy
    }
}

/// Load all static assets into an `Assets` structure.
///
/// # Errors
///
/// Fails on the first file that cannot be read or decoded. There is no fallback image.
pub fn load_assets(paths: &AssetPaths) -> Result<Assets, Error> {
    Ok(Assets {
        background: load_image(&paths.background)?,
        player: load_image(&paths.player)?,
        enemy: load_image(&paths.enemy)?,
    })
}

/// Read an image file and convert it to a sprite.
fn load_image(path: &Path) -> Result<Sprite, Error> {
    let bytes = fs::read(path).map_err(|source| Error::ReadAsset {
        path: path.to_path_buf(),
        source,
    })?;
    let sprite = decode_image(&bytes).map_err(|source| Error::DecodeAsset {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        "Loaded {} ({}x{})",
        path.display(),
        sprite.width(),
        sprite.height()
    );

    Ok(sprite)
}

/// Convert encoded image data to RGBA pixels.
fn decode_image(bytes: &[u8]) -> Result<Sprite, image::ImageError> {
    let image = image::load_from_memory(bytes)?.to_rgba8();
    let (width, height) = image.dimensions();

    Ok(Sprite::new(width as usize, height as usize, image.into_raw()))
}
