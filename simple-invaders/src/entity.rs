//! Moving, drawable game objects.

use crate::controls::Controls;
use crate::geo::{Point, Size, Vec2D};
use crate::sprites::{blit, Sprite};

/// Selects how an entity reacts to input and to the screen edges.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Kind {
    /// Steered by the keyboard and kept on screen.
    Player,
    /// Drifts with the velocity it spawned with, even past the screen edges.
    Enemy,
}

/// A ship: either the player or one of the invaders.
#[derive(Clone, Debug)]
pub struct Entity {
    /// Top-left corner of the sprite.
    pos: Vec2D,
    /// Units per second.
    vel: Vec2D,
    sprite: Sprite,
    kind: Kind,
}

impl Entity {
    /// Create an entity whose sprite is centered on `spawn`.
    pub fn new(kind: Kind, spawn: Vec2D, vel: Vec2D, sprite: Sprite) -> Entity {
        let pos = spawn - Vec2D::from(sprite.size()) / 2.0;

        Entity {
            pos,
            vel,
            sprite,
            kind,
        }
    }

    /// Create a stationary player centered on `spawn`.
    pub fn player(spawn: Vec2D, sprite: Sprite) -> Entity {
        Entity::new(Kind::Player, spawn, Vec2D::default(), sprite)
    }

    /// Create an enemy centered on `spawn`, drifting at a constant `vel`.
    pub fn enemy(spawn: Vec2D, vel: Vec2D, sprite: Sprite) -> Entity {
        Entity::new(Kind::Enemy, spawn, vel, sprite)
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Top-left corner of the sprite.
    pub fn pos(&self) -> Vec2D {
        self.pos
    }

    pub fn vel(&self) -> Vec2D {
        self.vel
    }

    pub fn size(&self) -> Size {
        self.sprite.size()
    }

    /// Apply player controls. Enemies ignore input.
    pub fn input(&mut self, controls: &Controls, speed: f32) {
        match self.kind {
            Kind::Player => {
                self.vel = Vec2D::new(
                    controls.horizontal.velocity(speed),
                    controls.vertical.velocity(speed),
                );
            }
            Kind::Enemy => (),
        }
    }

    /// Integrate the position over `dt` seconds.
    ///
    /// Players are then clamped inside `screen`; their velocity is left alone.
    pub fn update(&mut self, dt: f32, screen: Size) {
        self.pos += self.vel * dt;

        match self.kind {
            Kind::Player => self.clamp(screen),
            Kind::Enemy => (),
        }
    }

    /// Draw the sprite at its current position.
    pub fn render(&self, screen: &mut [u8], screen_size: Size) {
        blit(screen, screen_size, Point::from(self.pos), &self.sprite);
    }

    /// Keep the whole sprite on screen. A sprite larger than the screen is pinned to the origin.
    fn clamp(&mut self, screen: Size) {
        let max = Vec2D::from(screen) - Vec2D::from(self.sprite.size());
        let max = Vec2D::new(max.x.max(0.0), max.y.max(0.0));

        if self.pos.x < 0.0 {
            self.pos.x = 0.0;
        } else if self.pos.x > max.x {
            self.pos.x = max.x;
        }

        if self.pos.y < 0.0 {
            self.pos.y = 0.0;
        } else if self.pos.y > max.y {
            self.pos.y = max.y;
        }
    }
}
