use crate::entity::Entity;
use crate::geo::{Point, Size};
use crate::sprites::rect;

// Colors
const GREEN: [u8; 4] = [0, 255, 0, 255];
const BLUE: [u8; 4] = [0, 0, 255, 255];

/// Draw bounding box for player.
pub(crate) fn draw_player(screen: &mut [u8], screen_size: Size, player: &Entity) {
    draw_bounds(screen, screen_size, player, GREEN);
}

/// Draw bounding boxes for each enemy.
pub(crate) fn draw_enemies(screen: &mut [u8], screen_size: Size, enemies: &[Entity]) {
    for enemy in enemies {
        draw_bounds(screen, screen_size, enemy, BLUE);
    }
}

/// The box hugs the sprite: `rect` draws both corners inclusively.
fn draw_bounds(screen: &mut [u8], screen_size: Size, entity: &Entity, color: [u8; 4]) {
    let p1 = Point::from(entity.pos());
    let p2 = p1 + Point::from(entity.size()) + Point::new(-1, -1);

    rect(screen, screen_size, p1, p2, color);
}
