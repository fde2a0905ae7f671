use std::rc::Rc;

use crate::geo::{Point, Size};
use line_drawing::Bresenham;

/// Sprites can be drawn to the pixel buffer.
///
/// A `Sprite` references its RGBA pixel data instead of owning it, so cloning one is cheap and
/// every enemy in the fleet shares a single decoded image.
#[derive(Clone, Debug)]
pub struct Sprite {
    width: usize,
    height: usize,
    pixels: Rc<Vec<u8>>,
}

impl Sprite {
    /// Create a sprite from raw RGBA pixels in row-major order.
    ///
    /// # Panics
    ///
    /// Panics when `pixels` does not hold exactly `width * height` RGBA values.
    pub fn new(width: usize, height: usize, pixels: Vec<u8>) -> Sprite {
        assert_eq!(pixels.len(), width * height * 4, "Pixel data size mismatch");

        Sprite {
            width,
            height,
            pixels: Rc::new(pixels),
        }
    }

    /// Create a sprite filled with a single color.
    pub fn solid(width: usize, height: usize, color: [u8; 4]) -> Sprite {
        let pixels = color
            .iter()
            .copied()
            .cycle()
            .take(width * height * 4)
            .collect();

        Sprite::new(width, height, pixels)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

/// Blit a sprite to the pixel buffer.
///
/// The sprite is clipped to the screen, and its alpha channel is blended over the existing pixels.
pub(crate) fn blit(screen: &mut [u8], screen_size: Size, dest: Point, sprite: &Sprite) {
    let left = dest.x.max(0);
    let top = dest.y.max(0);
    let right = (dest.x + sprite.width as isize).min(screen_size.width as isize);
    let bottom = (dest.y + sprite.height as isize).min(screen_size.height as isize);
    if left >= right || top >= bottom {
        return;
    }

    let pixels = sprite.pixels();
    let width = (right - left) as usize * 4;
    let sx = (left - dest.x) as usize;

    for y in top..bottom {
        let sy = (y - dest.y) as usize;
        let s = (sy * sprite.width + sx) * 4;
        let i = (y as usize * screen_size.width + left as usize) * 4;

        let src = &pixels[s..s + width];
        let dst = &mut screen[i..i + width];
        for (dst, src) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
            blend(dst, src);
        }
    }
}

/// Alpha-blend one RGBA pixel over an opaque one.
fn blend(dst: &mut [u8], src: &[u8]) {
    match src[3] {
        0 => (),
        255 => dst.copy_from_slice(src),
        alpha => {
            let alpha = u16::from(alpha);
            for (d, s) in dst[..3].iter_mut().zip(&src[..3]) {
                *d = ((u16::from(*s) * alpha + u16::from(*d) * (255 - alpha)) / 255) as u8;
            }
            dst[3] = 255;
        }
    }
}

/// Draw a line to the pixel buffer using Bresenham's algorithm.
///
/// Points outside of the screen are skipped.
pub(crate) fn line(screen: &mut [u8], screen_size: Size, p1: Point, p2: Point, color: [u8; 4]) {
    let p1 = (p1.x as i64, p1.y as i64);
    let p2 = (p2.x as i64, p2.y as i64);

    for (x, y) in Bresenham::new(p1, p2) {
        if x < 0 || y < 0 || x >= screen_size.width as i64 || y >= screen_size.height as i64 {
            continue;
        }
        let i = (x as usize + y as usize * screen_size.width) * 4;

        screen[i..i + 4].copy_from_slice(&color);
    }
}

/// Draw a rectangle to the pixel buffer using two points in opposite corners.
pub(crate) fn rect(screen: &mut [u8], screen_size: Size, p1: Point, p2: Point, color: [u8; 4]) {
    let p3 = Point::new(p1.x, p2.y);
    let p4 = Point::new(p2.x, p1.y);

    line(screen, screen_size, p1, p3, color);
    line(screen, screen_size, p3, p2, color);
    line(screen, screen_size, p2, p4, color);
    line(screen, screen_size, p4, p1, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: [u8; 4] = [0, 0, 0, 255];
    const WHITE: [u8; 4] = [255, 255, 255, 255];

    fn screen(size: Size) -> Vec<u8> {
        BLACK.iter().copied().cycle().take(size.frame_len()).collect()
    }

    fn pixel(screen: &[u8], size: Size, x: usize, y: usize) -> [u8; 4] {
        let i = (x + y * size.width) * 4;
        [screen[i], screen[i + 1], screen[i + 2], screen[i + 3]]
    }

    #[test]
    fn blit_opaque() {
        let size = Size::new(8, 8);
        let mut frame = screen(size);
        let sprite = Sprite::solid(2, 3, WHITE);

        blit(&mut frame, size, Point::new(4, 2), &sprite);

        for y in 0..size.height {
            for x in 0..size.width {
                let inside = (4..6).contains(&x) && (2..5).contains(&y);
                let expected = if inside { WHITE } else { BLACK };
                assert_eq!(pixel(&frame, size, x, y), expected, "Pixel ({}, {}) differs", x, y);
            }
        }
    }

    #[test]
    fn blit_clips_partially_visible() {
        let size = Size::new(4, 4);
        let mut frame = screen(size);
        let sprite = Sprite::new(
            2,
            2,
            [[1, 1, 1, 255], [2, 2, 2, 255], [3, 3, 3, 255], [4, 4, 4, 255]].concat(),
        );

        // Only the bottom-right pixel of the sprite lands on screen
        blit(&mut frame, size, Point::new(-1, -1), &sprite);
        assert_eq!(pixel(&frame, size, 0, 0), [4, 4, 4, 255]);
        assert_eq!(pixel(&frame, size, 1, 0), BLACK);
        assert_eq!(pixel(&frame, size, 0, 1), BLACK);

        // Only the top-left pixel of the sprite lands on screen
        blit(&mut frame, size, Point::new(3, 3), &sprite);
        assert_eq!(pixel(&frame, size, 3, 3), [1, 1, 1, 255]);
        assert_eq!(pixel(&frame, size, 2, 3), BLACK);
    }

    #[test]
    fn blit_offscreen_is_ignored() {
        let size = Size::new(4, 4);
        let mut frame = screen(size);
        let expected = frame.clone();
        let sprite = Sprite::solid(2, 2, WHITE);

        for dest in [
            Point::new(-2, 0),
            Point::new(4, 0),
            Point::new(0, -2),
            Point::new(0, 4),
            Point::new(100, 900),
        ] {
            blit(&mut frame, size, dest, &sprite);
        }

        assert_eq!(frame, expected, "Off-screen sprites must not draw");
    }

    #[test]
    fn blit_blends_alpha() {
        let size = Size::new(3, 1);
        let mut frame = screen(size);
        let sprite = Sprite::new(
            3,
            1,
            [[255, 255, 255, 0], [255, 0, 0, 51], [0, 255, 0, 255]].concat(),
        );

        blit(&mut frame, size, Point::new(0, 0), &sprite);

        assert_eq!(pixel(&frame, size, 0, 0), BLACK, "Transparent pixel drew");
        assert_eq!(pixel(&frame, size, 1, 0), [51, 0, 0, 255], "Translucent pixel differs");
        assert_eq!(pixel(&frame, size, 2, 0), [0, 255, 0, 255], "Opaque pixel differs");
    }

    #[test]
    fn rect_outline() {
        let size = Size::new(6, 6);
        let mut frame = screen(size);

        rect(&mut frame, size, Point::new(1, 1), Point::new(4, 4), WHITE);

        assert_eq!(pixel(&frame, size, 1, 1), WHITE);
        assert_eq!(pixel(&frame, size, 4, 1), WHITE);
        assert_eq!(pixel(&frame, size, 1, 4), WHITE);
        assert_eq!(pixel(&frame, size, 4, 4), WHITE);
        assert_eq!(pixel(&frame, size, 2, 4), WHITE);
        assert_eq!(pixel(&frame, size, 2, 2), BLACK, "Rectangle must not be filled");
        assert_eq!(pixel(&frame, size, 0, 0), BLACK);
    }

    #[test]
    fn line_clips_to_screen() {
        let size = Size::new(4, 4);
        let mut frame = screen(size);

        line(&mut frame, size, Point::new(-10, 2), Point::new(10, 2), WHITE);

        for x in 0..size.width {
            assert_eq!(pixel(&frame, size, x, 2), WHITE);
            assert_eq!(pixel(&frame, size, x, 1), BLACK);
        }
    }

    #[test]
    fn clones_share_pixels() {
        let sprite = Sprite::solid(44, 32, WHITE);
        let clone = sprite.clone();

        assert!(Rc::ptr_eq(&sprite.pixels, &clone.pixels));
        assert_eq!(clone.size(), Size::new(44, 32));
    }
}
