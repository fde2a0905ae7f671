//! Simple geometry primitives.

/// A tiny 2D vector with floating point coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2D {
    pub x: f32,
    pub y: f32,
}

/// A tiny signed pixel position.
///
/// Entities may drift past any edge of the screen, so pixel positions can be negative.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Point {
    pub x: isize,
    pub y: isize,
}

/// Integer dimensions of the screen or a sprite.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Size {
    pub width: usize,
    pub height: usize,
}

impl Vec2D {
    /// Create a 2D vector.
    pub const fn new(x: f32, y: f32) -> Vec2D {
        Vec2D { x, y }
    }
}

impl std::ops::Add for Vec2D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::AddAssign for Vec2D {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl std::ops::Sub for Vec2D {
    type Output = Vec2D;

    fn sub(self, other: Vec2D) -> Vec2D {
        Vec2D::new(self.x - other.x, self.y - other.y)
    }
}

impl std::ops::SubAssign for Vec2D {
    fn sub_assign(&mut self, other: Vec2D) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

impl std::ops::Mul for Vec2D {
    type Output = Vec2D;

    fn mul(self, other: Vec2D) -> Vec2D {
        Vec2D::new(self.x * other.x, self.y * other.y)
    }
}

/// Scale by a scalar.
impl std::ops::Mul<f32> for Vec2D {
    type Output = Vec2D;

    fn mul(self, scale: f32) -> Vec2D {
        Vec2D::new(self.x * scale, self.y * scale)
    }
}

impl std::ops::Div<f32> for Vec2D {
    type Output = Vec2D;

    fn div(self, scale: f32) -> Vec2D {
        Vec2D::new(self.x / scale, self.y / scale)
    }
}

impl From<Size> for Vec2D {
    fn from(size: Size) -> Vec2D {
        Vec2D::new(size.width as f32, size.height as f32)
    }
}

impl Point {
    /// Create a new point.
    pub const fn new(x: isize, y: isize) -> Point {
        Point { x, y }
    }
}

impl std::ops::Add for Point {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

/// Rounds toward negative infinity, so a sprite half a pixel off the left edge starts at -1.
impl From<Vec2D> for Point {
    fn from(v: Vec2D) -> Point {
        Point::new(v.x.floor() as isize, v.y.floor() as isize)
    }
}

impl From<Size> for Point {
    fn from(size: Size) -> Point {
        Point::new(size.width as isize, size.height as isize)
    }
}

impl Size {
    /// Create a new size.
    pub const fn new(width: usize, height: usize) -> Size {
        Size { width, height }
    }

    /// The number of bytes in an RGBA frame of this size.
    pub const fn frame_len(&self) -> usize {
        self.width * self.height * 4
    }
}
