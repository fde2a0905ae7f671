/// Player control inputs.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Controls {
    /// Move the player sideways.
    pub horizontal: Horizontal,
    /// Move the player up or down the screen.
    pub vertical: Vertical,
}

/// Horizontal movement. Opposing keys cancel out.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Horizontal {
    /// Do not move the player.
    #[default]
    Still,
    /// Move to the left.
    Left,
    /// Move to the right.
    Right,
}

/// Vertical movement. Opposing keys cancel out.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Vertical {
    /// Do not move the player.
    #[default]
    Still,
    /// Move toward the top of the screen.
    Up,
    /// Move toward the bottom of the screen.
    Down,
}

impl Controls {
    /// Build controls from the held state of each direction key.
    pub fn from_keys(left: bool, right: bool, up: bool, down: bool) -> Controls {
        Controls {
            horizontal: Horizontal::from_keys(left, right),
            vertical: Vertical::from_keys(up, down),
        }
    }
}

impl Horizontal {
    pub fn from_keys(left: bool, right: bool) -> Horizontal {
        match (left, right) {
            (true, false) => Horizontal::Left,
            (false, true) => Horizontal::Right,
            _ => Horizontal::Still,
        }
    }

    /// Signed velocity along the x axis.
    pub(crate) fn velocity(self, speed: f32) -> f32 {
        match self {
            Horizontal::Still => 0.0,
            Horizontal::Left => -speed,
            Horizontal::Right => speed,
        }
    }
}

impl Vertical {
    pub fn from_keys(up: bool, down: bool) -> Vertical {
        match (up, down) {
            (true, false) => Vertical::Up,
            (false, true) => Vertical::Down,
            _ => Vertical::Still,
        }
    }

    /// Signed velocity along the y axis; screen y grows downward.
    pub(crate) fn velocity(self, speed: f32) -> f32 {
        match self {
            Vertical::Still => 0.0,
            Vertical::Up => -speed,
            Vertical::Down => speed,
        }
    }
}
