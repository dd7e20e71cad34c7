use glam::IVec2;

/// Which side of the field a paddle guards (also used for the wall a ball left through)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn color(self) -> Color {
        match self {
            Side::Left => Color::Red,
            Side::Right => Color::Blue,
        }
    }
}

/// Paddle movement direction on a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Sign of the vertical shift (screen y grows downwards)
    pub fn sign(self) -> i32 {
        match self {
            Direction::Up => -1,
            Direction::Down => 1,
        }
    }
}

/// Primitive shapes a render surface must be able to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Rectangle,
    Ellipse,
}

/// Fill colours used by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Red,
    Blue,
}

/// Paddle component - a handle to the paddle's shape on the surface
#[derive(Debug, Clone, Copy)]
pub struct Paddle<H> {
    pub side: Side,
    pub handle: H,
}

impl<H> Paddle<H> {
    pub fn new(side: Side, handle: H) -> Self {
        Self { side, handle }
    }
}

/// Ball component - owns the velocity, position lives on the surface
#[derive(Debug, Clone, Copy)]
pub struct Ball<H> {
    pub handle: H,
    pub vel: IVec2,
}

impl<H> Ball<H> {
    pub fn new(handle: H, vel: IVec2) -> Self {
        Self { handle, vel }
    }
}
