use glam::IVec2;

use crate::{Config, Params};

/// Axis-aligned bounding box in field units (min = top-left, max = bottom-right)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Aabb {
    pub min: IVec2,
    pub max: IVec2,
}

impl Aabb {
    pub fn new(min: IVec2, max: IVec2) -> Self {
        Self { min, max }
    }

    pub fn from_origin_size(origin: IVec2, size: IVec2) -> Self {
        Self {
            min: origin,
            max: origin + size,
        }
    }

    pub fn width(&self) -> i32 {
        self.max.x - self.min.x
    }

    pub fn size(&self) -> IVec2 {
        self.max - self.min
    }

    /// Strict overlap test: boxes that only share an edge do not overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Playfield bounds, fixed for the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playfield {
    pub width: i32,
    pub height: i32,
    pub top_offset: i32,
}

impl Playfield {
    pub fn new(width: i32, height: i32, top_offset: i32) -> Self {
        Self {
            width,
            height,
            top_offset,
        }
    }

    /// Derive the field from the host display, leaving room at the bottom
    pub fn from_display(display_width: i32, display_height: i32) -> Self {
        Self::new(
            display_width,
            display_height - Params::DISPLAY_HEIGHT_RESERVE,
            Params::CEILING_OFFSET,
        )
    }

    /// Clamp a paddle's top edge to the field
    pub fn clamp_paddle_y(&self, y: i32, paddle_height: i32) -> i32 {
        // Ceiling wins on a field shorter than the paddle
        y.min(self.height - paddle_height).max(self.top_offset)
    }

    /// Top-left corner of a freshly served ball
    pub fn ball_spawn(&self, ball_size: i32) -> IVec2 {
        IVec2::new(
            self.width / 2 - ball_size / 2,
            self.height / 2 - ball_size / 2,
        )
    }

    /// Top-left corner of a paddle at startup
    pub fn paddle_spawn(&self, side: crate::Side, config: &Config) -> IVec2 {
        IVec2::new(
            config.paddle_x(side, self.width),
            self.height / 2 - config.paddle_height / 2,
        )
    }

    /// Whether both paddles and the ball fit without overlapping at spawn
    pub fn fits(&self, config: &Config) -> bool {
        let left_edge = config.paddle_x(crate::Side::Left, self.width) + config.paddle_width;
        let right_edge = config.paddle_x(crate::Side::Right, self.width);
        let ball = self.ball_spawn(config.ball_size);
        left_edge < ball.x
            && ball.x + config.ball_size < right_edge
            && self.height - self.top_offset > config.paddle_height
    }
}
