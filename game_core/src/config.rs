use std::time::Duration;

use crate::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub paddle_width: i32,
    pub paddle_height: i32,
    pub paddle_step: i32,
    pub paddle_margin: i32,
    pub ball_size: i32,
    pub serve_speed: i32,
    pub tick_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_step: Params::PADDLE_STEP,
            paddle_margin: Params::PADDLE_MARGIN,
            ball_size: Params::BALL_SIZE,
            serve_speed: Params::SERVE_SPEED,
            tick_interval: Duration::from_millis(Params::TICK_MS),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Left edge of a paddle, mirrored around the field for the right side
    pub fn paddle_x(&self, side: crate::Side, field_width: i32) -> i32 {
        match side {
            crate::Side::Left => self.paddle_margin,
            crate::Side::Right => field_width - self.paddle_margin - self.paddle_width,
        }
    }
}
