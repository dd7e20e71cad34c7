/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield
    pub const CEILING_OFFSET: i32 = 40; // Reserved for host UI chrome
    pub const DISPLAY_HEIGHT_RESERVE: i32 = 200;

    // Paddle
    pub const PADDLE_WIDTH: i32 = 20;
    pub const PADDLE_HEIGHT: i32 = 100;
    pub const PADDLE_STEP: i32 = 20; // units per key press
    pub const PADDLE_MARGIN: i32 = 50; // distance from the side walls

    // Ball
    pub const BALL_SIZE: i32 = 20;
    pub const SERVE_SPEED: i32 = 5; // units per tick on each axis

    // Loop
    pub const TICK_MS: u64 = 15;
}
