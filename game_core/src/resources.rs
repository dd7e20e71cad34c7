use rand::Rng;

use crate::Side;

/// Source of serve directions: each call yields +1 or -1
pub trait SignSource {
    fn next_sign(&mut self) -> i32;
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

impl SignSource for GameRng {
    fn next_sign(&mut self) -> i32 {
        if self.0.gen_bool(0.5) {
            1
        } else {
            -1
        }
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub ball_hit_paddle: bool,
    pub ball_exited: Option<Side>, // wall the ball left through before the serve
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_wall = false;
        self.ball_hit_paddle = false;
        self.ball_exited = None;
    }
}
