use glam::IVec2;
use tracing::debug;

use crate::{Aabb, Playfield};

/// Reflect off the ceiling or floor.
///
/// The candidate top is recomputed from `origin` with the flipped velocity
/// (a single reflection step). Returns whether the ball bounced.
pub fn bounce_off_walls(
    origin: IVec2,
    candidate: &mut IVec2,
    vel: &mut IVec2,
    field: &Playfield,
    ball_size: i32,
) -> bool {
    if candidate.y <= field.top_offset || candidate.y >= field.height - ball_size {
        vel.y = -vel.y;
        candidate.y = origin.y + vel.y;
        debug!(y = candidate.y, dy = vel.y, "ball bounced off wall");
        true
    } else {
        false
    }
}

/// Reverse horizontally when the candidate box overlaps any paddle.
///
/// The ball is nudged two steps from `origin` so it clears the paddle
/// instead of sticking to its edge. Returns whether a paddle was hit.
pub fn bounce_off_paddles(
    origin: IVec2,
    candidate: &mut IVec2,
    vel: &mut IVec2,
    ball_size: IVec2,
    paddles: &[Aabb],
) -> bool {
    let ball = Aabb::from_origin_size(*candidate, ball_size);
    if paddles.iter().any(|paddle| ball.overlaps(paddle)) {
        vel.x = -vel.x;
        candidate.x = origin.x + vel.x * 2;
        debug!(x = candidate.x, dx = vel.x, "ball bounced off paddle");
        true
    } else {
        false
    }
}
