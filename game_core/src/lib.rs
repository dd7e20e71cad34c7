pub mod components;
pub mod config;
pub mod game;
pub mod input;
pub mod map;
pub mod params;
pub mod resources;
pub mod scheduler;
pub mod surface;
pub mod systems;

pub use components::*;
pub use config::*;
pub use game::*;
pub use input::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use scheduler::*;
pub use surface::*;

use glam::IVec2;
use systems::*;

/// Advance the ball by one tick and commit its new box to the surface
#[allow(clippy::too_many_arguments)]
pub fn step<S: RenderSurface>(
    surface: &mut S,
    paddles: &[Paddle<S::Handle>; 2],
    ball: &mut Ball<S::Handle>,
    field: &Playfield,
    config: &Config,
    rng: &mut impl SignSource,
    events: &mut Events,
) -> Result<(), SurfaceError> {
    // Clear events at start of tick
    events.clear();

    let current = surface.coords(ball.handle)?;
    let origin = current.min;
    let ball_width = current.width();

    // 1. Candidate position
    let mut candidate = origin + ball.vel;

    // 2. Bounce off top and bottom
    events.ball_hit_wall =
        bounce_off_walls(origin, &mut candidate, &mut ball.vel, field, config.ball_size);

    // 3. Bounce off paddles (tested against their current boxes)
    let paddle_boxes = [
        surface.coords(paddles[0].handle)?,
        surface.coords(paddles[1].handle)?,
    ];
    events.ball_hit_paddle = bounce_off_paddles(
        origin,
        &mut candidate,
        &mut ball.vel,
        IVec2::new(ball_width, config.ball_size),
        &paddle_boxes,
    );

    // 4. Serve again if the ball left the field
    events.ball_exited = check_out_of_bounds(
        &mut candidate,
        &mut ball.vel,
        ball_width,
        field,
        config,
        rng,
    );

    // 5. Commit
    surface.set_coords(
        ball.handle,
        Aabb::from_origin_size(candidate, IVec2::new(ball_width, config.ball_size)),
    )
}

/// Helper to create a paddle shape at its starting position
pub fn create_paddle<S: RenderSurface>(
    surface: &mut S,
    side: Side,
    field: &Playfield,
    config: &Config,
) -> Paddle<S::Handle> {
    let origin = field.paddle_spawn(side, config);
    let bounds = Aabb::from_origin_size(
        origin,
        IVec2::new(config.paddle_width, config.paddle_height),
    );
    let handle = surface.create_shape(Shape::Rectangle, bounds, side.color());
    Paddle::new(side, handle)
}

/// Helper to create the ball shape at the centre of the field
pub fn create_ball<S: RenderSurface>(
    surface: &mut S,
    field: &Playfield,
    config: &Config,
    vel: IVec2,
) -> Ball<S::Handle> {
    let origin = field.ball_spawn(config.ball_size);
    let bounds = Aabb::from_origin_size(origin, IVec2::splat(config.ball_size));
    let handle = surface.create_shape(Shape::Ellipse, bounds, Color::White);
    Ball::new(handle, vel)
}
