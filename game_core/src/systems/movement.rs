use glam::IVec2;

use crate::{Aabb, Config, Direction, Paddle, Playfield, RenderSurface, SurfaceError};

/// Shift a paddle one step and clamp it to the field. Returns the new top edge.
pub fn move_paddle<S: RenderSurface>(
    surface: &mut S,
    paddle: &Paddle<S::Handle>,
    dir: Direction,
    field: &Playfield,
    config: &Config,
) -> Result<i32, SurfaceError> {
    let bounds = surface.coords(paddle.handle)?;
    let y = field.clamp_paddle_y(
        bounds.min.y + dir.sign() * config.paddle_step,
        config.paddle_height,
    );

    // Horizontal extent never changes
    let moved = Aabb::new(
        IVec2::new(bounds.min.x, y),
        IVec2::new(bounds.max.x, y + config.paddle_height),
    );
    surface.set_coords(paddle.handle, moved)?;
    Ok(y)
}
