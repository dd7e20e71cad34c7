use glam::IVec2;
use tracing::debug;

use crate::{Config, Playfield, Side, SignSource};

/// Fresh serve velocity: fixed speed on both axes, each with a random sign
pub fn serve_velocity(config: &Config, rng: &mut impl SignSource) -> IVec2 {
    let dx = config.serve_speed * rng.next_sign();
    let dy = config.serve_speed * rng.next_sign();
    IVec2::new(dx, dy)
}

/// Which side wall a candidate left edge has reached, if any
pub fn exit_side(x: i32, ball_width: i32, field: &Playfield) -> Option<Side> {
    if x <= 0 {
        Some(Side::Left)
    } else if x >= field.width - ball_width {
        Some(Side::Right)
    } else {
        None
    }
}

/// Re-serve from the centre if the ball left the field horizontally
pub fn check_out_of_bounds(
    candidate: &mut IVec2,
    vel: &mut IVec2,
    ball_width: i32,
    field: &Playfield,
    config: &Config,
    rng: &mut impl SignSource,
) -> Option<Side> {
    let side = exit_side(candidate.x, ball_width, field)?;

    *candidate = field.ball_spawn(config.ball_size);
    *vel = serve_velocity(config, rng);
    debug!(?side, dx = vel.x, dy = vel.y, "ball left the field, serving");
    Some(side)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    struct ScriptedSigns(VecDeque<i32>);

    impl SignSource for ScriptedSigns {
        fn next_sign(&mut self) -> i32 {
            self.0.pop_front().unwrap_or(1)
        }
    }

    fn field() -> Playfield {
        Playfield::new(800, 600, 40)
    }

    #[test]
    fn test_serve_velocity_uses_signs_in_order() {
        let config = Config::new();
        let mut signs = ScriptedSigns(VecDeque::from([-1, 1]));
        assert_eq!(serve_velocity(&config, &mut signs), IVec2::new(-5, 5));
    }

    #[test]
    fn test_exit_side() {
        let field = field();
        assert_eq!(exit_side(0, 20, &field), Some(Side::Left));
        assert_eq!(exit_side(-3, 20, &field), Some(Side::Left));
        assert_eq!(exit_side(780, 20, &field), Some(Side::Right));
        assert_eq!(exit_side(1, 20, &field), None);
        assert_eq!(exit_side(779, 20, &field), None);
    }

    #[test]
    fn test_ball_resets_after_leaving_right() {
        let field = field();
        let config = Config::new();
        let mut signs = ScriptedSigns(VecDeque::from([-1, -1]));
        let mut candidate = IVec2::new(783, 300);
        let mut vel = IVec2::new(5, 5);

        let side = check_out_of_bounds(&mut candidate, &mut vel, 20, &field, &config, &mut signs);

        assert_eq!(side, Some(Side::Right));
        assert_eq!(candidate, IVec2::new(390, 290), "Ball should reset to center");
        assert_eq!(vel, IVec2::new(-5, -5));
    }

    #[test]
    fn test_no_reset_when_ball_in_bounds() {
        let field = field();
        let config = Config::new();
        let mut signs = ScriptedSigns(VecDeque::new());
        let mut candidate = IVec2::new(400, 300);
        let mut vel = IVec2::new(5, 5);

        let side = check_out_of_bounds(&mut candidate, &mut vel, 20, &field, &config, &mut signs);

        assert_eq!(side, None);
        assert_eq!(candidate, IVec2::new(400, 300));
        assert_eq!(vel, IVec2::new(5, 5));
    }
}
