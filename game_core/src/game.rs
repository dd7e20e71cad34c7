//! Game loop state: the two paddles, the ball and the collaborators they live on

use tracing::debug;

use crate::systems::{move_paddle, serve_velocity};
use crate::{
    binding_for, create_ball, create_paddle, step, Ball, Config, Direction, Events, Paddle,
    Playfield, RenderSurface, Side, SignSource, SurfaceError,
};

pub struct Game<S: RenderSurface, R> {
    surface: S,
    field: Playfield,
    config: Config,
    paddles: [Paddle<S::Handle>; 2],
    ball: Ball<S::Handle>,
    rng: R,
    events: Events,
    ticks: u64,
}

impl<S: RenderSurface, R: SignSource> Game<S, R> {
    /// Draw both paddles and the ball, then serve
    pub fn new(mut surface: S, field: Playfield, config: Config, mut rng: R) -> Self {
        let paddles = [
            create_paddle(&mut surface, Side::Left, &field, &config),
            create_paddle(&mut surface, Side::Right, &field, &config),
        ];
        let vel = serve_velocity(&config, &mut rng);
        let ball = create_ball(&mut surface, &field, &config, vel);

        Self {
            surface,
            field,
            config,
            paddles,
            ball,
            rng,
            events: Events::new(),
            ticks: 0,
        }
    }

    /// Run one simulation step
    pub fn tick(&mut self) -> Result<&Events, SurfaceError> {
        step(
            &mut self.surface,
            &self.paddles,
            &mut self.ball,
            &self.field,
            &self.config,
            &mut self.rng,
            &mut self.events,
        )?;
        self.ticks += 1;
        Ok(&self.events)
    }

    /// Handle a named key press. Returns whether the key was bound.
    pub fn press_key(&mut self, key: &str) -> Result<bool, SurfaceError> {
        match binding_for(key) {
            Some((side, dir)) => {
                self.move_paddle(side, dir)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn move_paddle(&mut self, side: Side, dir: Direction) -> Result<(), SurfaceError> {
        let paddle = self.paddle(side);
        let y = move_paddle(&mut self.surface, &paddle, dir, &self.field, &self.config)?;
        debug!(?side, ?dir, y, "paddle moved");
        Ok(())
    }

    pub fn paddle(&self, side: Side) -> Paddle<S::Handle> {
        match side {
            Side::Left => self.paddles[0],
            Side::Right => self.paddles[1],
        }
    }

    pub fn ball(&self) -> &Ball<S::Handle> {
        &self.ball
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn field(&self) -> &Playfield {
        &self.field
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
