//! Single-threaded dispatch loop: key presses and ticks interleave in arrival order

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event};
use game_core::{Game, Scene, SignSource, Ticker};
use tracing::info;

use crate::error::HostError;
use crate::keys::{translate, HostCommand};
use crate::render::{draw, floor_row, Frame};

const HEADER: &str = " PONG   left: w / s   right: Up / Down   quit: q";

/// Where terminal events come from
pub trait EventSource {
    /// Wait up to `timeout` for the next event
    fn next_event(&mut self, timeout: Duration) -> io::Result<Option<Event>>;
}

pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn next_event(&mut self, timeout: Duration) -> io::Result<Option<Event>> {
        if event::poll(timeout)? {
            event::read().map(Some)
        } else {
            Ok(None)
        }
    }
}

pub trait Clock {
    fn now(&self) -> Instant;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App<R> {
    game: Game<Scene, R>,
    cols: u16,
    rows: u16,
}

impl<R: SignSource> App<R> {
    pub fn new(game: Game<Scene, R>, cols: u16, rows: u16) -> Self {
        Self { game, cols, rows }
    }

    /// Run until the player quits
    pub fn run<W, E, C>(&mut self, out: &mut W, events: &mut E, clock: &C) -> Result<(), HostError>
    where
        W: Write,
        E: EventSource,
        C: Clock,
    {
        let mut ticker = Ticker::new(self.game.config().tick_interval, clock.now());
        self.render(out)?;

        while self.dispatch(out, events, clock, &mut ticker)? == Flow::Continue {}

        info!(ticks = self.game.ticks(), "game over");
        Ok(())
    }

    /// Handle at most one event, then tick if the deadline has passed
    pub fn dispatch<W, E, C>(
        &mut self,
        out: &mut W,
        events: &mut E,
        clock: &C,
        ticker: &mut Ticker,
    ) -> Result<Flow, HostError>
    where
        W: Write,
        E: EventSource,
        C: Clock,
    {
        // Resizes are ignored: the field is fixed for the session
        if let Some(Event::Key(key)) = events.next_event(ticker.timeout(clock.now()))? {
            match translate(&key) {
                Some(HostCommand::Quit) => return Ok(Flow::Quit),
                Some(HostCommand::Key(name)) => {
                    self.game.press_key(&name)?;
                }
                None => {}
            }
        }

        if ticker.is_due(clock.now()) {
            self.game.tick()?;
            self.render(out)?;
            ticker.rearm(clock.now());
        }
        Ok(Flow::Continue)
    }

    fn render<W: Write>(&self, out: &mut W) -> Result<(), HostError> {
        let frame = Frame::from_scene(self.game.surface(), self.cols, self.rows);
        draw(out, &frame, HEADER, floor_row(self.game.field(), self.rows))?;
        Ok(())
    }
}
