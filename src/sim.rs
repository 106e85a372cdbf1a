//! The fixed-cadence loop: check for quit, advance, animate, paint, sleep.

use crate::{
    board::{Board, Stats},
    error::Result,
    input::InputSource,
    render::{paint, Canvas, Geometry},
};
use std::{thread, time::Duration};

/// Whether the loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Owns the board and drives it against a canvas and an input source.
pub struct Simulation<C, I> {
    board: Board,
    canvas: C,
    input: I,
    geometry: Geometry,
    interval: Duration,
    state: LoopState,
}

impl<C, I> Simulation<C, I>
where
    C: Canvas,
    I: InputSource,
{
    pub fn new(board: Board, canvas: C, input: I, geometry: Geometry, interval: Duration) -> Self {
        Simulation {
            board,
            canvas,
            input,
            geometry,
            interval,
            state: LoopState::Running,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Paints the board as it currently is.
    pub fn render(&mut self) -> Result<()> {
        paint(&mut self.canvas, &self.board, &self.geometry)?;
        Ok(())
    }

    /// Runs one tick without sleeping.
    ///
    /// Pending input is drained first; a quit request stops the loop before
    /// the board is touched. Otherwise the board advances one generation,
    /// every cell's animation decays once, and the result is painted.
    pub fn tick(&mut self) -> Result<LoopState> {
        if self.state == LoopState::Stopped {
            return Ok(LoopState::Stopped);
        }

        while let Some(event) = self.input.poll_event() {
            if event.is_quit() {
                log::info!("quit requested");
                self.state = LoopState::Stopped;
                return Ok(LoopState::Stopped);
            }
            log::trace!("ignoring {event:?}");
        }

        self.board.advance();
        self.board.decay_animation();
        let stats = self.board.stats();
        log::debug!(
            "generation {}: births {}, deaths {}, population {}",
            stats.generation,
            stats.births,
            stats.deaths,
            self.board.population()
        );

        self.render()?;
        Ok(LoopState::Running)
    }

    /// Paints the initial board, then ticks until asked to quit.
    ///
    /// # Returns
    ///
    /// The counters at the moment the loop stopped.
    ///
    /// # Errors
    ///
    /// Returns an error if painting fails; the loop stops at that point.
    pub fn run(&mut self) -> Result<Stats> {
        log::info!(
            "starting on a {}x{} board with {} live cells, {:?} per tick",
            self.board.width(),
            self.board.height(),
            self.board.population(),
            self.interval
        );
        self.render()?;

        while self.tick()? == LoopState::Running {
            thread::sleep(self.interval);
        }

        let stats = self.board.stats();
        log::info!(
            "stopped after {} generations ({} births, {} deaths)",
            stats.generation,
            stats.births,
            stats.deaths
        );
        Ok(stats)
    }
}
