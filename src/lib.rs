//! # Animated Life
//!
//! Conway's Game of Life on a bounded board, drawn in the terminal with
//! `ratatui` and `crossterm`.
//!
//! ## Features
//!
//! * Double-buffered generation updates, computed row-parallel with `rayon`
//! * Birth and death animations that fade over a few ticks
//! * Running counters for generations, births and deaths
//! * Settings from a TOML file and the command line
//! * Bounded grid: cells beyond the edges are always empty

pub mod board;
pub mod cell;
pub mod config;
pub mod error;
pub mod input;
pub mod render;
pub mod sim;
pub mod terminal;

pub use board::{AnimFrames, Board, Stats, Transition};
pub use cell::{AnimPhase, Cell, LifeState};
pub use config::{Args, Config};
pub use error::{Error, Result};
pub use input::{InputEvent, InputSource, Key};
pub use render::{paint, Canvas, Geometry, TerminalCanvas};
pub use sim::{LoopState, Simulation};
pub use terminal::TerminalSession;
