//! The bounded board and the rule engine that advances it.

use crate::cell::{AnimPhase, Cell, LifeState};
use rand::Rng;
use rayon::prelude::*;

/// How many ticks the birth and death colours linger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimFrames {
    pub born: u8,
    pub dying: u8,
}

impl Default for AnimFrames {
    fn default() -> Self {
        AnimFrames { born: 2, dying: 2 }
    }
}

/// Counters accumulated by the rule engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    /// Number of generations computed so far
    pub generation: u64,
    /// Total number of cells born since start
    pub births: u64,
    /// Total number of cells that died since start
    pub deaths: u64,
}

/// Which of the four rule cases applies to a cell in one generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Alive with two or three neighbours.
    Survive,
    /// Empty with exactly three neighbours.
    Birth,
    /// Alive with fewer than two or more than three neighbours.
    Death,
    /// Empty with any count other than three. A dying cell keeps fading.
    Stay,
}

impl Transition {
    /// Classifies a cell according to Conway's rules:
    ///
    /// * Any live cell with two or three live neighbours survives
    /// * Any empty cell with exactly three live neighbours becomes alive
    /// * Any other live cell dies
    /// * Any other empty cell stays empty
    pub fn classify(life: LifeState, neighbors: u8) -> Self {
        match (life, neighbors) {
            (LifeState::Alive, 2) | (LifeState::Alive, 3) => Transition::Survive,
            (LifeState::Alive, _) => Transition::Death,
            (LifeState::Empty, 3) => Transition::Birth,
            (LifeState::Empty, _) => Transition::Stay,
        }
    }

    /// The cell that replaces `current` after this transition.
    pub fn apply(self, current: Cell, frames: AnimFrames) -> Cell {
        match self {
            Transition::Survive => Cell::alive(),
            Transition::Birth => Cell::born(frames.born),
            Transition::Death => Cell::dying(frames.dying),
            Transition::Stay if current.phase() == AnimPhase::Dying => current,
            Transition::Stay => Cell::empty(),
        }
    }
}

/// A fixed-size grid of cells with no wraparound.
///
/// Generations are computed into a scratch grid from a frozen view of the
/// current one, then the two are swapped.
#[derive(Debug, Clone)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    scratch: Vec<Cell>,
    frames: AnimFrames,
    stats: Stats,
}

impl Board {
    /// Creates an empty board.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero.
    pub fn new(width: usize, height: usize) -> Board {
        assert!(width > 0 && height > 0, "board must not be empty");
        Board {
            width,
            height,
            cells: vec![Cell::empty(); width * height],
            scratch: vec![Cell::empty(); width * height],
            frames: AnimFrames::default(),
            stats: Stats::default(),
        }
    }

    /// Creates a board where every cell is independently alive.
    ///
    /// # Arguments
    ///
    /// * `width` - The width of the board
    /// * `height` - The height of the board
    /// * `density` - Probability that a cell starts alive, in `[0, 1]`
    /// * `rng` - Source of randomness
    ///
    /// # Returns
    ///
    /// A new `Board` with zeroed counters; initial live cells are not counted
    /// as births.
    pub fn random<R: Rng + ?Sized>(width: usize, height: usize, density: f64, rng: &mut R) -> Board {
        let mut board = Board::new(width, height);
        for cell in board.cells.iter_mut() {
            if rng.gen_bool(density) {
                *cell = Cell::alive();
            }
        }
        board
    }

    /// Creates a board with the listed coordinates alive. Off-grid
    /// coordinates are ignored.
    pub fn from_pattern<I>(width: usize, height: usize, alive: I) -> Board
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut board = Board::new(width, height);
        for (x, y) in alive {
            board.set(x, y, Cell::alive());
        }
        board
    }

    /// Sets the animation lengths used for future births and deaths.
    pub fn with_frames(mut self, frames: AnimFrames) -> Board {
        self.frames = frames;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn frames(&self) -> AnimFrames {
        self.frames
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Returns the cell at `(x, y)`, or an empty cell off the board.
    pub fn get(&self, x: usize, y: usize) -> Cell {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x]
        } else {
            Cell::empty()
        }
    }

    /// Replaces the cell at `(x, y)`. Off-grid writes are ignored.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = cell;
        }
    }

    /// Iterates over rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width)
    }

    /// Counts the cells that are currently alive.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Counts the live neighbours of a cell in its Moore neighbourhood.
    ///
    /// Positions beyond the edges count as empty.
    ///
    /// # Returns
    ///
    /// The number of live neighbours (0-8)
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        live_neighbors(&self.cells, self.width, self.height, x, y)
    }

    /// Advances the board by one generation and updates the counters.
    ///
    /// Every neighbour count is taken from the generation being replaced, so
    /// the order in which cells are visited does not matter. Rows are
    /// computed in parallel.
    pub fn advance(&mut self) {
        let Board {
            width,
            height,
            cells,
            scratch,
            frames,
            stats,
        } = self;
        let (width, height, frames) = (*width, *height, *frames);
        let snapshot: &[Cell] = &cells[..];

        let (births, deaths) = scratch
            .par_chunks_mut(width)
            .enumerate()
            .map(|(y, row)| {
                let mut births = 0u64;
                let mut deaths = 0u64;
                for (x, next) in row.iter_mut().enumerate() {
                    let current = snapshot[y * width + x];
                    let neighbors = live_neighbors(snapshot, width, height, x, y);
                    let transition = Transition::classify(current.life(), neighbors);
                    match transition {
                        Transition::Birth => births += 1,
                        Transition::Death => deaths += 1,
                        Transition::Survive | Transition::Stay => {}
                    }
                    *next = transition.apply(current, frames);
                }
                (births, deaths)
            })
            .reduce(|| (0, 0), |a, b| (a.0 + b.0, a.1 + b.1));

        std::mem::swap(cells, scratch);
        stats.births += births;
        stats.deaths += deaths;
        stats.generation += 1;
    }

    /// Runs one animation tick on every cell.
    pub fn decay_animation(&mut self) {
        self.cells.iter_mut().for_each(Cell::decay);
    }
}

fn live_neighbors(cells: &[Cell], width: usize, height: usize, x: usize, y: usize) -> u8 {
    let mut count = 0;
    for dy in -1..=1isize {
        for dx in -1..=1isize {
            if dx == 0 && dy == 0 {
                continue;
            }
            let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy)) else {
                continue;
            };
            if nx < width && ny < height && cells[ny * width + nx].is_alive() {
                count += 1;
            }
        }
    }
    count
}
