//! A single cell: its life state plus the animation phase used to colour it.

/// Whether a cell is alive, as far as the rules are concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifeState {
    #[default]
    Empty,
    Alive,
}

/// Visual phase of a cell.
///
/// `Born` and `Dying` are transient: they overlay a life state that has
/// already been updated and fade into the matching steady phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimPhase {
    #[default]
    Empty,
    Alive,
    Born,
    Dying,
}

impl AnimPhase {
    /// Steady phase shown for a life state once any transient has worn off.
    pub fn steady(life: LifeState) -> Self {
        match life {
            LifeState::Empty => AnimPhase::Empty,
            LifeState::Alive => AnimPhase::Alive,
        }
    }

    pub fn is_transient(self) -> bool {
        matches!(self, AnimPhase::Born | AnimPhase::Dying)
    }
}

/// A cell of the board.
///
/// `ticks` is only ever non-zero while the phase is transient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    life: LifeState,
    phase: AnimPhase,
    ticks: u8,
}

impl Cell {
    /// A steady empty cell.
    pub fn empty() -> Self {
        Cell::default()
    }

    /// A steady live cell.
    pub fn alive() -> Self {
        Cell {
            life: LifeState::Alive,
            phase: AnimPhase::Alive,
            ticks: 0,
        }
    }

    /// A cell that was just born and shows the birth colour for `frames` ticks.
    pub fn born(frames: u8) -> Self {
        Cell {
            life: LifeState::Alive,
            phase: AnimPhase::Born,
            ticks: frames,
        }
    }

    /// A cell that just died and shows the dying colour for `frames` ticks.
    pub fn dying(frames: u8) -> Self {
        Cell {
            life: LifeState::Empty,
            phase: AnimPhase::Dying,
            ticks: frames,
        }
    }

    pub fn life(&self) -> LifeState {
        self.life
    }

    pub fn phase(&self) -> AnimPhase {
        self.phase
    }

    /// Animation ticks left before a transient phase resolves.
    pub fn ticks(&self) -> u8 {
        self.ticks
    }

    pub fn is_alive(&self) -> bool {
        self.life == LifeState::Alive
    }

    /// Advances the animation by one tick.
    ///
    /// The countdown is decremented first; once it is zero a `Dying` cell
    /// settles to steady empty and a `Born` cell to steady alive. Steady
    /// cells are left untouched.
    pub fn decay(&mut self) {
        debug_assert!(self.ticks == 0 || self.phase.is_transient(), "steady cell with ticks: {self:?}");
        self.ticks = self.ticks.saturating_sub(1);
        if self.ticks == 0 && self.phase.is_transient() {
            self.phase = AnimPhase::steady(self.life);
        }
    }
}
