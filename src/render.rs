//! Painting the board onto a character grid.

use crate::{
    board::{Board, Stats},
    cell::AnimPhase,
};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
    Terminal,
};
use std::io;

const TITLE: &str = "GAME OF LIFE";
const LEGEND: &str = "Red: Birth  Green: Alive  Yellow: Dying";
const BACKGROUND: Color = Color::Black;
const TEXT: Color = Color::Yellow;
const HEADER_ROWS: u16 = 3;

/// A grid of coloured character cells that is shown on `flush`.
pub trait Canvas {
    /// Fills the whole canvas with blanks on `bg`.
    fn clear(&mut self, bg: Color);
    /// Sets one character cell. Cells outside the canvas are ignored.
    fn set_cell(&mut self, x: u16, y: u16, glyph: char, fg: Color, bg: Color);
    /// Presents everything drawn since the last flush.
    fn flush(&mut self) -> io::Result<()>;
}

/// Colour of a cell in the given phase.
pub fn phase_color(phase: AnimPhase) -> Color {
    match phase {
        AnimPhase::Empty => Color::Blue,
        AnimPhase::Alive => Color::Green,
        AnimPhase::Born => Color::Red,
        AnimPhase::Dying => Color::Yellow,
    }
}

/// Where things go on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    /// Columns per board cell
    pub cell_width: u16,
    /// Blank columns left of the board
    pub margin_x: u16,
    /// Blank rows above the header
    pub margin_y: u16,
}

impl Default for Geometry {
    fn default() -> Self {
        Geometry {
            cell_width: 2,
            margin_x: 2,
            margin_y: 0,
        }
    }
}

impl Geometry {
    pub fn with_cell_width(cell_width: u16) -> Self {
        Geometry {
            cell_width,
            ..Geometry::default()
        }
    }

    /// Row of the given header line.
    pub fn header_row(&self, line: u16) -> u16 {
        self.margin_y.saturating_add(line)
    }

    /// Top-left corner of the board, right below the header.
    pub fn origin(&self) -> (u16, u16) {
        (self.margin_x, self.header_row(HEADER_ROWS))
    }

    /// Column and row of the first character of board cell `(x, y)`.
    pub fn cell_position(&self, x: usize, y: usize) -> Option<(u16, u16)> {
        let (ox, oy) = self.origin();
        let px = x.checked_mul(self.cell_width as usize)?.checked_add(ox as usize)?;
        let py = y.checked_add(oy as usize)?;
        Some((u16::try_from(px).ok()?, u16::try_from(py).ok()?))
    }

    fn board_columns(&self, board: &Board) -> usize {
        board.width().saturating_mul(self.cell_width as usize)
    }
}

/// The counter line shown above the board.
pub fn status_line(stats: &Stats) -> String {
    format!(
        "Generation: {} Births: {} Deaths: {}",
        stats.generation, stats.births, stats.deaths
    )
}

/// Draws the header and every board cell, then flushes the canvas.
pub fn paint<C: Canvas + ?Sized>(canvas: &mut C, board: &Board, geometry: &Geometry) -> io::Result<()> {
    canvas.clear(BACKGROUND);

    let columns = geometry.board_columns(board);
    print_centered(canvas, geometry, columns, 0, TITLE);
    print_centered(canvas, geometry, columns, 1, LEGEND);
    print_centered(canvas, geometry, columns, 2, &status_line(&board.stats()));

    for (y, row) in board.rows().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            let Some((px, py)) = geometry.cell_position(x, y) else {
                continue;
            };
            let color = phase_color(cell.phase());
            for i in 0..geometry.cell_width {
                canvas.set_cell(px.saturating_add(i), py, ' ', color, color);
            }
        }
    }

    canvas.flush()
}

fn print_centered<C: Canvas + ?Sized>(canvas: &mut C, geometry: &Geometry, columns: usize, row: u16, text: &str) {
    let len = text.chars().count();
    let offset = columns.saturating_sub(len) / 2;
    let start = (geometry.margin_x as usize).saturating_add(offset);
    let y = geometry.header_row(row);
    for (i, c) in text.chars().enumerate() {
        if let Ok(x) = u16::try_from(start + i) {
            canvas.set_cell(x, y, c, TEXT, BACKGROUND);
        }
    }
}

/// A [`Canvas`] backed by a ratatui terminal.
///
/// Drawing goes into an off-screen buffer the size of the terminal, which is
/// handed to the terminal as one widget on `flush`.
pub struct TerminalCanvas<B: Backend> {
    terminal: Terminal<B>,
    buffer: Buffer,
}

impl<B: Backend> TerminalCanvas<B> {
    pub fn new(terminal: Terminal<B>) -> io::Result<Self> {
        let area = terminal.size()?;
        Ok(TerminalCanvas {
            terminal,
            buffer: Buffer::empty(area),
        })
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

impl<B: Backend> Canvas for TerminalCanvas<B> {
    fn clear(&mut self, bg: Color) {
        self.buffer.reset();
        let area = self.buffer.area;
        self.buffer.set_style(area, Style::default().bg(bg));
    }

    fn set_cell(&mut self, x: u16, y: u16, glyph: char, fg: Color, bg: Color) {
        let area = self.buffer.area;
        if x < area.left() || x >= area.right() || y < area.top() || y >= area.bottom() {
            return;
        }
        self.buffer.get_mut(x, y).set_char(glyph).set_fg(fg).set_bg(bg);
    }

    fn flush(&mut self) -> io::Result<()> {
        let snapshot = Snapshot(&self.buffer);
        self.terminal.draw(|f| {
            let area = f.size();
            f.render_widget(snapshot, area);
        })?;

        // Follow terminal resizes from the next frame on.
        let size = self.terminal.size()?;
        if size != self.buffer.area {
            self.buffer.resize(size);
        }
        Ok(())
    }
}

/// Copies a prepared buffer into the terminal's frame.
struct Snapshot<'a>(&'a Buffer);

impl Widget for Snapshot<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let source = self.0.area.intersection(area);
        for y in source.top()..source.bottom() {
            for x in source.left()..source.right() {
                *buf.get_mut(x, y) = self.0.get(x, y).clone();
            }
        }
    }
}
