use std::{
    sync::mpsc,
    thread,
    time::Duration,
};

use animated_life::{
    AnimFrames, AnimPhase, Board, Canvas, Cell, Geometry, InputEvent, InputSource, Key, LoopState,
    Simulation, Stats, TerminalCanvas,
};
use rand::{rngs::StdRng, SeedableRng};
use ratatui::{backend::TestBackend, style::Color, Terminal};

/// Reports a quit key on the given poll, nothing before it.
struct QuitAfter {
    polls: usize,
    quit_on: usize,
}

impl QuitAfter {
    fn new(quit_on: usize) -> Self {
        QuitAfter { polls: 0, quit_on }
    }
}

impl InputSource for QuitAfter {
    fn poll_event(&mut self) -> Option<InputEvent> {
        self.polls += 1;
        (self.polls == self.quit_on).then_some(InputEvent::Key(Key::Esc))
    }
}

#[derive(Default)]
struct Frames {
    flushes: usize,
}

impl Canvas for Frames {
    fn clear(&mut self, _bg: Color) {}

    fn set_cell(&mut self, _x: u16, _y: u16, _glyph: char, _fg: Color, _bg: Color) {}

    fn flush(&mut self) -> std::io::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}

fn alive(board: &Board) -> Vec<(usize, usize)> {
    board
        .rows()
        .enumerate()
        .flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, cell)| cell.is_alive())
                .map(move |(x, _)| (x, y))
        })
        .collect()
}

#[test]
fn runs_one_generation_per_tick_until_quit() {
    let board = Board::random(40, 40, 0.12, &mut StdRng::seed_from_u64(2015));
    let mut sim = Simulation::new(board, Frames::default(), QuitAfter::new(6), Geometry::default(), Duration::ZERO);

    let stats = sim.run().unwrap();
    assert_eq!(stats.generation, 5);
    assert_eq!(sim.state(), LoopState::Stopped);
    assert_eq!(sim.canvas().flushes, 6);
}

#[test]
fn loop_matches_manual_advance_and_decay() {
    let board = Board::random(30, 20, 0.3, &mut StdRng::seed_from_u64(99))
        .with_frames(AnimFrames { born: 4, dying: 3 });
    let mut expected = board.clone();
    let mut sim = Simulation::new(board, Frames::default(), QuitAfter::new(9), Geometry::default(), Duration::ZERO);
    sim.run().unwrap();

    for _ in 0..8 {
        expected.advance();
        expected.decay_animation();
    }
    assert_eq!(sim.board().stats(), expected.stats());
    assert_eq!(
        sim.board().rows().collect::<Vec<_>>(),
        expected.rows().collect::<Vec<_>>()
    );
}

#[test]
fn blinker_keeps_oscillating_through_the_loop() {
    let horizontal = vec![(19, 20), (20, 20), (21, 20)];
    let vertical = vec![(20, 19), (20, 20), (20, 21)];
    let board = Board::from_pattern(40, 40, horizontal.clone());
    let (sender, receiver) = mpsc::channel();
    let mut sim = Simulation::new(board, Frames::default(), receiver, Geometry::default(), Duration::ZERO);

    for generation in 1..=6u64 {
        assert_eq!(sim.tick().unwrap(), LoopState::Running);
        let expected = if generation % 2 == 1 { &vertical } else { &horizontal };
        assert_eq!(&alive(sim.board()), expected);
    }
    assert_eq!(
        sim.board().stats(),
        Stats {
            generation: 6,
            births: 12,
            deaths: 12
        }
    );

    sender.send(InputEvent::Key(Key::Char('q'))).unwrap();
    assert_eq!(sim.tick().unwrap(), LoopState::Stopped);
    assert_eq!(sim.board().stats().generation, 6);
}

#[test]
fn disconnected_input_does_not_stop_the_loop() {
    let (sender, receiver) = mpsc::channel::<InputEvent>();
    drop(sender);
    let mut sim = Simulation::new(Board::new(4, 4), Frames::default(), receiver, Geometry::default(), Duration::ZERO);

    for _ in 0..3 {
        assert_eq!(sim.tick().unwrap(), LoopState::Running);
    }
    assert_eq!(sim.board().stats().generation, 3);
}

#[test]
fn quit_from_another_thread_is_seen_on_the_next_tick() {
    let (sender, receiver) = mpsc::channel();
    let producer = thread::spawn(move || {
        sender.send(InputEvent::Other).unwrap();
        sender.send(InputEvent::Key(Key::CtrlC)).unwrap();
    });
    producer.join().unwrap();

    let mut sim = Simulation::new(Board::new(4, 4), Frames::default(), receiver, Geometry::default(), Duration::ZERO);
    assert_eq!(sim.run().unwrap().generation, 0);
}

#[test]
fn terminal_shows_born_and_dying_colors() {
    let board = Board::from_pattern(40, 40, [(19, 20), (20, 20), (21, 20)]);
    let terminal = Terminal::new(TestBackend::new(84, 44)).unwrap();
    let canvas = TerminalCanvas::new(terminal).unwrap();
    let mut sim = Simulation::new(board, canvas, QuitAfter::new(2), Geometry::default(), Duration::ZERO);
    sim.run().unwrap();

    assert_eq!(sim.board().get(20, 19).phase(), AnimPhase::Born);
    assert_eq!(sim.board().get(19, 20).phase(), AnimPhase::Dying);
    assert_eq!(sim.board().get(20, 20), Cell::alive());

    let geometry = Geometry::default();
    let buffer = sim.canvas().terminal().backend().buffer();
    let color_at = |x: usize, y: usize| {
        let (px, py) = geometry.cell_position(x, y).unwrap();
        buffer.get(px, py).bg
    };
    assert_eq!(color_at(20, 19), Color::Red);
    assert_eq!(color_at(19, 20), Color::Yellow);
    assert_eq!(color_at(20, 20), Color::Green);
    assert_eq!(color_at(0, 0), Color::Blue);
}
