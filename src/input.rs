//! Keyboard input, read on its own thread and handed to the simulation
//! over a channel.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::{
    sync::mpsc::{self, Receiver, Sender},
    thread::{self, JoinHandle},
};

/// Keys the simulation cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Esc,
    CtrlC,
    Char(char),
    Other,
}

/// An input event, stripped of backend details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(Key),
    Resize(u16, u16),
    Other,
}

impl InputEvent {
    /// Whether this event asks the simulation to stop.
    pub fn is_quit(&self) -> bool {
        matches!(
            self,
            InputEvent::Key(Key::Esc) | InputEvent::Key(Key::CtrlC) | InputEvent::Key(Key::Char('q'))
        )
    }
}

impl From<Event> for InputEvent {
    fn from(event: Event) -> Self {
        match event {
            // Only presses count; Windows also reports releases.
            Event::Key(KeyEvent { kind, .. }) if kind != KeyEventKind::Press => InputEvent::Other,
            Event::Key(KeyEvent {
                code: KeyCode::Char('c'),
                modifiers,
                ..
            }) if modifiers.contains(KeyModifiers::CONTROL) => InputEvent::Key(Key::CtrlC),
            Event::Key(KeyEvent { code, .. }) => InputEvent::Key(match code {
                KeyCode::Esc => Key::Esc,
                KeyCode::Char(c) => Key::Char(c),
                _ => Key::Other,
            }),
            Event::Resize(width, height) => InputEvent::Resize(width, height),
            _ => InputEvent::Other,
        }
    }
}

/// Where the simulation looks for pending input. Must never block.
pub trait InputSource {
    /// Returns the next pending event, if any.
    fn poll_event(&mut self) -> Option<InputEvent>;
}

impl InputSource for Receiver<InputEvent> {
    fn poll_event(&mut self) -> Option<InputEvent> {
        self.try_recv().ok()
    }
}

/// Spawns the thread that blocks on terminal events and forwards them.
///
/// # Returns
///
/// The receiving end of the channel, and the reader thread. The thread
/// stops once the receiver is dropped and another event arrives, or when
/// reading fails.
pub fn spawn_reader() -> (Receiver<InputEvent>, JoinHandle<()>) {
    let (sender, receiver) = mpsc::channel();
    let thread = thread::spawn(move || read_loop(sender));
    (receiver, thread)
}

fn read_loop(sender: Sender<InputEvent>) {
    loop {
        let event = match event::read() {
            Ok(event) => InputEvent::from(event),
            Err(err) => {
                log::warn!("input reader stopped: {err}");
                return;
            }
        };
        if sender.send(event).is_err() {
            return;
        }
    }
}
