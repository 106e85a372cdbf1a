use animated_life::{input, Args, Board, Config, Geometry, Simulation, TerminalCanvas, TerminalSession};
use rand::{rngs::StdRng, SeedableRng};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{error::Error, fs::File, io, path::Path};

/// Sends `log` output to `path`. The terminal belongs to the board, so
/// nothing is logged without a file.
fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn initial_board(config: &Config) -> Board {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    Board::random(config.width, config.height, config.density, &mut rng).with_frames(config.frames())
}

/// Main entry point.
///
/// Sets up the terminal, seeds the board and runs the simulation until Esc
/// or q is pressed. The terminal is restored on every exit, including
/// failed setup.
///
/// # Errors
///
/// Returns an error if the settings are invalid or terminal manipulation
/// fails.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse()?;
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }
    let config = args.config;
    let board = initial_board(&config);

    // Restores the terminal when dropped, on every path out of `main`.
    let mut session = TerminalSession::enter(io::stdout())?;
    let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let (events, _reader) = input::spawn_reader();
    let canvas = TerminalCanvas::new(terminal)?;
    let mut simulation = Simulation::new(
        board,
        canvas,
        events,
        Geometry::with_cell_width(config.cell_width),
        config.interval(),
    );
    let outcome = simulation.run();
    drop(simulation);

    session.restore()?;
    outcome?;
    Ok(())
}
