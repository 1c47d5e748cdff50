mod animations;
mod app;
mod config;
mod logging;
mod render;
mod theme;

use app::App;
use clap::Parser;
use config::{Cli, RunConfig, Settings};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use logging::LogTarget;
use std::io::{self, Write};
use std::process::ExitCode;
use std::time::{Duration, Instant};
use wordsearch_core::Generator;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let run_config = match Settings::discover(cli.config.as_deref())
        .and_then(|settings| RunConfig::resolve(&cli, settings))
    {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    let target = if cli.print {
        LogTarget::Stderr
    } else {
        LogTarget::default_file()
    };
    if let Err(e) = logging::init_logger(cli.debug, target) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let result = if cli.print {
        print_puzzle(&run_config, cli.json)
    } else {
        run_terminal(run_config)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Generate one puzzle and write it to stdout
fn print_puzzle(config: &RunConfig, json: bool) -> io::Result<()> {
    let mut generator = match config.seed {
        Some(seed) => Generator::with_seed(seed),
        None => Generator::new(),
    };
    generator.set_config(config.puzzle.generator.clone());
    let puzzle = generator.generate(&config.puzzle.words, config.puzzle.size);

    let mut stdout = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut stdout, &puzzle)?;
        writeln!(stdout)?;
    } else {
        write!(stdout, "{}", puzzle.grid)?;
        writeln!(stdout)?;
        for placement in &puzzle.placements {
            writeln!(stdout, "{}", placement.word)?;
        }
        if !puzzle.unplaced.is_empty() {
            writeln!(stdout, "\nNot hidden: {}", puzzle.unplaced.join(", "))?;
        }
    }
    stdout.flush()
}

fn run_terminal(config: RunConfig) -> io::Result<()> {
    let app = App::new(config).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let result = run_app(&mut stdout, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)?;

    result
}

fn run_app(stdout: &mut io::Stdout, mut app: App) -> io::Result<()> {
    let (width, height) = terminal::size()?;
    app.resize(width, height);
    let mut last_tick = Instant::now();

    loop {
        let tick_rate = app.get_tick_rate();

        render::render(stdout, &mut app)?;
        stdout.flush()?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout.min(Duration::from_millis(33)))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if key.modifiers.contains(KeyModifiers::CONTROL)
                        && key.code == KeyCode::Char('c')
                    {
                        break;
                    }

                    match app.handle_key(key) {
                        app::AppAction::Continue => {}
                        app::AppAction::Quit => break,
                    }
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                Event::Resize(width, height) => app.resize(width, height),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }
    }

    log::info!("Exiting");
    Ok(())
}
