mod cli;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use focus_quest::input::map_key;
use focus_quest::utils::build_info::version_line;
use focus_quest::utils::logging::init_file_logging;
use focus_quest::utils::persistence::{config_dir, data_dir};
use focus_quest::{
    App, GameConfig, JsonFileStore, KeyValueStore, MemoryStore, ProgressionStore,
    CONFIG_FILE_NAME, INPUT_POLL_MS, TICK_INTERVAL_MS,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use ui::screen::ScreenModel;

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    if cli.version {
        println!("{}", version_line());
        return Ok(());
    }

    let data_dir = match cli.data_dir.clone() {
        Some(dir) => dir,
        None => data_dir().unwrap_or_else(|e| exit_with(&e)),
    };
    if let Err(e) = std::fs::create_dir_all(&data_dir) {
        exit_with(&e);
    }
    // Logging is best-effort; the game runs without it.
    if let Err(e) = init_file_logging(&data_dir) {
        eprintln!("Warning: could not open log file: {}", e);
    }

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };
    tracing::info!(version = %version_line(), data_dir = %data_dir.display(), "starting");

    match cli.command {
        Some(Commands::Status) => print_status(&data_dir, &config),
        Some(Commands::Reset { yes }) => reset_data(&data_dir, &config, yes),
        Some(Commands::Config) => {
            let json = serde_json::to_string_pretty(&config).map_err(io::Error::other)?;
            println!("{}", json);
            Ok(())
        }
        None if cli.ephemeral => run_game(config, MemoryStore::new()),
        None => {
            let backend = JsonFileStore::in_dir(&data_dir).unwrap_or_else(|e| exit_with(&e));
            run_game(config, backend)
        }
    }
}

fn exit_with(error: &dyn std::fmt::Display) -> ! {
    eprintln!("Error: {}", error);
    std::process::exit(1);
}

/// Defaults, then the config file, then command-line flags.
fn load_config(cli: &Cli) -> focus_quest::Result<GameConfig> {
    let path = match cli.config.clone() {
        Some(path) => path,
        None => config_dir()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .unwrap_or_else(|_| PathBuf::from(CONFIG_FILE_NAME)),
    };
    let config = GameConfig::load(&path)?.with_overrides(&cli.overrides());
    config.validate()?;
    Ok(config)
}

fn print_status(data_dir: &std::path::Path, config: &GameConfig) -> io::Result<()> {
    let backend = JsonFileStore::in_dir(data_dir).unwrap_or_else(|e| exit_with(&e));
    let save_path = backend.path().to_path_buf();
    let store = ProgressionStore::from_config(backend, config);

    println!("Level:    {}", store.level());
    println!(
        "EXP:      {} ({}/{} to level {})",
        store.experience(),
        store.exp_progress(),
        store.exp_span(),
        store.level() + 1
    );
    println!("Gold:     {}", store.gold());
    println!("Sessions: {}", store.total_focus_sessions());
    println!("Save:     {}", save_path.display());
    Ok(())
}

fn reset_data(data_dir: &std::path::Path, config: &GameConfig, yes: bool) -> io::Result<()> {
    if !yes {
        print!("Reset all player data? [y/N] ");
        io::stdout().flush()?;
        let mut answer = String::new();
        io::stdin().read_line(&mut answer)?;
        if !matches!(answer.trim(), "y" | "Y" | "yes") {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let backend = JsonFileStore::in_dir(data_dir).unwrap_or_else(|e| exit_with(&e));
    let mut store = ProgressionStore::from_config(backend, config);
    store.reset();
    println!("Player data reset.");
    Ok(())
}

fn run_game<S: KeyValueStore>(config: GameConfig, backend: S) -> io::Result<()> {
    let mut app = App::new(config, backend).unwrap_or_else(|e| exit_with(&e));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = game_loop(&mut terminal, &mut app);

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "game loop failed");
    }
    tracing::info!("exiting");
    println!("Goodbye!");
    result
}

fn game_loop<S: KeyValueStore>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<S>,
) -> io::Result<()> {
    let mut screen = ScreenModel::new();
    let mut rng = rand::thread_rng();
    let mut last_tick = Instant::now();

    loop {
        app.render_main(&mut screen);
        terminal.draw(|frame| ui::draw_ui(frame, app, &screen))?;

        // Poll for input (50ms non-blocking)
        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                // Windows reports releases too
                if key_event.kind == KeyEventKind::Press {
                    if let Some(action) = map_key(app.scene(), app.confirming_reset(), key_event.code)
                    {
                        tracing::debug!(?action, "key action");
                        app.apply(action);
                    }
                }
            }
        }

        if app.should_quit() {
            return Ok(());
        }

        // Game tick every 100ms, advanced by the time that actually passed
        let elapsed = last_tick.elapsed();
        if elapsed >= Duration::from_millis(TICK_INTERVAL_MS) {
            app.tick(elapsed.as_secs_f64(), &mut rng);
            last_tick = Instant::now();
        }
    }
}
