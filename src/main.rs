use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::LevelFilter;
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_four::config::AppConfig;
use connect_four::game::Outcome;
use connect_four::logging;
use connect_four::ui::App;

/// Two-player Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect_four", about = "Play Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Replay 1-based column digits (e.g. "4455663") and print the result
    /// instead of starting the UI
    #[arg(long)]
    moves: Option<String>,

    /// Override the configured log level
    #[arg(long)]
    log_level: Option<String>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml().context("serializing default config")?);
        return Ok(());
    }

    let cli_level = cli.log_level.as_deref().map(logging::parse_level).transpose()?;
    logging::init(cli_level.unwrap_or(LevelFilter::Warn)).context("installing logger")?;

    let app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    match cli_level {
        Some(level) => logging::set_level(level),
        None => logging::set_level(app_config.log.level_filter()?),
    }

    match cli.moves {
        Some(moves) => replay(&app_config, &moves),
        None => run_tui(&app_config).context("running terminal UI"),
    }
}

/// Headless mode: play the move list and print the final board.
fn replay(config: &AppConfig, moves: &str) -> Result<()> {
    let mut state = config.game.new_game();
    state.play_moves(moves).context("replaying moves")?;

    println!("{}", state.board());
    println!();
    match state.outcome() {
        Outcome::InProgress => println!(
            "In progress after {} moves, {} to play",
            state.move_count(),
            config.ui.player_name(state.active_player())
        ),
        Outcome::Won(player) => {
            println!("{} won!", config.ui.player_name(player));
            if let Some(line) = state.winning_line() {
                let cells: Vec<String> = line.iter().map(ToString::to_string).collect();
                println!("Winning line: {}", cells.join(" "));
            }
        }
        Outcome::Tied => println!("The game is a tie!"),
    }
    Ok(())
}

fn run_tui(config: &AppConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(config);
    let res = app.run(&mut terminal);

    // Restore terminal, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
