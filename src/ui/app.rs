use crate::config::{AppConfig, GameConfig};
use crate::game::{GameState, MoveError, Outcome, Player, WIDTH};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

/// `[ui]` section of the configuration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub player_one_name: String,
    pub player_two_name: String,
    /// Column the selector starts on (0-based)
    pub start_column: usize,
    /// How long to wait for a key before redrawing
    pub poll_interval_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            player_one_name: Player::One.name().to_string(),
            player_two_name: Player::Two.name().to_string(),
            start_column: 3,
            poll_interval_ms: 100,
        }
    }
}

impl UiConfig {
    pub fn player_name(&self, player: Player) -> &str {
        match player {
            Player::One => &self.player_one_name,
            Player::Two => &self.player_two_name,
        }
    }
}

pub struct App {
    game_state: GameState,
    game_config: GameConfig,
    ui_config: UiConfig,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        App {
            game_state: config.game.new_game(),
            game_config: config.game.clone(),
            ui_config: config.ui.clone(),
            selected_column: config.ui.start_column,
            should_quit: false,
            message: None,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(self.ui_config.poll_interval_ms))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Keep the end-of-game message up until the next game starts
        if !self.game_state.is_terminal() {
            self.message = None;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < WIDTH {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c @ '1'..='7') => {
                self.selected_column = c as usize - '1' as usize;
                self.drop_piece();
            }
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.game_state = self.game_config.new_game();
                self.selected_column = self.ui_config.start_column;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        // Input is ignored while the result is on screen
        if self.game_state.is_terminal() {
            self.message = Some(self.end_message() + "  Press 'r' to restart.");
            return;
        }

        match self.game_state.drop_piece(self.selected_column as isize) {
            Ok(result) => {
                if result.outcome.is_terminal() {
                    self.message = Some(self.end_message());
                }
            }
            Err(MoveError::ColumnFull(_)) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(err @ (MoveError::InvalidColumn(_) | MoveError::Board(_))) => {
                log::warn!("move rejected: {err}");
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over!".to_string());
            }
        }
    }

    fn end_message(&self) -> String {
        match self.game_state.outcome() {
            Outcome::Won(player) => format!("{} won!", self.ui_config.player_name(player)),
            Outcome::Tied => "The game is a tie!".to_string(),
            Outcome::InProgress => String::new(),
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game_state,
            &self.ui_config,
            self.selected_column,
            &self.message,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
