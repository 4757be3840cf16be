use crate::game::{BitBoard, Coord, GameState, Outcome, Player, HEIGHT, WIDTH};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::UiConfig;

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    ui_config: &UiConfig,
    selected_column: usize,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(15),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, ui_config, chunks[0]);
    render_board(frame, game_state, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, game_state: &GameState, ui_config: &UiConfig, area: Rect) {
    let (status, color) = match game_state.outcome() {
        Outcome::InProgress => {
            let player = game_state.active_player();
            (
                format!("Current Player: {}", ui_config.player_name(player)),
                player_color(player),
            )
        }
        Outcome::Won(player) => (
            format!("Game Over  |  {} won", ui_config.player_name(player)),
            player_color(player),
        ),
        Outcome::Tied => ("Game Over  |  Tie".to_string(), Color::White),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, game_state: &GameState, selected_column: usize, area: Rect) {
    let board: &BitBoard = game_state.board();
    let winning = game_state.winning_line();
    let hover = (!game_state.is_terminal()).then(|| player_color(game_state.active_player()));

    let mut lines = Vec::new();

    // Preview of the next piece above the selected column
    let mut hover_line = vec![Span::raw("   ")];
    for col in 0..WIDTH {
        match hover {
            Some(color) if col == selected_column => {
                hover_line.push(Span::styled(" ● ", Style::default().fg(color)));
            }
            _ => hover_line.push(Span::raw("   ")),
        }
    }
    hover_line.push(Span::raw("  "));
    lines.push(Line::from(hover_line));

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..WIDTH {
        if col == selected_column {
            col_line.push(Span::styled(
                format!(" {} ", col + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {} ", col + 1)));
        }
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    lines.push(Line::from("  ╔═════════════════════╗"));

    for row in 0..HEIGHT {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..WIDTH {
            let coord = Coord { row, col };
            let span = match board.owner(coord) {
                None => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
                Some(player) => {
                    let mut style = Style::default().fg(player_color(player));
                    if winning.is_some_and(|cells| cells.contains(&coord)) {
                        style = style.bg(Color::Blue).add_modifier(Modifier::BOLD);
                    }
                    Span::styled(" ● ", style)
                }
            };
            row_spans.push(span);
        }

        row_spans.push(Span::raw("║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from("  ╚═════════════════════╝"));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("←/→: Move  |  Enter/1-7: Drop  |  R: Restart  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
