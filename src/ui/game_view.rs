use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::layout::{BoardLayout, BOARD_HEIGHT};
use crate::config::PlayersConfig;
use crate::game::{GameEngine, GameStatus, Player, Position, COLS, ROWS};

pub fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Yellow,
    }
}

pub fn player_label(players: &PlayersConfig, player: Player) -> &str {
    match player {
        Player::One => &players.one,
        Player::Two => &players.two,
    }
}

/// Draw the whole game screen and return where the board ended up.
pub fn render(
    frame: &mut Frame,
    engine: &GameEngine,
    selected_column: usize,
    message: &Option<String>,
    players: &PlayersConfig,
) -> BoardLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),         // Status bar
            Constraint::Min(BOARD_HEIGHT), // Board
            Constraint::Length(4),         // Message
            Constraint::Length(3),         // Controls
        ])
        .split(frame.area());

    render_status(frame, engine, players, chunks[0]);
    render_board(frame, engine, selected_column, chunks[1]);
    render_message(frame, engine, message, chunks[2]);
    render_controls(frame, chunks[3]);

    BoardLayout::new(chunks[1])
}

fn render_status(frame: &mut Frame, engine: &GameEngine, players: &PlayersConfig, area: Rect) {
    let line = match engine.status() {
        GameStatus::Active => {
            let mut spans = Vec::new();
            for player in [Player::One, Player::Two] {
                let label = player_label(players, player);
                let style = Style::default().fg(player_color(player));
                if player == engine.current_player() {
                    spans.push(Span::styled(
                        format!("▶ {label}"),
                        style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                    ));
                } else {
                    spans.push(Span::styled(
                        format!("  {label}"),
                        style.add_modifier(Modifier::DIM),
                    ));
                }
                spans.push(Span::raw("    "));
            }
            spans.pop();
            Line::from(spans)
        }
        GameStatus::Win => {
            let winner = engine.current_player();
            Line::from(Span::styled(
                format!("{} wins!", player_label(players, winner)),
                Style::default()
                    .fg(player_color(winner))
                    .add_modifier(Modifier::BOLD),
            ))
        }
        GameStatus::Tie => Line::from(Span::styled(
            "It's a tie!",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    };

    let header = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, engine: &GameEngine, selected_column: usize, area: Rect) {
    let active = engine.status() == GameStatus::Active;
    let preview = if active {
        engine.preview_column(selected_column)
    } else {
        None
    };
    let winning = engine.winning_cells();
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..COLS {
        if active && col == selected_column {
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
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    lines.push(Line::from("  ╔══════════════════════╗"));

    for row in 0..ROWS {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..COLS {
            let pos = Position::new(row, col);
            let span = match Player::from_cell(engine.cell(row, col)) {
                Some(player) if winning.contains(&pos) => Span::styled(
                    " ◉ ",
                    Style::default()
                        .fg(player_color(player))
                        .bg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD),
                ),
                Some(player) => Span::styled(" ● ", Style::default().fg(player_color(player))),
                None if preview == Some(pos) => Span::styled(
                    " ○ ",
                    Style::default().fg(player_color(engine.current_player())),
                ),
                None => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
            };
            row_spans.push(span);
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from("  ╚══════════════════════╝"));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        if active && col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(
    frame: &mut Frame,
    engine: &GameEngine,
    message: &Option<String>,
    area: Rect,
) {
    let mut lines = vec![Line::from(message.as_deref().unwrap_or(""))];
    // The reset hint only appears once the game is over
    if engine.status().is_terminal() {
        lines.push(Line::from(Span::styled(
            "Press R for a new game",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
    }

    let msg_widget = Paragraph::new(lines)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("←/→ or mouse: Aim  |  Enter/click/1-7: Drop  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
