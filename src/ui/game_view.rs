use crate::game::{Candy, Column, GameState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// One display color per candy type; larger alphabets cycle the palette.
const CANDY_COLORS: [Color; 12] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::LightRed,
    Color::LightYellow,
    Color::LightGreen,
    Color::LightBlue,
    Color::LightMagenta,
    Color::LightCyan,
];

fn candy_color(candy: Candy) -> Color {
    CANDY_COLORS[candy.index() % CANDY_COLORS.len()]
}

pub fn render(
    frame: &mut Frame,
    game: &GameState,
    selected_column: usize,
    seed: u64,
    message: &Option<String>,
) {
    let board_height = game.board().height() as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                // Header
            Constraint::Min(board_height + 4),    // Board
            Constraint::Length(3),                // Message
            Constraint::Length(3),                // Controls
        ])
        .split(frame.area());

    render_header(frame, game, seed, chunks[0]);
    render_board(frame, game, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, game: &GameState, seed: u64, area: ratatui::layout::Rect) {
    let (status, color) = if game.is_won() {
        (format!("Sorted!  |  Moves: {}", game.moves()), Color::Green)
    } else if let Some(source) = game.pending_source() {
        (
            format!("Moves: {}  |  From: column {}", game.moves(), source + 1),
            Color::Yellow,
        )
    } else {
        (format!("Moves: {}", game.moves()), Color::White)
    };

    let header = Paragraph::new(format!("{status}  |  Seed: {seed}"))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Candy Sort"));

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    game: &GameState,
    selected_column: usize,
    area: ratatui::layout::Rect,
) {
    let board = game.board();
    let columns = board.column_count();
    let height = board.height();
    let mut lines = Vec::new();

    // Column numbers, highlighting the cursor and the pending source.
    let mut number_line = Vec::new();
    for col in 0..columns {
        let label = format!("{:^3}", col + 1);
        let style = if col == selected_column {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else if game.pending_source() == Some(col) {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        number_line.push(Span::styled(label, style));
    }
    lines.push(Line::from(number_line));

    // Board rows, top row first. A cell at stack height h is occupied when
    // the column holds more than h candies.
    for row in (0..height).rev() {
        let mut row_spans = Vec::new();
        for col in 0..columns {
            let cell = board.column(col).and_then(|c| cell_at(c, row));
            let span = match cell {
                Some(candy) => {
                    Span::styled(" ● ", Style::default().fg(candy_color(candy)))
                }
                None => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
            };
            row_spans.push(span);
        }
        lines.push(Line::from(row_spans));
    }

    // Base line under the columns.
    lines.push(Line::from("═══".repeat(columns)));

    // Selection indicator
    let mut indicator_line = Vec::new();
    for col in 0..columns {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

/// The candy resting at stack height `row` (0 = bottom), if any.
fn cell_at(column: &Column, row: usize) -> Option<Candy> {
    if row >= column.len() {
        return None;
    }
    column.peek(column.len() - 1 - row)
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let line = Line::from("←/→: Select column  |  Enter: Pick up / drop  |  R: New game  |  Q: Quit");
    let controls = Paragraph::new(vec![line])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
