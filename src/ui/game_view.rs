use crate::config::PlayersConfig;
use crate::game::{GameStatus, Player, Renderer, Snapshot, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Terminal-side renderer: keeps the latest snapshot for the next draw.
pub struct TerminalView {
    snapshot: Snapshot,
    message: Option<String>,
    players: PlayersConfig,
    highlight_winning_line: bool,
}

impl TerminalView {
    pub fn new(players: PlayersConfig, highlight_winning_line: bool) -> Self {
        TerminalView {
            snapshot: Snapshot::default(),
            message: None,
            players,
            highlight_winning_line,
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl Renderer for TerminalView {
    fn render(&mut self, snapshot: &Snapshot) {
        self.message = snapshot.rejected.map(|err| {
            let mut text = err.to_string();
            if let Some(first) = text.get_mut(0..1) {
                first.make_ascii_uppercase();
            }
            text
        });
        self.snapshot = *snapshot;
    }
}

fn player_color(player: Player) -> Color {
    match player {
        Player::A => Color::Magenta,
        Player::B => Color::LightGreen,
    }
}

pub fn render(frame: &mut Frame, view: &TerminalView, selected_column: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, view, chunks[0]);
    render_board(frame, view, selected_column, chunks[1]);
    render_message(frame, view.message(), chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, view: &TerminalView, area: Rect) {
    let snapshot = view.snapshot();
    let players = &view.players;
    let (status, color) = match snapshot.status {
        GameStatus::InProgress => (
            format!("{}'s Turn", players.name(snapshot.turn)),
            player_color(snapshot.turn),
        ),
        GameStatus::Won(winner) => (
            format!("{} Wins!", players.name(winner)),
            player_color(winner),
        ),
        GameStatus::Tie => ("It's a Tie!".to_string(), Color::White),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, view: &TerminalView, selected_column: usize, area: Rect) {
    let snapshot = view.snapshot();
    let board = &snapshot.board;
    let winning_line = snapshot
        .winning_line
        .filter(|_| view.highlight_winning_line);
    let mut lines = Vec::new();

    // Column numbers; full columns are greyed out, the selection underlined
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..COLS {
        let label = format!(" {} ", col + 1);
        let style = if board.is_column_full(col) {
            Style::default().fg(Color::DarkGray)
        } else if col == selected_column {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default()
        };
        col_line.push(Span::styled(label, style));
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    let rule = "═".repeat(COLS * 3 + 1);
    lines.push(Line::from(format!("  ╔{}╗", rule)));

    // Top row first; row 0 is the bottom of the grid
    for row in (0..ROWS).rev() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..COLS {
            let span = match board.get(col, row).owner() {
                None => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
                Some(player) => {
                    let mut style = Style::default().fg(player_color(player));
                    if winning_line.is_some_and(|line| line.contains(col, row)) {
                        style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
                    }
                    Span::styled(" ● ", style)
                }
            };
            row_spans.push(span);
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{}╝", rule)));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        if col == selected_column && !snapshot.status.is_terminal() {
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

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new(
        "←/→: Move  |  Enter: Drop  |  1-7: Drop in column  |  R: New game  |  Q: Quit",
    )
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Controls"),
    );

    frame.render_widget(controls, area);
}
