use crate::config::PlayersConfig;
use crate::game::{Board, Cell, GameStatus, Renderer, Snapshot, COLS, ROWS};

/// Plain-text board: top row first, column numbers underneath.
pub fn format_board(board: &Board) -> String {
    let mut out = String::new();
    for row in (0..ROWS).rev() {
        out.push('|');
        for col in 0..COLS {
            out.push(match board.get(col, row) {
                Cell::Empty => '.',
                Cell::PlayerA => 'X',
                Cell::PlayerB => 'O',
            });
            out.push('|');
        }
        out.push('\n');
    }
    out.push(' ');
    for col in 0..COLS {
        out.push_str(&format!("{} ", col + 1));
    }
    out.push('\n');
    out
}

/// One-line summary of whose turn it is or how the game ended.
pub fn status_line(snapshot: &Snapshot, players: &PlayersConfig) -> String {
    match snapshot.status {
        GameStatus::InProgress => format!("{}'s turn", players.name(snapshot.turn)),
        GameStatus::Won(winner) => format!("{} wins!", players.name(winner)),
        GameStatus::Tie => "It's a tie!".to_string(),
    }
}

/// Renders each snapshot to text. Used by the headless replay.
pub struct TextRenderer {
    players: PlayersConfig,
    keep_frames: bool,
    frames: Vec<String>,
    last: Option<Snapshot>,
}

impl TextRenderer {
    pub fn new(players: PlayersConfig, keep_frames: bool) -> Self {
        TextRenderer {
            players,
            keep_frames,
            frames: Vec::new(),
            last: None,
        }
    }

    /// Text for a single snapshot: board, status, and rejection if any.
    pub fn draw(&self, snapshot: &Snapshot) -> String {
        let mut out = format_board(&snapshot.board);
        out.push_str(&status_line(snapshot, &self.players));
        out.push('\n');
        if let Some(err) = snapshot.rejected {
            out.push_str(&format!("(ignored: {})\n", err));
        }
        out
    }

    /// Every frame drawn so far, when frames are kept.
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    pub fn last(&self) -> Option<&Snapshot> {
        self.last.as_ref()
    }
}

impl Renderer for TextRenderer {
    fn render(&mut self, snapshot: &Snapshot) {
        if self.keep_frames {
            let frame = self.draw(snapshot);
            self.frames.push(frame);
        }
        self.last = Some(*snapshot);
    }
}
