use crate::config::AppConfig;
use crate::game::{GameController, Input, Snapshot, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

use super::game_view::{self, TerminalView};

pub struct App {
    controller: GameController<TerminalView>,
    selected_column: usize,
    start_column: usize,
    poll_interval: Duration,
    should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let view = TerminalView::new(config.players.clone(), config.ui.highlight_winning_line);
        App {
            controller: GameController::new(view),
            selected_column: config.ui.start_column,
            start_column: config.ui.start_column,
            poll_interval: Duration::from_millis(config.ui.poll_interval_ms),
            should_quit: false,
        }
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn snapshot(&self) -> &Snapshot {
        self.controller.renderer().snapshot()
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(|e| io::Error::other(e.to_string()))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.poll_interval)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Translate a key press into a selector move or a game input
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < COLS {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.controller.dispatch(Input::DropToken {
                    column: self.selected_column,
                });
            }
            KeyCode::Char(c @ '1'..='9') => {
                // Digits past the last column still go through so they get rejected
                let column = c as usize - '1' as usize;
                if column < COLS {
                    self.selected_column = column;
                }
                self.controller.dispatch(Input::DropToken { column });
            }
            KeyCode::Char('r') => {
                self.selected_column = self.start_column;
                self.controller.dispatch(Input::NewGame);
            }
            _ => {}
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        game_view::render(frame, self.controller.renderer(), self.selected_column);
    }
}
