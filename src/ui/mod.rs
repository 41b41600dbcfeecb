//! Presentation: the interactive terminal UI and a plain-text renderer.

mod app;
mod game_view;
pub mod text;

pub use app::App;
pub use game_view::TerminalView;
pub use text::TextRenderer;
