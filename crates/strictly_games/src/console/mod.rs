//! Terminal front end: prompts, board rendering and match narration.

mod format;
mod input;
mod presenter;

pub use format::{joinor, render_board};
pub use input::ConsoleInput;
pub use presenter::ConsolePresenter;
