//! Line-based terminal front end: game-selection menu, parameter prompts,
//! screen clearing and the loop that feeds command lines to a session.

mod app;
pub mod menu;
pub mod prompt;
pub mod screen;

pub use app::App;
