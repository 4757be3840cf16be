//! Terminal UI: renders the board and turns key presses into drop requests.

mod app;
mod game_view;

pub use app::{App, UiConfig};
