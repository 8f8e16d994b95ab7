//! Terminal user interface for the admin console.

mod app;
mod event;
mod input;
mod notify;
mod render;
mod rows;
mod state;
mod style;
mod table;
mod widgets;

pub use app::App;
pub use state::{AppState, Tab};
