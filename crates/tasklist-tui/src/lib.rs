pub mod app;
pub mod events;
pub mod selection;
pub mod text_input;
pub mod theme;
pub mod ui;

pub use app::{App, Focus};
