pub mod app;
pub mod app_state;
pub mod services;
pub mod terminal;
pub mod ui;

pub use app::App;
pub use terminal::{restore_terminal, restore_terminal_after_panic, setup_terminal};
