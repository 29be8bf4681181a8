pub mod check;
pub mod config;
pub mod setup;
pub mod theme;

pub use check::run_check;
pub use setup::run_setup;
pub use theme::show_theme;
