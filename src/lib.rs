// Public library interface for integration tests and embedding.
pub mod actions;
pub mod app;
pub mod config;
pub mod core;
pub mod enums;
pub mod input;
pub mod runtime;
pub mod trace;
pub mod ui;

pub use app::App;
