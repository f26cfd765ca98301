//! Loading and translating configuration between Lua and Rust.
//!
//! The application consumes Lua configuration files. This module exposes
//! helpers to load them, merge user values with defaults, and convert between
//! Lua tables and strongly typed Rust structures. Integration tests reuse
//! these APIs to fabricate configurations dynamically.

mod defaults;
mod loader;
mod lua_engine;
mod paths;
mod require;
pub mod theme;
mod types;
mod vlt_api;

pub use defaults::default_keymaps;
pub use loader::{
  ConfigArtifacts,
  load_config,
  load_config_from_code,
};
pub use lua_engine::LuaEngine;
pub use paths::{
  ConfigPaths,
  discover_config_paths,
};
pub(crate) use require::install_require;
pub use types::{
  Config,
  KeyMapping,
  KeysConfig,
  LimitsConfig,
  ThemeVariant,
  UiConfig,
  UiTheme,
};
pub(crate) use vlt_api::install_vlt_api;
