//! Configuration module.
//!
//! Settings resolve in layers: defaults, then the TOML file, then
//! environment variables, then command-line flags.

pub mod keybindings;
pub mod loader;
pub mod location;
pub mod viewport;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, load_config_with_precedence, merge_config,
    ConfigError, ConfigFile, ResolvedConfig,
};
pub use location::{default_location_path, LocationStore};
pub use viewport::{PageSizing, ViewportClass};
