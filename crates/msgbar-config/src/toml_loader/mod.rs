//! TOML site config loading.

mod loader;
mod paths;


pub use loader::{load_from_path, parse_site_config};
pub use paths::default_config_path;
