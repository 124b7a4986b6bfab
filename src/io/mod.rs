pub mod config;

pub use config::{config_path, load_config, ConfigError};
