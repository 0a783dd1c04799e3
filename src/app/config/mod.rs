//! Configuration loading for the `roster` binary.

mod load_config;

pub use load_config::{
    DEFAULT_CONFIG_FILE, DemoConfig, RosterConfig, load_config, parse_config_content,
};
