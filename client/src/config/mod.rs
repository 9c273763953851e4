mod config;
mod match_mode;

pub use config::{Config, get_config_manager};
pub use match_mode::MatchMode;
