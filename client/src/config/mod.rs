mod config;
mod first_player_mode;

pub use config::{Config, get_config_manager};
pub use first_player_mode::FirstPlayerMode;
