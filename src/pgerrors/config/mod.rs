mod config;
mod load;

pub use config::*;
pub use load::{load_config, CONFIG_PATH_ENV};
