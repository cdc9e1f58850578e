pub mod config;
pub mod common;
pub mod sqlstate;

pub use self::common::{Error, ErrorKind, Result};
