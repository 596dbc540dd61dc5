pub mod listen;

pub use listen::{AppConfig, ConfigError, DEFAULT_HOST, DEFAULT_PORT};
