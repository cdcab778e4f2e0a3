mod error;
mod loader;
mod types;
mod validate;


pub use error::ConfigError;
pub use loader::{load_config, parse_config};
pub use types::{AnalysisConfig, AnalysisMode, LogtallyConfig, OutputConfig};
pub use validate::validate_config;
