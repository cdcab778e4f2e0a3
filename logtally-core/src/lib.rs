pub mod analyze;
pub mod conf;
pub mod error;
pub mod logging;
