mod fixtures;
pub mod tracing;

pub use fixtures::{AccessLogBuilder, fixture_path};
pub use tracing::{CapturedEvent, capture_events};
