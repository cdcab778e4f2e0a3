use crate::analyze::TOP_ENDPOINTS_LIMIT;
use crate::conf::error::ConfigError;
use crate::conf::types::LogtallyConfig;

pub fn validate_config(config: &LogtallyConfig) -> Result<(), ConfigError> {
    let top = config.analysis.top_endpoints;
    if !(1..=TOP_ENDPOINTS_LIMIT).contains(&top) {
        return Err(ConfigError::InvalidTopEndpoints {
            value: top,
            max: TOP_ENDPOINTS_LIMIT,
        });
    }

    Ok(())
}
