use crate::errors::{AppError, AppResult};

pub(crate) fn parse_log_level(level: &str) -> AppResult<tracing::Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(tracing::Level::TRACE),
        "debug" => Ok(tracing::Level::DEBUG),
        "info" => Ok(tracing::Level::INFO),
        "warn" => Ok(tracing::Level::WARN),
        "error" => Ok(tracing::Level::ERROR),
        other => Err(AppError::ConfigError(format!(
            "got unexpected log level: {}",
            other
        ))),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("INFO").unwrap(), tracing::Level::INFO);
        assert_eq!(parse_log_level("trace").unwrap(), tracing::Level::TRACE);
        assert!(matches!(
            parse_log_level("loud"),
            Err(AppError::ConfigError(_))
        ));
    }
}
