use std::{io, path::PathBuf};

use codec_eac3::errors::Eac3Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("config error: {0}")]
    ConfigError(String),
    #[error("input and output cannot be the same file: {}", .0.display())]
    SamePath(PathBuf),
    #[error("io error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{0}")]
    Eac3(#[from] Eac3Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logger init failed: {0}")]
    Logger(String),
}

pub(crate) type AppResult<T> = Result<T, AppError>;
