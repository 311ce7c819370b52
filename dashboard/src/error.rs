use std::io;

use datatable::TableError;
use thiserror::Error;

/// Dashboard error type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("unknown command: {0} (try `help`)")]
    UnknownCommand(String),
    #[error("`{0}` expects an argument")]
    MissingArgument(&'static str),
    #[error("no clickable element with id `{0}`")]
    NotClickable(String),
    #[error("unknown tab: {0}")]
    UnknownTab(String),
    #[error("invalid fixture data: {0}")]
    Fixture(#[from] serde_json::Error),
    #[error(transparent)]
    Table(#[from] TableError),
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
