use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("ledger error: {0}")]
    Ledger(#[from] engine::LedgerError),
    #[error("export error: {0}")]
    Export(#[from] engine::ExportError),
    #[error("terminal error: {0}")]
    Terminal(String),
}
