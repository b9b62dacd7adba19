use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown output kind: {0}")]
    UnknownOutputKind(String),
}
