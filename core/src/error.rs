use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("Record has no financial entries to evaluate")]
    NoFinancials,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type ProbeResult<T> = Result<T, ProbeError>;
