use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssembleError {
    #[error("schedule not found: {0}")]
    NotFound(String),
    #[error("persistence failure: {0}")]
    Dependency(#[source] anyhow::Error),
    #[error("malformed input: {0}")]
    MalformedInput(String),
}

impl AssembleError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, AssembleError::NotFound(_))
    }
}
