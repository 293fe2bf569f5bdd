use thiserror::Error;

pub type UgResult<T> = Result<T, UgError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UgError {
    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}
