use derive_more::From;
use orion_error::{ErrorCode, StructError, UvsReason};

#[derive(Debug, Clone, PartialEq, thiserror::Error, From)]
pub enum GenReason {
    #[error("invalid scenario configuration")]
    Config,
    #[error("invalid ratio")]
    Ratio,
    #[error("time partition error")]
    Partition,
    #[error("communications ratio not balanced")]
    Balance,
    #[error("events overflow their window")]
    Slack,
    #[error("{0}")]
    Uvs(UvsReason),
}

impl ErrorCode for GenReason {
    fn error_code(&self) -> i32 {
        match self {
            Self::Config => 3001,
            Self::Ratio => 3002,
            Self::Partition => 3003,
            Self::Balance => 3004,
            Self::Slack => 3005,
            Self::Uvs(u) => u.error_code(),
        }
    }
}

pub type GenError = StructError<GenReason>;
pub type GenResult<T> = Result<T, GenError>;
