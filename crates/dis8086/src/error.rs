use thiserror::Error;

use crate::i8086::decode::DecodeError;

/// Unified error type for the dis8086 library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
    #[error("unknown decode semantics '{0}' (expected 'literal' or 'hardware')")]
    UnknownSemantics(String),
}
