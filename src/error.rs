use std::num::ParseFloatError;

/// Errors from parsing navigation inputs
///
/// The numeric calculations themselves are total and never fail; these only
/// come from turning text into typed values.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown ellipsoid: {0}")]
    UnknownEllipsoid(String),

    #[error("Malformed point (expected \"lat,lon\"): {0}")]
    MalformedPoint(String),

    #[error("Invalid number: {0}")]
    InvalidNumber(#[from] ParseFloatError),
}

pub type Result<T> = std::result::Result<T, Error>;
