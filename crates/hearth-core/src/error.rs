/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when building or decoding a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A frequency period string is neither a known keyword nor an
    /// ISO-8601 duration.
    #[error("invalid frequency period: \"{0}\"")]
    InvalidPeriod(String),
}
