/// Type alias for Result with anyhow::Error as the error type.
/// Fatal paths use this; soft registry failures travel as `LookupError`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
