/// Crate-wide result type. Errors are `anyhow::Error` so context can be
/// attached with `?` at every layer.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
