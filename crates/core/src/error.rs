#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The identifier did not parse or the row does not exist.
    ///
    /// Both cases are reported identically so callers cannot tell a
    /// malformed id from an absent one.
    #[error("{entity} not found")]
    NotFound { entity: &'static str },
}
