use thiserror::Error;

/// Failures from store mutations that require an existing record.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The target record was never spawned, or has been despawned.
    #[error("record does not exist: {context}")]
    RecordDoesNotExist { context: &'static str },
}
