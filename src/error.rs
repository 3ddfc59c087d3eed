use thiserror::Error;

/// Errors returned by [`Table`](crate::Table) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// Every slot is occupied and the key is not already present.
    /// The table is left unchanged.
    #[error("table is full ({capacity} slots occupied)")]
    Full { capacity: usize },
    #[error("table capacity must be greater than zero")]
    ZeroCapacity,
}

/// Errors returned by the stack types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StackError {
    /// The stack holds `capacity` elements; the pushed value was not stored.
    #[error("stack is full ({capacity} elements)")]
    Full { capacity: usize },
    #[error("stack capacity must be greater than zero")]
    ZeroCapacity,
}
