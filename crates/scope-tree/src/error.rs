//! Forest construction errors

/// Errors raised while building a [`SpaceForest`](crate::SpaceForest)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// Two nodes share an identifier
    #[error("duplicate space id: {id}")]
    DuplicateId { id: String },

    /// A node uses the reserved `root` sentinel as its id
    #[error("space id '{id}' is reserved")]
    ReservedId { id: String },

    /// A node has an empty id
    #[error("space id cannot be empty (node '{name}')")]
    EmptyId { name: String },
}
