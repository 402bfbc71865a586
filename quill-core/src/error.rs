use std::fmt::{self, Display, Formatter};

/// Failures of the checked writer methods, carried inside [`crate::Error`].
///
/// The unchecked methods never produce them: they accept any mapping and may emit malformed SQL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// More than one property resolves to the same column.
    DuplicateColumn {
        column: String,
        properties: Vec<String>,
    },
    /// The identity property is not among the resolved properties.
    IdentityNotFound { id_property: String },
}

impl Display for MappingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MappingError::DuplicateColumn { column, properties } => write!(
                f,
                "Column `{}` is mapped by more than one property: {}",
                column,
                properties.join(", ")
            ),
            MappingError::IdentityNotFound { id_property } => write!(
                f,
                "Identity property `{}` does not match any resolved column",
                id_property
            ),
        }
    }
}

impl std::error::Error for MappingError {}
