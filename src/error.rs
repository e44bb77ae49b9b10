use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    EmptyTitle,

    DuplicateTitle(String),

    NotFound(String),

    UnknownField(String),

    InvalidCommand(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::EmptyTitle => {
                write!(f, "catalog error: title must not be empty")
            }

            CatalogError::DuplicateTitle(title) => {
                write!(f, "catalog error: a book titled '{}' already exists", title)
            }

            CatalogError::NotFound(title) => {
                write!(f, "catalog error: no book titled '{}'", title)
            }

            CatalogError::UnknownField(field) => {
                write!(
                    f,
                    "catalog error: unknown field '{}' (expected title, author, publisher, date, isbn or category)",
                    field
                )
            }

            CatalogError::InvalidCommand(reason) => {
                write!(f, "invalid command: {}", reason)
            }
        }
    }
}

impl std::error::Error for CatalogError {}
