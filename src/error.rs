use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The backend rejected or failed to execute a built query.
    Execution { entity: String, reason: String },
    /// The active-context lookup failed.
    ContextUnavailable(String),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::Execution { entity, reason } => {
                write!(f, "query execution failed for {}: {}", entity, reason)
            }
            QueryError::ContextUnavailable(reason) => {
                write!(f, "persistence context unavailable: {}", reason)
            }
        }
    }
}

impl std::error::Error for QueryError {}
