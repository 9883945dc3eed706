use thiserror::Error;

/// Errors raised by sequence traversal and the sequence operators.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A required input was absent.
    ///
    /// Raised eagerly by the operators, before any traversal begins, when
    /// the source sequence is the absent value.
    #[error("required argument is absent")]
    InvalidArgument,
    /// A single item was required but the sequence holds none or several.
    #[error("expected a singleton sequence")]
    NotSingleton,
}

pub type Result<T> = std::result::Result<T, Error>;
