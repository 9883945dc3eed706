use thiserror::Error;

/// Errors raised while reflecting a value into a property bag.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The value to reflect was absent.
    ///
    /// Detected when the value's descriptors are about to be consulted,
    /// not up front.
    #[error("value to reflect is absent")]
    NullReference,
    /// A property getter failed while its value was being read.
    ///
    /// Constructed by the getter itself and propagated unchanged.
    #[error("property {0} could not be read")]
    PropertyAccess(String),
}

pub type Result<T> = std::result::Result<T, Error>;
