//! Error types for stagegraph-params.

use stagegraph_values::ValueType;
use thiserror::Error;

use crate::tag::TypeTag;

/// The main error type for parameter registry and conversion operations.
///
/// An absent value is never an error: conversions carry absence through
/// `Option` and reserve `ParamError` for values that are present but
/// unusable.
#[derive(Error, Debug)]
pub enum ParamError {
    /// A descriptor with the given tag is already registered.
    #[error("type tag '{0}' already registered")]
    TagExists(TypeTag),

    /// No descriptor is registered (or defined) for the given tag.
    #[error("unknown type tag '{0}'")]
    UnknownTag(String),

    /// An array descriptor names an element tag that is not registered.
    #[error("array tag '{tag}' requires element tag '{element}' to be registered first")]
    UnknownElement { tag: TypeTag, element: TypeTag },

    /// An array descriptor and its element descriptor disagree on storage.
    #[error("array tag '{tag}' stores {storage} but element tag '{element}' stores {found}")]
    ElementMismatch {
        tag: TypeTag,
        element: TypeTag,
        storage: ValueType,
        found: ValueType,
    },

    /// A descriptor's element declaration does not match its storage type.
    #[error("tag '{tag}': element declaration does not match {storage} storage")]
    MalformedDescriptor { tag: TypeTag, storage: ValueType },

    /// A value has the wrong shape for the requested conversion.
    #[error("type mismatch: expected {expected}, got {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// A fixed-size component list has the wrong length.
    #[error("expected {expected} components, got {actual}")]
    Arity { expected: usize, actual: usize },

    /// An integer does not fit the scene's 32-bit int type.
    #[error("integer {0} out of range for int")]
    IntOutOfRange(i64),

    /// An array element failed to convert.
    #[error("element {index}: {source}")]
    Element {
        index: usize,
        source: Box<ParamError>,
    },

    /// A JSON value has no host representation.
    #[error("unsupported JSON value: {0}")]
    UnsupportedJson(String),
}

/// A specialized Result type for stagegraph-params operations.
pub type Result<T> = std::result::Result<T, ParamError>;
