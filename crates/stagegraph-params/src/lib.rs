//! Parameter type registry for stagegraph.
//!
//! This crate maps the scene's typed value system onto the plain values
//! a node editor's parameter widgets exchange:
//! - [`TypeTag`] names every parameter type the editor knows
//! - [`TypeDescriptor`] binds a tag to its native storage and, for
//!   array tags, to the element tag conversion delegates to
//! - [`HostValue`] is the widget-side shape (bools, wide numbers,
//!   strings, nested sequences), with a JSON bridge
//! - [`Registry`] holds the validated table and drives conversion
//!
//! ```
//! use stagegraph_params::{HostValue, Registry, TypeTag};
//!
//! let registry = Registry::builtin();
//! let host = registry.default_host(TypeTag::Color3f)?;
//! assert_eq!(host, HostValue::floats([0.0, 0.0, 0.0]));
//!
//! let value = registry.from_host(TypeTag::Color3f, Some(&host))?;
//! assert_eq!(registry.to_host(TypeTag::Color3f, value.as_ref())?, Some(host));
//! # Ok::<(), stagegraph_params::ParamError>(())
//! ```

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Accessors and builders don't need must_use
#![allow(clippy::must_use_candidate)]
// Host numbers are f64 by contract; ints widen and f32 storage narrows
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
// Same-shaped arms over differently typed payloads cannot merge into or-patterns
#![allow(clippy::match_same_arms)]

pub mod descriptor;
pub mod error;
pub mod host;
pub mod registry;
pub mod tag;

mod convert;

pub use descriptor::TypeDescriptor;
pub use error::{ParamError, Result};
pub use host::HostValue;
pub use registry::Registry;
pub use tag::TypeTag;

// Re-export the value model this crate converts for.
pub use stagegraph_values::{AssetPath, SceneValue, ValueType};
