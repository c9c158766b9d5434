//! Scene value model for stagegraph.
//!
//! This crate is the minimal value system the parameter layer converts
//! against:
//! - [`ValueType`] names every native type a parameter can hold
//! - [`SceneValue`] carries one instance of such a type
//! - [`AssetPath`] models an authored asset reference with optional
//!   resolution metadata
//!
//! Math storage is delegated to `glam`; array values mirror the typed
//! array containers of a scene-description library (one `Vec` per
//! element type, no heterogeneous arrays).

// Accessor-heavy value enums don't benefit from must_use annotations everywhere
#![allow(clippy::must_use_candidate)]
// The per-type tables are long matches by nature
#![allow(clippy::too_many_lines)]
// Same-shaped arms over differently typed payloads cannot merge into or-patterns
#![allow(clippy::match_same_arms)]

pub mod asset_path;
pub mod value;
pub mod value_type;

pub use asset_path::AssetPath;
pub use value::SceneValue;
pub use value_type::ValueType;

// Re-export glam types for convenience
pub use glam::{DMat2, DMat3, DMat4, DQuat, DVec2, DVec3, DVec4, Quat, Vec2, Vec3, Vec4};
