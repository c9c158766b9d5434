//! Native value types.
//!
//! [`ValueType`] is the closed set of types a parameter value can take.
//! Several logical parameter kinds share one native type (a color and a
//! plain 3-vector are both [`ValueType::Float3`]); the parameter layer
//! keeps that distinction in its own tag vocabulary.

use std::fmt;

use glam::{DMat2, DMat3, DMat4, DQuat, DVec2, DVec3, DVec4, Quat, Vec2, Vec3, Vec4};
use serde::{Deserialize, Serialize};

use crate::{AssetPath, SceneValue};

/// The native type of a scene value.
///
/// Array types mirror the typed array containers of the scene library:
/// there is one array type per element type that supports arrays. Bools,
/// asset paths, and matrices have no array form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
    // Scalars
    Bool,
    Int,
    Float,
    Double,
    String,
    Token,
    Asset,
    // Vectors
    Float2,
    Float3,
    Float4,
    Double2,
    Double3,
    Double4,
    // Quaternions
    Quath,
    Quatf,
    Quatd,
    // Matrices
    Matrix2d,
    Matrix3d,
    Matrix4d,
    // Arrays
    StringArray,
    TokenArray,
    IntArray,
    FloatArray,
    DoubleArray,
    Float2Array,
    Float3Array,
    Float4Array,
    Double2Array,
    Double3Array,
    Double4Array,
    QuathArray,
    QuatfArray,
    QuatdArray,
}

impl ValueType {
    /// Returns true for array container types.
    pub fn is_array(self) -> bool {
        self.element().is_some()
    }

    /// Returns the element type of an array type.
    pub fn element(self) -> Option<ValueType> {
        match self {
            ValueType::StringArray => Some(ValueType::String),
            ValueType::TokenArray => Some(ValueType::Token),
            ValueType::IntArray => Some(ValueType::Int),
            ValueType::FloatArray => Some(ValueType::Float),
            ValueType::DoubleArray => Some(ValueType::Double),
            ValueType::Float2Array => Some(ValueType::Float2),
            ValueType::Float3Array => Some(ValueType::Float3),
            ValueType::Float4Array => Some(ValueType::Float4),
            ValueType::Double2Array => Some(ValueType::Double2),
            ValueType::Double3Array => Some(ValueType::Double3),
            ValueType::Double4Array => Some(ValueType::Double4),
            ValueType::QuathArray => Some(ValueType::Quath),
            ValueType::QuatfArray => Some(ValueType::Quatf),
            ValueType::QuatdArray => Some(ValueType::Quatd),
            _ => None,
        }
    }

    /// Returns the array type whose elements are `self`, if one exists.
    pub fn array(self) -> Option<ValueType> {
        match self {
            ValueType::String => Some(ValueType::StringArray),
            ValueType::Token => Some(ValueType::TokenArray),
            ValueType::Int => Some(ValueType::IntArray),
            ValueType::Float => Some(ValueType::FloatArray),
            ValueType::Double => Some(ValueType::DoubleArray),
            ValueType::Float2 => Some(ValueType::Float2Array),
            ValueType::Float3 => Some(ValueType::Float3Array),
            ValueType::Float4 => Some(ValueType::Float4Array),
            ValueType::Double2 => Some(ValueType::Double2Array),
            ValueType::Double3 => Some(ValueType::Double3Array),
            ValueType::Double4 => Some(ValueType::Double4Array),
            ValueType::Quath => Some(ValueType::QuathArray),
            ValueType::Quatf => Some(ValueType::QuatfArray),
            ValueType::Quatd => Some(ValueType::QuatdArray),
            _ => None,
        }
    }

    /// Returns the default instance for this type.
    ///
    /// Scalars default to the usual zero values (empty string, `false`,
    /// `0`); math types use `glam`'s own default construction, so
    /// vectors are zero while quaternions and matrices are identity;
    /// arrays default to empty.
    pub fn default_value(self) -> SceneValue {
        match self {
            ValueType::Bool => SceneValue::Bool(false),
            ValueType::Int => SceneValue::Int(0),
            ValueType::Float => SceneValue::Float(0.0),
            ValueType::Double => SceneValue::Double(0.0),
            ValueType::String => SceneValue::String(String::new()),
            ValueType::Token => SceneValue::Token(String::new()),
            ValueType::Asset => SceneValue::Asset(AssetPath::default()),
            ValueType::Float2 => SceneValue::Float2(Vec2::default()),
            ValueType::Float3 => SceneValue::Float3(Vec3::default()),
            ValueType::Float4 => SceneValue::Float4(Vec4::default()),
            ValueType::Double2 => SceneValue::Double2(DVec2::default()),
            ValueType::Double3 => SceneValue::Double3(DVec3::default()),
            ValueType::Double4 => SceneValue::Double4(DVec4::default()),
            ValueType::Quath => SceneValue::Quath(Quat::default()),
            ValueType::Quatf => SceneValue::Quatf(Quat::default()),
            ValueType::Quatd => SceneValue::Quatd(DQuat::default()),
            ValueType::Matrix2d => SceneValue::Matrix2d(DMat2::default()),
            ValueType::Matrix3d => SceneValue::Matrix3d(DMat3::default()),
            ValueType::Matrix4d => SceneValue::Matrix4d(DMat4::default()),
            ValueType::StringArray => SceneValue::StringArray(Vec::new()),
            ValueType::TokenArray => SceneValue::TokenArray(Vec::new()),
            ValueType::IntArray => SceneValue::IntArray(Vec::new()),
            ValueType::FloatArray => SceneValue::FloatArray(Vec::new()),
            ValueType::DoubleArray => SceneValue::DoubleArray(Vec::new()),
            ValueType::Float2Array => SceneValue::Float2Array(Vec::new()),
            ValueType::Float3Array => SceneValue::Float3Array(Vec::new()),
            ValueType::Float4Array => SceneValue::Float4Array(Vec::new()),
            ValueType::Double2Array => SceneValue::Double2Array(Vec::new()),
            ValueType::Double3Array => SceneValue::Double3Array(Vec::new()),
            ValueType::Double4Array => SceneValue::Double4Array(Vec::new()),
            ValueType::QuathArray => SceneValue::QuathArray(Vec::new()),
            ValueType::QuatfArray => SceneValue::QuatfArray(Vec::new()),
            ValueType::QuatdArray => SceneValue::QuatdArray(Vec::new()),
        }
    }

    /// Returns a short name for diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            ValueType::Bool => "bool",
            ValueType::Int => "int",
            ValueType::Float => "float",
            ValueType::Double => "double",
            ValueType::String => "string",
            ValueType::Token => "token",
            ValueType::Asset => "asset path",
            ValueType::Float2 => "vec2f",
            ValueType::Float3 => "vec3f",
            ValueType::Float4 => "vec4f",
            ValueType::Double2 => "vec2d",
            ValueType::Double3 => "vec3d",
            ValueType::Double4 => "vec4d",
            ValueType::Quath => "quath",
            ValueType::Quatf => "quatf",
            ValueType::Quatd => "quatd",
            ValueType::Matrix2d => "matrix2d",
            ValueType::Matrix3d => "matrix3d",
            ValueType::Matrix4d => "matrix4d",
            ValueType::StringArray => "string array",
            ValueType::TokenArray => "token array",
            ValueType::IntArray => "int array",
            ValueType::FloatArray => "float array",
            ValueType::DoubleArray => "double array",
            ValueType::Float2Array => "vec2f array",
            ValueType::Float3Array => "vec3f array",
            ValueType::Float4Array => "vec4f array",
            ValueType::Double2Array => "vec2d array",
            ValueType::Double3Array => "vec3d array",
            ValueType::Double4Array => "vec4d array",
            ValueType::QuathArray => "quath array",
            ValueType::QuatfArray => "quatf array",
            ValueType::QuatdArray => "quatd array",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
