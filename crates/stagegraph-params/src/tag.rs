//! Parameter type tags.
//!
//! Tags are the vocabulary the node editor keys widgets on. The tag set
//! is richer than the native type set: `color3f`, `point3f`, and
//! `normal3f` all store a [`ValueType::Float3`] but drive different
//! widgets, and `file`, `text`, and `choose` are all string-backed.
//!
//! [`ValueType::Float3`]: stagegraph_values::ValueType::Float3

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ParamError, Result};

/// A parameter type tag.
///
/// The serialized form is the tag string used in saved graphs, with
/// array tags carrying a `[]` suffix (`"float3[]"`). Ordering follows
/// the builtin table so sorted containers iterate in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TypeTag {
    #[serde(rename = "string")]
    String,
    #[serde(rename = "token")]
    Token,
    #[serde(rename = "file")]
    File,
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "asset")]
    Asset,
    #[serde(rename = "choose")]
    Choose,
    #[serde(rename = "bool")]
    Bool,
    #[serde(rename = "int")]
    Int,
    #[serde(rename = "float")]
    Float,
    #[serde(rename = "double")]
    Double,
    #[serde(rename = "float2")]
    Float2,
    #[serde(rename = "float3")]
    Float3,
    #[serde(rename = "float4")]
    Float4,
    #[serde(rename = "double2")]
    Double2,
    #[serde(rename = "double3")]
    Double3,
    #[serde(rename = "double4")]
    Double4,
    #[serde(rename = "color3f")]
    Color3f,
    #[serde(rename = "point3f")]
    Point3f,
    #[serde(rename = "normal3f")]
    Normal3f,
    #[serde(rename = "quatd")]
    Quatd,
    #[serde(rename = "quatf")]
    Quatf,
    #[serde(rename = "quath")]
    Quath,
    #[serde(rename = "matrix2d")]
    Matrix2d,
    #[serde(rename = "matrix3d")]
    Matrix3d,
    #[serde(rename = "matrix4d")]
    Matrix4d,
    #[serde(rename = "string[]")]
    StringArray,
    #[serde(rename = "int[]")]
    IntArray,
    #[serde(rename = "token[]")]
    TokenArray,
    #[serde(rename = "float[]")]
    FloatArray,
    #[serde(rename = "double[]")]
    DoubleArray,
    #[serde(rename = "float2[]")]
    Float2Array,
    #[serde(rename = "float3[]")]
    Float3Array,
    #[serde(rename = "float4[]")]
    Float4Array,
    #[serde(rename = "double2[]")]
    Double2Array,
    #[serde(rename = "double3[]")]
    Double3Array,
    #[serde(rename = "double4[]")]
    Double4Array,
    #[serde(rename = "color3f[]")]
    Color3fArray,
    #[serde(rename = "point3f[]")]
    Point3fArray,
    #[serde(rename = "normal3f[]")]
    Normal3fArray,
    #[serde(rename = "quatd[]")]
    QuatdArray,
    #[serde(rename = "quatf[]")]
    QuatfArray,
    #[serde(rename = "quath[]")]
    QuathArray,
}

impl TypeTag {
    /// Every builtin tag, in builtin table order.
    pub const ALL: [TypeTag; 42] = [
        TypeTag::String,
        TypeTag::Token,
        TypeTag::File,
        TypeTag::Text,
        TypeTag::Asset,
        TypeTag::Choose,
        TypeTag::Bool,
        TypeTag::Int,
        TypeTag::Float,
        TypeTag::Double,
        TypeTag::Float2,
        TypeTag::Float3,
        TypeTag::Float4,
        TypeTag::Double2,
        TypeTag::Double3,
        TypeTag::Double4,
        TypeTag::Color3f,
        TypeTag::Point3f,
        TypeTag::Normal3f,
        TypeTag::Quatd,
        TypeTag::Quatf,
        TypeTag::Quath,
        TypeTag::Matrix2d,
        TypeTag::Matrix3d,
        TypeTag::Matrix4d,
        TypeTag::StringArray,
        TypeTag::IntArray,
        TypeTag::TokenArray,
        TypeTag::FloatArray,
        TypeTag::DoubleArray,
        TypeTag::Float2Array,
        TypeTag::Float3Array,
        TypeTag::Float4Array,
        TypeTag::Double2Array,
        TypeTag::Double3Array,
        TypeTag::Double4Array,
        TypeTag::Color3fArray,
        TypeTag::Point3fArray,
        TypeTag::Normal3fArray,
        TypeTag::QuatdArray,
        TypeTag::QuatfArray,
        TypeTag::QuathArray,
    ];

    /// Returns the tag string.
    pub fn as_str(self) -> &'static str {
        match self {
            TypeTag::String => "string",
            TypeTag::Token => "token",
            TypeTag::File => "file",
            TypeTag::Text => "text",
            TypeTag::Asset => "asset",
            TypeTag::Choose => "choose",
            TypeTag::Bool => "bool",
            TypeTag::Int => "int",
            TypeTag::Float => "float",
            TypeTag::Double => "double",
            TypeTag::Float2 => "float2",
            TypeTag::Float3 => "float3",
            TypeTag::Float4 => "float4",
            TypeTag::Double2 => "double2",
            TypeTag::Double3 => "double3",
            TypeTag::Double4 => "double4",
            TypeTag::Color3f => "color3f",
            TypeTag::Point3f => "point3f",
            TypeTag::Normal3f => "normal3f",
            TypeTag::Quatd => "quatd",
            TypeTag::Quatf => "quatf",
            TypeTag::Quath => "quath",
            TypeTag::Matrix2d => "matrix2d",
            TypeTag::Matrix3d => "matrix3d",
            TypeTag::Matrix4d => "matrix4d",
            TypeTag::StringArray => "string[]",
            TypeTag::IntArray => "int[]",
            TypeTag::TokenArray => "token[]",
            TypeTag::FloatArray => "float[]",
            TypeTag::DoubleArray => "double[]",
            TypeTag::Float2Array => "float2[]",
            TypeTag::Float3Array => "float3[]",
            TypeTag::Float4Array => "float4[]",
            TypeTag::Double2Array => "double2[]",
            TypeTag::Double3Array => "double3[]",
            TypeTag::Double4Array => "double4[]",
            TypeTag::Color3fArray => "color3f[]",
            TypeTag::Point3fArray => "point3f[]",
            TypeTag::Normal3fArray => "normal3f[]",
            TypeTag::QuatdArray => "quatd[]",
            TypeTag::QuatfArray => "quatf[]",
            TypeTag::QuathArray => "quath[]",
        }
    }

    /// Returns the element tag of an array tag.
    pub fn element(self) -> Option<TypeTag> {
        match self {
            TypeTag::StringArray => Some(TypeTag::String),
            TypeTag::IntArray => Some(TypeTag::Int),
            TypeTag::TokenArray => Some(TypeTag::Token),
            TypeTag::FloatArray => Some(TypeTag::Float),
            TypeTag::DoubleArray => Some(TypeTag::Double),
            TypeTag::Float2Array => Some(TypeTag::Float2),
            TypeTag::Float3Array => Some(TypeTag::Float3),
            TypeTag::Float4Array => Some(TypeTag::Float4),
            TypeTag::Double2Array => Some(TypeTag::Double2),
            TypeTag::Double3Array => Some(TypeTag::Double3),
            TypeTag::Double4Array => Some(TypeTag::Double4),
            TypeTag::Color3fArray => Some(TypeTag::Color3f),
            TypeTag::Point3fArray => Some(TypeTag::Point3f),
            TypeTag::Normal3fArray => Some(TypeTag::Normal3f),
            TypeTag::QuatdArray => Some(TypeTag::Quatd),
            TypeTag::QuatfArray => Some(TypeTag::Quatf),
            TypeTag::QuathArray => Some(TypeTag::Quath),
            _ => None,
        }
    }

    /// Returns the array tag whose elements carry this tag, if one exists.
    ///
    /// Not every scalar tag has an array form: the string-backed widget
    /// tags (`file`, `text`, `choose`), `asset`, `bool`, and the matrix
    /// tags are scalar-only.
    pub fn array(self) -> Option<TypeTag> {
        match self {
            TypeTag::String => Some(TypeTag::StringArray),
            TypeTag::Int => Some(TypeTag::IntArray),
            TypeTag::Token => Some(TypeTag::TokenArray),
            TypeTag::Float => Some(TypeTag::FloatArray),
            TypeTag::Double => Some(TypeTag::DoubleArray),
            TypeTag::Float2 => Some(TypeTag::Float2Array),
            TypeTag::Float3 => Some(TypeTag::Float3Array),
            TypeTag::Float4 => Some(TypeTag::Float4Array),
            TypeTag::Double2 => Some(TypeTag::Double2Array),
            TypeTag::Double3 => Some(TypeTag::Double3Array),
            TypeTag::Double4 => Some(TypeTag::Double4Array),
            TypeTag::Color3f => Some(TypeTag::Color3fArray),
            TypeTag::Point3f => Some(TypeTag::Point3fArray),
            TypeTag::Normal3f => Some(TypeTag::Normal3fArray),
            TypeTag::Quatd => Some(TypeTag::QuatdArray),
            TypeTag::Quatf => Some(TypeTag::QuatfArray),
            TypeTag::Quath => Some(TypeTag::QuathArray),
            _ => None,
        }
    }

    /// Returns true for array tags.
    pub fn is_array(self) -> bool {
        self.element().is_some()
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeTag {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<TypeTag> {
        TypeTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| ParamError::UnknownTag(s.to_owned()))
    }
}
