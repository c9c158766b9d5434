//! Typed scene values.

use std::fmt;

use glam::{DMat2, DMat3, DMat4, DQuat, DVec2, DVec3, DVec4, Quat, Vec2, Vec3, Vec4};
use serde::{Deserialize, Serialize};

use crate::{AssetPath, ValueType};

/// A value in the scene's native type system.
///
/// One variant per [`ValueType`]. `Quath` carries full `f32` precision;
/// the half-float type only narrows on the wire, so single precision is
/// the faithful in-memory form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SceneValue {
    Bool(bool),
    Int(i32),
    Float(f32),
    Double(f64),
    String(String),
    Token(String),
    Asset(AssetPath),
    Float2(Vec2),
    Float3(Vec3),
    Float4(Vec4),
    Double2(DVec2),
    Double3(DVec3),
    Double4(DVec4),
    Quath(Quat),
    Quatf(Quat),
    Quatd(DQuat),
    Matrix2d(DMat2),
    Matrix3d(DMat3),
    Matrix4d(DMat4),
    StringArray(Vec<String>),
    TokenArray(Vec<String>),
    IntArray(Vec<i32>),
    FloatArray(Vec<f32>),
    DoubleArray(Vec<f64>),
    Float2Array(Vec<Vec2>),
    Float3Array(Vec<Vec3>),
    Float4Array(Vec<Vec4>),
    Double2Array(Vec<DVec2>),
    Double3Array(Vec<DVec3>),
    Double4Array(Vec<DVec4>),
    QuathArray(Vec<Quat>),
    QuatfArray(Vec<Quat>),
    QuatdArray(Vec<DQuat>),
}

impl SceneValue {
    /// Returns the [`ValueType`] of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            SceneValue::Bool(_) => ValueType::Bool,
            SceneValue::Int(_) => ValueType::Int,
            SceneValue::Float(_) => ValueType::Float,
            SceneValue::Double(_) => ValueType::Double,
            SceneValue::String(_) => ValueType::String,
            SceneValue::Token(_) => ValueType::Token,
            SceneValue::Asset(_) => ValueType::Asset,
            SceneValue::Float2(_) => ValueType::Float2,
            SceneValue::Float3(_) => ValueType::Float3,
            SceneValue::Float4(_) => ValueType::Float4,
            SceneValue::Double2(_) => ValueType::Double2,
            SceneValue::Double3(_) => ValueType::Double3,
            SceneValue::Double4(_) => ValueType::Double4,
            SceneValue::Quath(_) => ValueType::Quath,
            SceneValue::Quatf(_) => ValueType::Quatf,
            SceneValue::Quatd(_) => ValueType::Quatd,
            SceneValue::Matrix2d(_) => ValueType::Matrix2d,
            SceneValue::Matrix3d(_) => ValueType::Matrix3d,
            SceneValue::Matrix4d(_) => ValueType::Matrix4d,
            SceneValue::StringArray(_) => ValueType::StringArray,
            SceneValue::TokenArray(_) => ValueType::TokenArray,
            SceneValue::IntArray(_) => ValueType::IntArray,
            SceneValue::FloatArray(_) => ValueType::FloatArray,
            SceneValue::DoubleArray(_) => ValueType::DoubleArray,
            SceneValue::Float2Array(_) => ValueType::Float2Array,
            SceneValue::Float3Array(_) => ValueType::Float3Array,
            SceneValue::Float4Array(_) => ValueType::Float4Array,
            SceneValue::Double2Array(_) => ValueType::Double2Array,
            SceneValue::Double3Array(_) => ValueType::Double3Array,
            SceneValue::Double4Array(_) => ValueType::Double4Array,
            SceneValue::QuathArray(_) => ValueType::QuathArray,
            SceneValue::QuatfArray(_) => ValueType::QuatfArray,
            SceneValue::QuatdArray(_) => ValueType::QuatdArray,
        }
    }

    /// Returns true for array values.
    pub fn is_array(&self) -> bool {
        self.value_type().is_array()
    }

    /// Returns the element count of an array value.
    pub fn len(&self) -> Option<usize> {
        match self {
            SceneValue::StringArray(v) | SceneValue::TokenArray(v) => Some(v.len()),
            SceneValue::IntArray(v) => Some(v.len()),
            SceneValue::FloatArray(v) => Some(v.len()),
            SceneValue::DoubleArray(v) => Some(v.len()),
            SceneValue::Float2Array(v) => Some(v.len()),
            SceneValue::Float3Array(v) => Some(v.len()),
            SceneValue::Float4Array(v) => Some(v.len()),
            SceneValue::Double2Array(v) => Some(v.len()),
            SceneValue::Double3Array(v) => Some(v.len()),
            SceneValue::Double4Array(v) => Some(v.len()),
            SceneValue::QuathArray(v) | SceneValue::QuatfArray(v) => Some(v.len()),
            SceneValue::QuatdArray(v) => Some(v.len()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SceneValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            SceneValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            SceneValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            SceneValue::Double(d) => Some(*d),
            _ => None,
        }
    }

    /// Returns the string payload of a string or token value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SceneValue::String(s) | SceneValue::Token(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_asset(&self) -> Option<&AssetPath> {
        match self {
            SceneValue::Asset(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_float2(&self) -> Option<Vec2> {
        match self {
            SceneValue::Float2(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float3(&self) -> Option<Vec3> {
        match self {
            SceneValue::Float3(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float4(&self) -> Option<Vec4> {
        match self {
            SceneValue::Float4(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_double2(&self) -> Option<DVec2> {
        match self {
            SceneValue::Double2(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_double3(&self) -> Option<DVec3> {
        match self {
            SceneValue::Double3(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_double4(&self) -> Option<DVec4> {
        match self {
            SceneValue::Double4(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_quath(&self) -> Option<Quat> {
        match self {
            SceneValue::Quath(q) => Some(*q),
            _ => None,
        }
    }

    pub fn as_quatf(&self) -> Option<Quat> {
        match self {
            SceneValue::Quatf(q) => Some(*q),
            _ => None,
        }
    }

    pub fn as_quatd(&self) -> Option<DQuat> {
        match self {
            SceneValue::Quatd(q) => Some(*q),
            _ => None,
        }
    }

    pub fn as_matrix2d(&self) -> Option<DMat2> {
        match self {
            SceneValue::Matrix2d(m) => Some(*m),
            _ => None,
        }
    }

    pub fn as_matrix3d(&self) -> Option<DMat3> {
        match self {
            SceneValue::Matrix3d(m) => Some(*m),
            _ => None,
        }
    }

    pub fn as_matrix4d(&self) -> Option<DMat4> {
        match self {
            SceneValue::Matrix4d(m) => Some(*m),
            _ => None,
        }
    }

    pub fn as_string_array(&self) -> Option<&[String]> {
        match self {
            SceneValue::StringArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_token_array(&self) -> Option<&[String]> {
        match self {
            SceneValue::TokenArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_int_array(&self) -> Option<&[i32]> {
        match self {
            SceneValue::IntArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_float_array(&self) -> Option<&[f32]> {
        match self {
            SceneValue::FloatArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_double_array(&self) -> Option<&[f64]> {
        match self {
            SceneValue::DoubleArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_float2_array(&self) -> Option<&[Vec2]> {
        match self {
            SceneValue::Float2Array(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_float3_array(&self) -> Option<&[Vec3]> {
        match self {
            SceneValue::Float3Array(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_float4_array(&self) -> Option<&[Vec4]> {
        match self {
            SceneValue::Float4Array(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_double2_array(&self) -> Option<&[DVec2]> {
        match self {
            SceneValue::Double2Array(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_double3_array(&self) -> Option<&[DVec3]> {
        match self {
            SceneValue::Double3Array(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_double4_array(&self) -> Option<&[DVec4]> {
        match self {
            SceneValue::Double4Array(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_quath_array(&self) -> Option<&[Quat]> {
        match self {
            SceneValue::QuathArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_quatf_array(&self) -> Option<&[Quat]> {
        match self {
            SceneValue::QuatfArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_quatd_array(&self) -> Option<&[DQuat]> {
        match self {
            SceneValue::QuatdArray(v) => Some(v),
            _ => None,
        }
    }

    /// Builds a token value. Tokens and strings share a payload type, so
    /// `From<String>` is reserved for strings and tokens get a named
    /// constructor.
    pub fn token(token: impl Into<String>) -> SceneValue {
        SceneValue::Token(token.into())
    }
}

impl From<bool> for SceneValue {
    fn from(v: bool) -> Self {
        SceneValue::Bool(v)
    }
}

impl From<i32> for SceneValue {
    fn from(v: i32) -> Self {
        SceneValue::Int(v)
    }
}

impl From<f32> for SceneValue {
    fn from(v: f32) -> Self {
        SceneValue::Float(v)
    }
}

impl From<f64> for SceneValue {
    fn from(v: f64) -> Self {
        SceneValue::Double(v)
    }
}

impl From<&str> for SceneValue {
    fn from(v: &str) -> Self {
        SceneValue::String(v.to_owned())
    }
}

impl From<String> for SceneValue {
    fn from(v: String) -> Self {
        SceneValue::String(v)
    }
}

impl From<AssetPath> for SceneValue {
    fn from(v: AssetPath) -> Self {
        SceneValue::Asset(v)
    }
}

impl From<Vec2> for SceneValue {
    fn from(v: Vec2) -> Self {
        SceneValue::Float2(v)
    }
}

impl From<Vec3> for SceneValue {
    fn from(v: Vec3) -> Self {
        SceneValue::Float3(v)
    }
}

impl From<Vec4> for SceneValue {
    fn from(v: Vec4) -> Self {
        SceneValue::Float4(v)
    }
}

impl From<DVec2> for SceneValue {
    fn from(v: DVec2) -> Self {
        SceneValue::Double2(v)
    }
}

impl From<DVec3> for SceneValue {
    fn from(v: DVec3) -> Self {
        SceneValue::Double3(v)
    }
}

impl From<DVec4> for SceneValue {
    fn from(v: DVec4) -> Self {
        SceneValue::Double4(v)
    }
}

impl From<DQuat> for SceneValue {
    fn from(v: DQuat) -> Self {
        SceneValue::Quatd(v)
    }
}

impl From<DMat2> for SceneValue {
    fn from(v: DMat2) -> Self {
        SceneValue::Matrix2d(v)
    }
}

impl From<DMat3> for SceneValue {
    fn from(v: DMat3) -> Self {
        SceneValue::Matrix3d(v)
    }
}

impl From<DMat4> for SceneValue {
    fn from(v: DMat4) -> Self {
        SceneValue::Matrix4d(v)
    }
}

impl fmt::Display for SceneValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneValue::Bool(b) => write!(f, "{b}"),
            SceneValue::Int(i) => write!(f, "{i}"),
            SceneValue::Float(v) => write!(f, "{v}"),
            SceneValue::Double(v) => write!(f, "{v}"),
            SceneValue::String(s) => write!(f, "{s:?}"),
            SceneValue::Token(s) => write!(f, "{s}"),
            SceneValue::Asset(a) => write!(f, "{a}"),
            SceneValue::Float2(v) => write!(f, "({}, {})", v.x, v.y),
            SceneValue::Float3(v) => write!(f, "({}, {}, {})", v.x, v.y, v.z),
            SceneValue::Float4(v) => write!(f, "({}, {}, {}, {})", v.x, v.y, v.z, v.w),
            SceneValue::Double2(v) => write!(f, "({}, {})", v.x, v.y),
            SceneValue::Double3(v) => write!(f, "({}, {}, {})", v.x, v.y, v.z),
            SceneValue::Double4(v) => write!(f, "({}, {}, {}, {})", v.x, v.y, v.z, v.w),
            SceneValue::Quath(q) | SceneValue::Quatf(q) => {
                write!(f, "({} + {}i + {}j + {}k)", q.w, q.x, q.y, q.z)
            }
            SceneValue::Quatd(q) => write!(f, "({} + {}i + {}j + {}k)", q.w, q.x, q.y, q.z),
            SceneValue::Matrix2d(m) => write!(f, "{m}"),
            SceneValue::Matrix3d(m) => write!(f, "{m}"),
            SceneValue::Matrix4d(m) => write!(f, "{m}"),
            other => {
                let n = other.len().unwrap_or(0);
                write!(f, "[{n} x {}]", other.value_type().element().map_or("?", ValueType::name))
            }
        }
    }
}
