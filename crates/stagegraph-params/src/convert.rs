//! Conversions between scene values and host values.
//!
//! The host shapes are fixed by type, not by descriptor:
//!
//! - vectors flatten to float sequences in component order
//! - quaternions flatten to `[w, x, y, z]`, real part first
//! - matrices flatten to row sequences, outer index is the row
//! - asset paths flatten to their raw path string, dropping any
//!   resolution the scene had attached
//! - arrays convert elementwise, and an element failure reports the
//!   failing index
//!
//! Host floats are `f64`, so every native value has an exact host form
//! except wide doubles driven back through an `f32` slot.

use glam::{DMat2, DMat3, DMat4, DQuat, DVec2, DVec3, DVec4, Vec2, Vec3, Vec4};
use stagegraph_values::{AssetPath, SceneValue, ValueType};

use crate::error::{ParamError, Result};
use crate::host::HostValue;

/// Flattens a scene value into its host form. Total: every scene value
/// has one.
pub(crate) fn to_host(value: &SceneValue) -> HostValue {
    match value {
        SceneValue::Bool(b) => HostValue::Bool(*b),
        SceneValue::Int(i) => HostValue::Int(i64::from(*i)),
        SceneValue::Float(f) => HostValue::Float(f64::from(*f)),
        SceneValue::Double(d) => HostValue::Float(*d),
        SceneValue::String(s) | SceneValue::Token(s) => HostValue::Str(s.clone()),
        SceneValue::Asset(a) => HostValue::Str(a.path().to_owned()),
        SceneValue::Float2(v) => HostValue::floats(v.as_dvec2().to_array()),
        SceneValue::Float3(v) => HostValue::floats(v.as_dvec3().to_array()),
        SceneValue::Float4(v) => HostValue::floats(v.as_dvec4().to_array()),
        SceneValue::Double2(v) => HostValue::floats(v.to_array()),
        SceneValue::Double3(v) => HostValue::floats(v.to_array()),
        SceneValue::Double4(v) => HostValue::floats(v.to_array()),
        SceneValue::Quath(q) | SceneValue::Quatf(q) => quat_to_host(q.as_dquat()),
        SceneValue::Quatd(q) => quat_to_host(*q),
        SceneValue::Matrix2d(m) => rows_to_host(&m.transpose().to_cols_array_2d()),
        SceneValue::Matrix3d(m) => rows_to_host(&m.transpose().to_cols_array_2d()),
        SceneValue::Matrix4d(m) => rows_to_host(&m.transpose().to_cols_array_2d()),
        SceneValue::StringArray(v) | SceneValue::TokenArray(v) => {
            HostValue::Seq(v.iter().map(|s| HostValue::Str(s.clone())).collect())
        }
        SceneValue::IntArray(v) => {
            HostValue::Seq(v.iter().map(|i| HostValue::Int(i64::from(*i))).collect())
        }
        SceneValue::FloatArray(v) => HostValue::floats(v.iter().map(|f| f64::from(*f))),
        SceneValue::DoubleArray(v) => HostValue::floats(v.iter().copied()),
        SceneValue::Float2Array(v) => {
            HostValue::Seq(v.iter().map(|e| HostValue::floats(e.as_dvec2().to_array())).collect())
        }
        SceneValue::Float3Array(v) => {
            HostValue::Seq(v.iter().map(|e| HostValue::floats(e.as_dvec3().to_array())).collect())
        }
        SceneValue::Float4Array(v) => {
            HostValue::Seq(v.iter().map(|e| HostValue::floats(e.as_dvec4().to_array())).collect())
        }
        SceneValue::Double2Array(v) => {
            HostValue::Seq(v.iter().map(|e| HostValue::floats(e.to_array())).collect())
        }
        SceneValue::Double3Array(v) => {
            HostValue::Seq(v.iter().map(|e| HostValue::floats(e.to_array())).collect())
        }
        SceneValue::Double4Array(v) => {
            HostValue::Seq(v.iter().map(|e| HostValue::floats(e.to_array())).collect())
        }
        SceneValue::QuathArray(v) | SceneValue::QuatfArray(v) => {
            HostValue::Seq(v.iter().map(|q| quat_to_host(q.as_dquat())).collect())
        }
        SceneValue::QuatdArray(v) => {
            HostValue::Seq(v.iter().map(|q| quat_to_host(*q)).collect())
        }
    }
}

/// Rebuilds a scene value of the given type from its host form.
pub(crate) fn from_host(ty: ValueType, host: &HostValue) -> Result<SceneValue> {
    let value = match ty {
        ValueType::Bool => SceneValue::Bool(bool_from_host(host)?),
        ValueType::Int => SceneValue::Int(int_from_host(host)?),
        ValueType::Float => SceneValue::Float(f32_from_host(host)?),
        ValueType::Double => SceneValue::Double(f64_from_host(host)?),
        ValueType::String => SceneValue::String(string_from_host(host)?),
        ValueType::Token => SceneValue::Token(string_from_host(host)?),
        ValueType::Asset => SceneValue::Asset(AssetPath::new(string_from_host(host)?)),
        ValueType::Float2 => SceneValue::Float2(vec2_from_host(host)?),
        ValueType::Float3 => SceneValue::Float3(vec3_from_host(host)?),
        ValueType::Float4 => SceneValue::Float4(vec4_from_host(host)?),
        ValueType::Double2 => SceneValue::Double2(dvec2_from_host(host)?),
        ValueType::Double3 => SceneValue::Double3(dvec3_from_host(host)?),
        ValueType::Double4 => SceneValue::Double4(dvec4_from_host(host)?),
        ValueType::Quath => SceneValue::Quath(quat_from_host(host)?.as_quat()),
        ValueType::Quatf => SceneValue::Quatf(quat_from_host(host)?.as_quat()),
        ValueType::Quatd => SceneValue::Quatd(quat_from_host(host)?),
        ValueType::Matrix2d => {
            SceneValue::Matrix2d(DMat2::from_cols_array_2d(&rows_from_host::<2>(host)?).transpose())
        }
        ValueType::Matrix3d => {
            SceneValue::Matrix3d(DMat3::from_cols_array_2d(&rows_from_host::<3>(host)?).transpose())
        }
        ValueType::Matrix4d => {
            SceneValue::Matrix4d(DMat4::from_cols_array_2d(&rows_from_host::<4>(host)?).transpose())
        }
        ValueType::StringArray => SceneValue::StringArray(elements(host, string_from_host)?),
        ValueType::TokenArray => SceneValue::TokenArray(elements(host, string_from_host)?),
        ValueType::IntArray => SceneValue::IntArray(elements(host, int_from_host)?),
        ValueType::FloatArray => SceneValue::FloatArray(elements(host, f32_from_host)?),
        ValueType::DoubleArray => SceneValue::DoubleArray(elements(host, f64_from_host)?),
        ValueType::Float2Array => SceneValue::Float2Array(elements(host, vec2_from_host)?),
        ValueType::Float3Array => SceneValue::Float3Array(elements(host, vec3_from_host)?),
        ValueType::Float4Array => SceneValue::Float4Array(elements(host, vec4_from_host)?),
        ValueType::Double2Array => SceneValue::Double2Array(elements(host, dvec2_from_host)?),
        ValueType::Double3Array => SceneValue::Double3Array(elements(host, dvec3_from_host)?),
        ValueType::Double4Array => SceneValue::Double4Array(elements(host, dvec4_from_host)?),
        ValueType::QuathArray => {
            SceneValue::QuathArray(elements(host, |h| Ok(quat_from_host(h)?.as_quat()))?)
        }
        ValueType::QuatfArray => {
            SceneValue::QuatfArray(elements(host, |h| Ok(quat_from_host(h)?.as_quat()))?)
        }
        ValueType::QuatdArray => SceneValue::QuatdArray(elements(host, quat_from_host)?),
    };
    Ok(value)
}

fn quat_to_host(q: DQuat) -> HostValue {
    HostValue::floats([q.w, q.x, q.y, q.z])
}

fn rows_to_host<const N: usize>(rows: &[[f64; N]; N]) -> HostValue {
    HostValue::Seq(rows.iter().map(|row| HostValue::floats(*row)).collect())
}

fn bool_from_host(host: &HostValue) -> Result<bool> {
    host.as_bool().ok_or_else(|| ParamError::TypeMismatch {
        expected: "bool",
        found: host.kind(),
    })
}

fn int_from_host(host: &HostValue) -> Result<i32> {
    match host {
        HostValue::Int(i) => i32::try_from(*i).map_err(|_| ParamError::IntOutOfRange(*i)),
        other => Err(ParamError::TypeMismatch {
            expected: "int",
            found: other.kind(),
        }),
    }
}

fn f64_from_host(host: &HostValue) -> Result<f64> {
    host.as_f64().ok_or_else(|| ParamError::TypeMismatch {
        expected: "float",
        found: host.kind(),
    })
}

fn f32_from_host(host: &HostValue) -> Result<f32> {
    Ok(f64_from_host(host)? as f32)
}

fn string_from_host(host: &HostValue) -> Result<String> {
    host.as_str()
        .map(str::to_owned)
        .ok_or_else(|| ParamError::TypeMismatch {
            expected: "string",
            found: host.kind(),
        })
}

/// Reads an exact-length float component list.
fn components<const N: usize>(host: &HostValue) -> Result<[f64; N]> {
    let Some(items) = host.as_seq() else {
        return Err(ParamError::TypeMismatch {
            expected: "sequence",
            found: host.kind(),
        });
    };
    if items.len() != N {
        return Err(ParamError::Arity {
            expected: N,
            actual: items.len(),
        });
    }
    let mut out = [0.0; N];
    for (slot, item) in out.iter_mut().zip(items) {
        *slot = f64_from_host(item)?;
    }
    Ok(out)
}

fn vec2_from_host(host: &HostValue) -> Result<Vec2> {
    Ok(DVec2::from_array(components::<2>(host)?).as_vec2())
}

fn vec3_from_host(host: &HostValue) -> Result<Vec3> {
    Ok(DVec3::from_array(components::<3>(host)?).as_vec3())
}

fn vec4_from_host(host: &HostValue) -> Result<Vec4> {
    Ok(DVec4::from_array(components::<4>(host)?).as_vec4())
}

fn dvec2_from_host(host: &HostValue) -> Result<DVec2> {
    Ok(DVec2::from_array(components::<2>(host)?))
}

fn dvec3_from_host(host: &HostValue) -> Result<DVec3> {
    Ok(DVec3::from_array(components::<3>(host)?))
}

fn dvec4_from_host(host: &HostValue) -> Result<DVec4> {
    Ok(DVec4::from_array(components::<4>(host)?))
}

/// Quaternion components arrive real part first.
fn quat_from_host(host: &HostValue) -> Result<DQuat> {
    let [w, x, y, z] = components::<4>(host)?;
    Ok(DQuat::from_xyzw(x, y, z, w))
}

fn rows_from_host<const N: usize>(host: &HostValue) -> Result<[[f64; N]; N]> {
    let Some(rows) = host.as_seq() else {
        return Err(ParamError::TypeMismatch {
            expected: "sequence",
            found: host.kind(),
        });
    };
    if rows.len() != N {
        return Err(ParamError::Arity {
            expected: N,
            actual: rows.len(),
        });
    }
    let mut out = [[0.0; N]; N];
    for (slot, row) in out.iter_mut().zip(rows) {
        *slot = components::<N>(row)?;
    }
    Ok(out)
}

/// Converts each element of a host sequence, tagging failures with the
/// element index.
fn elements<T>(host: &HostValue, element: impl Fn(&HostValue) -> Result<T>) -> Result<Vec<T>> {
    let Some(items) = host.as_seq() else {
        return Err(ParamError::TypeMismatch {
            expected: "sequence",
            found: host.kind(),
        });
    };
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            element(item).map_err(|source| ParamError::Element {
                index,
                source: Box::new(source),
            })
        })
        .collect()
}
