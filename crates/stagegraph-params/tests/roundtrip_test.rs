//! Conversion integration tests for stagegraph-params.
//!
//! Drives the builtin registry the way a node editor would: native
//! values out to widget-side host values (and JSON), edited host values
//! back in, absence flowing untouched in both directions.

use glam::{DMat2, DMat3, DMat4, DQuat, DVec2, DVec3, DVec4, Quat, Vec2, Vec3, Vec4};
use proptest::proptest;
use serde_json::{json, Value};
use stagegraph_params::*;

/// A representative value per native type. Float components are chosen
/// exactly representable so round trips compare with plain equality.
fn sample(value_type: ValueType) -> SceneValue {
    match value_type {
        ValueType::Bool => SceneValue::Bool(true),
        ValueType::Int => SceneValue::Int(-7),
        ValueType::Float => SceneValue::Float(0.25),
        ValueType::Double => SceneValue::Double(-1.5),
        ValueType::String => SceneValue::String("grid".into()),
        ValueType::Token => SceneValue::token("catmullClark"),
        ValueType::Asset => SceneValue::Asset(AssetPath::new("textures/x.exr")),
        ValueType::Float2 => SceneValue::Float2(Vec2::new(0.5, -1.0)),
        ValueType::Float3 => SceneValue::Float3(Vec3::new(0.25, 0.5, 0.75)),
        ValueType::Float4 => SceneValue::Float4(Vec4::new(1.0, 0.0, -2.0, 0.5)),
        ValueType::Double2 => SceneValue::Double2(DVec2::new(0.1, 0.2)),
        ValueType::Double3 => SceneValue::Double3(DVec3::new(0.1, 0.2, 0.3)),
        ValueType::Double4 => SceneValue::Double4(DVec4::new(0.1, 0.2, 0.3, 0.4)),
        ValueType::Quath => SceneValue::Quath(Quat::from_xyzw(0.5, 0.5, 0.5, 0.5)),
        ValueType::Quatf => SceneValue::Quatf(Quat::from_xyzw(0.0, 1.0, 0.0, 0.0)),
        ValueType::Quatd => SceneValue::Quatd(DQuat::from_xyzw(0.1, 0.2, 0.3, 0.9)),
        ValueType::Matrix2d => {
            SceneValue::Matrix2d(DMat2::from_cols_array(&[1.0, 3.0, 2.0, 4.0]))
        }
        ValueType::Matrix3d => {
            SceneValue::Matrix3d(DMat3::from_diagonal(DVec3::new(1.0, 2.0, 3.0)))
        }
        ValueType::Matrix4d => {
            SceneValue::Matrix4d(DMat4::from_translation(DVec3::new(1.0, 2.0, 3.0)))
        }
        ValueType::StringArray => SceneValue::StringArray(vec!["a".into(), "b".into()]),
        ValueType::TokenArray => SceneValue::TokenArray(vec!["uv".into(), "uv2".into()]),
        ValueType::IntArray => SceneValue::IntArray(vec![1, -2, 3]),
        ValueType::FloatArray => SceneValue::FloatArray(vec![0.5, 1.5]),
        ValueType::DoubleArray => SceneValue::DoubleArray(vec![0.1, 0.2]),
        ValueType::Float2Array => SceneValue::Float2Array(vec![Vec2::X, Vec2::Y]),
        ValueType::Float3Array => SceneValue::Float3Array(vec![Vec3::X, Vec3::splat(0.5)]),
        ValueType::Float4Array => SceneValue::Float4Array(vec![Vec4::W]),
        ValueType::Double2Array => SceneValue::Double2Array(vec![DVec2::new(1.0, 2.0)]),
        ValueType::Double3Array => SceneValue::Double3Array(vec![DVec3::new(1.0, 2.0, 3.0)]),
        ValueType::Double4Array => {
            SceneValue::Double4Array(vec![DVec4::new(1.0, 2.0, 3.0, 4.0)])
        }
        ValueType::QuathArray => SceneValue::QuathArray(vec![Quat::IDENTITY]),
        ValueType::QuatfArray => {
            SceneValue::QuatfArray(vec![Quat::from_xyzw(0.5, 0.5, 0.5, 0.5), Quat::IDENTITY])
        }
        ValueType::QuatdArray => SceneValue::QuatdArray(vec![DQuat::IDENTITY]),
    }
}

#[test]
fn test_every_tag_round_trips_a_native_value() {
    let registry = Registry::builtin();
    for descriptor in registry.iter() {
        let value = sample(descriptor.value_type());
        let host = descriptor.to_host(Some(&value)).unwrap().unwrap();
        let back = descriptor.from_host(Some(&host)).unwrap().unwrap();
        assert_eq!(back, value, "round trip failed for '{}'", descriptor.tag());
    }
}

#[test]
fn test_every_tag_round_trips_through_json() {
    let registry = Registry::builtin();
    for descriptor in registry.iter() {
        let value = sample(descriptor.value_type());
        let json = descriptor.to_host(Some(&value)).unwrap().unwrap().to_json();
        let host = HostValue::from_json(&json).unwrap().unwrap();
        let back = descriptor.from_host(Some(&host)).unwrap().unwrap();
        assert_eq!(back, value, "JSON circuit failed for '{}'", descriptor.tag());
    }
}

#[test]
fn test_every_default_round_trips() {
    let registry = Registry::builtin();
    for descriptor in registry.iter() {
        let host = descriptor.default_host();
        let back = descriptor.from_host(Some(&host)).unwrap().unwrap();
        assert_eq!(back, descriptor.default_value());
    }
}

#[test]
fn test_absent_flows_through_registry_and_json() {
    let registry = Registry::builtin();

    let host = registry.to_host(TypeTag::Float3, None).unwrap();
    assert_eq!(host, None);

    let json = host.map_or(Value::Null, |h| h.to_json());
    assert_eq!(json, Value::Null);

    let back = HostValue::from_json(&json).unwrap();
    assert_eq!(back, None);
    assert_eq!(registry.from_host(TypeTag::Float3, back.as_ref()).unwrap(), None);
}

#[test]
fn test_float3_default_host_is_zero_triple() {
    let registry = Registry::builtin();
    let host = registry.default_host(TypeTag::Float3).unwrap();
    assert_eq!(host.to_json(), json!([0.0, 0.0, 0.0]));
}

#[test]
fn test_float3_edit_round_trips_host_first() {
    let registry = Registry::builtin();
    let edited = HostValue::floats([1.0, 2.0, 3.0]);

    let value = registry
        .from_host(TypeTag::Float3, Some(&edited))
        .unwrap()
        .unwrap();
    assert_eq!(value, SceneValue::Float3(Vec3::new(1.0, 2.0, 3.0)));

    let back = registry.to_host(TypeTag::Float3, Some(&value)).unwrap().unwrap();
    assert_eq!(back, edited);
}

#[test]
fn test_string_array_host_form() {
    let registry = Registry::builtin();
    let value = SceneValue::StringArray(vec!["a".into(), "b".into()]);
    let host = registry.to_host(TypeTag::StringArray, Some(&value)).unwrap().unwrap();
    assert_eq!(host.to_json(), json!(["a", "b"]));
}

#[test]
fn test_asset_widget_sees_authored_path_only() {
    let registry = Registry::builtin();
    let value = SceneValue::Asset(AssetPath::with_resolved(
        "textures/x.exr",
        "/mnt/show/textures/x.exr",
    ));

    let host = registry.to_host(TypeTag::Asset, Some(&value)).unwrap().unwrap();
    assert_eq!(host, HostValue::Str("textures/x.exr".into()));

    // Coming back, the path is unresolved until a resolver touches it.
    let back = registry.from_host(TypeTag::Asset, Some(&host)).unwrap().unwrap();
    assert_eq!(back, SceneValue::Asset(AssetPath::new("textures/x.exr")));
}

#[test]
fn test_quaternion_widget_order_is_real_first() {
    let registry = Registry::builtin();
    let q = Quat::from_xyzw(0.5, 0.25, -0.5, 0.625);

    let host = registry
        .to_host(TypeTag::Quatf, Some(&SceneValue::Quatf(q)))
        .unwrap()
        .unwrap();
    assert_eq!(host.to_json(), json!([0.625, 0.5, 0.25, -0.5]));

    let back = registry.from_host(TypeTag::Quatf, Some(&host)).unwrap().unwrap();
    assert_eq!(back, SceneValue::Quatf(q));
}

#[test]
fn test_matrix_widget_rows() {
    let registry = Registry::builtin();
    // Rows [[1, 2, 3], [4, 5, 6], [7, 8, 9]] in column-major storage.
    let m = DMat3::from_cols_array(&[1.0, 4.0, 7.0, 2.0, 5.0, 8.0, 3.0, 6.0, 9.0]);

    let host = registry
        .to_host(TypeTag::Matrix3d, Some(&SceneValue::Matrix3d(m)))
        .unwrap()
        .unwrap();
    assert_eq!(
        host.to_json(),
        json!([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]])
    );

    let back = registry.from_host(TypeTag::Matrix3d, Some(&host)).unwrap().unwrap();
    assert_eq!(back, SceneValue::Matrix3d(m));
}

#[test]
fn test_color_tag_rejects_double_precision_storage() {
    let registry = Registry::builtin();
    let err = registry
        .to_host(
            TypeTag::Color3f,
            Some(&SceneValue::Double3(DVec3::new(0.1, 0.2, 0.3))),
        )
        .unwrap_err();
    assert!(matches!(err, ParamError::TypeMismatch { .. }));
}

#[test]
fn test_int_widget_value_widens_for_double_tag() {
    let registry = Registry::builtin();
    let back = registry
        .from_host(TypeTag::Double, Some(&HostValue::Int(4)))
        .unwrap()
        .unwrap();
    assert_eq!(back, SceneValue::Double(4.0));
}

#[test]
fn test_int_tag_rejects_out_of_range() {
    let registry = Registry::builtin();
    let err = registry
        .from_host(TypeTag::Int, Some(&HostValue::Int(i64::MIN)))
        .unwrap_err();
    assert!(matches!(err, ParamError::IntOutOfRange(i64::MIN)));
}

#[test]
fn test_vector_arity_is_checked() {
    let registry = Registry::builtin();
    let err = registry
        .from_host(TypeTag::Float3, Some(&HostValue::floats([1.0, 2.0, 3.0, 4.0])))
        .unwrap_err();
    assert!(matches!(err, ParamError::Arity { expected: 3, actual: 4 }));
}

#[test]
fn test_array_failure_points_at_element() {
    let registry = Registry::builtin();
    let host = HostValue::Seq(vec![
        HostValue::floats([1.0, 2.0, 3.0]),
        HostValue::floats([1.0, 2.0]),
        HostValue::floats([4.0, 5.0, 6.0]),
    ]);

    let err = registry.from_host(TypeTag::Float3Array, Some(&host)).unwrap_err();
    let ParamError::Element { index, source } = err else {
        panic!("expected an element error, got {err}");
    };
    assert_eq!(index, 1);
    assert!(matches!(*source, ParamError::Arity { expected: 3, actual: 2 }));
}

#[test]
fn test_array_host_matches_elementwise_conversion() {
    let registry = Registry::builtin();
    let items = vec![Vec3::X, Vec3::Y, Vec3::splat(0.5)];

    let array_host = registry
        .to_host(
            TypeTag::Float3Array,
            Some(&SceneValue::Float3Array(items.clone())),
        )
        .unwrap()
        .unwrap();

    let elements = array_host.as_seq().expect("array host is a sequence");
    assert_eq!(elements.len(), items.len());
    for (element_host, item) in elements.iter().zip(&items) {
        let scalar_host = registry
            .to_host(TypeTag::Float3, Some(&SceneValue::Float3(*item)))
            .unwrap()
            .unwrap();
        assert_eq!(*element_host, scalar_host);
    }
}

#[test]
fn test_unregistered_tag_lookup_fails() {
    let mut registry = Registry::new();
    registry
        .register(TypeDescriptor::scalar(TypeTag::Float, ValueType::Float))
        .unwrap();

    let err = registry.to_host(TypeTag::Double, None).unwrap_err();
    assert!(matches!(err, ParamError::UnknownTag(s) if s == "double"));
}

proptest! {
    #[test]
    fn prop_float3_round_trips(x in -1.0e6f32..1.0e6, y in -1.0e6f32..1.0e6, z in -1.0e6f32..1.0e6) {
        let registry = Registry::builtin();
        let value = SceneValue::Float3(Vec3::new(x, y, z));
        let host = registry.to_host(TypeTag::Float3, Some(&value)).unwrap().unwrap();
        let back = registry.from_host(TypeTag::Float3, Some(&host)).unwrap().unwrap();
        proptest::prop_assert_eq!(back, value);
    }

    #[test]
    fn prop_int_array_round_trips(values in proptest::collection::vec(proptest::num::i32::ANY, 0..32)) {
        let registry = Registry::builtin();
        let value = SceneValue::IntArray(values);
        let host = registry.to_host(TypeTag::IntArray, Some(&value)).unwrap().unwrap();
        let back = registry.from_host(TypeTag::IntArray, Some(&host)).unwrap().unwrap();
        proptest::prop_assert_eq!(back, value);
    }

    #[test]
    fn prop_double_survives_json(d in -1.0e12f64..1.0e12) {
        let registry = Registry::builtin();
        let value = SceneValue::Double(d);
        let json = registry
            .to_host(TypeTag::Double, Some(&value))
            .unwrap()
            .unwrap()
            .to_json();
        let host = HostValue::from_json(&json).unwrap().unwrap();
        let back = registry.from_host(TypeTag::Double, Some(&host)).unwrap().unwrap();
        proptest::prop_assert_eq!(back, value);
    }
}
