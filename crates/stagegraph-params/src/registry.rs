//! The parameter type registry.
//!
//! A [`Registry`] is built once, validated as it is built, and then
//! only read. There is no global instance: whoever owns the editor
//! session owns its registry and hands out shared references.

use std::collections::BTreeMap;

use stagegraph_values::{SceneValue, ValueType};

use crate::descriptor::TypeDescriptor;
use crate::error::{ParamError, Result};
use crate::host::HostValue;
use crate::tag::TypeTag;

/// An immutable-after-construction table of type descriptors.
///
/// Registration validates descriptors eagerly: an array descriptor is
/// only accepted once its element tag is registered with the matching
/// element storage, so a registered table can never fail structurally
/// at conversion time. Iteration order is tag order, which for the
/// builtin table is table order.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    descriptors: BTreeMap<TypeTag, TypeDescriptor>,
}

impl Registry {
    /// Creates a new empty registry.
    pub fn new() -> Registry {
        Registry::default()
    }

    /// Builds the builtin table: every [`TypeTag`], bound to its native
    /// storage, scalars first so array elements resolve.
    pub fn builtin() -> Registry {
        let mut registry = Registry::new();
        for tag in TypeTag::ALL {
            let descriptor = match tag.element() {
                Some(element) => TypeDescriptor::array(tag, native_type(tag), element),
                None => TypeDescriptor::scalar(tag, native_type(tag)),
            };
            registry
                .register(descriptor)
                .expect("builtin descriptor table is self-consistent");
        }
        log::debug!("built builtin type table with {} descriptors", registry.len());
        registry
    }

    /// Registers a descriptor.
    ///
    /// Returns an error if the tag is taken, if an array descriptor's
    /// element tag is unregistered or stores a different element type,
    /// or if the element declaration does not match the storage type.
    pub fn register(&mut self, descriptor: TypeDescriptor) -> Result<()> {
        let tag = descriptor.tag();
        if self.descriptors.contains_key(&tag) {
            return Err(ParamError::TagExists(tag));
        }

        match (descriptor.element(), descriptor.value_type().element()) {
            (None, None) => {}
            (Some(element), Some(storage)) => {
                let Some(element_descriptor) = self.get(element) else {
                    return Err(ParamError::UnknownElement { tag, element });
                };
                if element_descriptor.value_type() != storage {
                    return Err(ParamError::ElementMismatch {
                        tag,
                        element,
                        storage,
                        found: element_descriptor.value_type(),
                    });
                }
            }
            _ => {
                return Err(ParamError::MalformedDescriptor {
                    tag,
                    storage: descriptor.value_type(),
                });
            }
        }

        log::trace!("registered type tag '{tag}'");
        self.descriptors.insert(tag, descriptor);
        Ok(())
    }

    /// Returns the descriptor for a tag, if registered.
    pub fn get(&self, tag: TypeTag) -> Option<&TypeDescriptor> {
        self.descriptors.get(&tag)
    }

    /// Returns the descriptor for a tag.
    pub fn descriptor(&self, tag: TypeTag) -> Result<&TypeDescriptor> {
        self.get(tag)
            .ok_or_else(|| ParamError::UnknownTag(tag.as_str().to_owned()))
    }

    /// Returns the descriptor for a tag string such as `"float3[]"`.
    pub fn descriptor_named(&self, name: &str) -> Result<&TypeDescriptor> {
        self.descriptor(name.parse()?)
    }

    /// Checks whether a tag is registered.
    pub fn contains(&self, tag: TypeTag) -> bool {
        self.descriptors.contains_key(&tag)
    }

    /// Returns an iterator over all descriptors, in tag order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.descriptors.values()
    }

    /// Returns an iterator over all registered tags, in tag order.
    pub fn tags(&self) -> impl Iterator<Item = TypeTag> + '_ {
        self.descriptors.keys().copied()
    }

    /// Returns the number of registered descriptors.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Returns true if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Returns the default native value for a tag.
    pub fn default_value(&self, tag: TypeTag) -> Result<SceneValue> {
        Ok(self.descriptor(tag)?.default_value())
    }

    /// Returns the default value for a tag in host form.
    pub fn default_host(&self, tag: TypeTag) -> Result<HostValue> {
        Ok(self.descriptor(tag)?.default_host())
    }

    /// Flattens a native value into host form under a tag's descriptor.
    pub fn to_host(&self, tag: TypeTag, value: Option<&SceneValue>) -> Result<Option<HostValue>> {
        self.descriptor(tag)?.to_host(value)
    }

    /// Rebuilds a native value from host form under a tag's descriptor.
    pub fn from_host(&self, tag: TypeTag, host: Option<&HostValue>) -> Result<Option<SceneValue>> {
        self.descriptor(tag)?.from_host(host)
    }
}

/// Native storage for each builtin tag.
///
/// Widget-only distinctions collapse here: the string-backed widget
/// tags all store [`ValueType::String`], and the three semantic
/// 3-vector tags all store [`ValueType::Float3`].
fn native_type(tag: TypeTag) -> ValueType {
    match tag {
        TypeTag::String | TypeTag::File | TypeTag::Text | TypeTag::Choose => ValueType::String,
        TypeTag::Token => ValueType::Token,
        TypeTag::Asset => ValueType::Asset,
        TypeTag::Bool => ValueType::Bool,
        TypeTag::Int => ValueType::Int,
        TypeTag::Float => ValueType::Float,
        TypeTag::Double => ValueType::Double,
        TypeTag::Float2 => ValueType::Float2,
        TypeTag::Float3 | TypeTag::Color3f | TypeTag::Point3f | TypeTag::Normal3f => {
            ValueType::Float3
        }
        TypeTag::Float4 => ValueType::Float4,
        TypeTag::Double2 => ValueType::Double2,
        TypeTag::Double3 => ValueType::Double3,
        TypeTag::Double4 => ValueType::Double4,
        TypeTag::Quatd => ValueType::Quatd,
        TypeTag::Quatf => ValueType::Quatf,
        TypeTag::Quath => ValueType::Quath,
        TypeTag::Matrix2d => ValueType::Matrix2d,
        TypeTag::Matrix3d => ValueType::Matrix3d,
        TypeTag::Matrix4d => ValueType::Matrix4d,
        TypeTag::StringArray => ValueType::StringArray,
        TypeTag::IntArray => ValueType::IntArray,
        TypeTag::TokenArray => ValueType::TokenArray,
        TypeTag::FloatArray => ValueType::FloatArray,
        TypeTag::DoubleArray => ValueType::DoubleArray,
        TypeTag::Float2Array => ValueType::Float2Array,
        TypeTag::Float3Array
        | TypeTag::Color3fArray
        | TypeTag::Point3fArray
        | TypeTag::Normal3fArray => ValueType::Float3Array,
        TypeTag::Float4Array => ValueType::Float4Array,
        TypeTag::Double2Array => ValueType::Double2Array,
        TypeTag::Double3Array => ValueType::Double3Array,
        TypeTag::Double4Array => ValueType::Double4Array,
        TypeTag::QuatdArray => ValueType::QuatdArray,
        TypeTag::QuatfArray => ValueType::QuatfArray,
        TypeTag::QuathArray => ValueType::QuathArray,
    }
}
