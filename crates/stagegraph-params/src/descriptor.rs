//! Type descriptors.

use serde::{Deserialize, Serialize};
use stagegraph_values::{SceneValue, ValueType};

use crate::convert;
use crate::error::{ParamError, Result};
use crate::host::HostValue;
use crate::tag::TypeTag;

/// One row of the parameter type table: a tag, the native type stored
/// under it, and for array tags the element tag conversion delegates to.
///
/// Absence flows through conversion untouched: an absent value in is an
/// absent value out, never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    tag: TypeTag,
    value_type: ValueType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    element: Option<TypeTag>,
}

impl TypeDescriptor {
    /// Builds a scalar descriptor.
    pub fn scalar(tag: TypeTag, value_type: ValueType) -> TypeDescriptor {
        TypeDescriptor {
            tag,
            value_type,
            element: None,
        }
    }

    /// Builds an array descriptor delegating elementwise to `element`.
    pub fn array(tag: TypeTag, value_type: ValueType, element: TypeTag) -> TypeDescriptor {
        TypeDescriptor {
            tag,
            value_type,
            element: Some(element),
        }
    }

    /// Returns the tag this descriptor is registered under.
    pub fn tag(&self) -> TypeTag {
        self.tag
    }

    /// Returns the native type stored under this tag.
    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// Returns the element tag of an array descriptor.
    pub fn element(&self) -> Option<TypeTag> {
        self.element
    }

    /// Returns true for array descriptors.
    pub fn is_array(&self) -> bool {
        self.element.is_some()
    }

    /// Returns the default native value for this tag.
    pub fn default_value(&self) -> SceneValue {
        self.value_type.default_value()
    }

    /// Returns the default value in host form.
    pub fn default_host(&self) -> HostValue {
        convert::to_host(&self.default_value())
    }

    /// Flattens a native value into host form.
    ///
    /// The value must actually store this descriptor's type; handing a
    /// `bool` to a `float3` descriptor is a shape error, not a cast.
    pub fn to_host(&self, value: Option<&SceneValue>) -> Result<Option<HostValue>> {
        let Some(value) = value else {
            return Ok(None);
        };
        if value.value_type() != self.value_type {
            return Err(ParamError::TypeMismatch {
                expected: self.value_type.name(),
                found: value.value_type().name(),
            });
        }
        Ok(Some(convert::to_host(value)))
    }

    /// Rebuilds a native value from host form.
    pub fn from_host(&self, host: Option<&HostValue>) -> Result<Option<SceneValue>> {
        host.map(|h| convert::from_host(self.value_type, h))
            .transpose()
    }
}
