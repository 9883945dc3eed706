use crate::bag::PropertyBag;
use crate::error;
use crate::value::Value;

/// A single readable property of a reflectable type.
///
/// The getter reads the property's current value from an instance. It is
/// fallible; a failing getter's error reaches the caller of
/// [`to_property_bag`] unchanged.
pub struct Field<T> {
    /// The property name, unique within the type.
    pub name: &'static str,
    /// Read the property from an instance.
    pub get: fn(&T) -> error::Result<Value>,
}

/// A type that exposes its readable properties as an ordered descriptor
/// table.
///
/// The table takes the place of runtime reflection: each type lists its
/// own properties, in declaration order.
pub trait Reflect {
    /// The property descriptors of this type, in declaration order.
    fn fields() -> &'static [Field<Self>]
    where
        Self: Sized;
}

/// Read every property of `value` into a fresh [`PropertyBag`].
///
/// Properties are inserted in declaration order, under their own names.
/// The bag stays extensible afterwards: the caller may insert names the
/// type never declared.
///
/// Fails with [`Error::NullReference`](error::Error::NullReference) when
/// `value` is absent, and propagates any getter failure unchanged. The
/// value itself is only read, never modified.
pub fn to_property_bag<V: Reflect + 'static>(value: Option<&V>) -> error::Result<PropertyBag> {
    let value = value.ok_or(error::Error::NullReference)?;
    let mut bag = PropertyBag::new();
    for field in V::fields() {
        bag.insert(field.name, (field.get)(value)?);
    }
    Ok(bag)
}
