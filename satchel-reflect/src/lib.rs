//! Convert typed values into ordered, dynamically extensible property
//! bags.
//!
//! A reflectable type describes its readable properties through an
//! explicit descriptor table (the [`Reflect`] trait); [`to_property_bag`]
//! reads each property in declaration order into a [`PropertyBag`], a
//! name/value mapping that the consumer may keep extending with keys the
//! original type never had. Property values are carried as the tagged
//! [`Value`] type.

mod bag;
mod error;
mod reflect;
mod value;

pub use bag::PropertyBag;
pub use error::{Error, Result};
pub use reflect::{to_property_bag, Field, Reflect};
pub use value::Value;
