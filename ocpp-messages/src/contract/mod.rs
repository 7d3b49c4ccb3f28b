#[macro_use]
mod macros;

mod custom_data;
mod error;
mod role;
mod validate;

pub use custom_data::{CustomData, JsonValue};
pub use error::{Constraint, ConstraintViolation, ParseEnumError};
pub use role::{Confirmation, Request};
pub use validate::{Finite, MaxItems, MaxLen, MinItems, Nested, NonEmpty, Rule, Validate};

pub(crate) use error::rejected;
