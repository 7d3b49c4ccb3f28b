use alloc::{format, string::String, vec::Vec};
use core::fmt::Debug;

use super::error::{Constraint, ConstraintViolation};

/// Aggregate check over a message or value object.
///
/// Implementations must be pure: checking never changes field state, so it
/// may run any number of times between mutations.
pub trait Validate {
    /// Returns the first violated field predicate, nested objects included.
    fn check(&self) -> Result<(), ConstraintViolation>;

    fn validate(&self) -> bool {
        self.check().is_ok()
    }

    /// Hands the value back only if it validates. Decoders run received
    /// payloads through this before passing them on.
    fn validated(self) -> Result<Self, ConstraintViolation>
    where
        Self: Sized,
    {
        self.check()?;
        Ok(self)
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn check(&self) -> Result<(), ConstraintViolation> {
        for (index, item) in self.iter().enumerate() {
            item.check().map_err(|e| e.within(&format!("[{index}]")))?;
        }
        Ok(())
    }
}

/// A predicate over a single field value.
pub trait Rule<T: ?Sized> {
    fn check(&self, field: &str, value: &T) -> Result<(), ConstraintViolation>;
}

/// Mandatory strings and collections must carry something.
pub struct NonEmpty;

impl Rule<String> for NonEmpty {
    fn check(&self, field: &str, value: &String) -> Result<(), ConstraintViolation> {
        if value.is_empty() {
            return Err(ConstraintViolation::new(field, value, Constraint::NonEmpty));
        }
        Ok(())
    }
}

impl<T: Debug> Rule<Vec<T>> for NonEmpty {
    fn check(&self, field: &str, value: &Vec<T>) -> Result<(), ConstraintViolation> {
        if value.is_empty() {
            return Err(ConstraintViolation::new(field, value, Constraint::NonEmpty));
        }
        Ok(())
    }
}

/// Schema `maxLength`, counted in characters.
pub struct MaxLen(pub usize);

impl Rule<String> for MaxLen {
    fn check(&self, field: &str, value: &String) -> Result<(), ConstraintViolation> {
        if value.chars().count() > self.0 {
            return Err(ConstraintViolation::new(
                field,
                value,
                Constraint::MaxLength(self.0),
            ));
        }
        Ok(())
    }
}

/// Schema `minItems`.
pub struct MinItems(pub usize);

impl<T: Debug> Rule<Vec<T>> for MinItems {
    fn check(&self, field: &str, value: &Vec<T>) -> Result<(), ConstraintViolation> {
        if value.len() < self.0 {
            return Err(ConstraintViolation::new(
                field,
                value,
                Constraint::MinItems(self.0),
            ));
        }
        Ok(())
    }
}

/// Schema `maxItems`.
pub struct MaxItems(pub usize);

impl<T: Debug> Rule<Vec<T>> for MaxItems {
    fn check(&self, field: &str, value: &Vec<T>) -> Result<(), ConstraintViolation> {
        if value.len() > self.0 {
            return Err(ConstraintViolation::new(
                field,
                value,
                Constraint::MaxItems(self.0),
            ));
        }
        Ok(())
    }
}

/// Delegates to the nested value's own [`Validate::check`].
pub struct Nested;

impl<T: Validate> Rule<T> for Nested {
    fn check(&self, field: &str, value: &T) -> Result<(), ConstraintViolation> {
        value.check().map_err(|e| e.within(field))
    }
}

/// Schema `number` values must be representable in JSON.
pub struct Finite;
