use alloc::{
    format,
    string::{String, ToString},
};
use core::fmt::Debug;
use thiserror::Error;

/// The predicate a field value failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Constraint {
    NonEmpty,
    MaxLength(usize),
    MinItems(usize),
    MaxItems(usize),
    Finite,
    Reserved,
}

impl core::fmt::Display for Constraint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Constraint::NonEmpty => write!(f, "must not be empty"),
            Constraint::MaxLength(max) => write!(f, "must be at most {max} characters"),
            Constraint::MinItems(min) => write!(f, "must hold at least {min} items"),
            Constraint::MaxItems(max) => write!(f, "must hold at most {max} items"),
            Constraint::Finite => write!(f, "must be a finite number"),
            Constraint::Reserved => write!(f, "is a reserved name"),
        }
    }
}

/// A field value rejected by its predicate.
///
/// `field` is the OCPP property path from the checked value down to the
/// offending field, e.g. `getVariableData[0].component.name`.
#[derive(Clone, Debug, Error, PartialEq, Eq, Hash)]
#[error("`{field}` {constraint}, got {value}")]
pub struct ConstraintViolation {
    field: String,
    value: String,
    constraint: Constraint,
}

impl ConstraintViolation {
    pub fn new<V: Debug + ?Sized>(field: &str, value: &V, constraint: Constraint) -> Self {
        Self {
            field: field.to_string(),
            value: format!("{value:?}"),
            constraint,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn constraint(&self) -> Constraint {
        self.constraint
    }

    /// Prefixes the path with the name of the field holding the checked value.
    pub(crate) fn within(mut self, parent: &str) -> Self {
        self.field = if self.field.starts_with('[') {
            format!("{parent}{}", self.field)
        } else {
            format!("{parent}.{}", self.field)
        };
        self
    }
}

/// Raised when a string is not the wire name of any variant.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown {kind} value: {value}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

pub(crate) fn rejected(owner: &str, err: ConstraintViolation) -> ConstraintViolation {
    log::debug!("{owner} rejected: {err}");
    err
}
