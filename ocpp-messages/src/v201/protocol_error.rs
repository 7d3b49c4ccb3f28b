use crate::contract::{Constraint, ConstraintViolation};

/// OCPP-J 2.0.1 CallError codes.
#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProtocolError {
    FormatViolation,
    GenericError,
    InternalError,
    MessageTypeNotSupported,
    NotImplemented,
    NotSupported,
    OccurrenceConstraintViolation,
    PropertyConstraintViolation,
    ProtocolError,
    RpcFrameworkError,
    SecurityError,
    TypeConstraintViolation,
}

impl core::fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            ProtocolError::FormatViolation => "FormatViolation",
            ProtocolError::GenericError => "GenericError",
            ProtocolError::InternalError => "InternalError",
            ProtocolError::MessageTypeNotSupported => "MessageTypeNotSupported",
            ProtocolError::NotImplemented => "NotImplemented",
            ProtocolError::NotSupported => "NotSupported",
            ProtocolError::OccurrenceConstraintViolation => "OccurrenceConstraintViolation",
            ProtocolError::PropertyConstraintViolation => "PropertyConstraintViolation",
            ProtocolError::ProtocolError => "ProtocolError",
            ProtocolError::RpcFrameworkError => "RpcFrameworkError",
            ProtocolError::SecurityError => "SecurityError",
            ProtocolError::TypeConstraintViolation => "TypeConstraintViolation",
        };
        write!(f, "{s}")
    }
}

/// The code a receiver answers with when a payload fails validation.
/// Missing content and wrong cardinality are occurrence violations, bad
/// values are property violations.
impl From<&ConstraintViolation> for ProtocolError {
    fn from(violation: &ConstraintViolation) -> Self {
        match violation.constraint() {
            Constraint::NonEmpty | Constraint::MinItems(_) | Constraint::MaxItems(_) => {
                ProtocolError::OccurrenceConstraintViolation
            }
            Constraint::MaxLength(_) | Constraint::Finite | Constraint::Reserved => {
                ProtocolError::PropertyConstraintViolation
            }
        }
    }
}
