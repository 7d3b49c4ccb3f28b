use core::{
    fmt::{Debug, Display},
    hash::Hash,
};

use serde::{de::DeserializeOwned, Serialize};

use super::validate::Validate;

/// An operation-initiating payload, answered by exactly one [`Confirmation`].
///
/// The envelope layer supplies the message id; [`Request::ACTION`] is the
/// action name it puts next to the payload.
pub trait Request:
    Validate + Serialize + DeserializeOwned + Clone + Debug + Display + Eq + Hash
{
    const ACTION: &'static str;

    /// Fixed per operation. Transaction-related requests must be queued and
    /// resent across a connection loss; others may be dropped.
    const TRANSACTION_RELATED: bool;

    type Confirmation: Confirmation;

    fn action(&self) -> &'static str {
        Self::ACTION
    }

    fn transaction_related(&self) -> bool {
        Self::TRANSACTION_RELATED
    }
}

/// The response payload correlated to a prior [`Request`].
pub trait Confirmation:
    Validate + Serialize + DeserializeOwned + Clone + Debug + Display + Eq + Hash
{
    type Request: Request;
}
