use alloc::{string::String, vec::Vec};

use crate::contract::{ConstraintViolation, MaxLen, MinItems, Nested, NonEmpty, Rule};

use super::IdTokenType;

ocpp_object! {
    pub struct AdditionalInfo {
        required {
            additional_id_token: String = "additionalIdToken" [NonEmpty, MaxLen(36)],
            /// Free-form type of the additional token, e.g. a vendor scheme.
            kind: String = "type" [NonEmpty, MaxLen(50)],
        }
        optional {}
    }
}

ocpp_object! {
    /// An identifier used for authorization.
    pub struct IdToken {
        required {
            id_token: String = "idToken" [MaxLen(36)],
            kind: IdTokenType = "type" [],
        }
        optional {
            additional_info: Vec<AdditionalInfo> = "additionalInfo" [MinItems(1), Nested],
        }
        verify check_token_presence;
    }
}

/// Only `NoAuthorization` tokens travel without a value.
fn check_token_presence(token: &IdToken) -> Result<(), ConstraintViolation> {
    if token.kind != IdTokenType::NoAuthorization {
        Rule::<String>::check(&NonEmpty, "idToken", &token.id_token)?;
    }
    Ok(())
}
