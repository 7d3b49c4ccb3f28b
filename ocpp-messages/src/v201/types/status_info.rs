use alloc::string::String;

use crate::contract::{MaxLen, NonEmpty};

ocpp_object! {
    /// Detail on a response status.
    pub struct StatusInfo {
        required {
            reason_code: String = "reasonCode" [NonEmpty, MaxLen(20)],
        }
        optional {
            additional_info: String = "additionalInfo" [MaxLen(512)],
        }
    }
}
