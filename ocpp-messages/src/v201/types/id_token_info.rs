use alloc::{string::String, vec::Vec};
use chrono::{DateTime, Utc};

use crate::contract::{MaxLen, MinItems, Nested};

use super::{AuthorizationStatus, IdToken, MessageContent};

ocpp_object! {
    /// Authorization outcome for an id token.
    pub struct IdTokenInfo {
        required {
            status: AuthorizationStatus = "status" [],
        }
        optional {
            cache_expiry_date_time: DateTime<Utc> = "cacheExpiryDateTime" [],
            charging_priority: i32 = "chargingPriority" [],
            language1: String = "language1" [MaxLen(8)],
            /// EVSEs the token is valid on; all when absent.
            evse_id: Vec<i32> = "evseId" [MinItems(1)],
            group_id_token: IdToken = "groupIdToken" [Nested],
            language2: String = "language2" [MaxLen(8)],
            personal_message: MessageContent = "personalMessage" [Nested],
        }
    }
}
