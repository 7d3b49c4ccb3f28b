use crate::contract::Nested;

use super::super::types::{ResetStatus, ResetType, StatusInfo};

ocpp_object! {
    /// Resets the whole charging station, or one EVSE when `evseId` is set.
    pub struct ResetRequest {
        required {
            kind: ResetType = "type" [],
        }
        optional {
            evse_id: i32 = "evseId" [],
        }
    }
}

ocpp_object! {
    pub struct ResetResponse {
        required {
            status: ResetStatus = "status" [],
        }
        optional {
            status_info: StatusInfo = "statusInfo" [Nested],
        }
    }
}
