use crate::contract::Nested;

use super::super::types::{ClearMessageStatus, StatusInfo};

ocpp_object! {
    pub struct ClearDisplayMessageRequest {
        required {
            id: i32 = "id" [],
        }
        optional {}
    }
}

ocpp_object! {
    pub struct ClearDisplayMessageResponse {
        required {
            status: ClearMessageStatus = "status" [],
        }
        optional {
            status_info: StatusInfo = "statusInfo" [Nested],
        }
    }
}
