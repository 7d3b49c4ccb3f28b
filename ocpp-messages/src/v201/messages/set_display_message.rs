use crate::contract::Nested;

use super::super::types::{DisplayMessageStatus, MessageInfo, StatusInfo};

ocpp_object! {
    pub struct SetDisplayMessageRequest {
        required {
            message: MessageInfo = "message" [Nested],
        }
        optional {}
    }
}

ocpp_object! {
    pub struct SetDisplayMessageResponse {
        required {
            status: DisplayMessageStatus = "status" [],
        }
        optional {
            status_info: StatusInfo = "statusInfo" [Nested],
        }
    }
}
