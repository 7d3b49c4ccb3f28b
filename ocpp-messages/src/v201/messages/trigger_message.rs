use crate::contract::Nested;

use super::super::types::{Evse, MessageTrigger, StatusInfo, TriggerMessageStatus};

ocpp_object! {
    pub struct TriggerMessageRequest {
        required {
            requested_message: MessageTrigger = "requestedMessage" [],
        }
        optional {
            evse: Evse = "evse" [Nested],
        }
    }
}

ocpp_object! {
    pub struct TriggerMessageResponse {
        required {
            status: TriggerMessageStatus = "status" [],
        }
        optional {
            status_info: StatusInfo = "statusInfo" [Nested],
        }
    }
}
