use alloc::vec::Vec;

use crate::contract::{MinItems, Nested};

use super::super::types::{GetDisplayMessagesStatus, MessagePriority, MessageState, StatusInfo};

ocpp_object! {
    /// Asks for the configured display messages, optionally filtered. The
    /// messages themselves arrive in NotifyDisplayMessages requests.
    pub struct GetDisplayMessagesRequest {
        required {
            request_id: i32 = "requestId" [],
        }
        optional {
            id: Vec<i32> = "id" [MinItems(1)],
            priority: MessagePriority = "priority" [],
            state: MessageState = "state" [],
        }
    }
}

ocpp_object! {
    pub struct GetDisplayMessagesResponse {
        required {
            status: GetDisplayMessagesStatus = "status" [],
        }
        optional {
            status_info: StatusInfo = "statusInfo" [Nested],
        }
    }
}
