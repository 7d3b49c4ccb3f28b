use alloc::string::String;
use chrono::{DateTime, Utc};

use crate::contract::{MaxLen, Nested};

use super::{Component, MessageContent, MessagePriority, MessageState};

ocpp_object! {
    /// A message to be shown on a charging station display.
    pub struct MessageInfo {
        required {
            id: i32 = "id" [],
            priority: MessagePriority = "priority" [],
            message: MessageContent = "message" [Nested],
        }
        optional {
            /// The display to show the message on; all displays when absent.
            display: Component = "display" [Nested],
            state: MessageState = "state" [],
            start_date_time: DateTime<Utc> = "startDateTime" [],
            end_date_time: DateTime<Utc> = "endDateTime" [],
            /// Shown only while this transaction is ongoing.
            transaction_id: String = "transactionId" [MaxLen(36)],
        }
    }
}
