use alloc::string::String;

use crate::contract::{MaxLen, Nested, NonEmpty};

use super::super::types::{RequestStartStopStatus, StatusInfo};

ocpp_object! {
    pub struct RequestStopTransactionRequest {
        required {
            transaction_id: String = "transactionId" [NonEmpty, MaxLen(36)],
        }
        optional {}
    }
}

ocpp_object! {
    pub struct RequestStopTransactionResponse {
        required {
            status: RequestStartStopStatus = "status" [],
        }
        optional {
            status_info: StatusInfo = "statusInfo" [Nested],
        }
    }
}
