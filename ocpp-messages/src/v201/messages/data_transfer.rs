use alloc::string::String;

use crate::contract::{MaxLen, Nested, NonEmpty};

use super::super::types::{DataTransferStatus, JsonValue, StatusInfo};

ocpp_object! {
    /// Vendor specific exchange; `data` is opaque to this layer.
    pub struct DataTransferRequest {
        required {
            vendor_id: String = "vendorId" [NonEmpty, MaxLen(255)],
        }
        optional {
            message_id: String = "messageId" [MaxLen(50)],
            data: JsonValue = "data" [],
        }
    }
}

ocpp_object! {
    pub struct DataTransferResponse {
        required {
            status: DataTransferStatus = "status" [],
        }
        optional {
            status_info: StatusInfo = "statusInfo" [Nested],
            data: JsonValue = "data" [],
        }
    }
}
