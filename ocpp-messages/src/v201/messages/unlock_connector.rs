use crate::contract::Nested;

use super::super::types::{StatusInfo, UnlockStatus};

ocpp_object! {
    pub struct UnlockConnectorRequest {
        required {
            evse_id: i32 = "evseId" [],
            connector_id: i32 = "connectorId" [],
        }
        optional {}
    }
}

ocpp_object! {
    pub struct UnlockConnectorResponse {
        required {
            status: UnlockStatus = "status" [],
        }
        optional {
            status_info: StatusInfo = "statusInfo" [Nested],
        }
    }
}
