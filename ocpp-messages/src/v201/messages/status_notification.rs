use chrono::{DateTime, Utc};

use super::super::types::ConnectorStatus;

ocpp_object! {
    pub struct StatusNotificationRequest {
        required {
            timestamp: DateTime<Utc> = "timestamp" [],
            connector_status: ConnectorStatus = "connectorStatus" [],
            evse_id: i32 = "evseId" [],
            connector_id: i32 = "connectorId" [],
        }
        optional {}
    }
}

ocpp_object! {
    pub struct StatusNotificationResponse {
        required {}
        optional {}
    }
}
