use chrono::{DateTime, Utc};

use crate::contract::Nested;

use super::super::types::{BootReason, ChargingStation, RegistrationStatus, StatusInfo};

ocpp_object! {
    pub struct BootNotificationRequest {
        required {
            charging_station: ChargingStation = "chargingStation" [Nested],
            reason: BootReason = "reason" [],
        }
        optional {}
    }
}

ocpp_object! {
    pub struct BootNotificationResponse {
        required {
            current_time: DateTime<Utc> = "currentTime" [],
            /// Heartbeat interval in seconds when accepted, retry delay otherwise.
            interval: i32 = "interval" [],
            status: RegistrationStatus = "status" [],
        }
        optional {
            status_info: StatusInfo = "statusInfo" [Nested],
        }
    }
}
