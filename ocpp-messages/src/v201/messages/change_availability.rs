use crate::contract::Nested;

use super::super::types::{ChangeAvailabilityStatus, Evse, OperationalStatus, StatusInfo};

ocpp_object! {
    pub struct ChangeAvailabilityRequest {
        required {
            operational_status: OperationalStatus = "operationalStatus" [],
        }
        optional {
            /// The whole station when absent.
            evse: Evse = "evse" [Nested],
        }
    }
}

ocpp_object! {
    pub struct ChangeAvailabilityResponse {
        required {
            status: ChangeAvailabilityStatus = "status" [],
        }
        optional {
            status_info: StatusInfo = "statusInfo" [Nested],
        }
    }
}
