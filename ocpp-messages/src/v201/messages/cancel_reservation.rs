use crate::contract::Nested;

use super::super::types::{CancelReservationStatus, StatusInfo};

ocpp_object! {
    pub struct CancelReservationRequest {
        required {
            reservation_id: i32 = "reservationId" [],
        }
        optional {}
    }
}

ocpp_object! {
    pub struct CancelReservationResponse {
        required {
            status: CancelReservationStatus = "status" [],
        }
        optional {
            status_info: StatusInfo = "statusInfo" [Nested],
        }
    }
}
