use alloc::vec::Vec;

use crate::contract::{MinItems, Nested};

use super::super::types::ClearMonitoringResult;

ocpp_object! {
    pub struct ClearVariableMonitoringRequest {
        required {
            /// Ids of the monitors to clear.
            id: Vec<i32> = "id" [MinItems(1)],
        }
        optional {}
    }
}

ocpp_object! {
    pub struct ClearVariableMonitoringResponse {
        required {
            clear_monitoring_result: Vec<ClearMonitoringResult> =
                "clearMonitoringResult" [MinItems(1), Nested],
        }
        optional {}
    }
}
