use crate::contract::Nested;

use super::{ClearMonitoringStatus, StatusInfo};

ocpp_object! {
    /// Outcome of clearing one variable monitor.
    pub struct ClearMonitoringResult {
        required {
            status: ClearMonitoringStatus = "status" [],
            id: i32 = "id" [],
        }
        optional {
            status_info: StatusInfo = "statusInfo" [Nested],
        }
    }
}
