use crate::contract::Nested;

use super::super::types::{GenericDeviceModelStatus, ReportBase, StatusInfo};

ocpp_object! {
    /// The report itself arrives in NotifyReport requests tagged with `requestId`.
    pub struct GetBaseReportRequest {
        required {
            request_id: i32 = "requestId" [],
            report_base: ReportBase = "reportBase" [],
        }
        optional {}
    }
}

ocpp_object! {
    pub struct GetBaseReportResponse {
        required {
            status: GenericDeviceModelStatus = "status" [],
        }
        optional {
            status_info: StatusInfo = "statusInfo" [Nested],
        }
    }
}
