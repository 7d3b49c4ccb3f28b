use crate::contract::Nested;

use super::super::types::{ClearCacheStatus, StatusInfo};

ocpp_object! {
    pub struct ClearCacheRequest {
        required {}
        optional {}
    }
}

ocpp_object! {
    pub struct ClearCacheResponse {
        required {
            status: ClearCacheStatus = "status" [],
        }
        optional {
            status_info: StatusInfo = "statusInfo" [Nested],
        }
    }
}
