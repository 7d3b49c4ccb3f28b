use alloc::vec::Vec;

use crate::contract::{MinItems, Nested};

use super::super::types::MeterValue;

ocpp_object! {
    /// Meter samples outside of a transaction. Transaction meter values
    /// travel in TransactionEvent.
    pub struct MeterValuesRequest {
        required {
            /// 0 addresses the main energy meter of the station.
            evse_id: i32 = "evseId" [],
            meter_value: Vec<MeterValue> = "meterValue" [MinItems(1), Nested],
        }
        optional {}
    }
}

ocpp_object! {
    pub struct MeterValuesResponse {
        required {}
        optional {}
    }
}
