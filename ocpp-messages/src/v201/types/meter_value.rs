use alloc::vec::Vec;
use chrono::{DateTime, Utc};

use crate::contract::{MinItems, Nested};

use super::SampledValue;

ocpp_object! {
    /// Sampled values taken at one point in time.
    pub struct MeterValue {
        required {
            sampled_value: Vec<SampledValue> = "sampledValue" [MinItems(1), Nested],
            timestamp: DateTime<Utc> = "timestamp" [],
        }
        optional {}
    }
}
