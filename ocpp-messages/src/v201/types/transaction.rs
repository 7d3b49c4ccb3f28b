use alloc::string::String;

use crate::contract::{MaxLen, NonEmpty};

use super::{ChargingState, Reason};

ocpp_object! {
    /// Transaction details carried by a transaction event.
    pub struct Transaction {
        required {
            transaction_id: String = "transactionId" [NonEmpty, MaxLen(36)],
        }
        optional {
            charging_state: ChargingState = "chargingState" [],
            /// Seconds spent charging so far.
            time_spent_charging: i32 = "timeSpentCharging" [],
            stopped_reason: Reason = "stoppedReason" [],
            remote_start_id: i32 = "remoteStartId" [],
        }
    }
}
