use alloc::vec::Vec;
use chrono::{DateTime, Utc};

use crate::contract::{Finite, MinItems, Nested};

use super::super::types::{
    Decimal, Evse, IdToken, IdTokenInfo, MessageContent, MeterValue, Transaction,
    TransactionEventType, TriggerReason,
};

ocpp_object! {
    /// Start, update or end of a transaction.
    pub struct TransactionEventRequest {
        required {
            event_type: TransactionEventType = "eventType" [],
            timestamp: DateTime<Utc> = "timestamp" [],
            trigger_reason: TriggerReason = "triggerReason" [],
            /// Incremental per transaction, lets the receiver spot gaps.
            seq_no: i32 = "seqNo" [],
            transaction_info: Transaction = "transactionInfo" [Nested],
        }
        optional {
            meter_value: Vec<MeterValue> = "meterValue" [MinItems(1), Nested],
            /// Set when the event happened while the station was offline.
            offline: bool = "offline" [],
            number_of_phases_used: i32 = "numberOfPhasesUsed" [],
            cable_max_current: i32 = "cableMaxCurrent" [],
            reservation_id: i32 = "reservationId" [],
            evse: Evse = "evse" [Nested],
            id_token: IdToken = "idToken" [Nested],
        }
    }
}

ocpp_object! {
    pub struct TransactionEventResponse {
        required {}
        optional {
            total_cost: Decimal = "totalCost" [Finite],
            charging_priority: i32 = "chargingPriority" [],
            id_token_info: IdTokenInfo = "idTokenInfo" [Nested],
            updated_personal_message: MessageContent = "updatedPersonalMessage" [Nested],
        }
    }
}
