use alloc::vec::Vec;

use crate::contract::{MinItems, Nested};

use super::super::types::{SetVariableData, SetVariableResult};

ocpp_object! {
    pub struct SetVariablesRequest {
        required {
            set_variable_data: Vec<SetVariableData> = "setVariableData" [MinItems(1), Nested],
        }
        optional {}
    }
}

ocpp_object! {
    pub struct SetVariablesResponse {
        required {
            set_variable_result: Vec<SetVariableResult> = "setVariableResult" [MinItems(1), Nested],
        }
        optional {}
    }
}
