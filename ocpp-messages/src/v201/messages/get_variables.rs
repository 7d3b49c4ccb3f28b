use alloc::vec::Vec;

use crate::contract::{MinItems, Nested};

use super::super::types::{GetVariableData, GetVariableResult};

ocpp_object! {
    pub struct GetVariablesRequest {
        required {
            get_variable_data: Vec<GetVariableData> = "getVariableData" [MinItems(1), Nested],
        }
        optional {}
    }
}

ocpp_object! {
    pub struct GetVariablesResponse {
        required {
            get_variable_result: Vec<GetVariableResult> = "getVariableResult" [MinItems(1), Nested],
        }
        optional {}
    }
}
