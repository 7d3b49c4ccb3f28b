use alloc::string::String;

use crate::contract::{MaxLen, Nested};

use super::{Attribute, Component, GetVariableStatus, StatusInfo, Variable};

ocpp_object! {
    pub struct GetVariableResult {
        required {
            attribute_status: GetVariableStatus = "attributeStatus" [],
            component: Component = "component" [Nested],
            variable: Variable = "variable" [Nested],
        }
        optional {
            attribute_status_info: StatusInfo = "attributeStatusInfo" [Nested],
            attribute_type: Attribute = "attributeType" [],
            attribute_value: String = "attributeValue" [MaxLen(2500)],
        }
    }
}
