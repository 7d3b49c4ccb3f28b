use crate::contract::Nested;

use super::{Attribute, Component, SetVariableStatus, StatusInfo, Variable};

ocpp_object! {
    pub struct SetVariableResult {
        required {
            attribute_status: SetVariableStatus = "attributeStatus" [],
            component: Component = "component" [Nested],
            variable: Variable = "variable" [Nested],
        }
        optional {
            attribute_type: Attribute = "attributeType" [],
            attribute_status_info: StatusInfo = "attributeStatusInfo" [Nested],
        }
    }
}
