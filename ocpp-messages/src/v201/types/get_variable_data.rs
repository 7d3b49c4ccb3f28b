use crate::contract::Nested;

use super::{Attribute, Component, Variable};

ocpp_object! {
    pub struct GetVariableData {
        required {
            component: Component = "component" [Nested],
            variable: Variable = "variable" [Nested],
        }
        optional {
            attribute_type: Attribute = "attributeType" [],
        }
    }
}
