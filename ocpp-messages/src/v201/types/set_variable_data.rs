use alloc::string::String;

use crate::contract::{MaxLen, Nested};

use super::{Attribute, Component, Variable};

ocpp_object! {
    pub struct SetVariableData {
        required {
            /// May be empty to clear a value.
            attribute_value: String = "attributeValue" [MaxLen(1000)],
            component: Component = "component" [Nested],
            variable: Variable = "variable" [Nested],
        }
        optional {
            attribute_type: Attribute = "attributeType" [],
        }
    }
}
