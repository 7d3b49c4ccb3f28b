use alloc::string::String;

use crate::contract::{MaxLen, Nested, NonEmpty};

use super::Evse;

ocpp_object! {
    /// A device model component, e.g. `EVSE` or `OCPPCommCtrlr`.
    pub struct Component {
        required {
            name: String = "name" [NonEmpty, MaxLen(50)],
        }
        optional {
            instance: String = "instance" [MaxLen(50)],
            evse: Evse = "evse" [Nested],
        }
    }
}
