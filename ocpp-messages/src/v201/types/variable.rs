use alloc::string::String;

use crate::contract::{MaxLen, NonEmpty};

ocpp_object! {
    pub struct Variable {
        required {
            name: String = "name" [NonEmpty, MaxLen(50)],
        }
        optional {
            instance: String = "instance" [MaxLen(50)],
        }
    }
}
