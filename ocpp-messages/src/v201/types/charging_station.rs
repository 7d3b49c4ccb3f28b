use alloc::string::String;

use crate::contract::{MaxLen, Nested, NonEmpty};

ocpp_object! {
    pub struct Modem {
        required {}
        optional {
            iccid: String = "iccid" [MaxLen(20)],
            imsi: String = "imsi" [MaxLen(20)],
        }
    }
}

ocpp_object! {
    /// Identity of the charging station reported at boot.
    pub struct ChargingStation {
        required {
            model: String = "model" [NonEmpty, MaxLen(20)],
            vendor_name: String = "vendorName" [NonEmpty, MaxLen(50)],
        }
        optional {
            serial_number: String = "serialNumber" [MaxLen(25)],
            modem: Modem = "modem" [Nested],
            firmware_version: String = "firmwareVersion" [MaxLen(50)],
        }
    }
}
