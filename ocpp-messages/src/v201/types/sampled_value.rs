use alloc::string::String;

use crate::contract::{Finite, MaxLen, Nested, NonEmpty};

use super::{Decimal, Location, Measurand, Phase, ReadingContext};

ocpp_object! {
    pub struct UnitOfMeasure {
        required {}
        optional {
            /// `Wh` when absent.
            unit: String = "unit" [MaxLen(20)],
            /// Power of ten the value is scaled by; 0 when absent.
            multiplier: i32 = "multiplier" [],
        }
    }
}

ocpp_object! {
    pub struct SignedMeterValue {
        required {
            signed_meter_data: String = "signedMeterData" [NonEmpty, MaxLen(2500)],
            signing_method: String = "signingMethod" [NonEmpty, MaxLen(50)],
            encoding_method: String = "encodingMethod" [NonEmpty, MaxLen(50)],
            /// Empty when the meter does not publish its key.
            public_key: String = "publicKey" [MaxLen(2500)],
        }
        optional {}
    }
}

ocpp_object! {
    /// One measured value with its context.
    pub struct SampledValue {
        required {
            value: Decimal = "value" [Finite],
        }
        optional {
            context: ReadingContext = "context" [],
            measurand: Measurand = "measurand" [],
            phase: Phase = "phase" [],
            location: Location = "location" [],
            signed_meter_value: SignedMeterValue = "signedMeterValue" [Nested],
            unit_of_measure: UnitOfMeasure = "unitOfMeasure" [Nested],
        }
    }
}
