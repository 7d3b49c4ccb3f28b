use alloc::string::String;

use crate::contract::{MaxLen, NonEmpty};

use super::HashAlgorithm;

ocpp_object! {
    /// Certificate status query data forwarded to an OCSP responder.
    pub struct OcspRequestData {
        required {
            hash_algorithm: HashAlgorithm = "hashAlgorithm" [],
            issuer_name_hash: String = "issuerNameHash" [NonEmpty, MaxLen(128)],
            issuer_key_hash: String = "issuerKeyHash" [NonEmpty, MaxLen(128)],
            serial_number: String = "serialNumber" [NonEmpty, MaxLen(40)],
            responder_url: String = "responderURL" [NonEmpty, MaxLen(512)],
        }
        optional {}
    }
}
