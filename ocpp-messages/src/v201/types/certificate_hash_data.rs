use alloc::{string::String, vec::Vec};

use crate::contract::{MaxItems, MaxLen, MinItems, Nested, NonEmpty};

use super::{GetCertificateIdUse, HashAlgorithm};

ocpp_object! {
    /// Identifies an installed certificate by issuer hashes and serial number.
    pub struct CertificateHashData {
        required {
            hash_algorithm: HashAlgorithm = "hashAlgorithm" [],
            issuer_name_hash: String = "issuerNameHash" [NonEmpty, MaxLen(128)],
            issuer_key_hash: String = "issuerKeyHash" [NonEmpty, MaxLen(128)],
            serial_number: String = "serialNumber" [NonEmpty, MaxLen(40)],
        }
        optional {}
    }
}

ocpp_object! {
    /// A certificate with the hash data of its chain.
    pub struct CertificateHashDataChain {
        required {
            certificate_type: GetCertificateIdUse = "certificateType" [],
            certificate_hash_data: CertificateHashData = "certificateHashData" [Nested],
        }
        optional {
            child_certificate_hash_data: Vec<CertificateHashData> =
                "childCertificateHashData" [MinItems(1), MaxItems(4), Nested],
        }
    }
}
