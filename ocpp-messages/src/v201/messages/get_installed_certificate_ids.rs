use alloc::vec::Vec;

use crate::contract::{MinItems, Nested};

use super::super::types::{
    CertificateHashDataChain, GetCertificateIdUse, GetInstalledCertificateStatus, StatusInfo,
};

ocpp_object! {
    pub struct GetInstalledCertificateIdsRequest {
        required {}
        optional {
            /// All certificate kinds when absent.
            certificate_type: Vec<GetCertificateIdUse> = "certificateType" [MinItems(1)],
        }
    }
}

ocpp_object! {
    pub struct GetInstalledCertificateIdsResponse {
        required {
            status: GetInstalledCertificateStatus = "status" [],
        }
        optional {
            status_info: StatusInfo = "statusInfo" [Nested],
            certificate_hash_data_chain: Vec<CertificateHashDataChain> =
                "certificateHashDataChain" [MinItems(1), Nested],
        }
    }
}
