use crate::contract::Nested;

use super::super::types::{CertificateHashData, DeleteCertificateStatus, StatusInfo};

ocpp_object! {
    pub struct DeleteCertificateRequest {
        required {
            certificate_hash_data: CertificateHashData = "certificateHashData" [Nested],
        }
        optional {}
    }
}

ocpp_object! {
    pub struct DeleteCertificateResponse {
        required {
            status: DeleteCertificateStatus = "status" [],
        }
        optional {
            status_info: StatusInfo = "statusInfo" [Nested],
        }
    }
}
