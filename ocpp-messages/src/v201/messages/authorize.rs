use alloc::{string::String, vec::Vec};

use crate::contract::{MaxItems, MaxLen, MinItems, Nested};

use super::super::types::{AuthorizeCertificateStatus, IdToken, IdTokenInfo, OcspRequestData};

ocpp_object! {
    pub struct AuthorizeRequest {
        required {
            id_token: IdToken = "idToken" [Nested],
        }
        optional {
            /// PEM encoded contract certificate chain.
            certificate: String = "certificate" [MaxLen(5500)],
            iso15118_certificate_hash_data: Vec<OcspRequestData> =
                "iso15118CertificateHashData" [MinItems(1), MaxItems(4), Nested],
        }
    }
}

ocpp_object! {
    pub struct AuthorizeResponse {
        required {
            id_token_info: IdTokenInfo = "idTokenInfo" [Nested],
        }
        optional {
            certificate_status: AuthorizeCertificateStatus = "certificateStatus" [],
        }
    }
}
