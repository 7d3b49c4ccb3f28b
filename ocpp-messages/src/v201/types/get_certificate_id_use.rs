ocpp_enum! {
    /// Certificate kinds a charging station can report installed ids for.
    pub enum GetCertificateIdUse {
        V2gRootCertificate = "V2GRootCertificate",
        MoRootCertificate = "MORootCertificate",
        CsmsRootCertificate = "CSMSRootCertificate",
        V2gCertificateChain = "V2GCertificateChain",
        ManufacturerRootCertificate = "ManufacturerRootCertificate",
    }
}
