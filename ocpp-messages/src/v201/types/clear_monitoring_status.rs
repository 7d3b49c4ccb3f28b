ocpp_enum! {
    pub enum ClearMonitoringStatus {
        Accepted = "Accepted",
        Rejected = "Rejected",
        NotFound = "NotFound",
    }
}
