ocpp_enum! {
    pub enum RequestStartStopStatus {
        Accepted = "Accepted",
        Rejected = "Rejected",
    }
}
