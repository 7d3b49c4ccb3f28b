ocpp_enum! {
    pub enum ClearMessageStatus {
        Accepted = "Accepted",
        Unknown = "Unknown",
    }
}
