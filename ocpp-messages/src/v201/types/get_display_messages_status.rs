ocpp_enum! {
    pub enum GetDisplayMessagesStatus {
        Accepted = "Accepted",
        Unknown = "Unknown",
    }
}
