ocpp_enum! {
    pub enum TransactionEventType {
        Ended = "Ended",
        Started = "Started",
        Updated = "Updated",
    }
}
