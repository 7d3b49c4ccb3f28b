ocpp_enum! {
    pub enum ResetType {
        Immediate = "Immediate",
        OnIdle = "OnIdle",
    }
}
