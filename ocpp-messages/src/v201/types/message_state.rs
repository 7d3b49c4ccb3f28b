ocpp_enum! {
    /// Charging station state during which a display message is shown.
    pub enum MessageState {
        Charging = "Charging",
        Faulted = "Faulted",
        Idle = "Idle",
        Unavailable = "Unavailable",
    }
}
