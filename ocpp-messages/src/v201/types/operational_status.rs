ocpp_enum! {
    pub enum OperationalStatus {
        Inoperative = "Inoperative",
        Operative = "Operative",
    }
}
