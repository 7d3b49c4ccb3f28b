ocpp_enum! {
    /// Which value of a variable an operation addresses.
    pub enum Attribute {
        Actual = "Actual",
        Target = "Target",
        MinSet = "MinSet",
        MaxSet = "MaxSet",
    }
}
