ocpp_object! {
    /// An EVSE, optionally narrowed down to one of its connectors.
    pub struct Evse {
        required {
            id: i32 = "id" [],
        }
        optional {
            connector_id: i32 = "connectorId" [],
        }
    }
}
