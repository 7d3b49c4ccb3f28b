use chrono::{DateTime, Utc};

ocpp_object! {
    pub struct HeartbeatRequest {
        required {}
        optional {}
    }
}

ocpp_object! {
    pub struct HeartbeatResponse {
        required {
            current_time: DateTime<Utc> = "currentTime" [],
        }
        optional {}
    }
}
