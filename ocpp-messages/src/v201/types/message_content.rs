use alloc::string::String;

use crate::contract::{MaxLen, NonEmpty};

use super::MessageFormat;

ocpp_object! {
    pub struct MessageContent {
        required {
            format: MessageFormat = "format" [],
            content: String = "content" [NonEmpty, MaxLen(512)],
        }
        optional {
            /// RFC 5646 language code.
            language: String = "language" [MaxLen(8)],
        }
    }
}
