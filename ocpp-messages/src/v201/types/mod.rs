mod attribute;
mod authorization_status;
mod authorize_certificate_status;
mod boot_reason;
mod cancel_reservation_status;
mod certificate_hash_data;
mod change_availability_status;
mod charging_state;
mod charging_station;
mod clear_cache_status;
mod clear_message_status;
mod clear_monitoring_result;
mod clear_monitoring_status;
mod component;
mod connector_status;
mod data_transfer_status;
mod decimal;
mod delete_certificate_status;
mod display_message_status;
mod evse;
mod generic_device_model_status;
mod get_certificate_id_use;
mod get_display_messages_status;
mod get_installed_certificate_status;
mod get_variable_data;
mod get_variable_result;
mod get_variable_status;
mod hash_algorithm;
mod id_token;
mod id_token_info;
mod id_token_type;
mod location;
mod measurand;
mod message_content;
mod message_format;
mod message_info;
mod message_priority;
mod message_state;
mod message_trigger;
mod meter_value;
mod ocsp_request_data;
mod operational_status;
mod phase;
mod reading_context;
mod reason;
mod registration_status;
mod report_base;
mod request_start_stop_status;
mod reset_status;
mod reset_type;
mod sampled_value;
mod set_variable_data;
mod set_variable_result;
mod set_variable_status;
mod status_info;
mod transaction;
mod transaction_event_type;
mod trigger_message_status;
mod trigger_reason;
mod unlock_status;
mod variable;

pub use attribute::*;
pub use authorization_status::*;
pub use authorize_certificate_status::*;
pub use boot_reason::*;
pub use cancel_reservation_status::*;
pub use certificate_hash_data::*;
pub use change_availability_status::*;
pub use charging_state::*;
pub use charging_station::*;
pub use clear_cache_status::*;
pub use clear_message_status::*;
pub use clear_monitoring_result::*;
pub use clear_monitoring_status::*;
pub use component::*;
pub use connector_status::*;
pub use data_transfer_status::*;
pub use decimal::*;
pub use delete_certificate_status::*;
pub use display_message_status::*;
pub use evse::*;
pub use generic_device_model_status::*;
pub use get_certificate_id_use::*;
pub use get_display_messages_status::*;
pub use get_installed_certificate_status::*;
pub use get_variable_data::*;
pub use get_variable_result::*;
pub use get_variable_status::*;
pub use hash_algorithm::*;
pub use id_token::*;
pub use id_token_info::*;
pub use id_token_type::*;
pub use location::*;
pub use measurand::*;
pub use message_content::*;
pub use message_format::*;
pub use message_info::*;
pub use message_priority::*;
pub use message_state::*;
pub use message_trigger::*;
pub use meter_value::*;
pub use ocsp_request_data::*;
pub use operational_status::*;
pub use phase::*;
pub use reading_context::*;
pub use reason::*;
pub use registration_status::*;
pub use report_base::*;
pub use request_start_stop_status::*;
pub use reset_status::*;
pub use reset_type::*;
pub use sampled_value::*;
pub use set_variable_data::*;
pub use set_variable_result::*;
pub use set_variable_status::*;
pub use status_info::*;
pub use transaction::*;
pub use transaction_event_type::*;
pub use trigger_message_status::*;
pub use trigger_reason::*;
pub use unlock_status::*;
pub use variable::*;

pub use crate::contract::{CustomData, JsonValue};
