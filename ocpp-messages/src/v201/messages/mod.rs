use alloc::string::{String, ToString};
use thiserror::Error;

use crate::contract::{Confirmation, Request};

pub mod authorize;
pub mod boot_notification;
pub mod cancel_reservation;
pub mod change_availability;
pub mod clear_cache;
pub mod clear_display_message;
pub mod clear_variable_monitoring;
pub mod data_transfer;
pub mod delete_certificate;
pub mod get_base_report;
pub mod get_display_messages;
pub mod get_installed_certificate_ids;
pub mod get_variables;
pub mod heartbeat;
pub mod meter_values;
pub mod request_stop_transaction;
pub mod reset;
pub mod set_display_message;
pub mod set_variables;
pub mod status_notification;
pub mod transaction_event;
pub mod trigger_message;
pub mod unlock_connector;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown action: {0}")]
pub struct UnknownAction(pub String);

macro_rules! actions {
    ($( $action:ident => $req:ty, $conf:ty, transaction_related: $tx:literal; )+) => {
        /// Every operation of the catalog, named as on the wire.
        #[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum Action {
            $($action,)+
        }

        impl Action {
            pub const ALL: &'static [Action] = &[$(Action::$action),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Action::$action => stringify!($action),)+
                }
            }

            /// Same answer as [`Request::transaction_related`] on the
            /// operation's request type, for callers holding only the name.
            pub fn is_transaction_related(&self) -> bool {
                match self {
                    $(Action::$action => $tx,)+
                }
            }
        }

        $(
            impl Request for $req {
                const ACTION: &'static str = stringify!($action);
                const TRANSACTION_RELATED: bool = $tx;
                type Confirmation = $conf;
            }

            impl Confirmation for $conf {
                type Request = $req;
            }
        )+
    };
}

actions! {
    Authorize => authorize::AuthorizeRequest, authorize::AuthorizeResponse,
        transaction_related: false;
    BootNotification => boot_notification::BootNotificationRequest,
        boot_notification::BootNotificationResponse, transaction_related: false;
    CancelReservation => cancel_reservation::CancelReservationRequest,
        cancel_reservation::CancelReservationResponse, transaction_related: false;
    ChangeAvailability => change_availability::ChangeAvailabilityRequest,
        change_availability::ChangeAvailabilityResponse, transaction_related: false;
    ClearCache => clear_cache::ClearCacheRequest, clear_cache::ClearCacheResponse,
        transaction_related: false;
    ClearDisplayMessage => clear_display_message::ClearDisplayMessageRequest,
        clear_display_message::ClearDisplayMessageResponse, transaction_related: false;
    ClearVariableMonitoring => clear_variable_monitoring::ClearVariableMonitoringRequest,
        clear_variable_monitoring::ClearVariableMonitoringResponse, transaction_related: false;
    DataTransfer => data_transfer::DataTransferRequest, data_transfer::DataTransferResponse,
        transaction_related: false;
    DeleteCertificate => delete_certificate::DeleteCertificateRequest,
        delete_certificate::DeleteCertificateResponse, transaction_related: false;
    GetBaseReport => get_base_report::GetBaseReportRequest,
        get_base_report::GetBaseReportResponse, transaction_related: false;
    GetDisplayMessages => get_display_messages::GetDisplayMessagesRequest,
        get_display_messages::GetDisplayMessagesResponse, transaction_related: false;
    GetInstalledCertificateIds => get_installed_certificate_ids::GetInstalledCertificateIdsRequest,
        get_installed_certificate_ids::GetInstalledCertificateIdsResponse, transaction_related: false;
    GetVariables => get_variables::GetVariablesRequest, get_variables::GetVariablesResponse,
        transaction_related: false;
    Heartbeat => heartbeat::HeartbeatRequest, heartbeat::HeartbeatResponse,
        transaction_related: false;
    MeterValues => meter_values::MeterValuesRequest, meter_values::MeterValuesResponse,
        transaction_related: false;
    RequestStopTransaction => request_stop_transaction::RequestStopTransactionRequest,
        request_stop_transaction::RequestStopTransactionResponse, transaction_related: false;
    Reset => reset::ResetRequest, reset::ResetResponse, transaction_related: false;
    SetDisplayMessage => set_display_message::SetDisplayMessageRequest,
        set_display_message::SetDisplayMessageResponse, transaction_related: false;
    SetVariables => set_variables::SetVariablesRequest, set_variables::SetVariablesResponse,
        transaction_related: false;
    StatusNotification => status_notification::StatusNotificationRequest,
        status_notification::StatusNotificationResponse, transaction_related: false;
    TransactionEvent => transaction_event::TransactionEventRequest,
        transaction_event::TransactionEventResponse, transaction_related: true;
    TriggerMessage => trigger_message::TriggerMessageRequest,
        trigger_message::TriggerMessageResponse, transaction_related: false;
    UnlockConnector => unlock_connector::UnlockConnectorRequest,
        unlock_connector::UnlockConnectorResponse, transaction_related: false;
}

impl core::fmt::Display for Action {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .iter()
            .find(|action| action.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownAction(s.to_string()))
    }
}
