mod common;

use rocpp_messages::{
    contract::{Constraint, CustomData, ParseEnumError, Validate},
    v201::{
        messages::{
            boot_notification::BootNotificationRequest, data_transfer::DataTransferRequest,
            reset::ResetRequest, status_notification::StatusNotificationRequest,
        },
        protocol_error::ProtocolError,
        types::{
            BootReason, ChargingStation, ConnectorStatus, IdTokenType, Measurand, Modem, Phase,
            ReadingContext, ResetType,
        },
    },
};
use rstest::rstest;
use serde_json::json;

use common::timestamp;

#[rstest]
fn reset_uses_ocpp_property_names() {
    let request = ResetRequest::new(ResetType::OnIdle)
        .expect("valid reset")
        .with_evse_id(1)
        .expect("unconstrained");

    assert_eq!(
        serde_json::to_value(&request).expect("serializable"),
        json!({ "type": "OnIdle", "evseId": 1 })
    );
}

#[rstest]
fn absent_optionals_are_omitted() {
    let request = ResetRequest::new(ResetType::Immediate).expect("valid reset");
    assert_eq!(
        serde_json::to_value(&request).expect("serializable"),
        json!({ "type": "Immediate" })
    );
}

#[rstest]
fn boot_notification_decodes_and_validates() {
    let request: BootNotificationRequest = serde_json::from_value(json!({
        "reason": "PowerUp",
        "chargingStation": {
            "model": "SingleSocketCharger",
            "vendorName": "VendorX",
            "modem": { "iccid": "8931", "imsi": "2620" }
        }
    }))
    .expect("shape is fine");

    let request = request.validated().expect("valid boot notification");
    assert_eq!(request.reason(), &BootReason::PowerUp);
    assert_eq!(request.charging_station().vendor_name(), "VendorX");
    assert_eq!(
        request.charging_station().modem().and_then(Modem::imsi).map(String::as_str),
        Some("2620")
    );
}

#[rstest]
fn decoded_value_over_max_length_maps_to_property_violation() {
    let request: BootNotificationRequest = serde_json::from_value(json!({
        "reason": "PowerUp",
        "chargingStation": { "model": "M".repeat(21), "vendorName": "VendorX" }
    }))
    .expect("shape is fine");

    let err = request.validated().expect_err("model too long");
    assert_eq!(err.field(), "chargingStation.model");
    assert_eq!(err.constraint(), Constraint::MaxLength(20));
    assert_eq!(ProtocolError::from(&err), ProtocolError::PropertyConstraintViolation);
}

#[rstest]
fn missing_mandatory_field_does_not_decode() {
    let decoded = serde_json::from_value::<BootNotificationRequest>(json!({ "reason": "PowerUp" }));
    assert!(decoded.is_err());
}

#[rstest]
fn unknown_enumerant_does_not_decode() {
    let decoded = serde_json::from_value::<ResetRequest>(json!({ "type": "Later" }));
    assert!(decoded.is_err());
}

#[rstest]
#[case::dotted(json!("Energy.Active.Import.Register"), Measurand::EnergyActiveImportRegister)]
#[case::plain(json!("SoC"), Measurand::SoC)]
fn measurand_wire_names(#[case] wire: serde_json::Value, #[case] expected: Measurand) {
    assert_eq!(serde_json::from_value::<Measurand>(wire.clone()).expect("known"), expected);
    assert_eq!(serde_json::to_value(expected).expect("serializable"), wire);
}

#[rstest]
#[case("L1-N", Phase::L1N)]
#[case("L3-L1", Phase::L3L1)]
fn phase_parses_from_wire_name(#[case] wire: &str, #[case] expected: Phase) {
    assert_eq!(wire.parse::<Phase>(), Ok(expected));
    assert_eq!(expected.to_string(), wire);
}

#[rstest]
fn enum_parse_rejects_unknown_value() {
    assert_eq!(
        "Later".parse::<ResetType>(),
        Err(ParseEnumError {
            kind: "ResetType",
            value: "Later".to_string()
        })
    );
    assert_eq!("Sample.Clock".parse::<ReadingContext>(), Ok(ReadingContext::SampleClock));
    assert_eq!(IdTokenType::EMaid.as_str(), "eMAID");
    assert_eq!(IdTokenType::ALL.len(), 8);
}

#[rstest]
fn custom_data_extras_round_trip() {
    let request = ResetRequest::new(ResetType::Immediate)
        .expect("valid reset")
        .with_custom_data(
            CustomData::new("com.example")
                .with_field("slot", json!(3))
                .expect("not reserved"),
        );

    let wire = serde_json::to_value(&request).expect("serializable");
    assert_eq!(
        wire,
        json!({ "customData": { "vendorId": "com.example", "slot": 3 }, "type": "Immediate" })
    );

    let decoded: ResetRequest = serde_json::from_value(wire).expect("decodes");
    assert_eq!(decoded, request);
    assert_eq!(
        decoded.custom_data().and_then(|c| c.get("slot")),
        Some(&json!(3))
    );
}

#[rstest]
fn vendor_id_cannot_be_shadowed() {
    let err = CustomData::new("com.example")
        .with_field("vendorId", json!("other"))
        .expect_err("reserved");
    assert_eq!(err.constraint(), Constraint::Reserved);
}

#[rstest]
fn data_transfer_carries_opaque_data() {
    let request: DataTransferRequest = serde_json::from_value(json!({
        "vendorId": "com.example",
        "messageId": "Tariff",
        "data": { "price": [0.25, 0.30], "currency": "EUR" }
    }))
    .expect("shape is fine");

    assert!(request.validate());
    assert_eq!(
        request.data().map(|d| &d.0["currency"]),
        Some(&json!("EUR"))
    );
}

#[rstest]
fn status_notification_timestamp_is_rfc3339() {
    let request = StatusNotificationRequest::new(timestamp(), ConnectorStatus::Available, 1, 1)
        .expect("valid notification");

    let wire = serde_json::to_value(&request).expect("serializable");
    assert_eq!(wire["timestamp"], json!("2024-05-01T10:30:00Z"));
    assert_eq!(wire["connectorStatus"], json!("Available"));
}

#[rstest]
fn charging_station_builder_chains_optionals() {
    let station = ChargingStation::new("Model".to_string(), "VendorX".to_string())
        .expect("valid station")
        .with_serial_number("SN-1".to_string())
        .expect("short serial")
        .with_modem(Modem::new().with_iccid("8931".to_string()).expect("short iccid"))
        .expect("valid modem");

    assert!(station.validate());
    assert_eq!(station.serial_number().map(String::as_str), Some("SN-1"));
}
