mod common;

use std::collections::HashSet;

use rocpp_messages::{
    contract::{Confirmation, CustomData, Request, Validate},
    v201::{
        messages::{
            get_variables::GetVariablesResponse,
            heartbeat::{HeartbeatRequest, HeartbeatResponse},
            reset::{ResetRequest, ResetResponse},
            transaction_event::TransactionEventRequest,
            Action, UnknownAction,
        },
        types::{
            Decimal, Evse, MeterValue, ResetStatus, ResetType, SampledValue, Transaction,
            TransactionEventType, TriggerReason,
        },
    },
};
use rstest::rstest;

use common::{hash_of, timestamp, variable_result};

fn delivery_critical<R: Request>(request: &R) -> bool {
    request.transaction_related()
}

fn answer<R: Request>(_request: &R, confirmation: R::Confirmation) -> R::Confirmation {
    confirmation
}

fn transaction_event(seq_no: i32) -> TransactionEventRequest {
    let sample = SampledValue::new(Decimal::from(1520.5)).expect("finite");
    let meter_value = MeterValue::new(vec![sample], timestamp()).expect("one sample");
    TransactionEventRequest::new(
        TransactionEventType::Updated,
        timestamp(),
        TriggerReason::MeterValuePeriodic,
        seq_no,
        Transaction::new("tx-0001".to_string()).expect("valid transaction"),
    )
    .expect("valid event")
    .with_meter_value(vec![meter_value])
    .expect("one meter value")
}

#[rstest]
fn reset_is_not_transaction_related() {
    let request = ResetRequest::new(ResetType::Immediate).expect("valid reset");
    assert!(!delivery_critical(&request));
}

#[rstest]
fn transaction_event_is_transaction_related() {
    let event = transaction_event(1);
    assert!(event.validate());
    assert!(delivery_critical(&event));
}

#[rstest]
fn transaction_relevance_ignores_field_contents() {
    let bare = ResetRequest::new(ResetType::Immediate).expect("valid reset");
    let scoped = ResetRequest::new(ResetType::OnIdle)
        .expect("valid reset")
        .with_evse_id(3)
        .expect("unconstrained")
        .with_custom_data(CustomData::new(""));

    assert_eq!(bare.transaction_related(), scoped.transaction_related());

    let first = transaction_event(1);
    let offline = transaction_event(2).with_offline(true).expect("unconstrained");
    assert_eq!(first.transaction_related(), offline.transaction_related());
}

#[rstest]
fn only_transaction_event_is_transaction_related_in_the_catalog() {
    let critical: Vec<Action> = Action::ALL
        .iter()
        .copied()
        .filter(Action::is_transaction_related)
        .collect();
    assert_eq!(critical, vec![Action::TransactionEvent]);
}

#[rstest]
#[case::reset(ResetRequest::ACTION, ResetRequest::TRANSACTION_RELATED)]
#[case::heartbeat(HeartbeatRequest::ACTION, HeartbeatRequest::TRANSACTION_RELATED)]
#[case::transaction_event(
    TransactionEventRequest::ACTION,
    TransactionEventRequest::TRANSACTION_RELATED
)]
fn action_table_agrees_with_request_types(#[case] name: &str, #[case] transaction_related: bool) {
    let action: Action = name.parse().expect("known action");
    assert_eq!(action.as_str(), name);
    assert_eq!(action.is_transaction_related(), transaction_related);
}

#[rstest]
fn unknown_action_name_is_an_error() {
    let err = "RemoteStartTransaction".parse::<Action>().expect_err("1.6 only");
    assert_eq!(err, UnknownAction("RemoteStartTransaction".to_string()));
}

#[rstest]
fn request_names_its_confirmation() {
    let request = ResetRequest::new(ResetType::Immediate).expect("valid reset");
    let response = answer(&request, ResetResponse::new(ResetStatus::Accepted).expect("valid"));
    assert!(response.validate());
    assert_eq!(request.action(), "Reset");

    fn request_action<C: Confirmation>() -> &'static str {
        <C::Request as Request>::ACTION
    }
    assert_eq!(request_action::<HeartbeatResponse>(), "Heartbeat");
}

#[rstest]
fn display_lists_every_field_and_validity() {
    let request = ResetRequest::new(ResetType::Immediate).expect("valid reset");
    assert_eq!(
        request.to_string(),
        "ResetRequest{customData=None, type=Immediate, evseId=None, isValid=true}"
    );

    let request = request
        .with_evse_id(2)
        .expect("unconstrained")
        .with_custom_data(CustomData::new(""));
    assert_eq!(
        request.to_string(),
        "ResetRequest{customData=Some(CustomData { vendor_id: \"\", extra: {} }), \
         type=Immediate, evseId=Some(2), isValid=false}"
    );
}

#[rstest]
fn display_of_empty_payload() {
    assert_eq!(
        HeartbeatRequest::new().to_string(),
        "HeartbeatRequest{customData=None, isValid=true}"
    );
}

#[rstest]
fn responses_built_from_distinct_collections_are_equal() {
    let first = vec![
        variable_result("OCPPCommCtrlr", "HeartbeatInterval", "300"),
        variable_result("EVSE", "Power", "22000"),
    ];
    let second = vec![
        variable_result("OCPPCommCtrlr", "HeartbeatInterval", "300"),
        variable_result("EVSE", "Power", "22000"),
    ];

    let a = GetVariablesResponse::new(first).expect("valid response");
    let b = GetVariablesResponse::new(second).expect("valid response");

    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[rstest]
fn element_order_matters_for_equality() {
    let a = GetVariablesResponse::new(vec![
        variable_result("EVSE", "Power", "22000"),
        variable_result("EVSE", "Voltage", "400"),
    ])
    .expect("valid response");
    let b = GetVariablesResponse::new(vec![
        variable_result("EVSE", "Voltage", "400"),
        variable_result("EVSE", "Power", "22000"),
    ])
    .expect("valid response");

    assert_ne!(a, b);
}

#[rstest]
fn equality_is_an_equivalence() {
    let build = || {
        ResetRequest::new(ResetType::OnIdle)
            .expect("valid reset")
            .with_evse_id(1)
            .expect("unconstrained")
    };
    let (a, b, c) = (build(), build(), build());

    assert_eq!(a, a);
    assert_eq!(a, b);
    assert_eq!(b, a);
    assert_eq!(b, c);
    assert_eq!(a, c);

    let set: HashSet<ResetRequest> = [a, b, c].into_iter().collect();
    assert_eq!(set.len(), 1);
}

#[rstest]
fn custom_data_extras_take_part_in_equality() {
    let plain = Evse::new(1)
        .expect("valid evse")
        .with_custom_data(CustomData::new("com.example"));
    let tagged = Evse::new(1).expect("valid evse").with_custom_data(
        CustomData::new("com.example")
            .with_field("slot", serde_json::json!(3))
            .expect("not reserved"),
    );
    let tagged_again = Evse::new(1).expect("valid evse").with_custom_data(
        CustomData::new("com.example")
            .with_field("slot", serde_json::json!(3))
            .expect("not reserved"),
    );

    assert_ne!(plain, tagged);
    assert_eq!(tagged, tagged_again);
    assert_eq!(hash_of(&tagged), hash_of(&tagged_again));
}

#[rstest]
fn custom_data_float_extras_fold_negative_zero() {
    let with_extra = |value: serde_json::Value| {
        Evse::new(1).expect("valid evse").with_custom_data(
            CustomData::new("com.example")
                .with_field("offset", value)
                .expect("not reserved"),
        )
    };
    let positive = with_extra(serde_json::json!(0.0));
    let negative = with_extra(serde_json::json!(-0.0));

    assert_eq!(positive, negative);
    assert_eq!(hash_of(&positive), hash_of(&negative));
    assert_eq!([positive, negative].into_iter().collect::<HashSet<_>>().len(), 1);
}

#[rstest]
fn negative_zero_measurements_compare_equal() {
    let a = SampledValue::new(Decimal::new(-0.0)).expect("finite");
    let b = SampledValue::new(Decimal::new(0.0)).expect("finite");
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}
