#![allow(dead_code)]

use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

use chrono::{DateTime, TimeZone, Utc};
use rocpp_messages::v201::types::{Component, GetVariableResult, GetVariableStatus, Variable};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

pub fn timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 10, 30, 0).unwrap()
}

pub fn component(name: &str) -> Component {
    Component::new(name.to_string()).expect("valid component")
}

pub fn variable(name: &str) -> Variable {
    Variable::new(name.to_string()).expect("valid variable")
}

pub fn variable_result(component_name: &str, variable_name: &str, value: &str) -> GetVariableResult {
    GetVariableResult::new(
        GetVariableStatus::Accepted,
        component(component_name),
        variable(variable_name),
    )
    .expect("valid result")
    .with_attribute_value(value.to_string())
    .expect("value fits")
}
