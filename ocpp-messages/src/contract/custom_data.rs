use alloc::{collections::BTreeMap, string::String};
use core::hash::{Hash, Hasher};

use super::{
    error::{Constraint, ConstraintViolation},
    validate::{MaxLen, NonEmpty, Rule, Validate},
};

const VENDOR_ID: &str = "vendorId";

/// Vendor extension payload attachable to every message and value object.
///
/// Only `vendorId` is checked; every other property is carried as-is for
/// the vendor-extension registry to interpret.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CustomData {
    #[serde(rename = "vendorId")]
    vendor_id: String,
    #[serde(flatten)]
    extra: BTreeMap<String, JsonValue>,
}

impl CustomData {
    /// Unchecked on purpose: an empty or oversized vendor id is reported by
    /// `check()` on the owning message.
    pub fn new(vendor_id: impl Into<String>) -> Self {
        Self {
            vendor_id: vendor_id.into(),
            extra: BTreeMap::new(),
        }
    }

    pub fn vendor_id(&self) -> &str {
        &self.vendor_id
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.extra.get(key).map(|v| &v.0)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &serde_json::Value)> {
        self.extra.iter().map(|(k, v)| (k.as_str(), &v.0))
    }

    /// Adds a vendor property. `vendorId` itself cannot be shadowed.
    pub fn with_field(
        mut self,
        key: impl Into<String>,
        value: serde_json::Value,
    ) -> Result<Self, ConstraintViolation> {
        let key = key.into();
        if key == VENDOR_ID {
            return Err(ConstraintViolation::new(&key, &value, Constraint::Reserved));
        }
        self.extra.insert(key, JsonValue(value));
        Ok(self)
    }
}

impl Validate for CustomData {
    fn check(&self) -> Result<(), ConstraintViolation> {
        Rule::<String>::check(&NonEmpty, VENDOR_ID, &self.vendor_id)?;
        Rule::<String>::check(&MaxLen(255), VENDOR_ID, &self.vendor_id)
    }
}

/// Free-form JSON carried inside a payload (`customData` extras, `data` of
/// DataTransfer). Hashes structurally so payloads holding it stay `Hash`.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(transparent)]
pub struct JsonValue(pub serde_json::Value);

impl From<serde_json::Value> for JsonValue {
    fn from(value: serde_json::Value) -> Self {
        JsonValue(value)
    }
}

impl Hash for JsonValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_value(&self.0, state);
    }
}

fn hash_value<H: Hasher>(value: &serde_json::Value, state: &mut H) {
    use serde_json::Value;
    match value {
        Value::Null => 0u8.hash(state),
        Value::Bool(b) => {
            1u8.hash(state);
            b.hash(state);
        }
        Value::Number(n) => {
            2u8.hash(state);
            if let Some(u) = n.as_u64() {
                0u8.hash(state);
                u.hash(state);
            } else if let Some(i) = n.as_i64() {
                1u8.hash(state);
                i.hash(state);
            } else if let Some(f) = n.as_f64() {
                2u8.hash(state);
                // 0.0 and -0.0 compare equal
                let f = if f == 0.0 { 0.0 } else { f };
                f.to_bits().hash(state);
            }
        }
        Value::String(s) => {
            3u8.hash(state);
            s.hash(state);
        }
        Value::Array(items) => {
            4u8.hash(state);
            items.len().hash(state);
            for item in items {
                hash_value(item, state);
            }
        }
        // serde_json's default map is ordered, so iteration is stable.
        Value::Object(map) => {
            5u8.hash(state);
            map.len().hash(state);
            for (k, v) in map {
                k.hash(state);
                hash_value(v, state);
            }
        }
    }
}
