//! Externally owned event markers keyed by `D/M/YYYY`.
//!
//! The calendar only reads this map to decide which day cells carry an event
//! marker. Producers must use the same key format as
//! [`crate::utils::date::formatted_date`] or their markers will not match.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::utils::date::formatted_date;

/// A loosely typed marker value. Producers may flag a day with `true`, a
/// count, a short label, or any other JSON value; only its truthiness counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventMarker(Value);

impl EventMarker {
    pub fn value(&self) -> &Value {
        &self.0
    }

    /// `null`, `false`, zero, NaN and the empty string are falsy. Everything
    /// else, including empty arrays and objects, marks a day.
    pub fn is_truthy(&self) -> bool {
        match &self.0 {
            Value::Null => false,
            Value::Bool(flag) => *flag,
            Value::Number(number) => number
                .as_f64()
                .is_some_and(|n| n != 0.0 && !n.is_nan()),
            Value::String(label) => !label.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}

impl From<Value> for EventMarker {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<bool> for EventMarker {
    fn from(flag: bool) -> Self {
        Self(Value::Bool(flag))
    }
}

impl From<i64> for EventMarker {
    fn from(count: i64) -> Self {
        Self(Value::from(count))
    }
}

impl From<&str> for EventMarker {
    fn from(label: &str) -> Self {
        Self(Value::from(label))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventList {
    markers: BTreeMap<String, EventMarker>,
}

impl EventList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a marker under a raw key. The key is stored as given.
    pub fn insert(&mut self, key: impl Into<String>, marker: impl Into<EventMarker>) {
        self.markers.insert(key.into(), marker.into());
    }

    /// Flag a date, deriving its key.
    pub fn mark(&mut self, date: NaiveDate) {
        self.insert(formatted_date(date), true);
    }

    pub fn get(&self, key: &str) -> Option<&EventMarker> {
        self.markers.get(key)
    }

    /// Whether the key carries a truthy marker.
    pub fn has_event(&self, key: &str) -> bool {
        self.get(key).is_some_and(EventMarker::is_truthy)
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}
