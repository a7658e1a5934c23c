//! Common data types and enums

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Per-field validation messages, keyed by form field name
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Kitchen status of a placed order.
///
/// The progression is strictly linear: `Received -> Preparing -> ReadyForPickup`.
/// There is no cancellation and no state after `ReadyForPickup`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Order has been placed and is waiting for the kitchen
    #[serde(rename = "Received")]
    Received,
    /// Kitchen is working on the order
    #[serde(rename = "Preparing")]
    Preparing,
    /// Order is done and waiting at the counter
    #[serde(rename = "Ready for Pickup")]
    ReadyForPickup,
}

impl OrderStatus {
    /// All statuses in progression order
    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::Received,
        OrderStatus::Preparing,
        OrderStatus::ReadyForPickup,
    ];

    /// Converts the enum to a string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Received => "received",
            OrderStatus::Preparing => "preparing",
            OrderStatus::ReadyForPickup => "ready_for_pickup",
        }
    }

    /// Converts a string to an OrderStatus enum
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "received" => Some(OrderStatus::Received),
            "preparing" => Some(OrderStatus::Preparing),
            "ready_for_pickup" => Some(OrderStatus::ReadyForPickup),
            _ => None,
        }
    }

    /// Human-facing column title
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Received => "Received",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::ReadyForPickup => "Ready for Pickup",
        }
    }

    /// The status that follows this one, if any
    pub fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Received => Some(OrderStatus::Preparing),
            OrderStatus::Preparing => Some(OrderStatus::ReadyForPickup),
            OrderStatus::ReadyForPickup => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.next().is_none()
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_progression() {
        assert_eq!(OrderStatus::Received.next(), Some(OrderStatus::Preparing));
        assert_eq!(
            OrderStatus::Preparing.next(),
            Some(OrderStatus::ReadyForPickup)
        );
        assert_eq!(OrderStatus::ReadyForPickup.next(), None);
        assert!(OrderStatus::ReadyForPickup.is_terminal());
        assert!(!OrderStatus::Received.is_terminal());
    }

    #[test]
    fn test_status_string_forms() {
        for status in OrderStatus::ALL {
            assert_eq!(OrderStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(OrderStatus::from_str("cancelled"), None);
        assert_eq!(OrderStatus::ReadyForPickup.to_string(), "Ready for Pickup");

        let json = serde_json::to_string(&OrderStatus::ReadyForPickup).unwrap();
        assert_eq!(json, "\"Ready for Pickup\"");
    }
}
