use crate::core::types::OrderStatus;
use crate::models::OrderItem;
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents a placed order in the kitchen queue
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique identifier for the order
    pub id: String,
    /// Sequential number shown to staff and customers
    pub order_number: u32,
    /// Line snapshots taken when the order was placed
    pub items: Vec<OrderItem>,
    /// Sum of line subtotals, fixed at creation
    pub total: Decimal,
    /// Current kitchen status
    pub status: OrderStatus,
    /// When the order was placed
    pub created_at: DateTime<Utc>,
    /// Table the order was placed from, for self-service orders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<u32>,
}

impl Order {
    /// Creates a new Order in the `Received` state
    pub fn new(
        id: impl Into<String>,
        order_number: u32,
        items: Vec<OrderItem>,
        total: Decimal,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            order_number,
            items,
            total,
            status: OrderStatus::Received,
            created_at,
            table: None,
        }
    }

    /// Sets the originating table
    pub fn with_table(mut self, table: u32) -> Self {
        self.table = Some(table);
        self
    }

    /// Sets the status, for seeding orders already in progress
    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    /// Time elapsed since the order was placed
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now - self.created_at
    }

    /// Number of units across all lines
    pub fn unit_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}
