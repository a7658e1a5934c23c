use crate::models::Customizations;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Snapshot of one line of a placed order.
///
/// Name and unit price are copied from the menu at order time, so later menu
/// edits never change historical orders.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Identifier of the menu item this line was created from
    pub menu_item_id: String,
    /// Name of the menu item at order time
    pub name: String,
    /// Quantity of the item ordered
    pub quantity: u32,
    /// Unit price at order time
    pub unit_price: Decimal,
    /// Selected customizations, if any
    #[serde(default, skip_serializing_if = "Customizations::is_empty")]
    pub customizations: Customizations,
}

impl OrderItem {
    /// Creates a new OrderItem
    pub fn new(
        menu_item_id: impl Into<String>,
        name: impl Into<String>,
        quantity: u32,
        unit_price: Decimal,
    ) -> Self {
        Self {
            menu_item_id: menu_item_id.into(),
            name: name.into(),
            quantity,
            unit_price,
            customizations: Customizations::new(),
        }
    }

    /// Sets the customizations of the line
    pub fn with_customizations(mut self, customizations: Customizations) -> Self {
        self.customizations = customizations;
        self
    }

    /// Quantity times unit price
    pub fn subtotal(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_price
    }
}
