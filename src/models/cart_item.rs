use crate::models::{Customizations, MenuItem, OrderItem};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One line of an unsubmitted cart.
///
/// Fields are private so the total can only move together with the quantity:
/// `total_price == quantity * unit_price` holds at every observation point.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    id: String,
    menu_item: MenuItem,
    quantity: u32,
    customizations: Customizations,
    unit_price: Decimal,
    total_price: Decimal,
}

impl CartItem {
    /// Creates a line with quantity 1
    pub(crate) fn new(
        id: String,
        menu_item: MenuItem,
        customizations: Customizations,
        unit_price: Decimal,
    ) -> Self {
        Self {
            id,
            menu_item,
            quantity: 1,
            customizations,
            unit_price,
            total_price: unit_price,
        }
    }

    /// Sets the quantity and recomputes the total. Callers keep quantity >= 1.
    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
        self.total_price = Decimal::from(quantity) * self.unit_price;
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn menu_item(&self) -> &MenuItem {
        &self.menu_item
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn customizations(&self) -> &Customizations {
        &self.customizations
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    pub fn total_price(&self) -> Decimal {
        self.total_price
    }

    /// Captures this line as an order snapshot
    pub fn to_order_item(&self) -> OrderItem {
        OrderItem::new(
            self.menu_item.id.clone(),
            self.menu_item.name.clone(),
            self.quantity,
            self.unit_price,
        )
        .with_customizations(self.customizations.clone())
    }
}
