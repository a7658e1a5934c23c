//! Customer-facing operations for the table ordering view

use crate::core::cart::{Cart, OrderPayload, QuantityChange};
use crate::core::error::Error;
use crate::core::menu::Menu;
use crate::core::tables::table_path;
use crate::Result;

/// API for a customer ordering from one table
pub struct CustomerApi {
    /// Table the customer scanned
    table: u32,
    /// The customer's own cart
    cart: Cart,
}

impl CustomerApi {
    /// Creates a new CustomerApi with an empty cart
    pub fn new(table: u32) -> Self {
        Self {
            table,
            cart: Cart::new(),
        }
    }

    pub fn table(&self) -> u32 {
        self.table
    }

    /// Path encoded in this table's QR code
    pub fn path(&self) -> String {
        table_path(self.table)
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Adds one unit of the item found by id or name
    pub fn add_to_cart(&mut self, menu: &Menu, key: &str) -> Result<()> {
        let item = menu
            .lookup(key)
            .ok_or_else(|| Error::NotFound(format!("menu item {}", key)))?;
        self.cart = std::mem::take(&mut self.cart).add_item(item);
        log::debug!("Table {} added {} to the cart", self.table, item.name);
        Ok(())
    }

    pub fn update_quantity(&mut self, cart_item_id: &str, change: QuantityChange) {
        self.cart = std::mem::take(&mut self.cart).update_quantity(cart_item_id, change);
    }

    /// Hands the cart over as an order payload and empties it
    pub fn place_order(&mut self) -> Result<OrderPayload> {
        let payload = self.cart.to_order_payload()?;
        log::info!(
            "Table {} placed an order of {} item(s)",
            self.table,
            self.cart.item_count()
        );
        self.cart = std::mem::take(&mut self.cart).clear();
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::seed_menu;
    use rust_decimal::Decimal;

    #[test]
    fn test_customer_cart_flow() {
        let menu = Menu::from_items(seed_menu());
        let mut customer = CustomerApi::new(4);
        assert_eq!(customer.path(), "/table/4");
        assert!(matches!(customer.place_order(), Err(Error::EmptyCart)));

        customer.add_to_cart(&menu, "2").unwrap();
        customer.add_to_cart(&menu, "caramel latte").unwrap();
        customer.add_to_cart(&menu, "4").unwrap();
        assert_eq!(customer.cart().item_count(), 3);

        let tea_line = customer.cart().items()[1].id().to_string();
        customer.update_quantity(&tea_line, QuantityChange::Decrement);

        let payload = customer.place_order().unwrap();
        assert_eq!(payload.items.len(), 1);
        assert_eq!(payload.items[0].quantity, 2);
        assert_eq!(payload.total, Decimal::new(700, 0));
        assert!(customer.cart().is_empty());
    }
}
