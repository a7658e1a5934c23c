//! Cart engine: accumulates menu items into priced line items
//!
//! Every mutation consumes the cart and returns the next snapshot, so callers
//! re-derive their views from the returned value instead of patching in place.

use crate::core::error::Error;
use crate::models::{CartItem, Customizations, MenuItem, OrderItem};
use crate::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of a single quantity step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// +1
    Increment,
    /// -1; removes the line when it would reach zero
    Decrement,
}

/// Items and grand total handed from a cart to the order book
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OrderPayload {
    pub items: Vec<OrderItem>,
    pub total: Decimal,
}

/// An in-progress, unsubmitted collection of selected items
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates an empty cart
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of a menu item at its base price.
    ///
    /// An existing uncustomized line for the same item is incremented;
    /// otherwise a new line with quantity 1 is appended.
    pub fn add_item(self, menu_item: &MenuItem) -> Self {
        self.add_item_at(menu_item, Utc::now())
    }

    /// Same as [`Cart::add_item`] with an explicit clock reading for the line id
    pub fn add_item_at(self, menu_item: &MenuItem, now: DateTime<Utc>) -> Self {
        self.merge_or_append(menu_item, Customizations::new(), menu_item.price, now)
    }

    /// Adds one unit of a menu item with a customization selection.
    ///
    /// The selection is priced through [`MenuItem::price_with`]. Lines only
    /// merge when both the menu item and the selection match.
    pub fn add_item_with(self, menu_item: &MenuItem, selections: Customizations) -> Result<Self> {
        let unit_price = menu_item.price_with(&selections)?;
        Ok(self.merge_or_append(menu_item, selections, unit_price, Utc::now()))
    }

    fn merge_or_append(
        mut self,
        menu_item: &MenuItem,
        selections: Customizations,
        unit_price: Decimal,
        now: DateTime<Utc>,
    ) -> Self {
        if let Some(line) = self
            .items
            .iter_mut()
            .find(|line| line.menu_item().id == menu_item.id && *line.customizations() == selections)
        {
            let quantity = line.quantity() + 1;
            line.set_quantity(quantity);
            log::debug!("Cart line {} now has quantity {}", line.id(), quantity);
            return self;
        }

        let id = self.next_line_id(&menu_item.id, now);
        log::debug!("Cart line {} added for {}", id, menu_item.name);
        self.items
            .push(CartItem::new(id, menu_item.clone(), selections, unit_price));
        self
    }

    // `<menu-item-id>-<unix-millis>`, bumped until unique within this cart
    fn next_line_id(&self, menu_item_id: &str, now: DateTime<Utc>) -> String {
        let mut stamp = now.timestamp_millis();
        loop {
            let candidate = format!("{}-{}", menu_item_id, stamp);
            if self.items.iter().all(|line| line.id() != candidate) {
                return candidate;
            }
            stamp += 1;
        }
    }

    /// Steps the quantity of one line.
    ///
    /// Unknown ids leave the cart unchanged. A line that would drop to zero
    /// is removed, so no line ever holds a quantity below 1.
    pub fn update_quantity(mut self, cart_item_id: &str, change: QuantityChange) -> Self {
        let Some(index) = self.items.iter().position(|line| line.id() == cart_item_id) else {
            log::debug!("Cart line {} not found, nothing to update", cart_item_id);
            return self;
        };

        let quantity = self.items[index].quantity();
        match change {
            QuantityChange::Increment => self.items[index].set_quantity(quantity + 1),
            QuantityChange::Decrement if quantity <= 1 => {
                self.items.remove(index);
                log::debug!("Cart line {} removed", cart_item_id);
            }
            QuantityChange::Decrement => self.items[index].set_quantity(quantity - 1),
        }
        self
    }

    /// Sum of all line totals
    pub fn total(&self) -> Decimal {
        self.items.iter().map(CartItem::total_price).sum()
    }

    /// Number of units across all lines
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(CartItem::quantity).sum()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drops every line, as after an order is placed
    pub fn clear(mut self) -> Self {
        self.items.clear();
        self
    }

    /// Looks up a line by id
    pub fn get(&self, cart_item_id: &str) -> Option<&CartItem> {
        self.items.iter().find(|line| line.id() == cart_item_id)
    }

    /// Snapshots the cart into an order payload. Empty carts are refused.
    pub fn to_order_payload(&self) -> Result<OrderPayload> {
        if self.is_empty() {
            return Err(Error::EmptyCart);
        }

        Ok(OrderPayload {
            items: self.items.iter().map(CartItem::to_order_item).collect(),
            total: self.total(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, CustomizationGroup, CustomizationOption};
    use chrono::TimeZone;

    fn espresso() -> MenuItem {
        MenuItem::new("1", "Classic Espresso", Decimal::new(300, 2), Category::Coffee)
            .with_customization(CustomizationGroup::new(
                "Size",
                vec![
                    CustomizationOption::new("Single", Decimal::ZERO),
                    CustomizationOption::new("Double", Decimal::new(80, 2)),
                ],
            ))
    }

    fn croissant() -> MenuItem {
        MenuItem::new("3", "Chocolate Croissant", Decimal::new(450, 2), Category::Pastries)
    }

    fn assert_totals_consistent(cart: &Cart) {
        let expected: Decimal = cart
            .items()
            .iter()
            .map(|line| Decimal::from(line.quantity()) * line.unit_price())
            .sum();
        assert_eq!(cart.total(), expected);
        for line in cart.items() {
            assert!(line.quantity() >= 1);
            assert_eq!(
                line.total_price(),
                Decimal::from(line.quantity()) * line.unit_price()
            );
        }
    }

    #[test]
    fn test_add_then_decrement_to_empty() {
        let espresso = espresso();

        let cart = Cart::new().add_item(&espresso);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity(), 1);
        assert_eq!(cart.items()[0].total_price(), Decimal::new(300, 2));

        let cart = cart.add_item(&espresso);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity(), 2);
        assert_eq!(cart.items()[0].total_price(), Decimal::new(600, 2));

        let id = cart.items()[0].id().to_string();
        let cart = cart.update_quantity(&id, QuantityChange::Decrement);
        assert_eq!(cart.items()[0].quantity(), 1);
        assert_eq!(cart.total(), Decimal::new(300, 2));

        let cart = cart.update_quantity(&id, QuantityChange::Decrement);
        assert!(cart.is_empty());

        // The line is already gone; this must be a quiet no-op
        let cart = cart.update_quantity(&id, QuantityChange::Decrement);
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn test_totals_stay_consistent_across_mutations() {
        let espresso = espresso();
        let croissant = croissant();
        let mut cart = Cart::new();

        let steps: [(&str, QuantityChange); 8] = [
            ("add-espresso", QuantityChange::Increment),
            ("add-croissant", QuantityChange::Increment),
            ("espresso", QuantityChange::Increment),
            ("croissant", QuantityChange::Decrement),
            ("espresso", QuantityChange::Decrement),
            ("add-croissant", QuantityChange::Increment),
            ("croissant", QuantityChange::Increment),
            ("espresso", QuantityChange::Decrement),
        ];

        for (step, change) in steps {
            cart = match step {
                "add-espresso" => cart.add_item(&espresso),
                "add-croissant" => cart.add_item(&croissant),
                name => {
                    let menu_id = if name == "espresso" { "1" } else { "3" };
                    match cart
                        .items()
                        .iter()
                        .find(|line| line.menu_item().id == menu_id)
                        .map(|line| line.id().to_string())
                    {
                        Some(id) => cart.update_quantity(&id, change),
                        None => cart,
                    }
                }
            };
            assert_totals_consistent(&cart);
        }

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].menu_item().id, "3");
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total(), Decimal::new(900, 2));
    }

    #[test]
    fn test_clear() {
        let cart = Cart::new().add_item(&espresso()).add_item(&croissant());
        assert_eq!(cart.items().len(), 2);
        let cart = cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn test_unknown_line_is_ignored() {
        let cart = Cart::new().add_item(&croissant());
        let unchanged = cart.clone().update_quantity("missing", QuantityChange::Increment);
        assert_eq!(unchanged, cart);
    }

    #[test]
    fn test_line_id_format_and_uniqueness() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        let espresso = espresso();
        let mut double = Customizations::new();
        double.insert("Size".into(), "Double".into());

        let cart = Cart::new().add_item_at(&espresso, now);
        assert_eq!(cart.items()[0].id(), "1-1700000000000");

        // A second line for the same item in the same millisecond gets a fresh id
        let cart = cart
            .merge_or_append(&espresso, double, Decimal::new(380, 2), now);
        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.items()[1].id(), "1-1700000000001");
    }

    #[test]
    fn test_customized_lines_merge_only_with_same_selection() {
        let espresso = espresso();
        let mut double = Customizations::new();
        double.insert("Size".into(), "Double".into());

        let cart = Cart::new()
            .add_item(&espresso)
            .add_item_with(&espresso, double.clone())
            .unwrap()
            .add_item_with(&espresso, double)
            .unwrap();

        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.items()[1].quantity(), 2);
        assert_eq!(cart.items()[1].unit_price(), Decimal::new(380, 2));
        assert_eq!(cart.total(), Decimal::new(1060, 2));

        let mut bogus = Customizations::new();
        bogus.insert("Size".into(), "Triple".into());
        assert!(cart.add_item_with(&espresso, bogus).is_err());
    }

    #[test]
    fn test_order_payload() {
        assert!(matches!(
            Cart::new().to_order_payload(),
            Err(Error::EmptyCart)
        ));

        let cart = Cart::new()
            .add_item(&espresso())
            .add_item(&croissant())
            .add_item(&croissant());
        let payload = cart.to_order_payload().unwrap();

        assert_eq!(payload.items.len(), 2);
        assert_eq!(payload.items[1].name, "Chocolate Croissant");
        assert_eq!(payload.items[1].quantity, 2);
        assert_eq!(payload.items[1].unit_price, Decimal::new(450, 2));
        assert_eq!(payload.total, Decimal::new(1200, 2));
        assert_eq!(cart.item_count(), 3);
    }
}
