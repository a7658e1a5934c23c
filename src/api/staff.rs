//! Staff-facing operations: menu management, order creation and the kitchen board

use crate::core::bill::Bill;
use crate::core::cart::{Cart, OrderPayload, QuantityChange};
use crate::core::error::Error;
use crate::core::menu::Menu;
use crate::core::order::{OrderBook, StatusBoard};
use crate::models::{MenuItem, Order};
use crate::Result;
use chrono::Utc;

/// API for cafe staff working the menu screen and the order dashboard
pub struct StaffApi {
    /// The editable catalogue
    menu: Menu,
    /// Placed orders, most recent first
    orders: OrderBook,
    /// Order being assembled in the "new order" dialog
    cart: Cart,
}

impl StaffApi {
    /// Creates a new StaffApi over loaded menu and orders
    pub fn new(menu: Menu, orders: OrderBook) -> Self {
        Self {
            menu,
            orders,
            cart: Cart::new(),
        }
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// Adds a menu item and returns it with its assigned id
    pub fn add_menu_item(&mut self, draft: MenuItem) -> Result<MenuItem> {
        self.menu.add(draft).cloned()
    }

    pub fn update_menu_item(&mut self, item: MenuItem) -> Result<()> {
        self.menu.update(item)
    }

    /// Deletes a menu item. Orders already placed keep their snapshots.
    pub fn remove_menu_item(&mut self, item_id: &str) -> Result<MenuItem> {
        self.menu.remove(item_id)
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Adds one unit of the menu item found by id or name to the order draft
    pub fn add_to_cart(&mut self, key: &str) -> Result<()> {
        let item = self
            .menu
            .lookup(key)
            .ok_or_else(|| Error::NotFound(format!("menu item {}", key)))?;
        self.cart = std::mem::take(&mut self.cart).add_item(item);
        Ok(())
    }

    pub fn update_cart_quantity(&mut self, cart_item_id: &str, change: QuantityChange) {
        self.cart = std::mem::take(&mut self.cart).update_quantity(cart_item_id, change);
    }

    /// Places the draft as a new order and starts an empty draft
    pub fn place_order(&mut self) -> Result<Order> {
        let payload = self.cart.to_order_payload()?;
        let order = self.accept_payload(payload, None);
        self.cart = std::mem::take(&mut self.cart).clear();
        Ok(order)
    }

    /// Ingests a payload produced by any cart, optionally tagged with a table
    pub fn accept_payload(&mut self, payload: OrderPayload, table: Option<u32>) -> Order {
        let (orders, order) =
            std::mem::take(&mut self.orders).create_order_at(payload, table, Utc::now());
        self.orders = orders;
        order
    }

    pub fn orders(&self) -> &OrderBook {
        &self.orders
    }

    /// Moves the order with this number to its next status
    pub fn advance_order(&mut self, order_number: u32) -> Result<Order> {
        let id = self
            .orders
            .find_by_number(order_number)
            .map(|order| order.id.clone())
            .ok_or_else(|| Error::NotFound(format!("order #{}", order_number)))?;

        self.orders = std::mem::take(&mut self.orders).advance_order(&id);
        self.orders
            .get(&id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("order #{}", order_number)))
    }

    /// Kitchen columns derived from the current orders
    pub fn board(&self) -> StatusBoard {
        self.orders.board()
    }

    pub fn bill(&self, order_number: u32, currency: &str) -> Result<Bill> {
        self.orders
            .find_by_number(order_number)
            .map(|order| Bill::with_currency(order, currency))
            .ok_or_else(|| Error::NotFound(format!("order #{}", order_number)))
    }
}
