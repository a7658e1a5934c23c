//! One interactive session: the single owner of menu, orders and carts.
//!
//! All state changes go through [`StaffApi`] and [`CustomerApi`], which in
//! turn go through the cart and order-book transitions. Views such as the
//! kitchen board are re-derived from the current state on every render.

use crate::api::customer::CustomerApi;
use crate::api::staff::StaffApi;
use crate::config::Config;
use crate::core::cart::{Cart, QuantityChange};
use crate::core::data::{load_menu, load_orders};
use crate::core::error::Error;
use crate::core::menu::Menu;
use crate::core::order::{OrderBook, StatusBoard};
use crate::core::tables::table_links;
use crate::models::Order;
use crate::utils::{format_age, format_money};
use crate::Result;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// Whose cart the session commands act on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Staff,
    Table(u32),
}

/// A parsed session command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Menu,
    Add(String),
    Inc(String),
    Dec(String),
    Cart,
    Place,
    Board,
    Advance(u32),
    Bill(u32),
    Tables,
    Table(u32),
    Staff,
    Help,
    Quit,
}

impl Command {
    /// Parses one input line; blank lines yield `None`
    pub fn parse(line: &str) -> Option<Result<Command>> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let needs_arg = |what: &str| -> Result<String> {
            if rest.is_empty() {
                Err(Error::InvalidData(format!("{} expects {}", word, what)))
            } else {
                Ok(rest.to_string())
            }
        };
        let needs_number = |what: &str| -> Result<u32> {
            rest.parse()
                .map_err(|_| Error::InvalidData(format!("{} expects {}", word, what)))
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "menu" => Ok(Command::Menu),
            "add" => needs_arg("a menu item id or name").map(Command::Add),
            "inc" => needs_arg("a cart line id").map(Command::Inc),
            "dec" => needs_arg("a cart line id").map(Command::Dec),
            "cart" => Ok(Command::Cart),
            "place" => Ok(Command::Place),
            "board" => Ok(Command::Board),
            "advance" => needs_number("an order number").map(Command::Advance),
            "bill" => needs_number("an order number").map(Command::Bill),
            "tables" => Ok(Command::Tables),
            "table" => needs_number("a table number").map(Command::Table),
            "staff" => Ok(Command::Staff),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(Error::InvalidData(format!(
                "Unknown command '{}', try 'help'",
                other
            ))),
        };
        Some(command)
    }
}

pub const HELP: &str = "\
menu                 list the menu
add <id|name>        add one unit to the current cart
inc <line-id>        raise a cart line by one
dec <line-id>        lower a cart line by one (removes it at zero)
cart                 show the current cart
place                place the current cart as an order
board                show the kitchen board
advance <number>     move an order to its next status
bill <number>        print the bill of an order
tables               list table ordering links
table <n>            act as the customer at table n
staff                act as staff again
quit                 leave the session";

/// Session controller
pub struct Session {
    staff: StaffApi,
    tables: BTreeMap<u32, CustomerApi>,
    mode: Mode,
    table_count: u32,
    currency: String,
}

impl Session {
    /// Creates a session over already loaded data
    pub fn new(menu: Menu, orders: OrderBook, config: &Config) -> Self {
        Self {
            staff: StaffApi::new(menu, orders),
            tables: BTreeMap::new(),
            mode: Mode::Staff,
            table_count: config.table_count,
            currency: config.currency.clone(),
        }
    }

    /// Loads menu and orders from the mock data sources
    pub async fn load(config: &Config) -> Self {
        let latency = config.mock_latency();
        let (menu, orders) = tokio::join!(load_menu(latency), load_orders(latency));
        Self::new(Menu::from_items(menu), OrderBook::from_orders(orders), config)
    }

    pub fn staff(&self) -> &StaffApi {
        &self.staff
    }

    pub fn staff_mut(&mut self) -> &mut StaffApi {
        &mut self.staff
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The customer view of a table, opened on first use
    pub fn table(&mut self, table: u32) -> Result<&mut CustomerApi> {
        if table == 0 || table > self.table_count {
            return Err(Error::NotFound(format!(
                "table {} (tables are 1 to {})",
                table, self.table_count
            )));
        }
        Ok(self
            .tables
            .entry(table)
            .or_insert_with(|| CustomerApi::new(table)))
    }

    /// Places a table's cart as an order on the kitchen board
    pub fn place_table_order(&mut self, table: u32) -> Result<Order> {
        let payload = self.table(table)?.place_order()?;
        Ok(self.staff.accept_payload(payload, Some(table)))
    }

    fn current_cart(&self) -> Cart {
        match self.mode {
            Mode::Staff => self.staff.cart().clone(),
            Mode::Table(table) => self
                .tables
                .get(&table)
                .map(|customer| customer.cart().clone())
                .unwrap_or_default(),
        }
    }

    fn step_line(&mut self, line: &str, change: QuantityChange) -> Result<()> {
        match self.mode {
            Mode::Staff => self.staff.update_cart_quantity(line, change),
            Mode::Table(table) => self.table(table)?.update_quantity(line, change),
        }
        Ok(())
    }

    /// Runs one command and returns the text to show
    pub fn execute(&mut self, command: Command) -> Result<String> {
        match command {
            Command::Menu => Ok(self.render_menu()),
            Command::Add(key) => {
                match self.mode {
                    Mode::Staff => self.staff.add_to_cart(&key)?,
                    Mode::Table(table) => {
                        self.table(table)?;
                        if let Some(customer) = self.tables.get_mut(&table) {
                            customer.add_to_cart(self.staff.menu(), &key)?;
                        }
                    }
                }
                Ok(self.render_cart())
            }
            Command::Inc(line) => {
                self.step_line(&line, QuantityChange::Increment)?;
                Ok(self.render_cart())
            }
            Command::Dec(line) => {
                self.step_line(&line, QuantityChange::Decrement)?;
                Ok(self.render_cart())
            }
            Command::Cart => Ok(self.render_cart()),
            Command::Place => {
                let order = match self.mode {
                    Mode::Staff => self.staff.place_order()?,
                    Mode::Table(table) => self.place_table_order(table)?,
                };
                Ok(format!(
                    "Order #{} placed, total {}",
                    order.order_number,
                    format_money(order.total, &self.currency)
                ))
            }
            Command::Board => Ok(self.render_board(Utc::now())),
            Command::Advance(number) => {
                let order = self.staff.advance_order(number)?;
                Ok(format!("Order #{} is {}", order.order_number, order.status))
            }
            Command::Bill(number) => Ok(self.staff.bill(number, &self.currency)?.to_string()),
            Command::Tables => Ok(self.render_tables()),
            Command::Table(table) => {
                self.table(table)?;
                self.mode = Mode::Table(table);
                Ok(format!("Ordering as table {}", table))
            }
            Command::Staff => {
                self.mode = Mode::Staff;
                Ok("Ordering as staff".to_string())
            }
            Command::Help => Ok(HELP.to_string()),
            Command::Quit => Ok(String::new()),
        }
    }

    pub fn render_menu(&self) -> String {
        let mut out = String::new();
        for item in self.staff.menu().items() {
            let _ = writeln!(
                out,
                "{:<12} {:<22} {:<11} {:>10}",
                item.id,
                item.name,
                item.category,
                format_money(item.price, &self.currency)
            );
            for group in &item.customizations {
                let options: Vec<String> = group
                    .options
                    .iter()
                    .map(|o| format!("{} (+{})", o.name, format_money(o.price_modifier, &self.currency)))
                    .collect();
                let _ = writeln!(out, "{:<12} {}: {}", "", group.name, options.join(", "));
            }
        }
        out.trim_end().to_string()
    }

    pub fn render_cart(&self) -> String {
        let cart = self.current_cart();
        if cart.is_empty() {
            return "Cart is empty.".to_string();
        }
        let mut out = String::new();
        for line in cart.items() {
            let _ = writeln!(
                out,
                "{:<20} {:<22} x{:<3} {:>10}",
                line.id(),
                line.menu_item().name,
                line.quantity(),
                format_money(line.total_price(), &self.currency)
            );
        }
        let _ = write!(
            out,
            "{} item(s), total {}",
            cart.item_count(),
            format_money(cart.total(), &self.currency)
        );
        out
    }

    pub fn render_board(&self, now: DateTime<Utc>) -> String {
        render_board(&self.staff.board(), now, &self.currency)
    }

    pub fn render_tables(&self) -> String {
        table_links(self.table_count)
            .into_iter()
            .map(|link| format!("Table {:<3} {}", link.table, link.path))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Text rendering of the kitchen board, one section per status
pub fn render_board(board: &StatusBoard, now: DateTime<Utc>, currency: &str) -> String {
    let mut out = String::new();
    for (status, orders) in board.columns() {
        let _ = writeln!(out, "== {} ({})", status, orders.len());
        if orders.is_empty() {
            let _ = writeln!(out, "   No orders in this stage.");
        }
        for order in orders {
            let table = order
                .table
                .map(|t| format!(" table {}", t))
                .unwrap_or_default();
            let _ = writeln!(
                out,
                "   #{}{} - {} - {}",
                order.order_number,
                table,
                format_age(order.age(now)),
                format_money(order.total, currency)
            );
            for item in &order.items {
                let _ = writeln!(out, "      {}x {}", item.quantity, item.name);
            }
        }
    }
    out.trim_end().to_string()
}
