//! Customer bill composed from a placed order

use crate::models::Order;
use crate::utils::format_money;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

const HEADER: &str = "BrewFlow";
const THANKS: &str = "Thank you for your order!";
const RULE: &str = "--------------------------------";

/// One printed line of a bill
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BillLine {
    pub name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub subtotal: Decimal,
}

/// A receipt for one order
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Bill {
    pub order_number: u32,
    pub created_at: DateTime<Utc>,
    pub lines: Vec<BillLine>,
    /// The stored order total, not a recomputation
    pub total: Decimal,
    pub currency: String,
}

impl Bill {
    /// Builds the bill for an order, using `₹` as the currency symbol
    pub fn for_order(order: &Order) -> Self {
        Self::with_currency(order, "₹")
    }

    pub fn with_currency(order: &Order, currency: &str) -> Self {
        Self {
            order_number: order.order_number,
            created_at: order.created_at,
            lines: order
                .items
                .iter()
                .map(|item| BillLine {
                    name: item.name.clone(),
                    quantity: item.quantity,
                    unit_price: item.unit_price,
                    subtotal: item.subtotal(),
                })
                .collect(),
            total: order.total,
            currency: currency.to_string(),
        }
    }
}

impl fmt::Display for Bill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:^32}", HEADER)?;
        writeln!(f, "{:^32}", THANKS)?;
        writeln!(f, "{}", RULE)?;
        writeln!(
            f,
            "Order #{:<8}{:>17}",
            self.order_number,
            self.created_at.format("%Y-%m-%d %H:%M").to_string()
        )?;
        writeln!(f, "{}", RULE)?;
        for line in &self.lines {
            writeln!(
                f,
                "{:<20}{:>12}",
                line.name,
                format_money(line.subtotal, &self.currency)
            )?;
            writeln!(
                f,
                "  {} x {}",
                line.quantity,
                format_money(line.unit_price, &self.currency)
            )?;
        }
        writeln!(f, "{}", RULE)?;
        write!(
            f,
            "{:<20}{:>12}",
            "Total",
            format_money(self.total, &self.currency)
        )
    }
}
