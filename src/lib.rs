//! BrewFlow: the in-memory core of a cafe point of sale.
//!
//! A [`Cart`] accumulates menu items into priced lines and hands an
//! [`OrderPayload`] to the [`OrderBook`], where orders move forward through
//! `Received -> Preparing -> Ready for Pickup`. [`session::Session`] owns one
//! session's menu, orders and carts.

pub mod api;
pub mod config;
pub mod core;
pub mod models;
pub mod session;
pub mod utils;

/// Re-export important types for easier access
pub use crate::models::{
    CartItem, Category, CustomizationGroup, CustomizationOption, Customizations, MenuItem, Order,
    OrderItem,
};

pub use crate::core::cart::{Cart, OrderPayload, QuantityChange};
pub use crate::core::error::Error;
pub use crate::core::order::{advance, group_by_status, OrderBook, StatusBoard};
pub use crate::core::types::OrderStatus;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
