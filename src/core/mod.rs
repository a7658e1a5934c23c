//! Core point-of-sale logic and data flows

pub mod bill;
pub mod cart;
pub mod data;
pub mod description;
pub mod error;
pub mod menu;
pub mod order;
pub mod tables;
pub mod types;
