//! Role-specific entry points over the core

pub mod customer;
pub mod staff;
