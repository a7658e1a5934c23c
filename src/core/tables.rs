//! Table ordering links printed as QR codes.
//!
//! Only the path is built here; encoding a QR image is left to whatever
//! prints the cards.

use serde::{Deserialize, Serialize};

/// Number of tables when no configuration says otherwise
pub const DEFAULT_TABLE_COUNT: u32 = 6;

/// The customer ordering path for one table
pub fn table_path(table: u32) -> String {
    format!("/table/{}", table)
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TableLink {
    pub table: u32,
    pub path: String,
}

/// Links for tables `1..=count`
pub fn table_links(count: u32) -> Vec<TableLink> {
    (1..=count)
        .map(|table| TableLink {
            table,
            path: table_path(table),
        })
        .collect()
}

/// Parses the table number out of a `/table/{n}` path
pub fn parse_table_path(path: &str) -> Option<u32> {
    path.trim_end_matches('/')
        .strip_prefix("/table/")?
        .parse()
        .ok()
        .filter(|table| *table > 0)
}
