//! Small formatting helpers shared by the bill and the CLI

use chrono::Duration;
use rust_decimal::Decimal;

/// Renders an amount with two decimal places behind a currency symbol
pub fn format_money(amount: Decimal, currency: &str) -> String {
    format!("{}{:.2}", currency, amount)
}

/// Coarse "time ago" label for an elapsed duration
pub fn format_age(age: Duration) -> String {
    let minutes = age.num_minutes();
    match minutes {
        m if m < 1 => "just now".to_string(),
        1 => "1 minute ago".to_string(),
        m if m < 60 => format!("{} minutes ago", m),
        m if m < 120 => "1 hour ago".to_string(),
        m => format!("{} hours ago", m / 60),
    }
}
