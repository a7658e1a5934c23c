//! Mock data sources with a fixed latency and no failure path

use crate::core::types::OrderStatus;
use crate::models::{
    Category, CustomizationGroup, CustomizationOption, Customizations, MenuItem, Order, OrderItem,
};
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use rust_decimal::Decimal;
use std::time::Duration;

/// Delay the mock loaders wait before resolving
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(500);

fn rupees(amount: i64) -> Decimal {
    Decimal::new(amount, 0)
}

fn group(name: &str, options: &[(&str, i64)]) -> CustomizationGroup {
    CustomizationGroup::new(
        name,
        options
            .iter()
            .map(|(option, modifier)| CustomizationOption::new(*option, rupees(*modifier)))
            .collect(),
    )
}

fn selection(pairs: &[(&str, &str)]) -> Customizations {
    pairs
        .iter()
        .map(|(group, option)| (group.to_string(), option.to_string()))
        .collect()
}

/// The cafe's starting catalogue
pub fn seed_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::new("1", "Classic Espresso", rupees(250), Category::Coffee)
            .with_description(
                "A rich and aromatic shot of pure coffee essence, the perfect pick-me-up.",
            )
            .with_customization(group("Size", &[("Single", 0), ("Double", 80)])),
        MenuItem::new("2", "Caramel Latte", rupees(350), Category::Coffee)
            .with_description(
                "Smooth espresso and steamed milk, sweetened with a swirl of buttery caramel.",
            )
            .with_customization(group("Size", &[("Small", 0), ("Medium", 40), ("Large", 80)]))
            .with_customization(group(
                "Milk",
                &[("Whole Milk", 0), ("Oat Milk", 60), ("Almond Milk", 60)],
            )),
        MenuItem::new("3", "Chocolate Croissant", rupees(280), Category::Pastries)
            .with_description("A flaky, buttery croissant with a rich, dark chocolate center."),
        MenuItem::new("4", "Earl Grey Tea", rupees(200), Category::Tea)
            .with_description(
                "A classic black tea infused with the fragrant essence of bergamot orange.",
            )
            .with_customization(group("Size", &[("Small", 0), ("Large", 40)])),
        MenuItem::new("5", "Turkey Club", rupees(550), Category::Sandwiches)
            .with_description(
                "Roasted turkey, crispy bacon, lettuce, and tomato on toasted sourdough.",
            ),
    ]
}

/// Three orders already on the board, one per status, placed relative to `now`
pub fn seed_orders(now: DateTime<Utc>) -> Vec<Order> {
    vec![
        Order::new(
            "ORD-1",
            101,
            vec![
                OrderItem::new("1", "Classic Espresso", 1, rupees(250))
                    .with_customizations(selection(&[("Size", "Double")])),
                OrderItem::new("3", "Chocolate Croissant", 1, rupees(280)),
            ],
            rupees(530),
            now - ChronoDuration::minutes(5),
        ),
        Order::new(
            "ORD-2",
            102,
            vec![OrderItem::new("2", "Caramel Latte", 2, rupees(350))
                .with_customizations(selection(&[("Size", "Large"), ("Milk", "Oat Milk")]))],
            rupees(700),
            now - ChronoDuration::minutes(3),
        )
        .with_status(OrderStatus::Preparing),
        Order::new(
            "ORD-3",
            103,
            vec![OrderItem::new("4", "Earl Grey Tea", 1, rupees(200))],
            rupees(200),
            now - ChronoDuration::minutes(1),
        )
        .with_status(OrderStatus::ReadyForPickup),
    ]
}

/// Resolves the seeded menu after `latency`
pub async fn load_menu(latency: Duration) -> Vec<MenuItem> {
    tokio::time::sleep(latency).await;
    let items = seed_menu();
    log::debug!("Loaded {} menu items", items.len());
    items
}

/// Resolves the seeded orders after `latency`
pub async fn load_orders(latency: Duration) -> Vec<Order> {
    tokio::time::sleep(latency).await;
    let orders = seed_orders(Utc::now());
    log::debug!("Loaded {} orders", orders.len());
    orders
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_menu() {
        let menu = seed_menu();
        assert_eq!(menu.len(), 5);
        assert_eq!(menu[0].name, "Classic Espresso");
        assert_eq!(menu[1].customizations.len(), 2);
        assert!(menu[2].customizations.is_empty());
        assert!(menu.iter().all(|item| item.validate().is_ok()));
    }

    #[test]
    fn test_seed_orders_cover_every_status() {
        let now = Utc::now();
        let orders = seed_orders(now);

        let numbers: Vec<u32> = orders.iter().map(|o| o.order_number).collect();
        assert_eq!(numbers, vec![101, 102, 103]);
        for (order, status) in orders.iter().zip(OrderStatus::ALL) {
            assert_eq!(order.status, status);
            let line_sum: Decimal = order.items.iter().map(|item| item.subtotal()).sum();
            assert_eq!(order.total, line_sum);
        }
        assert_eq!(orders[0].age(now).num_minutes(), 5);
    }

    #[tokio::test]
    async fn test_loaders_resolve() {
        let menu = load_menu(Duration::from_millis(1)).await;
        let orders = load_orders(Duration::ZERO).await;
        assert_eq!(menu.len(), 5);
        assert_eq!(orders.len(), 3);
    }
}
