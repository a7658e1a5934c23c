//! Order lifecycle: placed orders and their forward-only status progression

use crate::core::cart::OrderPayload;
use crate::core::types::OrderStatus;
use crate::models::Order;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Moves an order one step along `Received -> Preparing -> Ready for Pickup`.
///
/// An order that is already ready for pickup is returned unchanged.
pub fn advance(mut order: Order) -> Order {
    match order.status.next() {
        Some(next) => {
            log::info!(
                "Order #{} moved from {} to {}",
                order.order_number,
                order.status,
                next
            );
            order.status = next;
        }
        None => log::debug!(
            "Order #{} is already {}, nothing to advance",
            order.order_number,
            order.status
        ),
    }
    order
}

/// Orders partitioned by status, each bucket oldest first
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatusBoard {
    pub received: Vec<Order>,
    pub preparing: Vec<Order>,
    pub ready_for_pickup: Vec<Order>,
}

impl StatusBoard {
    /// The bucket holding orders of the given status
    pub fn column(&self, status: OrderStatus) -> &[Order] {
        match status {
            OrderStatus::Received => &self.received,
            OrderStatus::Preparing => &self.preparing,
            OrderStatus::ReadyForPickup => &self.ready_for_pickup,
        }
    }

    /// Columns in progression order, paired with their status
    pub fn columns(&self) -> impl Iterator<Item = (OrderStatus, &[Order])> + '_ {
        OrderStatus::ALL
            .into_iter()
            .map(move |status| (status, self.column(status)))
    }
}

/// Partitions orders into the three status buckets, oldest first within each
pub fn group_by_status(orders: &[Order]) -> StatusBoard {
    let mut board = StatusBoard::default();
    for order in orders {
        let bucket = match order.status {
            OrderStatus::Received => &mut board.received,
            OrderStatus::Preparing => &mut board.preparing,
            OrderStatus::ReadyForPickup => &mut board.ready_for_pickup,
        };
        bucket.push(order.clone());
    }
    for bucket in [
        &mut board.received,
        &mut board.preparing,
        &mut board.ready_for_pickup,
    ] {
        bucket.sort_by_key(|order| order.created_at);
    }
    board
}

/// The collection of placed orders, most recent first
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct OrderBook {
    orders: Vec<Order>,
}

impl OrderBook {
    /// Creates an empty order book
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps orders loaded from a data source, keeping their order
    pub fn from_orders(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    /// Number the next order would receive: highest existing number + 1, or 1
    pub fn next_order_number(&self) -> u32 {
        self.orders
            .iter()
            .map(|order| order.order_number)
            .max()
            .unwrap_or(0)
            + 1
    }

    /// Ingests a cart payload as a new `Received` order placed now
    pub fn create_order(self, payload: OrderPayload) -> (Self, Order) {
        self.create_order_at(payload, None, Utc::now())
    }

    /// Ingests a payload with an explicit origin table and creation time.
    ///
    /// The new order is prepended; storage is most-recent-first.
    pub fn create_order_at(
        mut self,
        payload: OrderPayload,
        table: Option<u32>,
        created_at: DateTime<Utc>,
    ) -> (Self, Order) {
        let mut order = Order::new(
            format!("ORD-{}", Uuid::new_v4().simple()),
            self.next_order_number(),
            payload.items,
            payload.total,
            created_at,
        );
        order.table = table;

        log::info!(
            "Order #{} received with {} line(s), total {}",
            order.order_number,
            order.items.len(),
            order.total
        );
        self.orders.insert(0, order.clone());
        (self, order)
    }

    /// Advances the order with the given id. Unknown ids leave the book unchanged.
    pub fn advance_order(mut self, order_id: &str) -> Self {
        match self.orders.iter().position(|order| order.id == order_id) {
            Some(index) => {
                let order = self.orders.remove(index);
                self.orders.insert(index, advance(order));
            }
            None => log::warn!("Order {} not found, status unchanged", order_id),
        }
        self
    }

    pub fn get(&self, order_id: &str) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == order_id)
    }

    pub fn find_by_number(&self, order_number: u32) -> Option<&Order> {
        self.orders
            .iter()
            .find(|order| order.order_number == order_number)
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Kitchen view of the current orders
    pub fn board(&self) -> StatusBoard {
        group_by_status(&self.orders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OrderItem;
    use chrono::Duration;
    use rust_decimal::Decimal;

    fn payload() -> OrderPayload {
        OrderPayload {
            items: vec![OrderItem::new("4", "Earl Grey Tea", 1, Decimal::new(200, 0))],
            total: Decimal::new(200, 0),
        }
    }

    fn order(number: u32, status: OrderStatus, created_at: DateTime<Utc>) -> Order {
        Order::new(
            format!("ORD-{}", number),
            number,
            payload().items,
            payload().total,
            created_at,
        )
        .with_status(status)
    }

    #[test]
    fn test_order_numbers_follow_the_maximum() {
        let now = Utc::now();
        let book = OrderBook::from_orders(vec![
            order(102, OrderStatus::Preparing, now),
            order(101, OrderStatus::Received, now),
            order(103, OrderStatus::ReadyForPickup, now),
        ]);
        let (book, created) = book.create_order(payload());

        assert_eq!(created.order_number, 104);
        assert_eq!(created.status, OrderStatus::Received);
        assert_eq!(book.orders()[0].id, created.id);
        assert_eq!(book.len(), 4);

        let (_, first) = OrderBook::new().create_order(payload());
        assert_eq!(first.order_number, 1);
    }

    #[test]
    fn test_created_order_keeps_payload_and_table() {
        let now = Utc::now();
        let (book, created) = OrderBook::new().create_order_at(payload(), Some(3), now);

        assert_eq!(created.table, Some(3));
        assert_eq!(created.created_at, now);
        assert_eq!(created.total, Decimal::new(200, 0));
        assert!(created.id.starts_with("ORD-"));
        assert_eq!(book.find_by_number(1), Some(&created));
    }

    #[test]
    fn test_advance_stops_at_ready_for_pickup() {
        let start = order(1, OrderStatus::Received, Utc::now());

        let once = advance(start);
        assert_eq!(once.status, OrderStatus::Preparing);
        let twice = advance(once);
        assert_eq!(twice.status, OrderStatus::ReadyForPickup);
        let thrice = advance(twice.clone());
        assert_eq!(thrice, twice);
        assert_eq!(advance(thrice).status, OrderStatus::ReadyForPickup);
    }

    #[test]
    fn test_advance_order_by_id() {
        let now = Utc::now();
        let book = OrderBook::from_orders(vec![
            order(2, OrderStatus::Received, now),
            order(1, OrderStatus::Preparing, now),
        ]);

        let book = book.advance_order("ORD-1");
        assert_eq!(book.get("ORD-1").unwrap().status, OrderStatus::ReadyForPickup);
        assert_eq!(book.get("ORD-2").unwrap().status, OrderStatus::Received);
        // position in storage is preserved
        assert_eq!(book.orders()[1].id, "ORD-1");

        let unchanged = book.clone().advance_order("ORD-404");
        assert_eq!(unchanged, book);
    }

    #[test]
    fn test_group_by_status_orders_oldest_first() {
        let t1 = Utc::now() - Duration::minutes(10);
        let t2 = t1 + Duration::minutes(1);
        let t3 = t2 + Duration::minutes(1);

        // Storage is most-recent-first
        let orders = vec![
            order(3, OrderStatus::Received, t3),
            order(2, OrderStatus::Preparing, t2),
            order(1, OrderStatus::Received, t1),
        ];
        let board = group_by_status(&orders);

        let received: Vec<u32> = board.received.iter().map(|o| o.order_number).collect();
        assert_eq!(received, vec![1, 3]);
        assert_eq!(board.preparing.len(), 1);
        assert!(board.ready_for_pickup.is_empty());

        let titles: Vec<&str> = board.columns().map(|(status, _)| status.label()).collect();
        assert_eq!(titles, vec!["Received", "Preparing", "Ready for Pickup"]);
        assert_eq!(board.column(OrderStatus::Preparing)[0].order_number, 2);
    }
}
