// Order model: a cart of menu items placed with one mess

use crate::models::{MessId, Price};
use crate::utils::pricing;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    Pickup,
    Delivery,
    DineIn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Placed,
    Confirmed,
    Preparing,
    Ready,
    OutForDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Delivered and cancelled orders are finished
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub menu_item_id: String,
    pub quantity: u32,
    /// Unit price
    pub price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
}

/// Represents an order with its items in the order they were added
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub mess_id: MessId,
    pub items: Vec<OrderItem>,
    pub order_type: OrderType,
    pub status: OrderStatus,
}

impl Order {
    /// Creates a new empty order in the placed state
    pub fn new<S: Into<String>>(id: S, user_id: S, mess_id: S, order_type: OrderType) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            mess_id: mess_id.into(),
            items: Vec::new(),
            order_type,
            status: OrderStatus::Placed,
        }
    }

    /// Adds an item, merging quantities when the menu item is already present
    pub fn add_item<S: Into<String>>(&mut self, menu_item_id: S, quantity: u32, price: Price) {
        if quantity == 0 {
            return;
        }
        let menu_item_id = menu_item_id.into();
        match self
            .items
            .iter_mut()
            .find(|item| item.menu_item_id == menu_item_id)
        {
            Some(item) => item.quantity = item.quantity.saturating_add(quantity),
            None => self.items.push(OrderItem {
                menu_item_id,
                quantity,
                price,
                special_instructions: None,
            }),
        }
    }

    pub fn remove_item(&mut self, menu_item_id: &str) {
        self.items.retain(|item| item.menu_item_id != menu_item_id);
    }

    /// Sets the quantity of an existing item, a zero quantity removes it
    pub fn update_quantity(&mut self, menu_item_id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove_item(menu_item_id);
        } else if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.menu_item_id == menu_item_id)
        {
            item.quantity = quantity;
        }
    }

    /// Total number of items including quantities
    pub fn total_item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0, |total: u32, item| total.saturating_add(item.quantity))
    }

    pub fn total_amount(&self) -> Price {
        self.items
            .iter()
            .map(|item| item.price * f64::from(item.quantity))
            .sum()
    }

    pub fn is_active(&self) -> bool {
        !self.status.is_terminal()
    }

    /// Delivery fee for this order, zero unless it is delivered
    pub fn delivery_fee(&self, distance_km: f64) -> Price {
        match self.order_type {
            OrderType::Delivery => pricing::delivery_fee(self.total_amount(), distance_km),
            OrderType::Pickup | OrderType::DineIn => 0.0,
        }
    }
}

/// Splits orders into (active, past), keeping their relative order
pub fn partition_orders(orders: &[Order]) -> (Vec<&Order>, Vec<&Order>) {
    orders.iter().partition(|order| order.is_active())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_order() -> Order {
        let mut order = Order::new("o1", "u1", "m1", OrderType::Delivery);
        order.add_item("thali", 1, 120.0);
        order.add_item("chapati", 4, 10.0);
        order
    }

    #[test]
    fn test_add_item_merges_quantities() {
        let mut order = create_test_order();
        order.add_item("chapati", 2, 10.0);
        order.add_item("lassi", 0, 40.0);

        assert_eq!(order.items.len(), 2);
        assert_eq!(order.items[1].quantity, 6);
        assert_eq!(order.total_item_count(), 7);
    }

    #[test]
    fn test_update_and_remove() {
        let mut order = create_test_order();
        order.update_quantity("thali", 2);
        assert_eq!(order.total_amount(), 280.0);

        order.update_quantity("chapati", 0);
        assert_eq!(order.items.len(), 1);

        order.remove_item("thali");
        assert!(order.items.is_empty());
        assert_eq!(order.total_amount(), 0.0);
    }

    #[test]
    fn test_delivery_fee_depends_on_type() {
        let order = create_test_order();
        assert_eq!(order.total_amount(), 160.0);
        assert_eq!(order.delivery_fee(8.0), 45.0);

        let mut pickup = order.clone();
        pickup.order_type = OrderType::Pickup;
        assert_eq!(pickup.delivery_fee(8.0), 0.0);

        let mut large = order.clone();
        large.add_item("sweets", 2, 90.0);
        assert_eq!(large.delivery_fee(8.0), 0.0);
    }

    #[test]
    fn test_partition_orders() {
        let mut delivered = create_test_order();
        delivered.id = "o2".into();
        delivered.status = OrderStatus::Delivered;
        let mut cancelled = create_test_order();
        cancelled.id = "o3".into();
        cancelled.status = OrderStatus::Cancelled;
        let mut cooking = create_test_order();
        cooking.id = "o4".into();
        cooking.status = OrderStatus::Preparing;

        let orders = vec![create_test_order(), delivered, cancelled, cooking];
        let (active, past) = partition_orders(&orders);

        let ids = |v: &Vec<&Order>| v.iter().map(|o| o.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&active), vec!["o1", "o4"]);
        assert_eq!(ids(&past), vec!["o2", "o3"]);
    }

    #[test]
    fn test_quantities_saturate() {
        let mut order = create_test_order();
        order.add_item("chapati", u32::MAX, 10.0);
        assert_eq!(order.items[1].quantity, u32::MAX);
        assert_eq!(order.total_item_count(), u32::MAX);
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&OrderStatus::OutForDelivery).unwrap();
        assert_eq!(json, "\"out_for_delivery\"");
    }
}
