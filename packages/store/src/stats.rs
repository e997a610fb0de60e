//! Dashboard aggregations. Chart rendering is the host's concern; this only
//! computes the numbers behind the admin dashboard tiles.

use crate::types::{Order, OrderStatus, Review, SalesPoint};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: OrderStatus,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Sum of order totals, canceled orders excluded.
    pub total_sales: f64,
    /// One entry per status, in fixed display order.
    pub order_counts: Vec<StatusCount>,
    /// Mean review rating, 0.0 with no reviews.
    pub average_rating: f64,
    /// Revenue per day, canceled orders excluded, ascending by date.
    pub sales_chart: Vec<SalesPoint>,
}

pub fn compute_stats(orders: &[Order], reviews: &[Review]) -> DashboardStats {
    let total_sales = orders
        .iter()
        .filter(|o| o.status != OrderStatus::Canceled)
        .map(|o| o.total)
        .sum();

    let order_counts = OrderStatus::ALL
        .iter()
        .map(|&status| StatusCount {
            status,
            count: orders.iter().filter(|o| o.status == status).count(),
        })
        .collect();

    let average_rating = if reviews.is_empty() {
        0.0
    } else {
        reviews.iter().map(|r| r.rating as f64).sum::<f64>() / reviews.len() as f64
    };

    let mut by_day: BTreeMap<String, f64> = BTreeMap::new();
    for order in orders {
        if order.status == OrderStatus::Canceled {
            continue;
        }
        *by_day
            .entry(order.date.date_naive().to_string())
            .or_insert(0.0) += order.total;
    }
    let sales_chart = by_day
        .into_iter()
        .map(|(date, amount)| SalesPoint { date, amount })
        .collect();

    DashboardStats {
        total_sales,
        order_counts,
        average_rating,
        sales_chart,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    #[test]
    fn test_seeded_stats() {
        let store = MemoryStore::seeded();
        let stats = store.stats();

        // Canceled order o4 (12.99) excluded from revenue.
        assert!((stats.total_sales - 139.88).abs() < 1e-9);

        let counts: Vec<(OrderStatus, usize)> = stats
            .order_counts
            .iter()
            .map(|c| (c.status, c.count))
            .collect();
        assert_eq!(
            counts,
            vec![
                (OrderStatus::Pending, 2),
                (OrderStatus::Preparing, 1),
                (OrderStatus::Delivered, 1),
                (OrderStatus::Canceled, 1),
            ]
        );

        assert!((stats.average_rating - 4.25).abs() < 1e-9);

        assert_eq!(stats.sales_chart.len(), 2);
        assert_eq!(stats.sales_chart[0].date, "2023-05-15");
        assert!((stats.sales_chart[0].amount - 102.91).abs() < 1e-9);
        assert_eq!(stats.sales_chart[1].date, "2023-05-16");
        assert!((stats.sales_chart[1].amount - 36.97).abs() < 1e-9);
    }

    #[test]
    fn test_empty_store_stats() {
        let stats = compute_stats(&[], &[]);
        assert_eq!(stats.total_sales, 0.0);
        assert_eq!(stats.average_rating, 0.0);
        assert!(stats.sales_chart.is_empty());
        assert!(stats.order_counts.iter().all(|c| c.count == 0));
    }
}
