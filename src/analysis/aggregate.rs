//! Aggregator
//!
//! Group-and-count over the order-item join table. Groups are formed in
//! ascending key order and then stably sorted by count, descending, so ties
//! come out alphabetically.

use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

use crate::data::{CategoryCount, OrderItem, PaymentCount};

/// Distinct products per category, sorted descending by count.
/// Rows without a category are not counted.
pub fn category_counts(items: &[OrderItem]) -> Vec<CategoryCount> {
    distinct_counts(
        items,
        |item| item.category.as_deref(),
        |item| item.product_id.as_str(),
    )
    .into_iter()
    .map(|(category, products)| CategoryCount { category, products })
    .collect()
}

/// Distinct orders per payment type, sorted descending by count.
pub fn payment_counts(items: &[OrderItem]) -> Vec<PaymentCount> {
    distinct_counts(
        items,
        |item| item.payment_type.as_deref(),
        |item| item.order_id.as_str(),
    )
    .into_iter()
    .map(|(payment_type, orders)| PaymentCount {
        payment_type,
        orders,
    })
    .collect()
}

fn distinct_counts<'a, K, V>(items: &'a [OrderItem], key: K, value: V) -> Vec<(String, u64)>
where
    K: Fn(&'a OrderItem) -> Option<&'a str>,
    V: Fn(&'a OrderItem) -> &'a str,
{
    let mut groups: BTreeMap<&str, HashSet<&str>> = BTreeMap::new();
    for item in items {
        if let Some(group) = key(item) {
            groups.entry(group).or_default().insert(value(item));
        }
    }

    let mut counts: Vec<(String, u64)> = groups
        .into_iter()
        .map(|(group, members)| (group.to_string(), members.len() as u64))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Both aggregates plus headline totals
#[derive(Debug, Clone, Default, Serialize)]
pub struct Summary {
    pub categories: Vec<CategoryCount>,
    pub payments: Vec<PaymentCount>,
    pub distinct_orders: usize,
    pub distinct_products: usize,
    pub order_items: usize,
}

impl Summary {
    pub fn from_items(items: &[OrderItem]) -> Self {
        let distinct_orders = items
            .iter()
            .map(|i| i.order_id.as_str())
            .collect::<HashSet<_>>()
            .len();
        let distinct_products = items
            .iter()
            .map(|i| i.product_id.as_str())
            .collect::<HashSet<_>>()
            .len();

        Self {
            categories: category_counts(items),
            payments: payment_counts(items),
            distinct_orders,
            distinct_products,
            order_items: items.len(),
        }
    }
}
