use std::collections::BTreeMap;

use serde::Serialize;

use crate::data::records::Order;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ValueStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
}

pub fn compute_stats(values: &[f64]) -> Option<ValueStats> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let len = sorted.len();
    let sum: f64 = sorted.iter().sum();
    let median = if len % 2 == 0 {
        (sorted[(len / 2) - 1] + sorted[len / 2]) / 2.0
    } else {
        sorted[len / 2]
    };

    Some(ValueStats {
        min: *sorted.first().unwrap_or(&0.0),
        max: *sorted.last().unwrap_or(&0.0),
        mean: sum / (len as f64),
        median,
    })
}

/// Tally over a generated sequence, fed one order at a time so the sequence
/// can stay streaming.
#[derive(Clone, Debug, Default)]
pub struct GenerationSummary {
    orders: u64,
    items: u64,
    payment_counts: BTreeMap<&'static str, u64>,
    shipping_counts: BTreeMap<&'static str, u64>,
    totals: Vec<f64>,
}

#[derive(Clone, Debug, Serialize)]
pub struct SummaryReport {
    pub orders: u64,
    pub items: u64,
    pub payment_counts: BTreeMap<&'static str, u64>,
    pub shipping_counts: BTreeMap<&'static str, u64>,
    pub order_total: Option<ValueStats>,
}

impl GenerationSummary {
    pub fn record(&mut self, order: &Order) {
        self.orders += 1;
        self.items += order.items.len() as u64;
        *self
            .payment_counts
            .entry(order.payment_method.as_str())
            .or_insert(0) += 1;
        *self
            .shipping_counts
            .entry(order.shipping_method.as_str())
            .or_insert(0) += 1;
        self.totals.push(order.total);
    }

    pub fn finish(self) -> SummaryReport {
        let order_total = compute_stats(&self.totals);
        SummaryReport {
            orders: self.orders,
            items: self.items,
            payment_counts: self.payment_counts,
            shipping_counts: self.shipping_counts,
            order_total,
        }
    }
}
