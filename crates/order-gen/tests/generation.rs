use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use chrono::{NaiveDate, NaiveTime};

use order_gen::config::GeneratorConfig;
use order_gen::data::generator::OrderDataSource;
use order_gen::data::records::ProductId;

const CATALOG_JSON: &str = r#"[
  { "id": "SKU-1", "name": "Headphones", "price": 199.99 },
  { "id": "SKU-2", "name": "Keyboard", "price": 89.5 },
  { "id": "SKU-3", "name": "Mouse", "price": 34.95 },
  { "id": "SKU-4", "name": "Monitor", "price": 269.0 },
  { "id": "SKU-5", "name": "Kettle", "price": 24.99 },
  { "id": "SKU-6", "name": "Notebook", "price": 14.5 }
]"#;

fn write_catalog(dir: &std::path::Path) -> PathBuf {
    let path = dir.join("products.json");
    std::fs::write(&path, CATALOG_JSON).expect("write catalog");
    path
}

fn source_with(
    dir: &std::path::Path,
    update: impl FnOnce(&mut GeneratorConfig),
) -> OrderDataSource {
    let mut config = GeneratorConfig {
        total_orders: 500,
        max_users: 20,
        max_items_per_order: 4,
        max_quantity: 5,
        jitter_days: 7,
        products_path: write_catalog(dir),
        seed: Some(42),
        ..GeneratorConfig::default()
    };
    update(&mut config);
    let reference = NaiveDate::from_ymd_opt(2023, 6, 1).expect("reference date");
    OrderDataSource::with_reference_date(config, reference).expect("source")
}

#[test]
fn produces_exactly_the_configured_order_count() {
    let temp = tempfile::tempdir().expect("tempdir");
    let source = source_with(temp.path(), |_| {});
    assert_eq!(source.generate_orders().count(), 500);
}

#[test]
fn order_numbers_are_sequential_from_one() {
    let temp = tempfile::tempdir().expect("tempdir");
    let source = source_with(temp.path(), |c| c.total_orders = 25);
    let numbers: Vec<u64> = source.generate_orders().map(|o| o.order_number).collect();
    assert_eq!(numbers, (1..=25).collect::<Vec<u64>>());
}

#[test]
fn every_item_references_a_catalog_product() {
    let temp = tempfile::tempdir().expect("tempdir");
    let source = source_with(temp.path(), |_| {});
    let known: HashSet<ProductId> = source.catalog().iter().map(|p| p.id.clone()).collect();
    for order in source.generate_orders() {
        for item in &order.items {
            assert!(
                known.contains(&item.product_id),
                "order {} references unknown product {}",
                order.order_number,
                item.product_id
            );
        }
    }
}

#[test]
fn user_item_and_quantity_bounds_hold() {
    let temp = tempfile::tempdir().expect("tempdir");
    let source = source_with(temp.path(), |_| {});
    for order in source.generate_orders() {
        assert!((1..=20).contains(&order.user_id), "user_id {}", order.user_id);
        assert!(
            (1..=4).contains(&order.items.len()),
            "item count {}",
            order.items.len()
        );
        let distinct: HashSet<&ProductId> = order.items.iter().map(|i| &i.product_id).collect();
        assert_eq!(distinct.len(), order.items.len(), "duplicate line items");
        for item in &order.items {
            assert!((1..=5).contains(&item.quantity), "quantity {}", item.quantity);
        }
    }
}

#[test]
fn timestamps_stay_within_the_jitter_window() {
    let temp = tempfile::tempdir().expect("tempdir");
    let source = source_with(temp.path(), |c| c.jitter_days = 3);
    let midnight = source.anchor_date().and_time(NaiveTime::MIN).and_utc();
    let window = 3 * 86_400;
    for order in source.generate_orders() {
        let offset = (order.ordered_at - midnight).num_seconds();
        assert!(
            (-window..=window).contains(&offset),
            "order {} is {offset}s from the anchor",
            order.order_number
        );
    }
}

#[test]
fn totals_follow_catalog_prices_and_quantities() {
    let temp = tempfile::tempdir().expect("tempdir");
    let source = source_with(temp.path(), |_| {});
    let prices: HashMap<ProductId, f64> = source
        .catalog()
        .iter()
        .map(|p| (p.id.clone(), p.price))
        .collect();
    for order in source.generate_orders() {
        let expected: f64 = order
            .items
            .iter()
            .map(|i| prices[&i.product_id] * f64::from(i.quantity))
            .sum();
        assert!(
            (order.total - expected).abs() < 0.011,
            "order {}: total {} vs expected {expected}",
            order.order_number,
            order.total
        );

        let coupon_value = order.coupon.as_ref().map_or(0.0, |c| c.value);
        let net = order.total - coupon_value + order.sales_tax + order.shipping_cost;
        assert!(
            (order.net_total - net).abs() < 0.011,
            "order {}: net_total {} vs expected {net}",
            order.order_number,
            order.net_total
        );
    }
}

#[test]
fn subscribers_ship_for_free() {
    let temp = tempfile::tempdir().expect("tempdir");
    let source = source_with(temp.path(), |_| {});
    let mut subscribers = 0;
    for order in source.generate_orders() {
        if order.subscriber {
            subscribers += 1;
            assert_eq!(order.shipping_cost, 0.0, "order {}", order.order_number);
        }
        let delivery_gap = order.estimated_delivery - order.ordered_at.date_naive();
        assert!(
            (3..=30).contains(&delivery_gap.num_days()),
            "order {}: delivery {} days out",
            order.order_number,
            delivery_gap.num_days()
        );
    }
    assert!(subscribers > 0, "expected some subscriber orders in 500");
}

#[test]
fn item_lines_are_capped_by_catalog_size() {
    let temp = tempfile::tempdir().expect("tempdir");
    let source = source_with(temp.path(), |c| c.max_items_per_order = 50);
    for order in source.generate_orders().take(100) {
        assert!(order.items.len() <= 6, "item count {}", order.items.len());
    }
}
