use chrono::NaiveDate;

use order_gen::config::GeneratorConfig;
use order_gen::data::generator::OrderDataSource;
use order_gen::data::records::{PaymentMethod, PaymentWeights};

const CATALOG_JSON: &str = r#"[
  { "id": "SKU-1", "name": "Headphones", "price": 199.99 },
  { "id": "SKU-2", "name": "Keyboard", "price": 89.5 }
]"#;

#[test]
fn payment_choices_approximate_the_configured_weights() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("products.json");
    std::fs::write(&path, CATALOG_JSON).expect("write catalog");

    let config = GeneratorConfig {
        total_orders: 100_000,
        max_users: 10,
        max_items_per_order: 1,
        max_quantity: 1,
        products_path: path,
        seed: Some(42),
        payment_weights: PaymentWeights {
            credit_card: 3,
            debit_card: 1,
            paypal: 0,
            digital_wallet: 0,
            bank_transfer: 0,
            cash_on_delivery: 0,
        },
        ..GeneratorConfig::default()
    };
    let reference = NaiveDate::from_ymd_opt(2023, 6, 1).expect("reference date");
    let source = OrderDataSource::with_reference_date(config, reference).expect("source");

    let mut credit = 0u64;
    let mut debit = 0u64;
    let mut other = 0u64;
    for order in source.generate_orders() {
        match order.payment_method {
            PaymentMethod::CreditCard => credit += 1,
            PaymentMethod::DebitCard => debit += 1,
            _ => other += 1,
        }
    }

    assert_eq!(other, 0, "zero-weight methods must never be chosen");
    assert_eq!(credit + debit, 100_000);
    let ratio = credit as f64 / debit as f64;
    assert!(
        (2.8..=3.2).contains(&ratio),
        "credit:debit ratio {ratio} strayed from 3:1 ({credit} vs {debit})"
    );
}
