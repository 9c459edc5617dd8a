use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::catalog::{load_catalog, Product};
use super::records::{
    AppliedCoupon, Order, OrderItem, PaymentMethod, ShippingMethod, DISCOUNT_COUPONS,
};
use crate::calendar::next_occurrence;
use crate::config::GeneratorConfig;
use crate::error::{GenError, GenResult};

/// Source of synthetic order records. Construction validates the
/// configuration, loads the catalog once and computes the sale anchor date;
/// afterwards the source stays usable for its whole lifetime and every
/// `generate_orders` call yields a fresh sequence.
///
/// Instances hold no interior mutability but are not intended to be shared
/// across threads generating concurrently; give each thread its own source.
pub struct OrderDataSource {
    config: GeneratorConfig,
    catalog: Vec<Product>,
    anchor: NaiveDate,
    payment_dist: WeightedIndex<u32>,
    shipping_dist: WeightedIndex<u32>,
}

impl OrderDataSource {
    /// Builds a source anchored to the next sale date relative to today.
    pub fn new(config: GeneratorConfig) -> GenResult<Self> {
        Self::with_reference_date(config, Utc::now().date_naive())
    }

    /// Builds a source anchored relative to an explicit reference date.
    pub fn with_reference_date(
        config: GeneratorConfig,
        reference: NaiveDate,
    ) -> GenResult<Self> {
        config.validate()?;
        let catalog = load_catalog(&config.products_path)?;
        if catalog.is_empty() {
            return Err(GenError::EmptyCatalog {
                path: config.products_path.display().to_string(),
            });
        }
        let anchor = next_occurrence(&config.sale_date, reference)?;
        let payment_dist = WeightedIndex::new(config.payment_weights.as_slice())
            .map_err(|e| GenError::InvalidConfig(format!("payment_weights: {e}")))?;
        let shipping_dist = WeightedIndex::new(config.shipping_weights.as_slice())
            .map_err(|e| GenError::InvalidConfig(format!("shipping_weights: {e}")))?;

        Ok(Self {
            config,
            catalog,
            anchor,
            payment_dist,
            shipping_dist,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    pub fn anchor_date(&self) -> NaiveDate {
        self.anchor
    }

    /// Starts a lazy, finite sequence of exactly `total_orders` orders.
    /// Seeded from the configured seed, or from entropy when unset; RNG
    /// state advances with each produced order, so the sequence is not
    /// restartable.
    pub fn generate_orders(&self) -> OrderIter<'_> {
        let seed = self.config.seed.unwrap_or_else(rand::random);
        OrderIter {
            source: self,
            rng: ChaCha8Rng::seed_from_u64(seed),
            produced: 0,
        }
    }

    fn build_order(&self, order_number: u64, rng: &mut ChaCha8Rng) -> Order {
        let cfg = &self.config;
        let user_id = rng.gen_range(1..=cfg.max_users);
        let ordered_at = self.sample_timestamp(rng);

        let max_lines = (cfg.max_items_per_order as usize).min(self.catalog.len());
        let line_count = rng.gen_range(1..=max_lines);
        let picks = index::sample(rng, self.catalog.len(), line_count);
        let mut items = Vec::with_capacity(line_count);
        let mut total = 0.0;
        for idx in picks.iter() {
            let product = &self.catalog[idx];
            let quantity = rng.gen_range(1..=cfg.max_quantity);
            total += product.price * f64::from(quantity);
            items.push(OrderItem {
                product_id: product.id.clone(),
                quantity,
            });
        }
        let total = round_cents(total);

        let payment_method = PaymentMethod::ALL[self.payment_dist.sample(rng)];
        let shipping_method = ShippingMethod::ALL[self.shipping_dist.sample(rng)];

        let subscriber = rng.gen_bool(0.5);
        let coupon = if rng.gen_bool(0.7) {
            let (code, rate) = DISCOUNT_COUPONS[rng.gen_range(0..DISCOUNT_COUPONS.len())];
            Some(AppliedCoupon {
                code: code.to_string(),
                rate,
                value: round_cents(total * rate),
            })
        } else {
            None
        };
        let sales_tax = round_cents(total * rng.gen_range(0.01..=0.10));
        let gift_wrap = rng.gen_bool(0.2);
        let shipping_cost = if subscriber {
            0.0
        } else {
            round_cents(rng.gen_range(total * 0.01..=total * 0.10))
        };
        let estimated_delivery = ordered_at.date_naive() + Duration::days(rng.gen_range(3..=30));
        let coupon_value = coupon.as_ref().map_or(0.0, |c| c.value);
        let net_total = round_cents(total - coupon_value + sales_tax + shipping_cost);

        Order {
            order_number,
            user_id,
            ordered_at,
            items,
            payment_method,
            shipping_method,
            total,
            subscriber,
            coupon,
            sales_tax,
            gift_wrap,
            shipping_cost,
            estimated_delivery,
            net_total,
        }
    }

    fn sample_timestamp(&self, rng: &mut ChaCha8Rng) -> DateTime<Utc> {
        let midnight = self.anchor.and_time(NaiveTime::MIN).and_utc();
        let window_secs = self.config.jitter_days * 86_400;
        if window_secs == 0 {
            return midnight;
        }
        midnight + Duration::seconds(rng.gen_range(-window_secs..=window_secs))
    }
}

/// Lazy order sequence. One order is built per `next` call; dropping the
/// iterator early has no side effects.
pub struct OrderIter<'a> {
    source: &'a OrderDataSource,
    rng: ChaCha8Rng,
    produced: u64,
}

impl Iterator for OrderIter<'_> {
    type Item = Order;

    fn next(&mut self) -> Option<Order> {
        if self.produced >= self.source.config.total_orders {
            return None;
        }
        self.produced += 1;
        Some(self.source.build_order(self.produced, &mut self.rng))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.source.config.total_orders - self.produced) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for OrderIter<'_> {}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
