use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::calendar::SaleDateRule;
use crate::data::records::{PaymentWeights, ShippingWeights};
use crate::error::{GenError, GenResult};

pub const DEFAULT_PRODUCTS_PATH: &str = "data/products.json";

/// Every knob of the generator as one explicit structure. Defaults mirror
/// the shipped demo profile: 1000 orders across up to 50 users, at most 10
/// line items of quantity <= 10 each, timestamps within a week of the sale
/// date.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub total_orders: u64,
    pub max_users: u32,
    pub max_items_per_order: u32,
    pub max_quantity: u32,
    pub jitter_days: i64,
    pub products_path: PathBuf,
    /// Fixed RNG seed. Unset means every `generate_orders` call draws a
    /// fresh entropy seed and sequences are not reproducible.
    pub seed: Option<u64>,
    pub payment_weights: PaymentWeights,
    pub shipping_weights: ShippingWeights,
    pub sale_date: SaleDateRule,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            total_orders: 1000,
            max_users: 50,
            max_items_per_order: 10,
            max_quantity: 10,
            jitter_days: 7,
            products_path: PathBuf::from(DEFAULT_PRODUCTS_PATH),
            seed: None,
            payment_weights: PaymentWeights::default(),
            shipping_weights: ShippingWeights::default(),
            sale_date: SaleDateRule::default(),
        }
    }
}

impl GeneratorConfig {
    /// Loads a YAML profile. Missing keys fall back to the defaults above.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> GenResult<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        serde_yaml::from_slice::<Self>(&bytes).map_err(|error| {
            GenError::InvalidConfig(format!("invalid profile '{}': {error}", path.display()))
        })
    }

    pub fn validate(&self) -> GenResult<()> {
        if self.total_orders == 0 {
            return Err(GenError::InvalidConfig(
                "total_orders must be positive".to_string(),
            ));
        }
        if self.max_users == 0 {
            return Err(GenError::InvalidConfig(
                "max_users must be positive".to_string(),
            ));
        }
        if self.max_items_per_order == 0 {
            return Err(GenError::InvalidConfig(
                "max_items_per_order must be positive".to_string(),
            ));
        }
        if self.max_quantity == 0 {
            return Err(GenError::InvalidConfig(
                "max_quantity must be positive".to_string(),
            ));
        }
        if self.jitter_days < 0 {
            return Err(GenError::InvalidConfig(
                "jitter_days must not be negative".to_string(),
            ));
        }
        if !(1..=12).contains(&self.sale_date.month) {
            return Err(GenError::InvalidConfig(format!(
                "sale month {} out of range 1..=12",
                self.sale_date.month
            )));
        }
        if !(1..=5).contains(&self.sale_date.week_of_month) {
            return Err(GenError::InvalidConfig(format!(
                "sale week_of_month {} out of range 1..=5",
                self.sale_date.week_of_month
            )));
        }
        if self.payment_weights.total() == 0 {
            return Err(GenError::InvalidConfig(
                "payment_weights must not all be zero".to_string(),
            ));
        }
        if self.shipping_weights.total() == 0 {
            return Err(GenError::InvalidConfig(
                "shipping_weights must not all be zero".to_string(),
            ));
        }
        Ok(())
    }
}
