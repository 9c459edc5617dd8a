use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::records::ProductId;
use crate::error::{GenError, GenResult};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
}

/// Reads the product catalog from a JSON array of `{id, name, price}`
/// objects. File order is preserved and duplicate ids pass through
/// unaltered. Emptiness is not an error here; the data source rejects an
/// empty catalog at construction.
pub fn load_catalog(path: &Path) -> GenResult<Vec<Product>> {
    let catalog_error = |reason: String| GenError::CatalogLoad {
        path: path.display().to_string(),
        reason,
    };

    let bytes = fs::read(path).map_err(|e| catalog_error(e.to_string()))?;
    let products: Vec<Product> =
        serde_json::from_slice(&bytes).map_err(|e| catalog_error(e.to_string()))?;

    for product in &products {
        if !product.price.is_finite() || product.price < 0.0 {
            return Err(catalog_error(format!(
                "product '{}' has invalid price {}",
                product.id, product.price
            )));
        }
    }

    Ok(products)
}
