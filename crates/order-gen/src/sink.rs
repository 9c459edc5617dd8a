use std::fs;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::data::records::Order;
use crate::error::GenResult;

/// Provenance record written beside a generated data file, enough to
/// reproduce the run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunManifest {
    pub schema_version: u32,
    pub seed: Option<u64>,
    pub total_orders: u64,
    pub max_users: u32,
    pub anchor_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Writes one JSON object per line and returns the number of orders written.
pub fn write_orders_jsonl(
    path: &Path,
    orders: impl Iterator<Item = Order>,
) -> GenResult<u64> {
    let mut file = fs::File::create(path)?;
    let mut written = 0u64;
    for order in orders {
        let line = serde_json::to_string(&order)?;
        file.write_all(line.as_bytes())?;
        file.write_all(b"\n")?;
        written += 1;
    }
    Ok(written)
}

pub fn load_orders_jsonl(path: &Path) -> GenResult<Vec<Order>> {
    let data = fs::read_to_string(path)?;
    let mut orders = Vec::new();
    for line in data.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let order: Order = serde_json::from_str(line)?;
        orders.push(order);
    }
    Ok(orders)
}

pub fn write_manifest(path: &Path, manifest: &RunManifest) -> GenResult<()> {
    fs::write(path, serde_json::to_vec_pretty(manifest)?)?;
    Ok(())
}

pub fn load_manifest(path: &Path) -> GenResult<RunManifest> {
    let manifest: RunManifest = serde_json::from_slice(&fs::read(path)?)?;
    Ok(manifest)
}
