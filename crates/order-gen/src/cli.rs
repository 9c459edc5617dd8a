use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::config::GeneratorConfig;
use crate::error::{GenError, GenResult};

#[derive(Debug, Parser)]
#[command(name = "order-gen", about = "synthetic black-friday order data generator")]
pub struct Args {
    /// Product catalog path. Overrides the profile and the built-in default.
    #[arg(long, env = "ORDER_GEN_PRODUCTS")]
    pub products: Option<PathBuf>,
    /// YAML profile providing base configuration values.
    #[arg(long, env = "ORDER_GEN_PROFILE")]
    pub profile: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate orders as JSON lines, to stdout or into a file.
    Generate {
        #[arg(long)]
        total_orders: Option<u64>,
        #[arg(long)]
        max_users: Option<u32>,
        #[arg(long)]
        max_items: Option<u32>,
        #[arg(long)]
        max_quantity: Option<u32>,
        #[arg(long)]
        jitter_days: Option<i64>,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Write JSONL here (plus a sibling manifest) instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
        /// Print a distribution summary to stderr after generating.
        #[arg(long)]
        summary: bool,
    },
    /// Load the product catalog and print its entries.
    Catalog,
    /// Print the computed sale anchor date.
    Anchor {
        /// Reference date (YYYY-MM-DD); defaults to today.
        #[arg(long)]
        from: Option<NaiveDate>,
    },
}

pub fn validate_output_path(path: &Path) -> GenResult<()> {
    if path.as_os_str().is_empty() || path.file_name().is_none() {
        return Err(GenError::InvalidArgument(format!(
            "output path '{}' has no file name",
            path.display()
        )));
    }
    if path.is_dir() {
        return Err(GenError::InvalidArgument(format!(
            "output path '{}' is a directory",
            path.display()
        )));
    }
    Ok(())
}

/// Base configuration: the profile file when given, built-in defaults
/// otherwise. Command-line values are applied on top by the caller.
pub fn resolve_config(
    products: Option<&Path>,
    profile: Option<&Path>,
) -> GenResult<GeneratorConfig> {
    let mut config = match profile {
        Some(path) => GeneratorConfig::from_yaml_file(path)?,
        None => GeneratorConfig::default(),
    };
    if let Some(products) = products {
        config.products_path = products.to_path_buf();
    }
    Ok(config)
}
