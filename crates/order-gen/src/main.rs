use std::fs;

use chrono::Utc;
use clap::Parser;
use tracing::info;

use order_gen::calendar::next_occurrence;
use order_gen::cli::{resolve_config, Args, Command};
use order_gen::data::catalog::load_catalog;
use order_gen::data::generator::OrderDataSource;
use order_gen::error::GenResult;
use order_gen::sink::{write_manifest, write_orders_jsonl, RunManifest};
use order_gen::stats::GenerationSummary;

fn main() -> GenResult<()> {
    setup_tracing();
    let args = Args::parse();

    match args.command {
        Command::Generate {
            total_orders,
            max_users,
            max_items,
            max_quantity,
            jitter_days,
            seed,
            output,
            summary,
        } => {
            let mut config = resolve_config(args.products.as_deref(), args.profile.as_deref())?;
            if let Some(v) = total_orders {
                config.total_orders = v;
            }
            if let Some(v) = max_users {
                config.max_users = v;
            }
            if let Some(v) = max_items {
                config.max_items_per_order = v;
            }
            if let Some(v) = max_quantity {
                config.max_quantity = v;
            }
            if let Some(v) = jitter_days {
                config.jitter_days = v;
            }
            config.seed = Some(seed);

            let source = OrderDataSource::new(config)?;
            info!(
                total_orders = source.config().total_orders,
                anchor = %source.anchor_date(),
                "generating orders"
            );

            let mut tally = GenerationSummary::default();
            match output {
                Some(path) => {
                    order_gen::cli::validate_output_path(&path)?;
                    if let Some(parent) = path.parent() {
                        if !parent.as_os_str().is_empty() {
                            fs::create_dir_all(parent)?;
                        }
                    }
                    let orders = source
                        .generate_orders()
                        .inspect(|order| tally.record(order));
                    let written = write_orders_jsonl(&path, orders)?;

                    let manifest = RunManifest {
                        schema_version: 1,
                        seed: source.config().seed,
                        total_orders: written,
                        max_users: source.config().max_users,
                        anchor_date: source.anchor_date(),
                        created_at: Utc::now(),
                    };
                    let manifest_path = path.with_extension("manifest.json");
                    write_manifest(&manifest_path, &manifest)?;
                    println!("wrote {written} orders to {}", path.display());
                    println!("wrote manifest: {}", manifest_path.display());
                }
                None => {
                    for order in source.generate_orders() {
                        tally.record(&order);
                        println!("{}", serde_json::to_string(&order)?);
                    }
                }
            }
            if summary {
                eprintln!("{}", serde_json::to_string_pretty(&tally.finish())?);
            }
        }
        Command::Catalog => {
            let config = resolve_config(args.products.as_deref(), args.profile.as_deref())?;
            let products = load_catalog(&config.products_path)?;
            println!(
                "{} products in {}",
                products.len(),
                config.products_path.display()
            );
            for product in &products {
                println!("{}\t{}\t{:.2}", product.id, product.name, product.price);
            }
        }
        Command::Anchor { from } => {
            let config = resolve_config(args.products.as_deref(), args.profile.as_deref())?;
            let reference = from.unwrap_or_else(|| Utc::now().date_naive());
            println!("{}", next_occurrence(&config.sale_date, reference)?);
        }
    }

    Ok(())
}

fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .compact()
        .init();
}
