//! E-Commerce Dashboard CLI
//!
//! Offline operations over the same data the server uses:
//! - Write the dashboard as a static HTML report
//! - Write a single chart as SVG
//! - Print the category and payment aggregates
//! - Generate a default config file

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use ecommerce_dashboard::config::{generate_default_config, Config};
use ecommerce_dashboard::page::{ChartKind, Dashboard};
use ecommerce_dashboard::Summary;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "ecommerce-dashboard-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Render the e-commerce dashboard without running a server")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the full dashboard as a self-contained HTML file
    Report {
        /// Output file
        #[arg(short, long, default_value = "dashboard.html")]
        output: PathBuf,
        /// State for the per-state section (default: first state)
        #[arg(short, long)]
        state: Option<String>,
    },

    /// Write one chart as SVG
    Chart {
        /// top-categories, bottom-categories, category-by-state, payments, customers-map, top-cities
        name: String,
        /// Output file (default: <name>.svg)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// State for category-by-state
        #[arg(short, long)]
        state: Option<String>,
    },

    /// Print category and payment aggregates
    Summary {
        /// Output format (table, json, csv)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        return write_or_print(output.as_deref(), &generate_default_config());
    }

    let config = Config::resolve(cli.config.as_deref())?;
    ecommerce_dashboard::logging::init(&config.logging);
    let dashboard = Dashboard::from_config(&config).context("Failed to load dashboard data")?;

    match cli.command {
        Commands::Report { output, state } => {
            let html = dashboard.render_page(state.as_deref());
            std::fs::write(&output, html)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            println!("Wrote dashboard report to {}", output.display());
        }

        Commands::Chart {
            name,
            output,
            state,
        } => {
            let Some(kind) = ChartKind::from_slug(&name) else {
                let names: Vec<&str> = ChartKind::all().iter().map(|k| k.slug()).collect();
                bail!("Unknown chart '{}'. Available: {}", name, names.join(", "));
            };

            let output = output.unwrap_or_else(|| PathBuf::from(format!("{}.svg", kind.slug())));
            let svg = dashboard.figure(kind, state.as_deref()).to_svg();
            std::fs::write(&output, svg)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            println!("Wrote {} chart to {}", kind, output.display());
        }

        Commands::Summary { format } => {
            let text = format_summary(dashboard.summary(), &format)?;
            print!("{}", text);
        }

        Commands::Config { .. } => unreachable!("handled before loading data"),
    }

    Ok(())
}

fn write_or_print(output: Option<&Path>, content: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Config written to {}", path.display());
        }
        None => print!("{}", content),
    }
    Ok(())
}

fn format_summary(summary: &Summary, format: &str) -> anyhow::Result<String> {
    match format.to_lowercase().as_str() {
        "json" => Ok(serde_json::to_string_pretty(summary)? + "\n"),
        "csv" => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(["table", "group", "count"])?;
            for row in &summary.categories {
                let count = row.products.to_string();
                writer.write_record(["category", row.category.as_str(), count.as_str()])?;
            }
            for row in &summary.payments {
                let count = row.orders.to_string();
                writer.write_record(["payment", row.payment_type.as_str(), count.as_str()])?;
            }
            let bytes = writer.into_inner().map_err(|e| e.into_error())?;
            Ok(String::from_utf8(bytes)?)
        }
        "table" => {
            let mut out = String::new();
            out.push_str(&format!(
                "{} order items, {} orders, {} products\n\n",
                summary.order_items, summary.distinct_orders, summary.distinct_products
            ));
            out.push_str(&format!("{:<45} {:>10}\n", "PRODUCT CATEGORY", "PRODUCTS"));
            out.push_str(&format!("{}\n", "-".repeat(56)));
            for row in &summary.categories {
                out.push_str(&format!("{:<45} {:>10}\n", row.category, row.products));
            }
            out.push('\n');
            out.push_str(&format!("{:<45} {:>10}\n", "PAYMENT TYPE", "ORDERS"));
            out.push_str(&format!("{}\n", "-".repeat(56)));
            for row in &summary.payments {
                out.push_str(&format!("{:<45} {:>10}\n", row.payment_type, row.orders));
            }
            Ok(out)
        }
        other => bail!("Unknown format '{}'. Use table, json or csv", other),
    }
}
