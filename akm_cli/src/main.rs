use akm_core::*;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "thermokinetic")]
#[command(about = "Kinetic degradation and dynamic expiry engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a shipment's temperature excursion history
    Evaluate {
        /// Product type (mrna_vaccine, biologic, insulin)
        #[arg(long)]
        product: String,

        /// Path to a JSON array of excursion segments
        /// ([{"temperature_celsius": .., "duration_hours": ..}, ..])
        #[arg(long)]
        input: PathBuf,

        /// Shipment correlation ID (generated when omitted)
        #[arg(long)]
        shipment_id: Option<String>,

        /// Evaluation date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        as_of: Option<NaiveDate>,

        /// Emit the report as JSON instead of the human-readable view
        #[arg(long)]
        json: bool,
    },

    /// List registered product types and their kinetic profiles (default)
    Products,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config, then initialize logging at the configured level
    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    akm_core::logging::init_with_level(&config.logging.level);

    // Without overrides, use the cached default registry; with overrides,
    // build a merged one. Bad profiles fail fast here either way.
    let merged;
    let registry = if config.profiles.custom.is_empty() {
        get_default_registry()
    } else {
        merged = Registry::with_custom_profiles(&config.profiles.custom)?;
        &merged
    };
    tracing::debug!(
        profiles = registry.profiles.len(),
        "kinetic profile registry ready"
    );

    match cli.command {
        Some(Commands::Evaluate {
            product,
            input,
            shipment_id,
            as_of,
            json,
        }) => cmd_evaluate(registry, product, input, shipment_id, as_of, json),
        Some(Commands::Products) | None => cmd_products(registry),
    }
}

fn cmd_evaluate(
    registry: &Registry,
    product: String,
    input: PathBuf,
    shipment_id: Option<String>,
    as_of: Option<NaiveDate>,
    json: bool,
) -> Result<()> {
    let product_type = ProductType::parse_key(&product).ok_or_else(|| {
        Error::InvalidInput(format!(
            "Unknown product type '{}'. Expected one of: mrna_vaccine, biologic, insulin",
            product
        ))
    })?;

    let contents = std::fs::read_to_string(&input)?;
    let excursions: Vec<ExcursionSegment> = serde_json::from_str(&contents)?;

    let request = EvaluationRequest {
        product_type,
        excursions,
        shipment_correlation_id: shipment_id,
    };

    let evaluation_date = as_of.unwrap_or_else(|| chrono::Utc::now().date_naive());
    let report = evaluate(registry, &request, evaluation_date)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display_report(&report);
    }

    Ok(())
}

fn cmd_products(registry: &Registry) -> Result<()> {
    println!("Registered product profiles:\n");

    for product_type in ProductType::all() {
        let Some(profile) = registry.get(*product_type) else {
            continue;
        };
        println!("  {}  —  {}", product_type.key(), profile.label);
        println!(
            "      Reference storage: {:.1} °C",
            profile.reference_temp_celsius()
        );
        println!(
            "      Potency threshold: {}%",
            profile.potency_threshold_percent
        );
        println!(
            "      Nominal shelf life: {} days",
            profile.nominal_shelf_life_days
        );
        println!();
    }

    Ok(())
}

fn display_report(report: &EvaluationReport) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  SHIPMENT EVALUATION");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  Shipment:  {}", report.shipment_correlation_id);
    println!(
        "  Product:   {} (threshold {}%)",
        report.product_label, report.potency_threshold_percent
    );
    println!();
    println!(
        "  Potency remaining:  {:.2}%",
        report.potency_remaining_percent
    );
    println!(
        "  Dynamic expiry:     {} ({} days remaining)",
        report.projected_expiry_date, report.days_remaining
    );
    println!(
        "  Mean kinetic temp:  {:.2} °C over {:.2} h ({} segments)",
        report.mean_kinetic_temperature_celsius,
        report.total_exposure_hours,
        report.excursion_segments
    );
    println!(
        "  Exposure index:     {}",
        report.cumulative_kinetic_exposure_index
    );
    println!();
    println!("  Status: {} — {}", report.status.code, report.status.label);
    println!();
}
