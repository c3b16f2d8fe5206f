use newborn_tracker::cli::CliOptions;
use newborn_tracker::domain::models::Weight;
use newborn_tracker::io::mappers::baby_mapper::BabyMapper;
use newborn_tracker::BabyService;
use shared::{BabyReport, ReportFormat};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let options = CliOptions::parse()?;

    // Initialize logging
    let level = match options.verbose {
        None | Some(0) => "info",
        Some(1) => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let service = BabyService::new();

    let mut baby = service.create_baby(BabyMapper::to_command(options.baby_request())?);

    if let Some(grams) = options.current_weight {
        if grams < 1000 {
            warn!("Ignoring current weight of {}g: must be at least 1 kg", grams);
        } else {
            baby.set_current_weight(Weight::from_grams(grams as i64));
        }
    }

    if let Some(grams) = options.gain {
        service.record_weight_change(&mut baby, grams);
    }

    let check = service.check_weight_for(&baby, options.age_query()?);

    let comparison = match options.sibling_request()? {
        Some(request) => {
            let sibling = service.create_baby(BabyMapper::to_command(request)?);
            Some(service.compare(&baby, &sibling))
        }
        None => None,
    };

    let report = BabyReport {
        baby: BabyMapper::to_record(&baby),
        weight_check: BabyMapper::to_weight_check_response(&check),
        comparison: comparison.as_ref().map(BabyMapper::to_comparison_response),
    };

    match options.format() {
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        ReportFormat::Text => {
            print!("{}", baby);
            match report.weight_check.minimum_healthy_grams {
                Some(floor) => println!(
                    "Status: {} (day {}, minimum {:.1} g)",
                    report.weight_check.message, report.weight_check.age_in_days, floor
                ),
                None => println!(
                    "Status: {} ({} days)",
                    report.weight_check.message, report.weight_check.age_in_days
                ),
            }
            if let Some(comparison) = &report.comparison {
                println!("Twins: {}", if comparison.twins { "yes" } else { "no" });
                println!("Heavier than sibling: {}", if comparison.heavier { "yes" } else { "no" });
                println!("Older than sibling: {}", if comparison.older { "yes" } else { "no" });
            }
        }
    }

    info!("Report complete for {}", report.baby.id);

    Ok(())
}
