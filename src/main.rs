use std::process;

use clap::Parser;

use gamecfg_loader::cli::Args;
use gamecfg_loader::config::{FailurePolicy, LoaderConfig};
use gamecfg_loader::models::{BUILDINGS_TABLE, Building};
use gamecfg_loader::registry::{LoadReport, TableRegistry};

fn main() {
    let args = Args::parse();
    setup_logging(&args);

    match run(&args) {
        Ok(report) if report.is_clean() => {
            println!(
                "loaded {} records across {} tables",
                report.records_loaded, report.tables_loaded
            );
        }
        Ok(report) => {
            println!(
                "loaded {} records across {} tables, {} tables failed",
                report.records_loaded,
                report.tables_loaded,
                report.errors.len()
            );
            for err in report.errors {
                eprintln!("Error: {:#}", anyhow::Error::from(err));
            }
            process::exit(1);
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            process::exit(1);
        }
    }
}

fn run(args: &Args) -> anyhow::Result<LoadReport> {
    let data_dir = args.resolve_data_dir()?;

    let policy = if args.keep_going {
        FailurePolicy::Recover
    } else {
        FailurePolicy::FailFast
    };
    let config = LoaderConfig::default().with_failure_policy(policy);

    let mut registry = TableRegistry::new(config)?;
    registry.register_table::<Building>(BUILDINGS_TABLE);

    let report = registry.load_all(&data_dir)?;

    if args.dump {
        print!("{}", registry.dump());
    }

    Ok(report)
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("gamecfg_loader={}", args.log_level())));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr),
        )
        .init();
}
