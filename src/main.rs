use clap::Parser;
use gdxsplit::application::{scrub_file_to, SplitRequest, SplitService};
use gdxsplit::cli::{format_announcement, format_summary, Cli};
use gdxsplit::domain::TagSet;
use gdxsplit::error::SplitError;
use gdxsplit::infrastructure::{GamsConverter, ToolConfig};
use std::io::{self, BufWriter};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Log to stderr; RUST_LOG wins over -v
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), SplitError> {
    let (periods, tags) = TagSet::parse(&cli.periods)?;

    let mut config = ToolConfig::resolve(cli.config.as_deref())?;
    if let Some(policy) = cli.repair {
        config.repair = policy;
    }

    if cli.dry_run {
        let stdout = io::stdout();
        let stats = scrub_file_to(&cli.source, BufWriter::new(stdout.lock()), &tags, config.repair)?;
        tracing::info!(
            kept = stats.kept_tagged,
            dropped = stats.dropped,
            repairs = stats.repairs,
            "dry run finished"
        );
        return Ok(());
    }

    println!("{}", format_announcement(&cli.source, &periods));

    let request = SplitRequest {
        source: cli.source,
        periods,
        keep_intermediates: cli.keep_intermediates,
        work_dir: std::env::current_dir()?,
    };
    let service = SplitService::new(GamsConverter::new(config.clone()), config);
    let outcome = service.execute(&request)?;

    print!("{}", format_summary(&outcome));
    Ok(())
}
