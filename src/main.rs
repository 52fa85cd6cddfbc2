use clap::Parser;
use quake_map::core::ConfigProvider;
use quake_map::config::dry_run_report;
use quake_map::utils::error::QuakeError;
use quake_map::utils::{logger, validation::Validate};
use quake_map::{CliConfig, EtlEngine, LocalStorage, QuakePipeline, TomlConfig};
use serde::Serialize;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    if args.log_json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting quake-map");

    match args.config.clone() {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let config = match TomlConfig::from_file(&path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    std::process::exit(1);
                }
            };
            let monitor = args.monitor || config.monitoring_enabled();
            run(config, monitor, args.dry_run).await
        }
        None => {
            if args.verbose {
                tracing::debug!("CLI config: {:?}", args);
            }
            let (monitor, dry_run) = (args.monitor, args.dry_run);
            run(args, monitor, dry_run).await
        }
    }
}

async fn run<C>(config: C, monitor: bool, dry_run: bool) -> anyhow::Result<()>
where
    C: ConfigProvider + Validate + Serialize,
{
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if dry_run {
        tracing::info!("🔍 DRY RUN MODE - no feeds will be fetched");
        print!("{}", dry_run_report(&config)?);
        return Ok(());
    }

    if monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = match QuakePipeline::new(storage, config) {
        Ok(pipeline) => pipeline,
        Err(e) => exit_with(e),
    };
    let engine = EtlEngine::new_with_monitoring(pipeline, monitor);

    match engine.run().await {
        Ok(output_path) => {
            println!("✅ Map layers built successfully!");
            println!("📁 Output saved to: {}", output_path);
            Ok(())
        }
        Err(e) => exit_with(e),
    }
}

fn exit_with(e: QuakeError) -> ! {
    tracing::error!(
        "❌ Map build failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    for line in e.report_lines() {
        eprintln!("{}", line);
    }
    std::process::exit(e.exit_code());
}
