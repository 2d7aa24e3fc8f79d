use anyhow::Context;
use clap::Parser;
use puzzle_sampler::core::{ConfigProvider, Pipeline};
use puzzle_sampler::utils::{logger, validation::Validate};
use puzzle_sampler::{EtlEngine, LocalStorage, PuzzlePipeline, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-sample")]
#[command(about = "Puzzle sampler driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "sampler-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Override the sampling seed from config
    #[arg(long)]
    seed: Option<u64>,

    /// Read and filter the input, but write nothing
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based puzzle sampler");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 應用命令列覆蓋設定
    if let Some(seed) = args.seed {
        config.sampling.seed = Some(seed);
        tracing::info!("🔧 Seed overridden to: {}", seed);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");
    display_config_summary(&config, &args);

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());
    let pipeline = PuzzlePipeline::new(LocalStorage::default(), config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No output will be written");
        return perform_dry_run(&pipeline);
    }

    let engine = EtlEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run() {
        Ok(summary) => {
            tracing::info!("✅ Output saved to: {}", summary.output_path);
        }
        Err(e) => {
            tracing::error!("❌ Sampling failed: {} (Category: {:?})", e, e.category());
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig, args: &Args) {
    tracing::info!("📋 Configuration Summary:");
    tracing::info!("  Input: {}", config.input_path());
    tracing::info!("  Header row: {}", config.has_headers());
    tracing::info!("  Output: {}", config.output_path());
    tracing::info!("  Sample size: {}", config.sample_size());
    match config.seed() {
        Some(seed) => tracing::info!("  Seed: {}", seed),
        None => tracing::info!("  Seed: random"),
    }
    tracing::info!("  Invalid integers: {:?}", config.integer_policy());

    if args.dry_run {
        tracing::info!("  🔍 DRY RUN MODE ENABLED");
    }
}

fn perform_dry_run(pipeline: &PuzzlePipeline<LocalStorage, TomlConfig>) -> anyhow::Result<()> {
    let config = pipeline.config();
    let extracted = pipeline
        .extract()
        .with_context(|| format!("failed to read puzzles from {}", config.input_path()))?;

    let qualifying = extracted.rows_with_solution.len();
    let would_write = qualifying.min(config.sample_size());

    println!("🔍 Dry Run Analysis:");
    println!("  Rows read: {}", extracted.rows_read);
    println!("  Rows with solution: {}", qualifying);
    println!("  Puzzles that would be written: {}", would_write);
    println!();
    println!("✅ Dry run complete. Nothing was written to {}", config.output_path());

    Ok(())
}
