use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use spendwise::cli::{
    handle_analyze_command, handle_categories_command, handle_categorize_command,
    handle_demo_command, handle_serve_command, AnalyzeArgs, CategorizeArgs, ServeArgs,
};
use spendwise::config::{paths::SpendwisePaths, settings::Settings};
use spendwise::storage::Storage;

#[derive(Parser)]
#[command(
    name = "spendwise",
    version,
    about = "Personal finance tracking with automatic categorization",
    long_about = "Spendwise records income and expenses, assigns each transaction a \
                  category from its description and reports totals, balance and \
                  the largest expense categories. Run it as an HTTP API or use \
                  the commands below from the terminal."
)]
struct Cli {
    /// Settings file (defaults to config.json in the config directory)
    #[arg(short, long, global = true, env = "SPENDWISE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve(ServeArgs),

    /// Walk through categorization, analysis and business rules
    Demo,

    /// Show the category each description is assigned to
    Categorize(CategorizeArgs),

    /// List categories in priority order
    Categories,

    /// Import a CSV file and print its financial analysis
    Analyze(AnalyzeArgs),

    /// Show current configuration and paths
    Config {
        /// Write the effective settings to the settings file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match &cli.config {
        Some(file) => SpendwisePaths::for_settings_file(file),
        None => SpendwisePaths::new()?,
    };
    let mut settings = Settings::load_or_default(&paths)
        .with_context(|| format!("Failed to load {}", paths.settings_file().display()))?;
    settings.apply_env()?;

    spendwise::logging::init(&settings.log_level);

    let currency = settings.currency_format()?;
    let storage = Storage::in_memory(settings.seed_categories());

    match cli.command {
        Commands::Serve(args) => handle_serve_command(storage, &settings, args)?,
        Commands::Demo => handle_demo_command(settings.seed_categories(), &currency)?,
        Commands::Categorize(args) => handle_categorize_command(&storage, args)?,
        Commands::Categories => handle_categories_command(&storage)?,
        Commands::Analyze(args) => handle_analyze_command(&storage, &currency, args)?,
        Commands::Config { init } => {
            if init {
                settings
                    .save(&paths)
                    .context("Failed to write settings file")?;
                println!("Wrote {}", paths.settings_file().display());
                println!();
            }

            println!("Spendwise Configuration");
            println!("=======================");
            println!("Settings file: {}", paths.settings_file().display());
            println!(
                "Loaded from file: {}",
                if paths.is_initialized() { "yes" } else { "no (defaults)" }
            );
            println!();
            println!("Listen address: {}", settings.server.bind_address());
            println!("Locale:         {}", settings.locale);
            println!("Log level:      {}", settings.log_level);
            println!("Environment:    {}", settings.environment);
            println!("Categories:     {}", settings.seed_categories().len());
        }
    }

    Ok(())
}
