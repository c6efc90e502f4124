//! HydroWatch CLI
//!
//! Command-line access to the same data the site shows:
//! - Load the four page documents
//! - Print a chart configuration
//! - Read or change the stored theme preference
//! - Generate a config file

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use hydrowatch::chart::{ChartConfig, ChartSlotId};
use hydrowatch::config::{generate_default_config, Config};
use hydrowatch::model::{DashboardData, SeriesData, StatusData};
use hydrowatch::theme::{read_preference, toggle_preference, write_preference, ThemePreference};
use hydrowatch::ApiClient;

#[derive(Parser)]
#[command(name = "hydrowatch")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "HydroWatch water-treatment monitoring showcase")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// API base URL (overrides config)
    #[arg(long, global = true)]
    pub api_base: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load all four sections and show what arrived
    Fetch,

    /// Fetch one dataset and print its chart configuration as JSON
    Chart {
        #[arg(value_enum)]
        slot: SlotArg,
    },

    /// Show or change the theme preference
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SlotArg {
    Energy,
    Quality,
    Status,
}

impl From<SlotArg> for ChartSlotId {
    fn from(arg: SlotArg) -> Self {
        match arg {
            SlotArg::Energy => ChartSlotId::Energy,
            SlotArg::Quality => ChartSlotId::Quality,
            SlotArg::Status => ChartSlotId::Status,
        }
    }
}

#[derive(Subcommand)]
pub enum ThemeAction {
    /// Print the stored preference
    Get,
    /// Store a preference
    Set {
        /// light or dark
        value: ThemePreference,
    },
    /// Flip between light and dark
    Toggle,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(api_base) = &cli.api_base {
        config.client.api_base = api_base.clone();
    }
    config.logging.init();

    match cli.command {
        Commands::Fetch => {
            let client = ApiClient::new(&config.client.api_base);
            let data = client.load_dashboard().await;
            if !data.is_complete() {
                tracing::warn!(
                    loaded = data.loaded_count(),
                    "Some sections failed to load, showing placeholders"
                );
            }

            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&data)?),
                OutputFormat::Table => print_dashboard(&data),
            }
        }

        Commands::Chart { slot } => {
            let client = ApiClient::new(&config.client.api_base);
            let chart = match ChartSlotId::from(slot) {
                ChartSlotId::Energy => ChartConfig::energy(&client.fetch_energy().await?)?,
                ChartSlotId::Quality => ChartConfig::quality(&client.fetch_quality().await?)?,
                ChartSlotId::Status => ChartConfig::status(&client.fetch_status().await?)?,
            };
            println!("{}", serde_json::to_string_pretty(&chart)?);
        }

        Commands::Theme { action } => {
            let store = config.theme.store();
            let theme = match action.unwrap_or(ThemeAction::Get) {
                ThemeAction::Get => read_preference(&store),
                ThemeAction::Set { value } => {
                    write_preference(&store, value)
                        .with_context(|| format!("writing {}", store.path().display()))?;
                    value
                }
                ThemeAction::Toggle => toggle_preference(&store, read_preference(&store))
                    .with_context(|| format!("writing {}", store.path().display()))?,
            };
            println!("{}", theme);
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn print_dashboard(data: &DashboardData) {
    println!("Sections loaded: {}/4", data.loaded_count());
    println!();

    match &data.info {
        Some(info) => {
            println!("Context:        {}", info.context);
            println!("Owners:         {}", info.problem.owners);
            println!("Vendors:        {}", info.problem.vendors);
            println!("Modules:        {}", info.solution.modules);
            println!("AI:             {}", info.solution.ai);
            println!("Dashboard:      {}", info.solution.dashboard);
            println!("Business model: {}", info.business_model);
        }
        None => println!("Info:           Loading..."),
    }
    println!();

    print_series("Energy", data.energy.as_ref());
    print_series("Quality", data.quality.as_ref());
    print_status(data.status.as_ref());
}

fn print_series(title: &str, series: Option<&SeriesData>) {
    println!("{}", title);
    println!("{}", "-".repeat(40));
    match series {
        Some(series) => {
            for (label, value) in series.labels.iter().zip(&series.data) {
                println!("  {:<20} {:>10.2} {}", label, value, series.unit_label());
            }
        }
        None => println!("  Loading..."),
    }
    println!();
}

fn print_status(status: Option<&StatusData>) {
    println!("Status");
    println!("{}", "-".repeat(40));
    match status {
        Some(status) => {
            let total = status.total();
            for (label, value) in status.labels.iter().zip(&status.data) {
                let share = if total > 0.0 { value / total * 100.0 } else { 0.0 };
                println!("  {:<20} {:>10.0} ({:.1}%)", label, value, share);
            }
        }
        None => println!("  Loading..."),
    }
}
