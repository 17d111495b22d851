use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use glide_core::AppConfig;

mod commands;

use commands::scroll::Axis;

#[derive(Parser)]
#[command(name = "glide")]
#[command(author, version, about = "Scroll animation and calendar utilities for UI components")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Animate a scroll offset and log every frame write
    Scroll {
        /// Destination offset
        #[arg(long)]
        to: f64,
        /// Starting offset
        #[arg(long, default_value_t = 0.0)]
        from: f64,
        /// Duration in seconds (defaults to the configured duration)
        #[arg(long)]
        duration: Option<f64>,
        /// Axis to animate along
        #[arg(long, value_enum, default_value = "vertical")]
        axis: Axis,
    },
    /// Print a month grid and flag its last visual row
    Month {
        /// Year (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
        /// Month 1-12 (defaults to the current month)
        #[arg(long)]
        month: Option<u32>,
        /// First day of the week, 0 = Sunday .. 6 = Saturday
        /// (defaults to the configured value)
        #[arg(long)]
        first_day: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        Commands::Scroll {
            to,
            from,
            duration,
            axis,
        } => commands::scroll::run(&config, from, to, duration, axis).await,
        Commands::Month {
            year,
            month,
            first_day,
        } => commands::month::run(&config, year, month, first_day),
    }
}
