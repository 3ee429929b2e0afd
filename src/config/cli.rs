use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "trip-itinerary")]
#[command(about = "Build a weather and nearby-places itinerary for a location")]
pub struct CliConfig {
    /// Location to search (city name, postcode, "lat,lon", ...)
    #[arg(short, long)]
    pub location: String,

    /// Search radius in meters (1000-50000)
    #[arg(short, long, default_value = "5000", allow_negative_numbers = true)]
    pub radius: i64,

    /// Path to TOML configuration file; defaults to WEATHERAPI_KEY / GOOGLE_PLACES_KEY
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the itinerary JSON to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}
