use crate::config::toml_config::BookingConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "clinic-booking")]
#[command(about = "In-memory doctor appointment booking console")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit log lines as JSON")]
    pub json_logs: bool,

    /// Override registry.default_rating from the config file
    #[arg(long)]
    pub default_rating: Option<u32>,

    #[arg(long, help = "Do not print the command banner")]
    pub no_banner: bool,
}

impl CliConfig {
    /// Loads the TOML file (or defaults) and applies command-line overrides.
    pub fn load_booking_config(&self) -> Result<BookingConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                BookingConfig::from_file(path)?
            }
            None => BookingConfig::default(),
        };

        // 應用命令列覆蓋設定
        if let Some(rating) = self.default_rating {
            config.registry.default_rating = rating;
            tracing::info!("🔧 Default rating overridden to: {}", rating);
        }
        if self.no_banner {
            config.session.banner = false;
        }

        Ok(config)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(rating) = self.default_rating {
            validate_range("default_rating", rating, 1, 5)?;
        }
        Ok(())
    }
}
