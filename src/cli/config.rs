use std::path::PathBuf;

use crate::cli::config_path_or_default;
use crate::config::{self, Config};
use crate::error::Result;

/// Initialize a worklog.toml configuration file
pub fn init(path: Option<PathBuf>) -> Result<()> {
    let config_path = config_path_or_default(path);

    if config_path.exists() {
        eprintln!(
            "Configuration file already exists at: {}",
            config_path.display()
        );
        eprintln!("Remove it first if you want to reinitialize.");
        return Ok(());
    }

    config::save(&Config::default(), &config_path)?;

    println!("Configuration file created: {}", config_path.display());
    println!("\nNext steps:");
    println!(
        "1. Edit {} to set your journal path and work-time thresholds",
        config_path.display()
    );
    println!("2. Run 'worklog start' to begin your first workday");

    Ok(())
}
