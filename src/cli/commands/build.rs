use log::{error, info};

use crate::builder;
use crate::config::Config;

/// Handle the build command
pub fn handle_build_command(config: &Config) -> bool {
    info!("Building site...");
    match builder::build_site(config) {
        Ok(()) => {
            info!("Site built successfully at {}", config.output.display());
            true
        }
        Err(e) => {
            error!("Failed to build site: {}", e);
            false
        }
    }
}
