use std::path::Path;

use log::error;

use crate::builder;
use crate::config::Config;

/// Handle the watch command
pub fn handle_watch_command(config: &Config) -> bool {
    match builder::watch_site(config, Path::new(".")) {
        Ok(()) => true,
        Err(e) => {
            error!("Error watching for changes: {}", e);
            false
        }
    }
}
