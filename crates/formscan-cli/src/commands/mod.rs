pub mod batch;
pub mod config;
pub mod process;
pub mod serve;

use std::path::Path;

use tracing::debug;

use formscan_core::FormscanConfig;

/// Load the configuration named on the command line, falling back to the
/// user config file and then to built-in defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<FormscanConfig> {
    if let Some(path) = config_path {
        return Ok(FormscanConfig::from_file(Path::new(path))?);
    }

    let default_path = config::default_config_path();
    if default_path.exists() {
        debug!("Using configuration from {}", default_path.display());
        Ok(FormscanConfig::from_file(&default_path)?)
    } else {
        Ok(FormscanConfig::default())
    }
}
