use crate::commands::{CmdMessage, CmdResult, ParkingPaths};
use crate::config::{ParkingConfig, CONFIG_FILENAME};
use crate::error::Result;

/// Writes `config` to the config directory unless a file is already there.
pub fn run(paths: &ParkingPaths, config: &ParkingConfig) -> Result<CmdResult> {
    let path = paths.config_dir.join(CONFIG_FILENAME);
    let mut result = CmdResult::default();

    if path.exists() {
        result.add_message(CmdMessage::warning(format!(
            "Config already exists at {}",
            path.display()
        )));
        return Ok(result);
    }

    config.validate()?;
    config.save(&paths.config_dir)?;
    result.add_message(CmdMessage::success(format!(
        "Wrote config to {}",
        path.display()
    )));
    Ok(result.with_config(config.clone()))
}
