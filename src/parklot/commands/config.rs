use crate::commands::{CmdMessage, CmdResult};
use crate::config::ParkingConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
}

pub fn run(config: &ParkingConfig, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default().with_config(config.clone())),
        ConfigAction::ShowKey(key) => {
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => result.add_message(CmdMessage::error(format!(
                    "Unknown config key: {} (known: {})",
                    key,
                    ParkingConfig::keys().join(", ")
                ))),
            }
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    #[test]
    fn show_all_returns_config() {
        let config = ParkingConfig::default();
        let result = run(&config, ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(config));
    }

    #[test]
    fn show_key_returns_value() {
        let result = run(&ParkingConfig::default(), ConfigAction::ShowKey("later-rate".into())).unwrap();
        assert_eq!(result.messages[0].content, "50");
        assert_eq!(result.messages[0].level, MessageLevel::Info);
    }

    #[test]
    fn unknown_key_is_reported() {
        let result = run(&ParkingConfig::default(), ConfigAction::ShowKey("color".into())).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(result.messages[0].content.contains("Unknown config key: color"));
    }
}
