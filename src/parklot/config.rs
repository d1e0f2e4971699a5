use crate::billing::Tariff;
use crate::error::{ParkingError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

pub const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LOT_NAME: &str = "LULEA AIRPORT PARKING LOT";
const DEFAULT_CAPACITY: usize = 100;
const DEFAULT_CURRENCY: &str = "kr";

/// Configuration for a parking lot, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParkingConfig {
    /// Shown in the menu banner
    #[serde(default = "default_lot_name")]
    pub lot_name: String,

    /// Maximum number of stays the registry holds; `null` for no limit
    #[serde(default = "default_capacity")]
    pub capacity: Option<usize>,

    /// Suffix printed after every amount
    #[serde(default = "default_currency")]
    pub currency: String,

    #[serde(default)]
    pub tariff: Tariff,
}

fn default_lot_name() -> String {
    DEFAULT_LOT_NAME.to_string()
}

fn default_capacity() -> Option<usize> {
    Some(DEFAULT_CAPACITY)
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Default for ParkingConfig {
    fn default() -> Self {
        Self {
            lot_name: default_lot_name(),
            capacity: default_capacity(),
            currency: default_currency(),
            tariff: Tariff::default(),
        }
    }
}

impl ParkingConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            debug!(target: "parklot::config", path = %config_path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: ParkingConfig = serde_json::from_str(&content)?;
        debug!(target: "parklot::config", path = %config_path.display(), "Loaded config");
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// Value of a single key as displayed by `parklot config <key>`
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "lot-name" => self.lot_name.clone(),
            "capacity" => self
                .capacity
                .map(|c| c.to_string())
                .unwrap_or_else(|| "unbounded".to_string()),
            "currency" => self.currency.clone(),
            "first-period-days" => self.tariff.first_period_days.to_string(),
            "first-period-rate" => self.tariff.first_period_rate.to_string(),
            "later-rate" => self.tariff.later_rate.to_string(),
            "charging-surcharge" => self.tariff.charging_surcharge.to_string(),
            "max-stay-days" => self.tariff.max_stay_days.to_string(),
            _ => return None,
        };
        Some(value)
    }

    pub fn keys() -> &'static [&'static str] {
        &[
            "lot-name",
            "capacity",
            "currency",
            "first-period-days",
            "first-period-rate",
            "later-rate",
            "charging-surcharge",
            "max-stay-days",
        ]
    }

    /// Check that the values make a usable lot
    pub fn validate(&self) -> Result<()> {
        if self.capacity == Some(0) {
            return Err(ParkingError::Config(
                "capacity must be at least 1 (use null for no limit)".to_string(),
            ));
        }
        if self.lot_name.trim().is_empty() {
            return Err(ParkingError::Config("lot-name cannot be empty".to_string()));
        }
        self.tariff.validate()
    }
}
