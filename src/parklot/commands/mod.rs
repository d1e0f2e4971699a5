use crate::config::ParkingConfig;
use crate::model::{ParkingStatus, Receipt, StayView, VehicleStay};
use std::path::PathBuf;

pub mod arrive;
pub mod config;
pub mod depart;
pub mod helpers;
pub mod history;
pub mod init;
pub mod status;

#[derive(Debug, Clone)]
pub struct ParkingPaths {
    pub config_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_stays: Vec<VehicleStay>,
    pub listed_stays: Vec<StayView>,
    pub receipt: Option<Receipt>,
    pub status: Option<ParkingStatus>,
    pub config: Option<ParkingConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_stays(mut self, stays: Vec<VehicleStay>) -> Self {
        self.affected_stays = stays;
        self
    }

    pub fn with_listed_stays(mut self, stays: Vec<StayView>) -> Self {
        self.listed_stays = stays;
        self
    }

    pub fn with_receipt(mut self, receipt: Receipt) -> Self {
        self.receipt = Some(receipt);
        self
    }

    pub fn with_status(mut self, status: ParkingStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_config(mut self, config: ParkingConfig) -> Self {
        self.config = Some(config);
        self
    }
}
