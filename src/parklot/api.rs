//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every registry operation, whichever UI drives it.
//!
//! The facade:
//! - **Dispatches** to the matching command function
//! - **Carries** the lot configuration (tariff, capacity) so callers never pass it
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no business logic, no I/O, and no formatting.
//!
//! ## Generic Over StayStore
//!
//! `ParkingApi<S: StayStore>` works with any backend; the binary uses
//! `ParkingApi<InMemoryStore>`.
//!
//! ## Mutation
//!
//! Arrivals and departures take `&mut self`, so one caller at a time can
//! change the registry. A multi-client front end must put the whole API behind
//! a single lock to keep "one departure closes one stay".

use crate::commands;
use crate::config::ParkingConfig;
use crate::error::Result;
use crate::model::VehicleStay;
use crate::store::memory::InMemoryStore;
use crate::store::StayStore;

pub struct ParkingApi<S: StayStore> {
    store: S,
    config: ParkingConfig,
    paths: commands::ParkingPaths,
}

impl ParkingApi<InMemoryStore> {
    /// A fresh, empty registry bounded by `config.capacity`.
    pub fn in_memory(config: ParkingConfig, paths: commands::ParkingPaths) -> Self {
        let store = InMemoryStore::with_capacity(config.capacity);
        Self::new(store, config, paths)
    }
}

impl<S: StayStore> ParkingApi<S> {
    pub fn new(store: S, config: ParkingConfig, paths: commands::ParkingPaths) -> Self {
        Self {
            store,
            config,
            paths,
        }
    }

    /// `RegistryFull` if an arrival would be rejected for capacity.
    pub fn pre_check_arrival(&self) -> Result<()> {
        commands::arrive::check_capacity(&self.store)
    }

    pub fn register_arrival(
        &mut self,
        registration: &str,
        entry_date: &str,
        charging: bool,
    ) -> Result<commands::CmdResult> {
        commands::arrive::run(&mut self.store, registration, entry_date, charging)
    }

    /// The stay a departure for `registration` would close.
    pub fn open_stay(&self, registration: &str) -> Result<VehicleStay> {
        commands::helpers::open_stay(&self.store, registration)
    }

    pub fn register_departure(
        &mut self,
        registration: &str,
        exit_date: &str,
    ) -> Result<commands::CmdResult> {
        commands::depart::run(&mut self.store, &self.config.tariff, registration, exit_date)
    }

    pub fn check_status(&self, registration: &str) -> Result<commands::CmdResult> {
        commands::status::run(&self.store, registration)
    }

    pub fn history_by_entry_date(&self) -> Result<commands::CmdResult> {
        commands::history::by_entry_date(&self.store, &self.config.tariff)
    }

    pub fn history_by_registration(&self) -> Result<commands::CmdResult> {
        commands::history::by_registration(&self.store, &self.config.tariff)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config, action)
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths, &self.config)
    }

    pub fn settings(&self) -> &ParkingConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::history::HistoryOrder;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, ParkingPaths};
