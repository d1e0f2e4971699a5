//! # Parklot Architecture
//!
//! Parklot is a **UI-agnostic parking registry**. The interactive menu in the
//! binary is one client of the library, not the library itself.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts, receipt and history rendering        │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the lot configuration    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + billing.rs                 │
//! │  - Arrival, departure, status and history logic             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - StayStore trait, InMemoryStore                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O in the Core
//!
//! From `api.rs` inward, code takes plain arguments and returns
//! `Result<CmdResult>`. Every rejected input comes back as a
//! [`error::ParkingError`] and leaves the registry unchanged.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade, entry point for all operations
//! - [`commands`]: business logic per operation
//! - [`billing`]: 30-day-month durations and the tariff
//! - [`model`]: `ParkDate`, `VehicleStay`, `Receipt`, `StayView`
//! - [`store`]: storage abstraction and the in-memory registry
//! - [`config`]: the `config.json` lot settings
//! - [`error`]: error types

pub mod api;
pub mod billing;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
