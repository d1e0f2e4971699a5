//! # Storage Layer
//!
//! The registry is kept behind the [`StayStore`] trait so commands never care
//! how stays are held.
//!
//! ## Contract
//!
//! - Stays are kept in arrival order; [`StayStore::list_stays`] returns them in
//!   that order.
//! - Nothing is ever removed. A departure rewrites the stay in place through
//!   [`StayStore::save_stay`].
//! - A store may be bounded. [`StayStore::insert_stay`] fails with
//!   `RegistryFull` once `capacity` stays exist and leaves the store unchanged.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: the only backend. State lives for the process.

use crate::error::Result;
use crate::model::VehicleStay;
use uuid::Uuid;

pub mod memory;

pub trait StayStore {
    /// Append a new stay at the end of the arrival order
    fn insert_stay(&mut self, stay: VehicleStay) -> Result<()>;

    /// Replace an existing stay, keeping its position
    fn save_stay(&mut self, stay: &VehicleStay) -> Result<()>;

    /// All stays, in arrival order
    fn list_stays(&self) -> Result<Vec<VehicleStay>>;

    /// First stay (in arrival order) that is still parked under `registration`
    fn find_open_stay(&self, registration: &str) -> Result<Option<VehicleStay>>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `None` for an unbounded store
    fn capacity(&self) -> Option<usize>;

    fn is_full(&self) -> bool {
        self.capacity().is_some_and(|cap| self.len() >= cap)
    }

    fn get_stay(&self, id: &Uuid) -> Result<VehicleStay>;
}
