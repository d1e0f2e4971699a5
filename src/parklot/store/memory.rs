use super::StayStore;
use crate::error::{ParkingError, Result};
use crate::model::VehicleStay;
use uuid::Uuid;

/// Process-lifetime registry. Insertion order is arrival order.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    stays: Vec<VehicleStay>,
    capacity: Option<usize>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: Option<usize>) -> Self {
        Self {
            stays: Vec::new(),
            capacity,
        }
    }
}

impl StayStore for InMemoryStore {
    fn insert_stay(&mut self, stay: VehicleStay) -> Result<()> {
        if let Some(capacity) = self.capacity {
            if self.stays.len() >= capacity {
                return Err(ParkingError::RegistryFull { capacity });
            }
        }
        self.stays.push(stay);
        Ok(())
    }

    fn save_stay(&mut self, stay: &VehicleStay) -> Result<()> {
        let slot = self
            .stays
            .iter_mut()
            .find(|s| s.id == stay.id)
            .ok_or(ParkingError::StayNotFound(stay.id))?;
        *slot = stay.clone();
        Ok(())
    }

    fn list_stays(&self) -> Result<Vec<VehicleStay>> {
        Ok(self.stays.clone())
    }

    fn find_open_stay(&self, registration: &str) -> Result<Option<VehicleStay>> {
        Ok(self
            .stays
            .iter()
            .find(|s| s.is_open_for(registration))
            .cloned())
    }

    fn len(&self) -> usize {
        self.stays.len()
    }

    fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    fn get_stay(&self, id: &Uuid) -> Result<VehicleStay> {
        self.stays
            .iter()
            .find(|s| &s.id == id)
            .cloned()
            .ok_or(ParkingError::StayNotFound(*id))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::ParkDate;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn bounded(capacity: usize) -> Self {
            Self {
                store: InMemoryStore::with_capacity(Some(capacity)),
            }
        }

        pub fn with_parked(mut self, registration: &str, entry: &str, charging: bool) -> Self {
            let stay = VehicleStay::new(
                registration.to_string(),
                ParkDate::parse(entry).unwrap(),
                charging,
            );
            self.store.insert_stay(stay).unwrap();
            self
        }

        pub fn with_departed(
            mut self,
            registration: &str,
            entry: &str,
            exit: &str,
            charging: bool,
        ) -> Self {
            let mut stay = VehicleStay::new(
                registration.to_string(),
                ParkDate::parse(entry).unwrap(),
                charging,
            );
            stay.exit_date = Some(ParkDate::parse(exit).unwrap());
            self.store.insert_stay(stay).unwrap();
            self
        }
    }
}
