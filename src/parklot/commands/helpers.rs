use crate::billing::Tariff;
use crate::error::{ParkingError, Result};
use crate::model::{StayView, VehicleStay};
use crate::store::StayStore;

/// The stay a departure would close, or `NotCurrentlyParked`.
pub fn open_stay<S: StayStore>(store: &S, registration: &str) -> Result<VehicleStay> {
    store
        .find_open_stay(registration)?
        .ok_or_else(|| ParkingError::NotCurrentlyParked(registration.to_string()))
}

pub fn stay_views<S: StayStore>(store: &S, tariff: &Tariff) -> Result<Vec<StayView>> {
    store
        .list_stays()?
        .iter()
        .map(|stay| StayView::from_stay(stay, tariff))
        .collect()
}
