use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ParkingError, Result};
use crate::model::{validate_registration, ParkDate, VehicleStay};
use crate::store::StayStore;
use tracing::{info, warn};

/// Fails with `RegistryFull` when no more arrivals can be recorded.
pub fn check_capacity<S: StayStore>(store: &S) -> Result<()> {
    match store.capacity() {
        Some(capacity) if store.is_full() => {
            warn!(target: "parklot::registry", capacity, "Arrival rejected, lot is full");
            Err(ParkingError::RegistryFull { capacity })
        }
        _ => Ok(()),
    }
}

/// Records a vehicle entering the lot.
///
/// A registration that is already parked is accepted again; the departure
/// flow closes the earliest open stay first.
pub fn run<S: StayStore>(
    store: &mut S,
    registration: &str,
    entry_date: &str,
    charging: bool,
) -> Result<CmdResult> {
    check_capacity(store)?;
    validate_registration(registration)?;
    let entry_date = ParkDate::parse(entry_date)?;

    let stay = VehicleStay::new(registration.to_string(), entry_date, charging);
    store.insert_stay(stay.clone())?;
    info!(
        target: "parklot::registry",
        registration,
        entry_date = %stay.entry_date,
        charging,
        "Vehicle arrived"
    );

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Car {} entered at {}",
        stay.registration, stay.entry_date
    )));
    Ok(result.with_affected_stays(vec![stay]))
}
