use crate::billing::Tariff;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ParkingError, Result};
use crate::model::{ParkDate, Receipt};
use crate::store::StayStore;
use tracing::{info, warn};

use super::helpers::open_stay;

/// Closes the earliest open stay for `registration` and bills it.
pub fn run<S: StayStore>(
    store: &mut S,
    tariff: &Tariff,
    registration: &str,
    exit_date: &str,
) -> Result<CmdResult> {
    let mut stay = open_stay(store, registration)?;

    let billed = ParkDate::parse(exit_date)
        .map_err(|_| {
            ParkingError::InvalidExitDate(format!("'{}' is not a YYYY-MM-DD date", exit_date))
        })
        .and_then(|exit| {
            let days = tariff.stay_length(&stay.entry_date, &exit)?;
            Ok((exit, days))
        });
    let (exit_date, days) = billed.inspect_err(|e| {
        warn!(target: "parklot::registry", registration, error = %e, "Departure rejected");
    })?;
    let cost = tariff.checked_total_cost(days, stay.charging)?;

    stay.exit_date = Some(exit_date.clone());
    store.save_stay(&stay)?;
    info!(
        target: "parklot::registry",
        registration,
        entry_date = %stay.entry_date,
        exit_date = %exit_date,
        days,
        cost,
        "Vehicle departed"
    );

    let receipt = Receipt {
        registration: stay.registration.clone(),
        entry_date: stay.entry_date.clone(),
        exit_date,
        days,
        charging: stay.charging,
        cost,
    };

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Car {} left after {} days",
        receipt.registration, receipt.days
    )));
    Ok(result.with_receipt(receipt).with_affected_stays(vec![stay]))
}
