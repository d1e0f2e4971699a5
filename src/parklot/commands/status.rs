use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ParkingStatus;
use crate::store::StayStore;

pub fn run<S: StayStore>(store: &S, registration: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let status = match store.find_open_stay(registration)? {
        Some(stay) => {
            result.add_message(CmdMessage::info(format!(
                "Car {} is currently parked since {}",
                registration, stay.entry_date
            )));
            ParkingStatus::Parked {
                since: stay.entry_date,
            }
        }
        None => {
            result.add_message(CmdMessage::info(format!(
                "Car {} is not parked at the moment.",
                registration
            )));
            ParkingStatus::NotParked
        }
    };
    Ok(result.with_status(status))
}
