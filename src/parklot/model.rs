use crate::billing::Tariff;
use crate::error::{ParkingError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

pub const MIN_REGISTRATION_LEN: usize = 3;
pub const MAX_REGISTRATION_LEN: usize = 8;

/// A `YYYY-MM-DD` date as typed at the gate.
///
/// Only the shape is checked: `2024-13-40` is accepted. Ordering is the
/// lexicographic order of the text, and durations use the 30-day-month
/// calendar in [`ParkDate::day_number`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ParkDate {
    raw: String,
    year: i64,
    month: i64,
    day: i64,
}

impl ParkDate {
    pub fn parse(input: &str) -> Result<Self> {
        let bytes = input.as_bytes();
        let shaped = bytes.len() == 10
            && bytes.iter().enumerate().all(|(i, b)| match i {
                4 | 7 => *b == b'-',
                _ => b.is_ascii_digit(),
            });
        if !shaped {
            return Err(ParkingError::InvalidDate(input.to_string()));
        }

        let field = |range: std::ops::Range<usize>| -> Result<i64> {
            input[range]
                .parse()
                .map_err(|_| ParkingError::InvalidDate(input.to_string()))
        };

        Ok(Self {
            raw: input.to_string(),
            year: field(0..4)?,
            month: field(5..7)?,
            day: field(8..10)?,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Days since year zero with every year 360 days and every month 30.
    pub fn day_number(&self) -> i64 {
        self.year * 360 + self.month * 30 + self.day
    }
}

impl FromStr for ParkDate {
    type Err = ParkingError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ParkDate {
    type Error = ParkingError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<ParkDate> for String {
    fn from(date: ParkDate) -> Self {
        date.raw
    }
}

impl fmt::Display for ParkDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl PartialEq for ParkDate {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for ParkDate {}

impl PartialOrd for ParkDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ParkDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw.cmp(&other.raw)
    }
}

pub fn validate_registration(registration: &str) -> Result<()> {
    let len = registration.chars().count();
    if (MIN_REGISTRATION_LEN..=MAX_REGISTRATION_LEN).contains(&len) {
        Ok(())
    } else {
        Err(ParkingError::InvalidRegistration(registration.to_string()))
    }
}

/// One parking episode. The record is never removed; departure only sets
/// `exit_date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleStay {
    pub id: Uuid,
    pub registration: String,
    pub entry_date: ParkDate,
    pub exit_date: Option<ParkDate>,
    pub charging: bool,
}

impl VehicleStay {
    pub fn new(registration: String, entry_date: ParkDate, charging: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            registration,
            entry_date,
            exit_date: None,
            charging,
        }
    }

    pub fn is_parked(&self) -> bool {
        self.exit_date.is_none()
    }

    pub fn is_open_for(&self, registration: &str) -> bool {
        self.is_parked() && self.registration == registration
    }
}

/// A history row: the stay plus billing for departed vehicles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StayView {
    pub id: Uuid,
    pub registration: String,
    pub entry_date: ParkDate,
    pub exit_date: Option<ParkDate>,
    pub charging: bool,
    pub days: Option<u32>,
    pub cost: Option<u32>,
}

impl StayView {
    /// Fails if a departed stay cannot be billed under `tariff`.
    pub fn from_stay(stay: &VehicleStay, tariff: &Tariff) -> Result<Self> {
        let (days, cost) = match &stay.exit_date {
            Some(exit) => {
                let days = tariff.stay_length(&stay.entry_date, exit)?;
                (Some(days), Some(tariff.checked_total_cost(days, stay.charging)?))
            }
            None => (None, None),
        };
        Ok(Self {
            id: stay.id,
            registration: stay.registration.clone(),
            entry_date: stay.entry_date.clone(),
            exit_date: stay.exit_date.clone(),
            charging: stay.charging,
            days,
            cost,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    pub registration: String,
    pub entry_date: ParkDate,
    pub exit_date: ParkDate,
    pub days: u32,
    pub charging: bool,
    pub cost: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ParkingStatus {
    Parked { since: ParkDate },
    NotParked,
}
