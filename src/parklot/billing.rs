//! # Billing
//!
//! Durations use a simplified calendar: every month is 30 days and every
//! year 360, so `2024-01-31` to `2024-02-01` is one day and `2024-02-28` to
//! `2024-03-01` is three. This is what customers are billed on and must not be
//! replaced with real calendar arithmetic.
//!
//! Cost is a per-day sum: the first `first_period_days` days at
//! `first_period_rate`, every following day at `later_rate`, plus a flat
//! `charging_surcharge` when the vehicle was charged.

use crate::error::{ParkingError, Result};
use crate::model::ParkDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tariff {
    pub first_period_days: u32,
    pub first_period_rate: u32,
    pub later_rate: u32,
    pub charging_surcharge: u32,
    pub max_stay_days: u32,
}

impl Default for Tariff {
    fn default() -> Self {
        Self {
            first_period_days: 10,
            first_period_rate: 120,
            later_rate: 50,
            charging_surcharge: 250,
            max_stay_days: 30,
        }
    }
}

/// Signed day count between two dates; negative when `exit` precedes `entry`.
pub fn elapsed_days(entry: &ParkDate, exit: &ParkDate) -> i64 {
    exit.day_number() - entry.day_number()
}

impl Tariff {
    /// Elapsed days for a departure, rejected unless within `0..=max_stay_days`.
    pub fn stay_length(&self, entry: &ParkDate, exit: &ParkDate) -> Result<u32> {
        let elapsed = elapsed_days(entry, exit);
        if elapsed < 0 {
            return Err(ParkingError::InvalidExitDate(format!(
                "{} is before the entry date {}",
                exit, entry
            )));
        }
        if elapsed > i64::from(self.max_stay_days) {
            return Err(ParkingError::InvalidExitDate(format!(
                "{} days exceeds the maximum stay of {} days",
                elapsed, self.max_stay_days
            )));
        }
        // elapsed is within 0..=u32::MAX here
        Ok(elapsed as u32)
    }

    fn checked_daily_cost(&self, days: u32) -> Option<u32> {
        let first = days.min(self.first_period_days);
        let later = days.saturating_sub(self.first_period_days);
        self.first_period_rate
            .checked_mul(first)?
            .checked_add(self.later_rate.checked_mul(later)?)
    }

    /// Cost of `days` days, or `Config` when the tariff overflows a `u32`.
    pub fn checked_total_cost(&self, days: u32, charging: bool) -> Result<u32> {
        let surcharge = if charging { self.charging_surcharge } else { 0 };
        self.checked_daily_cost(days)
            .and_then(|cost| cost.checked_add(surcharge))
            .ok_or_else(|| {
                ParkingError::Config(format!(
                    "tariff overflows when billing {} days",
                    days
                ))
            })
    }

    /// Saturates at `u32::MAX`; use [`Tariff::checked_total_cost`] to detect that.
    pub fn daily_cost(&self, days: u32) -> u32 {
        self.checked_daily_cost(days).unwrap_or(u32::MAX)
    }

    pub fn total_cost(&self, days: u32, charging: bool) -> u32 {
        self.checked_total_cost(days, charging).unwrap_or(u32::MAX)
    }

    /// Rejects tariffs whose longest charged stay does not fit in a `u32`.
    /// Cost grows with days, so the longest stay is the most expensive.
    pub fn validate(&self) -> Result<()> {
        self.checked_total_cost(self.max_stay_days, true).map(|_| ())
    }
}
