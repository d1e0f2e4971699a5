use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum ParkingError {
    #[error("Parking lot is full ({capacity} stays)")]
    RegistryFull { capacity: usize },

    #[error("Invalid registration number '{0}'. It must be 3-8 characters long.")]
    InvalidRegistration(String),

    #[error("Invalid date format: '{0}'")]
    InvalidDate(String),

    #[error("Invalid exit date: {0}")]
    InvalidExitDate(String),

    #[error("Car {0} is not currently parked.")]
    NotCurrentlyParked(String),

    #[error("Stay not found: {0}")]
    StayNotFound(Uuid),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl ParkingError {
    /// Domain rejections that leave the registry untouched; the menu reports
    /// them and carries on.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ParkingError::RegistryFull { .. }
                | ParkingError::InvalidRegistration(_)
                | ParkingError::InvalidDate(_)
                | ParkingError::InvalidExitDate(_)
                | ParkingError::NotCurrentlyParked(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ParkingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_are_recoverable() {
        assert!(ParkingError::RegistryFull { capacity: 1 }.is_recoverable());
        assert!(ParkingError::NotCurrentlyParked("ABC".into()).is_recoverable());
        assert!(ParkingError::InvalidExitDate("x".into()).is_recoverable());
    }

    #[test]
    fn io_errors_abort() {
        let err = ParkingError::from(std::io::Error::other("closed"));
        assert!(!err.is_recoverable());
    }
}
