pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::BookingConfig;

pub use core::{
    command::{Command, RankingStrategy},
    registry::{AppointmentRegistry, DoctorAvailability, RegistryOptions},
    session::{Session, SessionSettings, Step},
};
pub use utils::error::{BookingError, Result};
