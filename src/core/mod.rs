pub mod command;
pub mod registry;
pub mod session;

pub use crate::domain::model::{BookedSlot, Booking, BookingId, Doctor, Patient};
pub use crate::domain::ports::{ConflictScope, RegistrySettings};
pub use crate::utils::error::Result;
