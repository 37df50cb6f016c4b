use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Numeric booking id, shown to users as a plain decimal string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BookingId(pub u64);

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid booking id '{0}'")]
pub struct InvalidBookingId(pub String);

/// Only the canonical decimal rendering is accepted, so `01001` and `+1001`
/// do not name booking 1001.
impl FromStr for BookingId {
    type Err = InvalidBookingId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidBookingId(s.to_string());
        let id = s.parse::<u64>().map(BookingId).map_err(|_| invalid())?;
        if id.to_string() != s {
            return Err(invalid());
        }
        Ok(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub name: String,
    pub speciality: String,
    pub availability: Vec<String>,
    pub rating: u32,
}

impl Doctor {
    pub fn new(name: impl Into<String>, speciality: impl Into<String>, rating: u32) -> Self {
        Self {
            name: name.into(),
            speciality: speciality.into(),
            availability: Vec::new(),
            rating,
        }
    }

    pub fn declare_availability<I>(&mut self, slots: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.availability.extend(slots);
    }

    pub fn has_slot(&self, slot: &str) -> bool {
        self.availability.iter().any(|s| s == slot)
    }

    /// Removes the first occurrence of `slot`. Later duplicates stay open.
    pub fn take_slot(&mut self, slot: &str) -> bool {
        match self.availability.iter().position(|s| s == slot) {
            Some(index) => {
                self.availability.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn release_slot(&mut self, slot: String) {
        self.availability.push(slot);
    }
}

/// What a patient remembers about one of their bookings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookedSlot {
    pub slot: String,
    pub doctor: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub name: String,
    pub booked_appointments: HashMap<BookingId, BookedSlot>,
}

impl Patient {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            booked_appointments: HashMap::new(),
        }
    }

    pub fn book_appointment(&mut self, booking_id: BookingId, slot: String, doctor: String) {
        self.booked_appointments
            .insert(booking_id, BookedSlot { slot, doctor });
    }

    pub fn cancel_appointment(&mut self, booking_id: BookingId) -> bool {
        self.booked_appointments.remove(&booking_id).is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub patient: String,
    pub doctor: String,
    pub slot: String,
}
