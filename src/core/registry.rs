use crate::core::command::RankingStrategy;
use crate::domain::model::{BookedSlot, Booking, BookingId, Doctor, Patient};
use crate::domain::ports::{ConflictScope, RegistrySettings};
use crate::utils::error::{BookingError, Result};
use crate::utils::validation::{is_one_hour_slot, is_valid_slot_format};
use std::collections::HashMap;

/// Snapshot of [`RegistrySettings`] taken when the registry is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryOptions {
    pub default_rating: u32,
    pub first_booking_id: u64,
    pub reject_duplicate_names: bool,
    pub require_one_hour: bool,
    pub conflict_scope: ConflictScope,
}

impl Default for RegistryOptions {
    fn default() -> Self {
        Self {
            default_rating: 4,
            first_booking_id: 1001,
            reject_duplicate_names: false,
            require_one_hour: false,
            conflict_scope: ConflictScope::Global,
        }
    }
}

impl RegistryOptions {
    pub fn from_settings<S: RegistrySettings + ?Sized>(settings: &S) -> Self {
        Self {
            default_rating: settings.default_rating(),
            first_booking_id: settings.first_booking_id(),
            reject_duplicate_names: settings.reject_duplicate_names(),
            require_one_hour: settings.require_one_hour(),
            conflict_scope: settings.conflict_scope(),
        }
    }
}

/// One doctor's open slots, in the order they will be listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorAvailability {
    pub doctor: String,
    pub slots: Vec<String>,
}

impl From<&Doctor> for DoctorAvailability {
    fn from(doctor: &Doctor) -> Self {
        Self {
            doctor: doctor.name.clone(),
            slots: doctor.availability.clone(),
        }
    }
}

/// All booking state. Doctors and patients are kept in registration order and
/// looked up by first match on name.
#[derive(Debug)]
pub struct AppointmentRegistry {
    doctors: Vec<Doctor>,
    patients: Vec<Patient>,
    bookings: HashMap<BookingId, Booking>,
    // last id handed out; the next booking gets `last_booking_id + 1`
    last_booking_id: u64,
    options: RegistryOptions,
}

impl Default for AppointmentRegistry {
    fn default() -> Self {
        Self::new(RegistryOptions::default())
    }
}

impl AppointmentRegistry {
    pub fn new(options: RegistryOptions) -> Self {
        Self {
            doctors: Vec::new(),
            patients: Vec::new(),
            bookings: HashMap::new(),
            last_booking_id: options.first_booking_id.saturating_sub(1),
            options,
        }
    }

    pub fn with_settings<S: RegistrySettings + ?Sized>(settings: &S) -> Self {
        Self::new(RegistryOptions::from_settings(settings))
    }

    pub fn options(&self) -> &RegistryOptions {
        &self.options
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn bookings(&self) -> &HashMap<BookingId, Booking> {
        &self.bookings
    }

    pub fn register_doctor(&mut self, name: &str, speciality: &str, rating: u32) -> Result<()> {
        if self.options.reject_duplicate_names && self.find_doctor_by_name(name).is_some() {
            return Err(BookingError::DuplicateName {
                kind: "Doctor",
                name: name.to_string(),
            });
        }

        self.doctors.push(Doctor::new(name, speciality, rating));
        tracing::info!(doctor = name, speciality, rating, "Registered doctor");
        Ok(())
    }

    /// Adds `slots` to the doctor's availability. Every slot is checked before
    /// anything is appended, so one bad slot leaves the doctor untouched.
    pub fn declare_availability(&mut self, doctor_name: &str, slots: &[String]) -> Result<()> {
        let require_one_hour = self.options.require_one_hour;
        let doctor = self
            .find_doctor_mut(doctor_name)
            .ok_or_else(|| BookingError::DoctorNotFound {
                name: doctor_name.to_string(),
            })?;

        for slot in slots {
            if !is_valid_slot_format(slot) {
                return Err(BookingError::InvalidSlotFormat {
                    doctor: doctor_name.to_string(),
                    slot: slot.clone(),
                });
            }
            if require_one_hour && !is_one_hour_slot(slot) {
                return Err(BookingError::InvalidSlotDuration {
                    doctor: doctor_name.to_string(),
                    slot: slot.clone(),
                });
            }
        }

        doctor.declare_availability(slots.iter().cloned());
        tracing::debug!(
            doctor = doctor_name,
            added = slots.len(),
            open = doctor.availability.len(),
            "Declared availability"
        );
        Ok(())
    }

    pub fn rank_doctors_by_rating(&self, speciality: &str) -> HashMap<String, u32> {
        self.doctors
            .iter()
            .filter(|d| d.speciality == speciality)
            .map(|d| (d.name.clone(), d.rating))
            .collect()
    }

    /// Availability of every doctor in `speciality`. `Rating` lists the best
    /// rated first (ties keep registration order); anything else keeps
    /// registration order.
    pub fn availability_by_speciality(
        &self,
        speciality: &str,
        strategy: &RankingStrategy,
    ) -> Vec<DoctorAvailability> {
        match strategy {
            RankingStrategy::Rating => {
                let ranked = self.rank_doctors_by_rating(speciality);
                let mut names: Vec<&String> = ranked.keys().collect();
                names.sort_by_key(|name| {
                    let position = self.doctors.iter().position(|d| &d.name == *name);
                    (std::cmp::Reverse(ranked[*name]), position)
                });
                names
                    .into_iter()
                    .filter_map(|name| self.availability_for_doctor(name))
                    .collect()
            }
            RankingStrategy::StartTime | RankingStrategy::Other(_) => self
                .doctors
                .iter()
                .filter(|d| d.speciality == speciality)
                .filter_map(|d| self.availability_for_doctor(&d.name))
                .collect(),
        }
    }

    /// `None` when no doctor has this name.
    pub fn availability_for_doctor(&self, doctor_name: &str) -> Option<DoctorAvailability> {
        self.find_doctor_by_name(doctor_name)
            .map(DoctorAvailability::from)
    }

    pub fn register_patient(&mut self, name: &str) -> Result<()> {
        if self.options.reject_duplicate_names && self.find_patient_by_name(name).is_some() {
            return Err(BookingError::DuplicateName {
                kind: "Patient",
                name: name.to_string(),
            });
        }

        self.patients.push(Patient::new(name));
        tracing::info!(patient = name, "Registered patient");
        Ok(())
    }

    /// Books `slot` with `doctor_name`. A waitlisted request skips the
    /// double-booking check but still needs the slot to be open.
    pub fn book_appointment(
        &mut self,
        patient_name: &str,
        doctor_name: &str,
        slot: &str,
        waitlist: bool,
    ) -> Result<BookingId> {
        let patient_idx = self.patients.iter().position(|p| p.name == patient_name);
        let doctor_idx = self.doctors.iter().position(|d| d.name == doctor_name);
        let (Some(patient_idx), Some(doctor_idx)) = (patient_idx, doctor_idx) else {
            return Err(BookingError::PatientOrDoctorNotFound {
                patient: patient_name.to_string(),
                doctor: doctor_name.to_string(),
            });
        };

        if !waitlist && self.is_slot_booked(slot, doctor_name) {
            return Err(BookingError::SlotAlreadyBooked {
                slot: slot.to_string(),
            });
        }

        if !self.doctors[doctor_idx].has_slot(slot) {
            return Err(BookingError::SlotUnavailable {
                doctor: doctor_name.to_string(),
                slot: slot.to_string(),
            });
        }

        let next_id = self
            .last_booking_id
            .checked_add(1)
            .ok_or(BookingError::BookingIdsExhausted {
                last: self.last_booking_id,
            })?;
        self.last_booking_id = next_id;
        let booking_id = BookingId(next_id);

        self.bookings.insert(
            booking_id,
            Booking {
                patient: patient_name.to_string(),
                doctor: doctor_name.to_string(),
                slot: slot.to_string(),
            },
        );
        self.patients[patient_idx].book_appointment(
            booking_id,
            slot.to_string(),
            doctor_name.to_string(),
        );
        self.doctors[doctor_idx].take_slot(slot);

        tracing::info!(
            booking_id = %booking_id,
            patient = patient_name,
            doctor = doctor_name,
            slot,
            waitlist,
            "Booked appointment"
        );
        Ok(booking_id)
    }

    /// Cancels a booking by its user-facing id. Ids that do not parse are
    /// reported the same way as unknown ones.
    pub fn cancel_booking(&mut self, booking_id: &str) -> Result<Booking> {
        let not_found = || BookingError::BookingNotFound {
            booking_id: booking_id.to_string(),
        };
        let id: BookingId = booking_id.parse().map_err(|_| not_found())?;
        let booking = self.bookings.remove(&id).ok_or_else(not_found)?;

        for patient in self.patients.iter_mut() {
            if patient.cancel_appointment(id) {
                break;
            }
        }

        match self.find_doctor_mut(&booking.doctor) {
            Some(doctor) => doctor.release_slot(booking.slot.clone()),
            None => tracing::warn!(doctor = %booking.doctor, "Cancelled booking for unknown doctor"),
        }

        tracing::info!(booking_id = %id, slot = %booking.slot, "Cancelled booking");
        Ok(booking)
    }

    /// Active bookings of a patient, sorted by id.
    pub fn appointments_booked(&self, patient_name: &str) -> Result<Vec<(BookingId, BookedSlot)>> {
        let patient =
            self.find_patient_by_name(patient_name)
                .ok_or_else(|| BookingError::PatientNotFound {
                    name: patient_name.to_string(),
                })?;

        let mut appointments: Vec<(BookingId, BookedSlot)> = patient
            .booked_appointments
            .iter()
            .map(|(id, booked)| (*id, booked.clone()))
            .collect();
        appointments.sort_by_key(|(id, _)| *id);
        Ok(appointments)
    }

    pub fn find_doctor_by_name(&self, name: &str) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.name == name)
    }

    pub fn find_patient_by_name(&self, name: &str) -> Option<&Patient> {
        self.patients.iter().find(|p| p.name == name)
    }

    fn find_doctor_mut(&mut self, name: &str) -> Option<&mut Doctor> {
        self.doctors.iter_mut().find(|d| d.name == name)
    }

    fn is_slot_booked(&self, slot: &str, doctor_name: &str) -> bool {
        self.bookings.values().any(|b| {
            b.slot == slot
                && match self.options.conflict_scope {
                    ConflictScope::Global => true,
                    ConflictScope::Doctor => b.doctor == doctor_name,
                }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn registry_with_doctor() -> AppointmentRegistry {
        let mut registry = AppointmentRegistry::default();
        registry
            .register_doctor("Curious", "Cardiologist", 4)
            .unwrap();
        registry
            .declare_availability("Curious", &slots(&["09:00-09:30", "10:00-10:30"]))
            .unwrap();
        registry.register_patient("PatientA").unwrap();
        registry
    }

    #[test]
    fn test_register_doctor_starts_empty() {
        let mut registry = AppointmentRegistry::default();
        registry.register_doctor("Curious", "Cardiologist", 4).unwrap();

        let doctor = registry.find_doctor_by_name("Curious").unwrap();
        assert!(doctor.availability.is_empty());
        assert_eq!(doctor.rating, 4);
        assert_eq!(doctor.speciality, "Cardiologist");
    }

    #[test]
    fn test_declare_availability_lists_slots() {
        let registry = registry_with_doctor();
        let availability = registry.availability_for_doctor("Curious").unwrap();
        assert_eq!(availability.slots, vec!["09:00-09:30", "10:00-10:30"]);
    }

    #[test]
    fn test_declare_availability_unknown_doctor() {
        let mut registry = AppointmentRegistry::default();
        let err = registry
            .declare_availability("Nobody", &slots(&["09:00-09:30"]))
            .unwrap_err();
        assert!(matches!(err, BookingError::DoctorNotFound { .. }));
    }

    #[test]
    fn test_declare_availability_is_all_or_nothing() {
        let mut registry = registry_with_doctor();
        let err = registry
            .declare_availability("Curious", &slots(&["11:00-11:30", "9:00-9:30", "12:00-12:30"]))
            .unwrap_err();

        assert!(matches!(err, BookingError::InvalidSlotFormat { ref slot, .. } if slot == "9:00-9:30"));
        let doctor = registry.find_doctor_by_name("Curious").unwrap();
        assert_eq!(doctor.availability, vec!["09:00-09:30", "10:00-10:30"]);
    }

    #[test]
    fn test_declare_availability_keeps_duplicates() {
        let mut registry = registry_with_doctor();
        registry
            .declare_availability("Curious", &slots(&["09:00-09:30"]))
            .unwrap();
        let doctor = registry.find_doctor_by_name("Curious").unwrap();
        assert_eq!(
            doctor.availability,
            vec!["09:00-09:30", "10:00-10:30", "09:00-09:30"]
        );
    }

    #[test]
    fn test_require_one_hour_rejects_short_slots() {
        let mut registry = AppointmentRegistry::new(RegistryOptions {
            require_one_hour: true,
            ..RegistryOptions::default()
        });
        registry.register_doctor("Curious", "Cardiologist", 4).unwrap();

        let err = registry
            .declare_availability("Curious", &slots(&["09:00-10:00", "10:00-10:30"]))
            .unwrap_err();
        assert!(matches!(err, BookingError::InvalidSlotDuration { .. }));
        assert!(registry.find_doctor_by_name("Curious").unwrap().availability.is_empty());

        registry
            .declare_availability("Curious", &slots(&["09:00-10:00", "10:00-11:00"]))
            .unwrap();
        assert_eq!(registry.find_doctor_by_name("Curious").unwrap().availability.len(), 2);
    }

    #[test]
    fn test_book_appointment_success() {
        let mut registry = registry_with_doctor();
        let id = registry
            .book_appointment("PatientA", "Curious", "09:00-09:30", false)
            .unwrap();

        assert_eq!(id, BookingId(1001));
        let doctor = registry.find_doctor_by_name("Curious").unwrap();
        assert_eq!(doctor.availability, vec!["10:00-10:30"]);
        let patient = registry.find_patient_by_name("PatientA").unwrap();
        assert_eq!(
            patient.booked_appointments.get(&id),
            Some(&BookedSlot {
                slot: "09:00-09:30".to_string(),
                doctor: "Curious".to_string(),
            })
        );
        assert_eq!(registry.bookings().len(), 1);
    }

    #[test]
    fn test_book_unknown_patient_or_doctor() {
        let mut registry = registry_with_doctor();
        let err = registry
            .book_appointment("Ghost", "Curious", "09:00-09:30", false)
            .unwrap_err();
        assert!(matches!(err, BookingError::PatientOrDoctorNotFound { .. }));

        let err = registry
            .book_appointment("PatientA", "Ghost", "09:00-09:30", false)
            .unwrap_err();
        assert!(matches!(err, BookingError::PatientOrDoctorNotFound { .. }));
    }

    #[test]
    fn test_double_booking_is_rejected() {
        let mut registry = registry_with_doctor();
        registry.register_patient("PatientB").unwrap();
        registry
            .declare_availability("Curious", &slots(&["09:00-09:30"]))
            .unwrap();

        registry
            .book_appointment("PatientA", "Curious", "09:00-09:30", false)
            .unwrap();
        let err = registry
            .book_appointment("PatientB", "Curious", "09:00-09:30", false)
            .unwrap_err();
        assert!(matches!(err, BookingError::SlotAlreadyBooked { .. }));
        assert_eq!(err.to_string(), "Slot already booked!");
    }

    #[test]
    fn test_conflict_check_is_global_by_default() {
        let mut registry = registry_with_doctor();
        registry.register_doctor("Daring", "Dermatologist", 4).unwrap();
        registry
            .declare_availability("Daring", &slots(&["09:00-09:30"]))
            .unwrap();
        registry.register_patient("PatientB").unwrap();

        registry
            .book_appointment("PatientA", "Curious", "09:00-09:30", false)
            .unwrap();
        let err = registry
            .book_appointment("PatientB", "Daring", "09:00-09:30", false)
            .unwrap_err();
        assert!(matches!(err, BookingError::SlotAlreadyBooked { .. }));
    }

    #[test]
    fn test_conflict_scope_doctor_allows_other_doctor() {
        let mut registry = AppointmentRegistry::new(RegistryOptions {
            conflict_scope: ConflictScope::Doctor,
            ..RegistryOptions::default()
        });
        registry.register_doctor("Curious", "Cardiologist", 4).unwrap();
        registry.register_doctor("Daring", "Dermatologist", 4).unwrap();
        registry
            .declare_availability("Curious", &slots(&["09:00-09:30"]))
            .unwrap();
        registry
            .declare_availability("Daring", &slots(&["09:00-09:30"]))
            .unwrap();
        registry.register_patient("PatientA").unwrap();
        registry.register_patient("PatientB").unwrap();

        registry
            .book_appointment("PatientA", "Curious", "09:00-09:30", false)
            .unwrap();
        assert!(registry
            .book_appointment("PatientB", "Daring", "09:00-09:30", false)
            .is_ok());
    }

    #[test]
    fn test_waitlist_skips_conflict_but_not_availability() {
        let mut registry = registry_with_doctor();
        registry.register_doctor("Daring", "Dermatologist", 4).unwrap();
        registry
            .declare_availability("Daring", &slots(&["09:00-09:30"]))
            .unwrap();
        registry.register_patient("PatientB").unwrap();

        registry
            .book_appointment("PatientA", "Curious", "09:00-09:30", false)
            .unwrap();
        assert!(registry
            .book_appointment("PatientB", "Daring", "09:00-09:30", true)
            .is_ok());

        // Curious has no 09:00 slot left, waitlist or not
        let err = registry
            .book_appointment("PatientB", "Curious", "09:00-09:30", true)
            .unwrap_err();
        assert!(matches!(err, BookingError::SlotUnavailable { .. }));
    }

    #[test]
    fn test_unavailable_slot() {
        let mut registry = registry_with_doctor();
        let err = registry
            .book_appointment("PatientA", "Curious", "15:00-15:30", false)
            .unwrap_err();
        assert_eq!(err.to_string(), "Slot not available for booking!");
    }

    #[test]
    fn test_cancel_restores_slot_and_clears_patient() {
        let mut registry = registry_with_doctor();
        let id = registry
            .book_appointment("PatientA", "Curious", "09:00-09:30", false)
            .unwrap();

        let cancelled = registry.cancel_booking(&id.to_string()).unwrap();
        assert_eq!(cancelled.slot, "09:00-09:30");

        let doctor = registry.find_doctor_by_name("Curious").unwrap();
        assert_eq!(doctor.availability, vec!["10:00-10:30", "09:00-09:30"]);
        assert!(registry
            .find_patient_by_name("PatientA")
            .unwrap()
            .booked_appointments
            .is_empty());
        assert!(registry.bookings().is_empty());

        let err = registry.cancel_booking(&id.to_string()).unwrap_err();
        assert!(matches!(err, BookingError::BookingNotFound { .. }));
    }

    #[test]
    fn test_cancel_non_numeric_id() {
        let mut registry = registry_with_doctor();
        let err = registry.cancel_booking("abc").unwrap_err();
        assert_eq!(err.to_string(), "Booking not found!");
    }

    #[test]
    fn test_booking_ids_are_never_reused() {
        let mut registry = registry_with_doctor();
        let first = registry
            .book_appointment("PatientA", "Curious", "09:00-09:30", false)
            .unwrap();
        registry.cancel_booking(&first.to_string()).unwrap();
        let second = registry
            .book_appointment("PatientA", "Curious", "09:00-09:30", false)
            .unwrap();

        assert!(second > first);
        assert_eq!(second, BookingId(1002));
    }

    #[test]
    fn test_first_booking_id_is_configurable() {
        let mut registry = AppointmentRegistry::new(RegistryOptions {
            first_booking_id: 5000,
            ..RegistryOptions::default()
        });
        registry.register_doctor("Curious", "Cardiologist", 4).unwrap();
        registry
            .declare_availability("Curious", &slots(&["09:00-09:30"]))
            .unwrap();
        registry.register_patient("PatientA").unwrap();

        let id = registry
            .book_appointment("PatientA", "Curious", "09:00-09:30", false)
            .unwrap();
        assert_eq!(id, BookingId(5000));
    }

    #[test]
    fn test_booking_id_exhaustion_is_an_error() {
        let mut registry = AppointmentRegistry::new(RegistryOptions {
            first_booking_id: u64::MAX,
            ..RegistryOptions::default()
        });
        registry.register_doctor("Curious", "Cardiologist", 4).unwrap();
        registry
            .declare_availability("Curious", &slots(&["09:00-09:30", "10:00-10:30"]))
            .unwrap();
        registry.register_patient("PatientA").unwrap();

        let last = registry
            .book_appointment("PatientA", "Curious", "09:00-09:30", false)
            .unwrap();
        assert_eq!(last, BookingId(u64::MAX));

        let err = registry
            .book_appointment("PatientA", "Curious", "10:00-10:30", false)
            .unwrap_err();
        assert!(matches!(err, BookingError::BookingIdsExhausted { .. }));
        // nothing changed on failure
        assert_eq!(registry.bookings().len(), 1);
        assert_eq!(
            registry.find_doctor_by_name("Curious").unwrap().availability,
            vec!["10:00-10:30"]
        );
    }

    #[test]
    fn test_cancel_rejects_non_canonical_ids() {
        let mut registry = registry_with_doctor();
        let id = registry
            .book_appointment("PatientA", "Curious", "09:00-09:30", false)
            .unwrap();
        assert_eq!(id, BookingId(1001));

        for alias in ["01001", "+1001", " 1001"] {
            let err = registry.cancel_booking(alias).unwrap_err();
            assert!(matches!(err, BookingError::BookingNotFound { .. }));
        }
        assert_eq!(registry.bookings().len(), 1);
        assert!(registry.cancel_booking("1001").is_ok());
    }

    #[test]
    fn test_duplicate_names_shadow_by_default() {
        let mut registry = AppointmentRegistry::default();
        registry.register_doctor("Curious", "Cardiologist", 4).unwrap();
        registry.register_doctor("Curious", "Dermatologist", 5).unwrap();

        assert_eq!(registry.doctors().len(), 2);
        assert_eq!(
            registry.find_doctor_by_name("Curious").unwrap().speciality,
            "Cardiologist"
        );
    }

    #[test]
    fn test_duplicate_names_rejected_when_configured() {
        let mut registry = AppointmentRegistry::new(RegistryOptions {
            reject_duplicate_names: true,
            ..RegistryOptions::default()
        });
        registry.register_patient("PatientA").unwrap();
        let err = registry.register_patient("PatientA").unwrap_err();
        assert!(matches!(err, BookingError::DuplicateName { kind: "Patient", .. }));
        assert_eq!(registry.patients().len(), 1);
    }

    #[test]
    fn test_rank_doctors_by_rating() {
        let mut registry = AppointmentRegistry::default();
        registry.register_doctor("Curious", "Cardiologist", 4).unwrap();
        registry.register_doctor("Daring", "Cardiologist", 5).unwrap();
        registry.register_doctor("Bold", "Dermatologist", 3).unwrap();

        let ranked = registry.rank_doctors_by_rating("Cardiologist");
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked.get("Curious"), Some(&4));
        assert_eq!(ranked.get("Daring"), Some(&5));
    }

    #[test]
    fn test_availability_by_speciality_orders() {
        let mut registry = AppointmentRegistry::default();
        registry.register_doctor("Curious", "Cardiologist", 4).unwrap();
        registry.register_doctor("Bold", "Dermatologist", 5).unwrap();
        registry.register_doctor("Daring", "Cardiologist", 5).unwrap();

        let by_registration: Vec<String> = registry
            .availability_by_speciality("Cardiologist", &RankingStrategy::StartTime)
            .into_iter()
            .map(|a| a.doctor)
            .collect();
        assert_eq!(by_registration, vec!["Curious", "Daring"]);

        let by_rating: Vec<String> = registry
            .availability_by_speciality("Cardiologist", &RankingStrategy::Rating)
            .into_iter()
            .map(|a| a.doctor)
            .collect();
        assert_eq!(by_rating, vec!["Daring", "Curious"]);
    }

    #[test]
    fn test_appointments_booked() {
        let mut registry = registry_with_doctor();
        registry
            .book_appointment("PatientA", "Curious", "09:00-09:30", false)
            .unwrap();
        registry
            .book_appointment("PatientA", "Curious", "10:00-10:30", false)
            .unwrap();

        let booked = registry.appointments_booked("PatientA").unwrap();
        let ids: Vec<u64> = booked.iter().map(|(id, _)| id.0).collect();
        assert_eq!(ids, vec![1001, 1002]);

        let err = registry.appointments_booked("Ghost").unwrap_err();
        assert!(matches!(err, BookingError::PatientNotFound { .. }));
    }
}
