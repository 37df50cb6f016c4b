/// Where slot-conflict checks look when a booking is not waitlisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictScope {
    /// Any active booking with the same slot, whichever doctor holds it.
    #[default]
    Global,
    /// Only active bookings with the same doctor.
    Doctor,
}

/// Settings the registry reads at construction time.
pub trait RegistrySettings {
    fn default_rating(&self) -> u32;
    fn first_booking_id(&self) -> u64;
    fn reject_duplicate_names(&self) -> bool;
    fn require_one_hour(&self) -> bool;
    fn conflict_scope(&self) -> ConflictScope;
}
