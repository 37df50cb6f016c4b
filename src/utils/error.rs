use thiserror::Error;

/// 錯誤分類，用於日誌與恢復建議
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    NotFound,
    Validation,
    Conflict,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

/// Every failure the registry, the command parser or the configuration layer
/// can report. The `Display` text is what the session prints to the user.
#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Doctor not found!")]
    DoctorNotFound { name: String },

    #[error("Patient not found!")]
    PatientNotFound { name: String },

    #[error("Patient or Doctor not found!")]
    PatientOrDoctorNotFound { patient: String, doctor: String },

    #[error("Booking not found!")]
    BookingNotFound { booking_id: String },

    #[error("Invalid slot format for Dr. {doctor}. Slots must be in format 'hh:mm-hh:mm'")]
    InvalidSlotFormat { doctor: String, slot: String },

    #[error("Invalid slot duration for Dr. {doctor}. Slots must be exactly 60 minutes long.")]
    InvalidSlotDuration { doctor: String, slot: String },

    #[error("Slot already booked!")]
    SlotAlreadyBooked { slot: String },

    #[error("Slot not available for booking!")]
    SlotUnavailable { doctor: String, slot: String },

    #[error("No booking ids left!")]
    BookingIdsExhausted { last: u64 },

    #[error("{kind} {name} is already registered!")]
    DuplicateName { kind: &'static str, name: String },

    #[error("Invalid command!")]
    InvalidCommand { input: String },

    #[error("Missing arguments for {command}. Usage: {usage}")]
    MissingArguments {
        command: &'static str,
        usage: &'static str,
    },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BookingError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BookingError::DoctorNotFound { .. }
            | BookingError::PatientNotFound { .. }
            | BookingError::PatientOrDoctorNotFound { .. }
            | BookingError::BookingNotFound { .. } => ErrorCategory::NotFound,
            BookingError::InvalidSlotFormat { .. }
            | BookingError::InvalidSlotDuration { .. }
            | BookingError::InvalidCommand { .. }
            | BookingError::MissingArguments { .. } => ErrorCategory::Validation,
            BookingError::SlotAlreadyBooked { .. }
            | BookingError::SlotUnavailable { .. }
            | BookingError::DuplicateName { .. }
            | BookingError::BookingIdsExhausted { .. } => ErrorCategory::Conflict,
            BookingError::InvalidConfigValue { .. } | BookingError::ConfigParse { .. } => {
                ErrorCategory::Configuration
            }
            BookingError::Io(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::NotFound | ErrorCategory::Validation => ErrorSeverity::Low,
            ErrorCategory::Conflict => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            BookingError::DoctorNotFound { name } => {
                format!("Register the doctor first with: registerDoc {} <speciality>", name)
            }
            BookingError::PatientNotFound { name } => {
                format!("Register the patient first with: registerPatient {}", name)
            }
            BookingError::PatientOrDoctorNotFound { .. } => {
                "Check that both the patient and the doctor are registered".to_string()
            }
            BookingError::BookingNotFound { .. } => {
                "Use showAppointmentsBooked <patient> to list active booking ids".to_string()
            }
            BookingError::InvalidSlotFormat { .. } => {
                "Write slots as hh:mm-hh:mm, e.g. 09:00-10:00".to_string()
            }
            BookingError::InvalidSlotDuration { .. } => {
                "Each slot must start and end exactly one hour apart".to_string()
            }
            BookingError::SlotAlreadyBooked { .. } => {
                "Pick another slot or book with the waitlist flag".to_string()
            }
            BookingError::SlotUnavailable { doctor, .. } => {
                format!("Use showAvailForDoctor {} to see open slots", doctor)
            }
            BookingError::DuplicateName { .. } => "Register under a different name".to_string(),
            BookingError::BookingIdsExhausted { last } => format!(
                "Booking id {} was the last one; restart with a lower registry.first_booking_id",
                last
            ),
            BookingError::InvalidCommand { .. } => {
                "Type one of the commands listed in the banner".to_string()
            }
            BookingError::MissingArguments { usage, .. } => format!("Try: {}", usage),
            BookingError::InvalidConfigValue { field, .. } => {
                format!("Fix '{}' in the configuration file or command line", field)
            }
            BookingError::ConfigParse { .. } => {
                "Make sure the configuration file is valid TOML".to_string()
            }
            BookingError::Io(_) => "Check that stdin/stdout are readable and writable".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BookingError>;
