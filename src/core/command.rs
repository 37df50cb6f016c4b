use crate::utils::error::BookingError;
use std::fmt;
use std::str::FromStr;

pub const COMMAND_NAMES: &[&str] = &[
    "registerDoc",
    "markDocAvail",
    "showAvailByspeciality",
    "showAvailForDoctor",
    "registerPatient",
    "bookAppointment",
    "cancelBookingId",
    "showAppointmentsBooked",
    "exit",
];

/// How `showAvailByspeciality` orders doctors.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RankingStrategy {
    Rating,
    #[default]
    StartTime,
    /// Unrecognised names fall back to registration order.
    Other(String),
}

impl From<&str> for RankingStrategy {
    fn from(s: &str) -> Self {
        match s {
            "rating" => RankingStrategy::Rating,
            "start_time" => RankingStrategy::StartTime,
            other => RankingStrategy::Other(other.to_string()),
        }
    }
}

impl fmt::Display for RankingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankingStrategy::Rating => write!(f, "rating"),
            RankingStrategy::StartTime => write!(f, "start_time"),
            RankingStrategy::Other(name) => write!(f, "{}", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    RegisterDoctor {
        name: String,
        speciality: String,
    },
    MarkDoctorAvailable {
        name: String,
        slots: Vec<String>,
    },
    ShowAvailBySpeciality {
        speciality: String,
        /// `None` means the session default.
        strategy: Option<RankingStrategy>,
    },
    ShowAvailForDoctor {
        name: String,
    },
    RegisterPatient {
        name: String,
    },
    BookAppointment {
        patient: String,
        doctor: String,
        slot: String,
        waitlist: bool,
    },
    CancelBooking {
        booking_id: String,
    },
    ShowAppointmentsBooked {
        patient: String,
    },
    Exit,
}

fn require(
    args: &[&str],
    count: usize,
    command: &'static str,
    usage: &'static str,
) -> Result<(), BookingError> {
    if args.len() < count {
        return Err(BookingError::MissingArguments { command, usage });
    }
    Ok(())
}

impl FromStr for Command {
    type Err = BookingError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let action = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        match action {
            "registerDoc" => {
                require(&args, 2, "registerDoc", "registerDoc <name> <speciality>")?;
                Ok(Command::RegisterDoctor {
                    name: args[0].to_string(),
                    speciality: args[1].to_string(),
                })
            }
            "markDocAvail" => {
                require(&args, 1, "markDocAvail", "markDocAvail <name> <hh:mm-hh:mm>...")?;
                Ok(Command::MarkDoctorAvailable {
                    name: args[0].to_string(),
                    slots: args[1..].iter().map(|s| s.to_string()).collect(),
                })
            }
            "showAvailByspeciality" => {
                require(
                    &args,
                    1,
                    "showAvailByspeciality",
                    "showAvailByspeciality <speciality> [rating|start_time]",
                )?;
                Ok(Command::ShowAvailBySpeciality {
                    speciality: args[0].to_string(),
                    strategy: args.get(1).map(|s| RankingStrategy::from(*s)),
                })
            }
            "showAvailForDoctor" => {
                require(&args, 1, "showAvailForDoctor", "showAvailForDoctor <name>")?;
                Ok(Command::ShowAvailForDoctor {
                    name: args[0].to_string(),
                })
            }
            "registerPatient" => {
                require(&args, 1, "registerPatient", "registerPatient <name>")?;
                Ok(Command::RegisterPatient {
                    name: args[0].to_string(),
                })
            }
            "bookAppointment" => {
                require(
                    &args,
                    3,
                    "bookAppointment",
                    "bookAppointment <patient> <doctor> <hh:mm-hh:mm> [true]",
                )?;
                Ok(Command::BookAppointment {
                    patient: args[0].to_string(),
                    doctor: args[1].to_string(),
                    slot: args[2].to_string(),
                    waitlist: args.get(3) == Some(&"true"),
                })
            }
            "cancelBookingId" => {
                require(&args, 1, "cancelBookingId", "cancelBookingId <bookingId>")?;
                Ok(Command::CancelBooking {
                    booking_id: args[0].to_string(),
                })
            }
            "showAppointmentsBooked" => {
                require(
                    &args,
                    1,
                    "showAppointmentsBooked",
                    "showAppointmentsBooked <patient>",
                )?;
                Ok(Command::ShowAppointmentsBooked {
                    patient: args[0].to_string(),
                })
            }
            "exit" if args.is_empty() => Ok(Command::Exit),
            _ => Err(BookingError::InvalidCommand {
                input: line.to_string(),
            }),
        }
    }
}
