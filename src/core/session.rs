use crate::core::command::{Command, RankingStrategy, COMMAND_NAMES};
use crate::core::registry::{AppointmentRegistry, DoctorAvailability};
use crate::utils::error::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    pub default_strategy: RankingStrategy,
    pub banner: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            default_strategy: RankingStrategy::StartTime,
            banner: true,
        }
    }
}

/// Result of feeding one input line to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Continue(Vec<String>),
    Exit,
}

/// Drives an [`AppointmentRegistry`] from text commands and renders every
/// outcome, including failures, as output lines.
pub struct Session {
    registry: AppointmentRegistry,
    settings: SessionSettings,
}

impl Session {
    pub fn new(registry: AppointmentRegistry, settings: SessionSettings) -> Self {
        Self { registry, settings }
    }

    pub fn registry(&self) -> &AppointmentRegistry {
        &self.registry
    }

    pub fn banner() -> String {
        format!("Enter command ({}):", COMMAND_NAMES.join(", "))
    }

    /// Parses and runs one line. Domain failures never end the session; they
    /// come back as the message line the user sees.
    pub fn handle_line(&mut self, line: &str) -> Step {
        let outcome = line.parse::<Command>().and_then(|command| match command {
            Command::Exit => Ok(None),
            command => self.execute(command).map(Some),
        });

        match outcome {
            Ok(Some(lines)) => Step::Continue(lines),
            Ok(None) => Step::Exit,
            Err(e) => {
                tracing::warn!(
                    category = ?e.category(),
                    severity = ?e.severity(),
                    input = line,
                    "⚠️ {}",
                    e
                );
                tracing::debug!("💡 Suggestion: {}", e.recovery_suggestion());
                Step::Continue(vec![e.to_string()])
            }
        }
    }

    pub fn execute(&mut self, command: Command) -> Result<Vec<String>> {
        match command {
            Command::RegisterDoctor { name, speciality } => {
                let rating = self.registry.options().default_rating;
                self.registry.register_doctor(&name, &speciality, rating)?;
                Ok(vec![format!("Welcome Dr. {} !!", name)])
            }
            Command::MarkDoctorAvailable { name, slots } => {
                self.registry.declare_availability(&name, &slots)?;
                Ok(vec!["Done Doc!".to_string()])
            }
            Command::ShowAvailBySpeciality {
                speciality,
                strategy,
            } => {
                let strategy = strategy.unwrap_or_else(|| self.settings.default_strategy.clone());
                let mut lines = vec![speciality.clone()];
                for availability in self
                    .registry
                    .availability_by_speciality(&speciality, &strategy)
                {
                    lines.extend(render_availability(&availability));
                }
                Ok(lines)
            }
            Command::ShowAvailForDoctor { name } => Ok(self
                .registry
                .availability_for_doctor(&name)
                .map(|availability| render_availability(&availability))
                .unwrap_or_default()),
            Command::RegisterPatient { name } => {
                self.registry.register_patient(&name)?;
                Ok(vec![format!("{} registered successfully.", name)])
            }
            Command::BookAppointment {
                patient,
                doctor,
                slot,
                waitlist,
            } => {
                let booking_id = self
                    .registry
                    .book_appointment(&patient, &doctor, &slot, waitlist)?;
                Ok(vec![format!("Booked. Booking id: {}", booking_id)])
            }
            Command::CancelBooking { booking_id } => {
                self.registry.cancel_booking(&booking_id)?;
                Ok(vec!["Booking Cancelled".to_string()])
            }
            Command::ShowAppointmentsBooked { patient } => Ok(self
                .registry
                .appointments_booked(&patient)?
                .into_iter()
                .map(|(id, booked)| format!("Booking id: {}, Dr {} {}", id, booked.doctor, booked.slot))
                .collect()),
            Command::Exit => Ok(Vec::new()),
        }
    }

    /// Reads commands line by line until `exit` or end of input. Lines that
    /// are not valid UTF-8 are decoded lossily and handled like any other
    /// unrecognised input.
    pub async fn run<R, W>(&mut self, mut input: R, output: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        if self.settings.banner {
            write_lines(output, &[Self::banner()]).await?;
        }

        let mut buf = Vec::new();
        let mut handled = 0usize;
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf).await? == 0 {
                break;
            }
            handled += 1;

            let line = decode_line(&buf);
            match self.handle_line(&line) {
                Step::Continue(out) => write_lines(output, &out).await?,
                Step::Exit => {
                    tracing::debug!("Exit requested");
                    break;
                }
            }
        }

        tracing::info!(
            commands = handled,
            doctors = self.registry.doctors().len(),
            patients = self.registry.patients().len(),
            active_bookings = self.registry.bookings().len(),
            "Session finished"
        );
        Ok(())
    }
}

fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    match std::str::from_utf8(raw) {
        Ok(line) => line.to_string(),
        Err(e) => {
            tracing::warn!("⚠️ Input line is not valid UTF-8: {}", e);
            String::from_utf8_lossy(raw).into_owned()
        }
    }
}

fn render_availability(availability: &DoctorAvailability) -> Vec<String> {
    let mut lines: Vec<String> = availability
        .slots
        .iter()
        .map(|slot| format!("Dr. {}: ({})", availability.doctor, slot))
        .collect();
    lines.push(String::new());
    lines
}

async fn write_lines<W: AsyncWrite + Unpin>(output: &mut W, lines: &[String]) -> Result<()> {
    for line in lines {
        output.write_all(line.as_bytes()).await?;
        output.write_all(b"\n").await?;
    }
    output.flush().await?;
    Ok(())
}
