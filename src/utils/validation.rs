use crate::utils::error::{BookingError, Result};
use chrono::NaiveTime;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub const SLOT_LEN: usize = 11;

/// Checks the `hh:mm-hh:mm` shape by delimiter position only; digits are not
/// inspected. Length and positions count characters, not bytes.
pub fn is_valid_slot_format(slot: &str) -> bool {
    let chars: Vec<char> = slot.chars().collect();
    chars.len() == SLOT_LEN && chars[2] == ':' && chars[5] == '-' && chars[8] == ':'
}

/// Parses both halves of a slot as wall-clock times. Returns `None` when the
/// slot is not a real `HH:MM-HH:MM` range.
pub fn parse_slot_times(slot: &str) -> Option<(NaiveTime, NaiveTime)> {
    let (start, end) = slot.split_once('-')?;
    let start = NaiveTime::parse_from_str(start, "%H:%M").ok()?;
    let end = NaiveTime::parse_from_str(end, "%H:%M").ok()?;
    Some((start, end))
}

pub fn is_one_hour_slot(slot: &str) -> bool {
    parse_slot_times(slot)
        .map(|(start, end)| (end - start).num_minutes() == 60)
        .unwrap_or(false)
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BookingError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(BookingError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
