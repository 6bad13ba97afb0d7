//! Syntax checks a caller runs before handing input to the codec.

use crate::domain::model::{Gender, IdentificationCode};
use crate::utils::error::{IdCodeError, Result};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static BIRTH_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{2})\.([0-9]{2})\.([0-9]{4})$").expect("birth date pattern is valid")
});

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_code(value: &str) -> Result<IdentificationCode> {
    value.parse()
}

pub fn validate_gender(value: &str) -> Result<Gender> {
    value.parse()
}

/// Parses `dd.mm.yyyy` into a calendar date.
pub fn validate_birth_date(value: &str) -> Result<NaiveDate> {
    let caps = BIRTH_DATE
        .captures(value)
        .ok_or_else(|| IdCodeError::InvalidDateFormat {
            value: value.to_string(),
        })?;

    let invalid = || IdCodeError::InvalidDate {
        value: value.to_string(),
    };
    let day: u32 = caps[1].parse().map_err(|_| invalid())?;
    let month: u32 = caps[2].parse().map_err(|_| invalid())?;
    let year: i32 = caps[3].parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(IdCodeError::ConfigError {
            field: field_name.to_string(),
            message: format!("{} is not between {} and {}", value, min, max),
        });
    }
    Ok(())
}
