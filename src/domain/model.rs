use crate::utils::error::{IdCodeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of characters in a personal identification code.
pub const CODE_LENGTH: usize = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
        }
    }
}

impl FromStr for Gender {
    type Err = IdCodeError;

    /// Accepts the upper-case spelling callers send, `MALE` or `FEMALE`.
    fn from_str(value: &str) -> Result<Self> {
        match value {
            "MALE" => Ok(Gender::Male),
            "FEMALE" => Ok(Gender::Female),
            other => Err(IdCodeError::InvalidGender {
                value: other.to_string(),
            }),
        }
    }
}

/// An 11-character, all-ASCII-digit identification code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdentificationCode(String);

impl IdentificationCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Digit values in position order.
    pub fn digits(&self) -> [u8; CODE_LENGTH] {
        let mut digits = [0u8; CODE_LENGTH];
        for (slot, byte) in digits.iter_mut().zip(self.0.bytes()) {
            *slot = byte - b'0';
        }
        digits
    }
}

impl FromStr for IdentificationCode {
    type Err = IdCodeError;

    fn from_str(value: &str) -> Result<Self> {
        let length = value.chars().count();
        if length != CODE_LENGTH {
            return Err(IdCodeError::InvalidLength { length });
        }
        if !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(IdCodeError::NonDigitCharacter);
        }
        Ok(Self(value.to_string()))
    }
}

impl TryFrom<&str> for IdentificationCode {
    type Error = IdCodeError;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for IdentificationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenderCenturyInfo {
    pub gender: Gender,
    pub century: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub birth_order: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecksumValidation {
    pub is_valid: bool,
    pub calculated_checksum: u8,
    pub provided_checksum: u8,
    pub calculation_steps: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedIdentification {
    pub month_of_birth: u8,
    pub day_of_birth: u8,
    pub birth_sequence: u16,
    pub control_number: u8,
    pub gender_info: GenderCenturyInfo,
    pub full_year: i32,
    pub hospital_or_birth_sequence: HospitalInfo,
    pub checksum_validation: ChecksumValidation,
}
