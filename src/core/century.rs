use crate::domain::model::{Gender, GenderCenturyInfo};
use crate::utils::error::{IdCodeError, Result};

/// First and last birth year a century-gender digit exists for.
pub const FIRST_SUPPORTED_YEAR: i32 = 1800;
pub const LAST_SUPPORTED_YEAR: i32 = 2199;

/// Decodes the leading digit: odd is male, even is female, and each pair
/// steps one century from 1800.
pub fn determine_gender(digit: u8) -> Result<GenderCenturyInfo> {
    let (gender, century) = match digit {
        1 => (Gender::Male, 1800),
        2 => (Gender::Female, 1800),
        3 => (Gender::Male, 1900),
        4 => (Gender::Female, 1900),
        5 => (Gender::Male, 2000),
        6 => (Gender::Female, 2000),
        7 => (Gender::Male, 2100),
        8 => (Gender::Female, 2100),
        _ => return Err(IdCodeError::InvalidGenderDigit { digit }),
    };
    Ok(GenderCenturyInfo { gender, century })
}

/// Inverse of [`determine_gender`].
pub fn gender_digit(gender: Gender, year: i32) -> Result<u8> {
    let base = match year {
        1800..=1899 => 1,
        1900..=1999 => 3,
        2000..=2099 => 5,
        2100..=2199 => 7,
        _ => return Err(IdCodeError::InvalidYearRange { year }),
    };
    Ok(match gender {
        Gender::Male => base,
        Gender::Female => base + 1,
    })
}
