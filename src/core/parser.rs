use crate::core::century::determine_gender;
use crate::core::checksum::{self, BODY_LENGTH};
use crate::core::hospital::determine_hospital_or_birth_sequence;
use crate::domain::model::{IdentificationCode, ParsedIdentification};
use crate::utils::error::Result;

fn number(digits: &[u8]) -> u16 {
    digits.iter().fold(0, |acc, &d| acc * 10 + u16::from(d))
}

/// Splits a code into its fixed-width fields and decodes each of them.
///
/// The embedded month and day are reported as written; only the checksum and
/// the table lookups are checked.
pub fn parse_identification(code: &IdentificationCode) -> Result<ParsedIdentification> {
    let digits = code.digits();

    let gender_digit = digits[0];
    let year_of_birth = number(&digits[1..3]);
    let month_of_birth = number(&digits[3..5]) as u8;
    let day_of_birth = number(&digits[5..7]) as u8;
    let birth_sequence = number(&digits[7..10]);
    let control_number = digits[10];

    let gender_info = determine_gender(gender_digit)?;
    let full_year = gender_info.century + i32::from(year_of_birth);
    let hospital_or_birth_sequence = determine_hospital_or_birth_sequence(birth_sequence, full_year)?;

    let mut body = [0u8; BODY_LENGTH];
    body.copy_from_slice(&digits[..BODY_LENGTH]);
    let checksum_validation = checksum::validate(&body, control_number);

    Ok(ParsedIdentification {
        month_of_birth,
        day_of_birth,
        birth_sequence,
        control_number,
        gender_info,
        full_year,
        hospital_or_birth_sequence,
        checksum_validation,
    })
}
