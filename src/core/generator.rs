use crate::core::century::{gender_digit, FIRST_SUPPORTED_YEAR, LAST_SUPPORTED_YEAR};
use crate::core::checksum::{ChecksumAlgorithm, BODY_LENGTH};
use crate::core::hospital::{find_range, CENTRAL_REGISTRY_YEAR};
use crate::domain::model::Gender;
use crate::domain::ports::{FixedSequence, SequenceAllocator};
use crate::utils::error::{IdCodeError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// How the generator screens the requested birth year before encoding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum YearGuard {
    /// `year < 1800 && year > 2199`. No single year satisfies it, so this
    /// guard never rejects anything; unsupported years are only caught when
    /// the century digit is derived.
    #[default]
    Legacy,
    /// `year < 1800 || year > 2199`.
    Strict,
}

impl YearGuard {
    pub fn rejects(&self, year: i32) -> bool {
        match self {
            YearGuard::Legacy => year < FIRST_SUPPORTED_YEAR && year > LAST_SUPPORTED_YEAR,
            YearGuard::Strict => year < FIRST_SUPPORTED_YEAR || year > LAST_SUPPORTED_YEAR,
        }
    }
}

pub struct CodeGenerator<A: SequenceAllocator = FixedSequence> {
    allocator: A,
    checksum: ChecksumAlgorithm,
    year_guard: YearGuard,
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new(FixedSequence::default())
    }
}

impl<A: SequenceAllocator> CodeGenerator<A> {
    pub fn new(allocator: A) -> Self {
        Self {
            allocator,
            checksum: ChecksumAlgorithm::default(),
            year_guard: YearGuard::default(),
        }
    }

    pub fn with_checksum(mut self, checksum: ChecksumAlgorithm) -> Self {
        self.checksum = checksum;
        self
    }

    pub fn with_year_guard(mut self, year_guard: YearGuard) -> Self {
        self.year_guard = year_guard;
        self
    }

    /// Ten-digit body: century-gender digit, year tail, month, day, sequence.
    pub fn body(&self, gender: Gender, birth_date: NaiveDate) -> Result<String> {
        let year = birth_date.year();
        if self.year_guard.rejects(year) {
            return Err(IdCodeError::InvalidYearRange { year });
        }

        let digit = gender_digit(gender, year)?;
        let sequence = self.allocator.allocate(gender, birth_date);
        // The parser must be able to read back whatever is stamped here.
        let decodable = if year < CENTRAL_REGISTRY_YEAR {
            find_range(sequence).is_some()
        } else {
            (1..=999).contains(&sequence)
        };
        if !decodable {
            return Err(IdCodeError::InvalidSequenceNumber { sequence });
        }
        Ok(format!(
            "{}{:02}{:02}{:02}{:03}",
            digit,
            year.rem_euclid(100),
            birth_date.month(),
            birth_date.day(),
            sequence
        ))
    }

    pub fn generate(&self, gender: Gender, birth_date: NaiveDate) -> Result<String> {
        let body = self.body(gender, birth_date)?;

        let mut digits = [0u8; BODY_LENGTH];
        for (slot, byte) in digits.iter_mut().zip(body.bytes()) {
            *slot = byte - b'0';
        }
        let checksum = self.checksum.compute(&digits);

        Ok(format!("{}{}", body, checksum))
    }
}
