use crate::domain::model::Gender;
use chrono::NaiveDate;

/// Hands out the three-digit birth sequence for a newly generated code.
pub trait SequenceAllocator: Send + Sync {
    fn allocate(&self, gender: Gender, birth_date: NaiveDate) -> u16;
}

/// Always returns the same sequence number.
///
/// No real registry backs generation, so two calls with the same gender and
/// date produce the same code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSequence(pub u16);

impl Default for FixedSequence {
    fn default() -> Self {
        Self(1)
    }
}

impl SequenceAllocator for FixedSequence {
    fn allocate(&self, _gender: Gender, _birth_date: NaiveDate) -> u16 {
        self.0
    }
}
