pub mod century;
pub mod checksum;
pub mod codec;
pub mod generator;
pub mod hospital;
pub mod parser;

pub use crate::domain::model::{
    ChecksumValidation, Gender, GenderCenturyInfo, HospitalInfo, IdentificationCode,
    ParsedIdentification,
};
pub use crate::domain::ports::{FixedSequence, SequenceAllocator};
pub use crate::utils::error::Result;
