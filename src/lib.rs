pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};

pub use crate::adapters::render::OutputFormat;
pub use crate::config::TomlConfig;
pub use crate::core::checksum::ChecksumAlgorithm;
pub use crate::core::codec::{GeneratorSettings, IdCodec};
pub use crate::core::generator::{CodeGenerator, YearGuard};
pub use crate::domain::model::{
    ChecksumValidation, Gender, GenderCenturyInfo, HospitalInfo, IdentificationCode,
    ParsedIdentification,
};
pub use crate::domain::ports::{FixedSequence, SequenceAllocator};
pub use crate::utils::error::{IdCodeError, Result};
