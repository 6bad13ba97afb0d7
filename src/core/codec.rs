use crate::core::checksum::ChecksumAlgorithm;
use crate::core::generator::{CodeGenerator, YearGuard};
use crate::core::parser::parse_identification;
use crate::domain::model::{Gender, IdentificationCode, ParsedIdentification};
use crate::domain::ports::FixedSequence;
use crate::utils::error::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Knobs for code generation. Parsing has none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    pub checksum: ChecksumAlgorithm,
    /// Birth sequence stamped into every generated code.
    pub sequence: u16,
    pub year_guard: YearGuard,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            checksum: ChecksumAlgorithm::default(),
            sequence: FixedSequence::default().0,
            year_guard: YearGuard::default(),
        }
    }
}

pub struct IdCodec {
    generator: CodeGenerator<FixedSequence>,
}

impl IdCodec {
    pub fn new(settings: GeneratorSettings) -> Self {
        let generator = CodeGenerator::new(FixedSequence(settings.sequence))
            .with_checksum(settings.checksum)
            .with_year_guard(settings.year_guard);
        Self { generator }
    }

    pub fn generate(&self, gender: Gender, birth_date: NaiveDate) -> Result<String> {
        tracing::debug!("Generating code for {} born {}", gender, birth_date);
        match self.generator.generate(gender, birth_date) {
            Ok(code) => {
                tracing::debug!("Generated code {}", code);
                Ok(code)
            }
            Err(e) => {
                tracing::debug!("Generation failed: {}", e);
                Err(e)
            }
        }
    }

    pub fn parse(&self, code: &IdentificationCode) -> Result<ParsedIdentification> {
        tracing::debug!("Parsing code {}", code);
        let parsed = parse_identification(code).inspect_err(|e| {
            tracing::debug!("Parsing {} failed: {}", code, e);
        })?;

        if !parsed.checksum_validation.is_valid {
            tracing::debug!(
                "Checksum mismatch for {}: expected {}, found {}",
                code,
                parsed.checksum_validation.calculated_checksum,
                parsed.checksum_validation.provided_checksum
            );
        }
        Ok(parsed)
    }
}

impl Default for IdCodec {
    fn default() -> Self {
        Self::new(GeneratorSettings::default())
    }
}
