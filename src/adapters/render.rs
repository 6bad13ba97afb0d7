use crate::core::hospital::CENTRAL_REGISTRY_YEAR;
use crate::domain::model::{IdentificationCode, ParsedIdentification};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain lines.
    #[default]
    Text,
    /// The same lines separated by `<br/>`.
    Html,
    Json,
}

#[derive(Serialize)]
struct ParsedReport<'a> {
    code: &'a str,
    #[serde(flatten)]
    parsed: &'a ParsedIdentification,
}

#[derive(Serialize)]
struct GeneratedReport<'a> {
    code: &'a str,
}

/// One-sentence account of when and where the person was born.
pub fn birth_narrative(parsed: &ParsedIdentification) -> String {
    let born_on = format!(
        "The person was born on {:02}.{:02}.{}.",
        parsed.day_of_birth, parsed.month_of_birth, parsed.full_year
    );
    let gender = parsed.gender_info.gender;
    let hospital = &parsed.hospital_or_birth_sequence;

    match (&hospital.name, parsed.full_year < CENTRAL_REGISTRY_YEAR) {
        (Some(name), true) => format!(
            "{} They were born in {} and was the {} {} born",
            born_on, name, hospital.birth_order, gender
        ),
        _ => format!(
            "{} They were the {} {} born",
            born_on, parsed.birth_sequence, gender
        ),
    }
}

fn report_lines(code: &IdentificationCode, parsed: &ParsedIdentification) -> Vec<String> {
    let checksum = &parsed.checksum_validation;
    vec![
        format!("Your government ID {} Details:", code),
        String::new(),
        "Checksum Validation:".to_string(),
        format!("- Valid: {}", if checksum.is_valid { "Yes" } else { "No" }),
        format!("- Calculation: {}", checksum.calculation_steps),
        format!("- Expected Checksum: {}", checksum.calculated_checksum),
        format!("- Provided Checksum: {}", checksum.provided_checksum),
        String::new(),
        format!("- {}", birth_narrative(parsed)),
    ]
}

pub fn render_parsed(
    code: &IdentificationCode,
    parsed: &ParsedIdentification,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report_lines(code, parsed).join("\n")),
        OutputFormat::Html => Ok(report_lines(code, parsed).join("<br/>\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&ParsedReport {
            code: code.as_str(),
            parsed,
        })?),
    }
}

pub fn render_generated(code: &str, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text | OutputFormat::Html => Ok(format!("Generated personal code: {}", code)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&GeneratedReport { code })?),
    }
}
