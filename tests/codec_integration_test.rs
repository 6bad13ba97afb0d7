use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use isikukood::adapters::render::{render_parsed, OutputFormat};
use isikukood::utils::validation::{validate_birth_date, validate_code};
use isikukood::utils::validation::Validate;
use isikukood::{
    ChecksumAlgorithm, Gender, GeneratorSettings, IdCodeError, IdCodec, IdentificationCode,
    TomlConfig, YearGuard,
};

fn code(text: &str) -> IdentificationCode {
    text.parse().unwrap()
}

#[test]
fn test_generate_then_parse_recovers_gender_and_date() -> Result<()> {
    let codec = IdCodec::default();
    let samples = [
        (Gender::Male, NaiveDate::from_ymd_opt(1800, 1, 1).unwrap()),
        (Gender::Female, NaiveDate::from_ymd_opt(1899, 12, 31).unwrap()),
        (Gender::Male, NaiveDate::from_ymd_opt(1976, 5, 3).unwrap()),
        (Gender::Female, NaiveDate::from_ymd_opt(2000, 2, 29).unwrap()),
        (Gender::Male, NaiveDate::from_ymd_opt(2013, 7, 14).unwrap()),
        (Gender::Female, NaiveDate::from_ymd_opt(2100, 1, 1).unwrap()),
        (Gender::Male, NaiveDate::from_ymd_opt(2199, 12, 31).unwrap()),
    ];

    for (gender, date) in samples {
        let generated = codec.generate(gender, date)?;
        let id: IdentificationCode = generated.parse()?;
        let parsed = codec.parse(&id)?;

        assert_eq!(parsed.gender_info.gender, gender, "{}", generated);
        assert_eq!(parsed.full_year, date.year(), "{}", generated);
        assert_eq!(u32::from(parsed.month_of_birth), date.month(), "{}", generated);
        assert_eq!(u32::from(parsed.day_of_birth), date.day(), "{}", generated);
        assert_eq!(parsed.birth_sequence, 1);
    }
    Ok(())
}

#[test]
fn test_generated_checksum_can_fail_validation() -> Result<()> {
    // Body 3760105001 weighs 76 with the first table, remainder 10. The
    // generator collapses that to 0; the validator falls back to the second
    // table (122, remainder 1) and expects 1.
    let codec = IdCodec::default();
    let date = NaiveDate::from_ymd_opt(1976, 1, 5).unwrap();

    let generated = codec.generate(Gender::Male, date)?;
    assert_eq!(generated, "37601050010");

    let parsed = codec.parse(&code(&generated))?;
    let validation = &parsed.checksum_validation;
    assert!(!validation.is_valid);
    assert_eq!(validation.provided_checksum, 0);
    assert_eq!(validation.calculated_checksum, 1);
    assert!(validation
        .calculation_steps
        .contains("Since remainder is 10, trying second calculation with weight 2:"));
    Ok(())
}

#[test]
fn test_two_stage_generation_validates() -> Result<()> {
    let codec = IdCodec::new(GeneratorSettings {
        checksum: ChecksumAlgorithm::TwoStageModulo11,
        ..GeneratorSettings::default()
    });
    let date = NaiveDate::from_ymd_opt(1976, 1, 5).unwrap();

    let generated = codec.generate(Gender::Male, date)?;
    assert_eq!(generated, "37601050011");
    assert!(codec.parse(&code(&generated))?.checksum_validation.is_valid);
    Ok(())
}

#[test]
fn test_known_code_end_to_end() -> Result<()> {
    let codec = IdCodec::default();
    let id = validate_code("37605030299")?;
    let parsed = codec.parse(&id)?;

    assert_eq!(parsed.gender_info.gender, Gender::Male);
    assert_eq!(parsed.gender_info.century, 1900);
    assert_eq!(parsed.full_year, 1976);
    assert_eq!(parsed.birth_sequence, 29);
    assert_eq!(parsed.hospital_or_birth_sequence.birth_order, "9");
    assert!(parsed.checksum_validation.is_valid);

    let text = render_parsed(&id, &parsed, OutputFormat::Text)?;
    assert!(text.ends_with(
        "- The person was born on 03.05.1976. They were born in \
         Ida-Tallinna keskhaigla, Pelgulinna sünnitusmaja (Tallinn) and was the 9 Male born"
    ));
    Ok(())
}

#[test]
fn test_generate_from_caller_date_string() -> Result<()> {
    let codec = IdCodec::default();
    let date = validate_birth_date("03.05.1976")?;
    assert_eq!(codec.generate(Gender::Male, date)?, "37605030015");
    Ok(())
}

#[test]
fn test_codec_errors_surface_distinctly() {
    let codec = IdCodec::default();

    assert!(matches!(
        codec.parse(&code("97605030299")),
        Err(IdCodeError::InvalidGenderDigit { digit: 9 })
    ));
    assert!(matches!(
        codec.parse(&code("37605039991")),
        Err(IdCodeError::InvalidSequenceNumber { sequence: 999 })
    ));

    let strict = IdCodec::new(GeneratorSettings {
        year_guard: YearGuard::Strict,
        ..GeneratorSettings::default()
    });
    let date = NaiveDate::from_ymd_opt(1799, 6, 1).unwrap();
    assert!(matches!(
        strict.generate(Gender::Female, date),
        Err(IdCodeError::InvalidYearRange { year: 1799 })
    ));
}

#[test]
fn test_parse_is_repeatable_across_threads() {
    let id = code("37605030299");
    let expected = IdCodec::default().parse(&id).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let id = id.clone();
            std::thread::spawn(move || IdCodec::default().parse(&id).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_configured_sequence_must_decode_for_birth_year() -> Result<()> {
    let config = TomlConfig::from_toml_str("[generator]\nsequence = 20\n")?;
    config.validate()?;
    let codec = IdCodec::new(config.generator);

    let before_2013 = NaiveDate::from_ymd_opt(1976, 5, 3).unwrap();
    assert!(matches!(
        codec.generate(Gender::Male, before_2013),
        Err(IdCodeError::InvalidSequenceNumber { sequence: 20 })
    ));

    let after_2013 = NaiveDate::from_ymd_opt(2015, 3, 12).unwrap();
    let generated = codec.generate(Gender::Female, after_2013)?;
    let parsed = codec.parse(&code(&generated))?;
    assert_eq!(parsed.birth_sequence, 20);
    assert_eq!(parsed.hospital_or_birth_sequence.birth_order, "20");
    Ok(())
}
