use crate::adapters::render::OutputFormat;
use crate::config::toml_config::TomlConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "isikukood")]
#[command(about = "Generate and decode Estonian personal identification codes")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format, overrides [output].format from the config file
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Generate a code for a gender and birth date
    Generate {
        /// MALE or FEMALE
        #[arg(long)]
        gender: String,

        /// Birth date as dd.mm.yyyy
        #[arg(long)]
        birth_date: String,
    },
    /// Decode an 11-digit code
    Parse {
        id: String,
    },
}

impl CliConfig {
    /// Config file (or defaults) with command-line overrides applied.
    pub fn load_settings(&self) -> Result<TomlConfig> {
        let mut settings = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        if let Some(format) = self.format {
            settings.output.format = format;
        }

        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_generate_command() {
        let cli = CliConfig::try_parse_from([
            "isikukood",
            "generate",
            "--gender",
            "MALE",
            "--birth-date",
            "03.05.1976",
        ])
        .unwrap();

        match cli.command {
            Command::Generate { gender, birth_date } => {
                assert_eq!(gender, "MALE");
                assert_eq!(birth_date, "03.05.1976");
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = CliConfig::try_parse_from(["isikukood", "parse", "37605030299", "--format", "json", "-v"])
            .unwrap();

        assert!(cli.verbose);
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(matches!(cli.command, Command::Parse { ref id } if id == "37605030299"));
    }

    #[test]
    fn test_format_flag_overrides_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[generator]\nsequence = 29\n\n[output]\nformat = \"html\"\n")
            .unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let cli = CliConfig::try_parse_from(["isikukood", "--config", path.as_str(), "--format", "text", "parse", "37605030299"])
            .unwrap();
        let settings = cli.load_settings().unwrap();

        assert_eq!(settings.output.format, OutputFormat::Text);
        assert_eq!(settings.generator.sequence, 29);
    }

    #[test]
    fn test_invalid_file_settings_are_rejected() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[generator]\nsequence = 0\n").unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let cli = CliConfig::try_parse_from(["isikukood", "--config", path.as_str(), "parse", "37605030299"]).unwrap();
        assert!(cli.load_settings().is_err());
    }
}
