use anyhow::Context;
use clap::Parser;
use isikukood::utils::error::IdCodeError;
use isikukood::utils::{logger, validation};
use isikukood::{CliConfig, Command, IdCodec, TomlConfig};
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    match run(&cli) {
        Ok(output) => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", output).context("failed to write output")?;
            Ok(())
        }
        Err(e) => {
            tracing::debug!("{} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            std::process::exit(e.category().exit_code());
        }
    }
}

fn run(cli: &CliConfig) -> Result<String, IdCodeError> {
    // 載入配置
    let TomlConfig { generator, output } = cli.load_settings()?;
    let codec = IdCodec::new(generator);

    match &cli.command {
        Command::Generate { gender, birth_date } => {
            let gender = validation::validate_gender(gender)?;
            let birth_date = validation::validate_birth_date(birth_date)?;
            let code = codec.generate(gender, birth_date)?;
            tracing::info!("Generated personal code for {} born {}", gender, birth_date);
            isikukood::adapters::render::render_generated(&code, output.format)
        }
        Command::Parse { id } => {
            let code = validation::validate_code(id)?;
            let parsed = codec.parse(&code)?;
            if !parsed.checksum_validation.is_valid {
                tracing::warn!("Checksum of {} does not match", code);
            }
            isikukood::adapters::render::render_parsed(&code, &parsed, output.format)
        }
    }
}
