use clap::Parser;
use std::io::Write;
use uri_encoding::utils::error::ErrorSeverity;
use uri_encoding::utils::{logger, validation::Validate};
use uri_encoding::{CliConfig, CommandRunner, TomlConfig, UriError};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    // 載入並驗證配置檔
    let file_config = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            match TomlConfig::from_file(path).and_then(|c| c.validate().map(|_| c)) {
                Ok(c) => Some(c),
                Err(e) => exit_with(&e),
            }
        }
        None => None,
    };

    let runner = CommandRunner::new(file_config);
    let format = runner.output_format(config.format);

    let rendered = match runner
        .run(&config.command)
        .and_then(|output| output.render(format))
    {
        Ok(rendered) => rendered,
        Err(e) => exit_with(&e),
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", rendered)?;
    Ok(())
}

fn exit_with(e: &UriError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::debug!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::Medium | ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
