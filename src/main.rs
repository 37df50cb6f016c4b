use clap::Parser;
use clinic_booking::utils::{logger, validation::Validate};
use clinic_booking::{AppointmentRegistry, CliConfig, Session};
use tokio::io::BufReader;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting clinic-booking");
    tracing::debug!("CLI config: {:?}", cli);

    // 載入並驗證配置
    let config = match cli
        .validate()
        .and_then(|_| cli.load_booking_config())
        .and_then(|config| config.validate().map(|_| config))
    {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(
                "❌ Configuration failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    tracing::info!("✅ Configuration loaded and validated successfully");

    let registry = AppointmentRegistry::with_settings(&config);
    let mut session = Session::new(registry, config.session_settings());

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    session.run(stdin, &mut stdout).await?;

    Ok(())
}
