use abuseip_check::utils::{banner, logger};
use abuseip_check::{config::cli::prompt_input_path, AbuseIpDbClient, CliConfig, LocalStorage, TargetProcessor};
use anyhow::Context;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    // The key is checked before anything else happens.
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration error: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };
    tracing::debug!("Resolved config: {:?}", config);

    if !cli.no_banner {
        banner::print_banner();
    }

    let input_path = match cli.input.clone() {
        Some(path) => path.trim().to_string(),
        None => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            prompt_input_path(&mut stdin.lock(), &mut stdout.lock())
                .context("failed to read the input path")?
        }
    };

    let storage = LocalStorage::new(".");
    let client = AbuseIpDbClient::new(&config);
    let processor = TargetProcessor::new(storage, client, config.output_path.clone());

    match processor.run(&input_path).await {
        Ok(report) => {
            tracing::info!(
                "✅ Checked {} of {} targets ({} failed, {} skipped)",
                report.checked,
                report.targets_read,
                report.failed,
                report.skipped
            );
            println!("\nResults saved to: {}", report.output_path);
        }
        Err(e) => {
            tracing::error!("❌ Run aborted: {} (Severity: {:?})", e, e.severity());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
