use anyhow::Context;
use clap::Parser;
use spokecalc::core::session::FAREWELL;
use spokecalc::utils::{logger, validation::Validate};
use spokecalc::{CliConfig, InteractiveSession};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting spokecalc");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.severity().exit_code());
    }

    let defaults = match config.load_defaults() {
        Ok(defaults) => defaults,
        Err(e) => {
            tracing::error!(
                "❌ Failed to load defaults: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.severity().exit_code());
        }
    };

    // The session blocks on stdin; keep it off the async side so Ctrl-C can still be observed.
    let session = tokio::task::spawn_blocking(move || {
        let stdin = std::io::stdin();
        InteractiveSession::new(stdin.lock(), std::io::stdout(), defaults).run()
    });

    tokio::select! {
        joined = session => {
            let summary = joined
                .context("interactive session panicked")?
                .context("interactive session failed")?;
            tracing::info!("Computed {} wheel(s)", summary.rounds - summary.failed_rounds);
        }
        signal = tokio::signal::ctrl_c() => {
            signal.context("failed to listen for Ctrl-C")?;
            tracing::info!("Interrupted by user");
            println!("\n\n{}\n", FAREWELL);
            // stdin stays blocked in the session thread; leave without waiting for it
            std::process::exit(0);
        }
    }

    Ok(())
}
