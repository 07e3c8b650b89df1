use anyhow::Context;
use library_catalog::{
    adapters::memory,
    cli::{self, Session, SessionEnd},
    config::AppConfig,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let args = cli::parse_args();

    let config = AppConfig::load(args.config.as_deref()).context("failed to load configuration")?;

    // Initialize tracing (stderr, so the menu on stdout stays readable)
    let level = args.log_level.as_deref().unwrap_or(&config.logging.level);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("library_catalog={level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let policy = config.loan_policy();
    tracing::info!(
        max_active_loans = policy.max_active_loans,
        loan_period_days = policy.loan_period_days,
        fine_per_day = policy.fine_per_day,
        "starting library catalog"
    );

    let deps = memory::service_dependencies(policy);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build runtime")?;

    println!("\nStarting the library catalog...");

    let outcome = runtime.block_on(async {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        let shutdown = async {
            if tokio::signal::ctrl_c().await.is_err() {
                std::future::pending::<()>().await;
            }
        };

        let mut session = Session::new(&deps, stdin, std::io::stdout()).with_shutdown(shutdown);
        session.run().await
    });

    // The stdin reader sits on a blocking thread; do not wait for it.
    runtime.shutdown_background();

    let end = outcome.context("menu session failed")?;
    tracing::info!(?end, "session ended");
    if end == SessionEnd::EndOfInput {
        println!("Input closed.");
    }
    println!("\nThe library catalog has shut down. Thank you for using it.");
    Ok(())
}
