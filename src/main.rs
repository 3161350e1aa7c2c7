use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use duocarousel::cli::Cli;
use duocarousel::config::Config;
use duocarousel::logging::{init_file_tracing, init_stderr_tracing};
use duocarousel::provider::provider_from_config;
use duocarousel::runtime::CarouselRuntime;
use duocarousel::shutdown::ShutdownHandle;
use duocarousel::{headless, ui};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.headless {
        init_stderr_tracing();
    } else {
        init_file_tracing();
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;
    cli.apply(&mut config);
    config.validate().context("invalid configuration")?;

    let provider = provider_from_config(&config.source).context("failed to set up slide source")?;

    let shutdown = ShutdownHandle::new();
    shutdown.listen_for_ctrl_c();

    let (runtime, handle) = CarouselRuntime::new(
        provider,
        config.carousel.timing(),
        config.carousel.autoplay,
        shutdown.clone(),
    );
    let runtime_task = tokio::spawn(runtime.run());

    let view_result = if cli.headless {
        if let Some(secs) = cli.run_for {
            let timer = shutdown.clone();
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_secs(secs)).await;
                timer.signal();
            });
        }
        headless::run(handle, shutdown.clone()).await;
        Ok(())
    } else {
        let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
        ui::run(handle, shutdown.clone(), tick_rate).await
    };

    shutdown.signal();
    runtime_task.await.context("carousel runtime panicked")?;
    view_result.context("terminal view failed")
}
