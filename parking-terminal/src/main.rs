use anyhow::Context;
use clap::Parser;
use parking_client::{SpotGridController, TokioTimerService};
use parking_terminal::{
    api::HttpSpotApi,
    config::Args,
    view::{spawn_stdin_reader, TerminalView},
};
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new().parse_filters(&args.log).init();

    let config = args.resolve()?;
    let api = HttpSpotApi::new(&config.base_url, config.cookie.clone(), config.request_timeout())
        .context("setting up the spot api")?;
    if config.cookie.is_none() {
        log::warn!("no session cookie configured, reservations will be refused");
    }

    let stop_token = CancellationToken::new();
    let view = TerminalView::new(
        std::io::stdout(),
        spawn_stdin_reader(),
        api.base_url().clone(),
        stop_token.clone(),
    );
    let ctrl_c = stop_token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::debug!("ctrl-c received");
            ctrl_c.cancel();
        }
    });

    log::info!("spot grid started against {}", config.base_url);
    let controller =
        SpotGridController::new(api, view, TokioTimerService::new(), config.controller);
    controller.run(stop_token).await;
    log::info!("spot grid stopped");
    Ok(())
}
