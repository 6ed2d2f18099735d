mod backend_bridge;
mod controller;
mod ui;

use anyhow::Context;
use clap::Parser;
use client_core::load_settings;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::PharmaCodeApp;

#[derive(Parser, Debug)]
#[command(name = "pharmacode_gui", about = "Desktop client for pharmacogenomic variant predictions")]
struct StartupArgs {
    /// Prediction service base URL; overrides pharmacode.toml and environment.
    #[arg(long)]
    api_url: Option<String>,
}

const DEFAULT_LOG_FILTER: &str = "info";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install tracing subscriber: {err}"))?;
    let args = StartupArgs::parse();
    let settings = load_settings().with_api_url_override(args.api_url);

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(1024);
    backend_bridge::runtime::launch(settings, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("PharmaCode")
            .with_inner_size([1024.0, 720.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "PharmaCode",
        options,
        Box::new(|_cc| Ok(Box::new(PharmaCodeApp::new(cmd_tx, ui_rx)))),
    )
    .map_err(|err| anyhow::anyhow!("{err}"))
    .context("desktop window exited with an error")
}

#[cfg(test)]
mod tests {
    use super::StartupArgs;
    use clap::Parser;

    #[test]
    fn api_url_flag_is_optional() {
        let args = StartupArgs::try_parse_from(["pharmacode_gui"]).expect("parse");
        assert_eq!(args.api_url, None);

        let args = StartupArgs::try_parse_from(["pharmacode_gui", "--api-url", "http://example:9"])
            .expect("parse");
        assert_eq!(args.api_url.as_deref(), Some("http://example:9"));
    }
}
