use mission_control::clock::SystemClock;
use mission_control::dashboard::render::{render, render_all_text};
use mission_control::dashboard::{DataProvider, ViewMode};
use mission_control::gui::DashboardApp;
use mission_control::logging;
use mission_control::settings::Settings;

use eframe::egui;
use std::path::PathBuf;

const SETTINGS_FILE: &str = "settings.json";

enum PrintRequest {
    All,
    One(ViewMode),
}

/// `--print` dumps every view, `--print=<view>` a single one.
fn print_request(args: &[String]) -> anyhow::Result<Option<PrintRequest>> {
    for arg in args {
        if arg == "--print" {
            return Ok(Some(PrintRequest::All));
        }
        if let Some(key) = arg.strip_prefix("--print=") {
            let view = ViewMode::from_key(key)
                .ok_or_else(|| anyhow::anyhow!("unknown view '{key}'"))?;
            return Ok(Some(PrintRequest::One(view)));
        }
    }
    Ok(None)
}

fn main() -> anyhow::Result<()> {
    let settings = Settings::load(SETTINGS_FILE)?;
    logging::init(
        settings.debug_logging,
        settings.log_file.as_ref().map(PathBuf::from),
    );
    let provider = DataProvider::from_settings(&settings);

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Some(request) = print_request(&args)? {
        let text = match request {
            PrintRequest::One(view) => render(view, provider.snapshot(), &SystemClock).to_string(),
            PrintRequest::All => render_all_text(provider.snapshot(), &SystemClock),
        };
        print!("{text}");
        return Ok(());
    }

    let (width, height) = settings.window_size.unwrap_or((1280.0, 860.0));
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Mission Control")
            .with_inner_size([width, height])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    tracing::info!(view = settings.initial_view().key(), "starting dashboard");
    eframe::run_native(
        "Mission Control",
        native_options,
        Box::new(move |cc| {
            Box::new(DashboardApp::new(
                &cc.egui_ctx,
                settings,
                provider,
                Box::new(SystemClock),
            ))
        }),
    )
    .map_err(|e| anyhow::anyhow!("failed to run dashboard window: {e}"))
}
