mod app;
mod convert;
mod messages;
mod panels;
mod states;
mod worker;

use safescan_core::config::ClientConfig;

/// Optional config file read at startup.
const CONFIG_ENV_VAR: &str = "SAFESCAN_CONFIG";

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = load_startup_config();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([720.0, 480.0])
            .with_drag_and_drop(true)
            .with_title("SafeScan"),
        ..Default::default()
    };

    eframe::run_native(
        "SafeScan",
        options,
        Box::new(|cc| Ok(Box::new(app::SafeScanApp::new(&cc.egui_ctx, config)))),
    )
}

fn load_startup_config() -> ClientConfig {
    let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
        return ClientConfig::default();
    };
    let path = std::path::PathBuf::from(path);
    match ClientConfig::load(&path) {
        Ok(config) => {
            tracing::info!(path = %path.display(), "Loaded config");
            config
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Falling back to default config");
            ClientConfig::default()
        }
    }
}
