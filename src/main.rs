use eframe::NativeOptions;
use melodyforge::config::ConfigManager;
use melodyforge::ui::MelodyForgeApp;
use std::path::PathBuf;

const CONFIG_FILE: &str = "melodyforge.toml";

fn main() -> eframe::Result<()> {
    env_logger::init();

    // Defaults, then melodyforge.toml, then MELODYFORGE__* variables
    let config_path = PathBuf::from(CONFIG_FILE);
    let config = ConfigManager::new();
    if let Err(e) = config.load_layered(Some(&config_path)) {
        log::warn!("Ignoring invalid configuration, using defaults: {}", e);
    }

    let native_options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([960.0, 600.0])
            .with_title("MelodyForge - Genetic Music Composer"),
        ..Default::default()
    };

    eframe::run_native(
        "MelodyForge",
        native_options,
        Box::new(move |cc| Ok(Box::new(MelodyForgeApp::new(cc, config, config_path)))),
    )
}
