use clipfloat::clipboard::SystemClipboard;
use clipfloat::gui::ClipApp;
use clipfloat::logging;
use clipfloat::settings::Settings;
use clipfloat::theme::Theme;

use eframe::egui;

fn main() -> anyhow::Result<()> {
    let settings_path = Settings::config_path();
    let settings = Settings::load(&settings_path);
    logging::init(settings.debug_logging);
    tracing::debug!(clips = settings.clips.len(), "loaded settings");

    let initial_size = settings
        .geometry
        .map(|g| [g.width as f32, g.height as f32])
        .unwrap_or([380.0, 600.0]);
    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(initial_size)
        .with_decorations(false)
        .with_transparent(true)
        .with_resizable(false)
        .with_always_on_top();
    if let Some(g) = settings.geometry {
        viewport = viewport.with_position([g.x as f32, g.y as f32]);
    }

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "ClipFloat",
        native_options,
        Box::new(move |cc| {
            Theme::default().apply(&cc.egui_ctx);
            Box::new(ClipApp::new(
                settings,
                settings_path,
                Box::new(SystemClipboard::new()),
            ))
        }),
    ) {
        tracing::error!("gui error: {e}");
    }
    Ok(())
}
