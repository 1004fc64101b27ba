mod app;
mod effects;
mod logging;

use integra_client::AnalyzeSettings;
use integra_logging::{integra_info, integra_warn};

fn main() -> Result<(), eframe::Error> {
    logging::initialize(logging::LogDestination::Terminal);

    let settings = AnalyzeSettings::from_env().unwrap_or_else(|err| {
        integra_warn!("{err}; falling back to default settings");
        AnalyzeSettings::default()
    });
    integra_info!("Analysis endpoint: {}", settings.base_url);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([560.0, 680.0])
            .with_min_inner_size([420.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Analisador de Contratos",
        options,
        Box::new(move |_cc| Box::new(app::IntegraApp::new(settings))),
    )
}
