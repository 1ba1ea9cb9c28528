mod app;
mod ui;
mod viewport;

// Re-export library modules so that `crate::build`, `crate::state`, etc.
// resolve to the lib crate types everywhere in the binary.
pub use seisview_gui_lib::build;
pub use seisview_gui_lib::overlay;
pub use seisview_gui_lib::state;
pub use seisview_gui_lib::validation;

use app::DashboardApp;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seisview_gui=info".into()),
        )
        .init();

    // Parse --building <id> argument
    let initial_building = parse_building_arg();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("SeisView — Seismic Analysis Dashboard")
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([900.0, 560.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "seisview-gui",
        native_options,
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, initial_building)))),
    ) {
        tracing::error!("Failed to start application: {e}");
    }
}

fn parse_building_arg() -> Option<String> {
    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        if args[i] == "--building" && i + 1 < args.len() {
            let id = args[i + 1].clone();
            if shared::building_by_id(&id).is_some() {
                return Some(id);
            }
            tracing::error!("Unknown building id '{id}'; available ids:");
            for entry in shared::building_registry() {
                tracing::error!("  {}", entry.id);
            }
            break;
        }
        i += 1;
    }
    None
}
