pub mod analysis;
pub mod scene;
pub mod settings;
pub mod upload;

pub use analysis::AnalysisState;
pub use scene::SceneState;
pub use settings::AppSettings;
pub use upload::{register_upload, UploadError, UploadedModel};

/// Panel visibility flags
pub struct PanelVisibility {
    pub registry: bool,
    pub inputs: bool,
    pub results: bool,
}

impl Default for PanelVisibility {
    fn default() -> Self {
        Self {
            registry: true,
            inputs: true,
            results: true,
        }
    }
}

/// Combined application state
pub struct AppState {
    pub scene: SceneState,
    pub analysis: AnalysisState,
    /// Last accepted upload, if any
    pub upload: Option<UploadedModel>,
    pub panels: PanelVisibility,
    pub settings: AppSettings,
    /// Show settings window
    pub show_settings_window: bool,
    /// Transient status line message
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            scene: SceneState::default(),
            analysis: AnalysisState::default(),
            upload: None,
            panels: PanelVisibility::default(),
            settings: AppSettings::load(),
            show_settings_window: false,
            status_message: None,
        }
    }
}
