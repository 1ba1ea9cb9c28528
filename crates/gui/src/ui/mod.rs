pub mod input_panel;
pub mod registry_panel;
pub mod results_panel;
pub mod settings_window;
pub mod status_bar;
pub mod toolbar;
