//! GUI module - User interface components

mod app;
mod control_panel;
mod results_viewer;

pub use app::SentimentApp;
pub use control_panel::{ControlPanel, ControlPanelAction, UserSettings};
pub use results_viewer::ResultsViewer;
