//! GUI module - User interface components

mod app;
mod tabs;

pub use app::SeizureTrackerApp;
pub use tabs::DashboardTab;
