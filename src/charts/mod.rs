//! Charts module - Chart rendering

mod plotter;

pub use plotter::{ChartPlotter, DRUG_COLOR, WEAPON_COLOR};
