//! CBP Contraband Seizure Tracker
//!
//! Loads the drug and weapons seizure extracts, then opens the
//! interactive dashboard. A failed load exits before any UI appears.

mod charts;
mod data;
mod gui;
mod queries;

use anyhow::Context;
use eframe::egui;
use std::path::PathBuf;

use gui::SeizureTrackerApp;

const DRUG_FILES: &[&str] = &[
    "cbp_drug_seizures_fy19_22.csv",
    "cbp_drug_seizures_fy20_23.csv",
    "cbp_drug_seizures_fy21_24.csv",
    "cbp_drug_seizures_fy22_25.csv",
];

const WEAPON_FILES: &[&str] = &[
    "cbp_weapons_seizures_fy19_22.csv",
    "cbp_weapons_seizures_fy20_23.csv",
    "cbp_weapons_seizures_fy21_24.csv",
    "cbp_weapons_seizures_fy22_25.csv",
];

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let drug_paths: Vec<PathBuf> = DRUG_FILES.iter().map(PathBuf::from).collect();
    let weapon_paths: Vec<PathBuf> = WEAPON_FILES.iter().map(PathBuf::from).collect();

    let context = data::load_context(&drug_paths, &weapon_paths)
        .context("loading seizure datasets")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_min_inner_size([900.0, 650.0])
            .with_title("CBP Contraband Seizure Tracker"),
        ..Default::default()
    };

    eframe::run_native(
        "CBP Contraband Seizure Tracker",
        options,
        Box::new(move |cc| Ok(Box::new(SeizureTrackerApp::new(cc, context)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run dashboard: {e}"))
}
