//! Dashboard Tabs and Controls
//! Tab bar and the fiscal-year slider shared by the per-tab views.

use egui::RichText;
use std::ops::RangeInclusive;

/// The four dashboard tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardTab {
    Drugs,
    Weapons,
    Comparison,
    Map,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 4] = [
        DashboardTab::Drugs,
        DashboardTab::Weapons,
        DashboardTab::Comparison,
        DashboardTab::Map,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DashboardTab::Drugs => "💊 Drug Seizures",
            DashboardTab::Weapons => "🔫 Weapons Seizures",
            DashboardTab::Comparison => "📊 Comparison",
            DashboardTab::Map => "🗺 Map",
        }
    }
}

/// Draw the tab bar, switching `current` when a tab is clicked.
pub fn tab_bar(ui: &mut egui::Ui, current: &mut DashboardTab) {
    ui.horizontal(|ui| {
        for tab in DashboardTab::ALL {
            if ui
                .selectable_label(*current == tab, RichText::new(tab.label()).size(14.0))
                .clicked()
            {
                *current = tab;
            }
        }
    });
}

/// Integer fiscal-year slider with the distinct years shown as marks
/// underneath, the way the original slider widgets render them.
pub fn year_slider(
    ui: &mut egui::Ui,
    value: &mut i32,
    range: RangeInclusive<i32>,
    marks: &[i32],
) {
    ui.add(
        egui::Slider::new(value, range)
            .integer()
            .text("Fiscal Year"),
    );
    if !marks.is_empty() {
        ui.horizontal(|ui| {
            for year in marks {
                let text = RichText::new(year.to_string()).size(10.0);
                if *year == *value {
                    ui.label(text.strong());
                } else {
                    ui.weak(text);
                }
            }
        });
    }
}
