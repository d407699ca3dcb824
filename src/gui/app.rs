//! Seizure Tracker Main Application
//! Four-tab dashboard window. Each slider is bound to a pure query
//! function; results are cached per selected year so an unchanged
//! slider never recomputes.

use egui::{CentralPanel, RichText, TopBottomPanel};

use crate::charts::{ChartPlotter, DRUG_COLOR, WEAPON_COLOR};
use crate::data::DataContext;
use crate::gui::tabs::{self, DashboardTab};
use crate::queries::{self, CategoryTotal, ComparisonRow, MapBubble, YearTotal};

/// The map slider keeps this fixed range regardless of the data's
/// actual year bounds (a configured range, not derived).
const MAP_YEAR_MIN: i32 = 2019;
const MAP_YEAR_MAX: i32 = 2025;

/// Cached result of a year-parameterized view, recomputed only when the
/// bound slider moves to a different year.
struct ViewCache<T> {
    year: Option<i32>,
    rows: T,
}

impl<T: Default> ViewCache<T> {
    fn new() -> Self {
        Self {
            year: None,
            rows: T::default(),
        }
    }

    fn get(&mut self, year: i32, compute: impl FnOnce(i32) -> T) -> &T {
        if self.year != Some(year) {
            self.rows = compute(year);
            self.year = Some(year);
        }
        &self.rows
    }
}

/// Main dashboard window.
pub struct SeizureTrackerApp {
    data: DataContext,
    tab: DashboardTab,

    drug_year: i32,
    weapon_year: i32,
    map_year: i32,
    drug_years: Vec<i32>,
    weapon_years: Vec<i32>,
    map_years: Vec<i32>,

    // Year-independent views, computed once at startup.
    drug_trend: Vec<YearTotal>,
    weapon_trend: Vec<YearTotal>,
    comparison: Vec<ComparisonRow>,

    // Slider-bound views.
    drug_breakdown: ViewCache<Vec<CategoryTotal>>,
    weapon_breakdown: ViewCache<Vec<CategoryTotal>>,
    map_view: ViewCache<Vec<MapBubble>>,
}

impl SeizureTrackerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, data: DataContext) -> Self {
        let drug_years = data.drug_years();
        let weapon_years = data.weapon_years();

        Self {
            tab: DashboardTab::Drugs,
            drug_year: drug_years.last().copied().unwrap_or(MAP_YEAR_MAX),
            weapon_year: weapon_years.last().copied().unwrap_or(MAP_YEAR_MAX),
            map_year: MAP_YEAR_MAX,
            map_years: (MAP_YEAR_MIN..=MAP_YEAR_MAX).collect(),
            drug_trend: queries::drug_trend(&data),
            weapon_trend: queries::weapon_trend(&data),
            comparison: queries::comparison(&data),
            drug_breakdown: ViewCache::new(),
            weapon_breakdown: ViewCache::new(),
            map_view: ViewCache::new(),
            drug_years,
            weapon_years,
            data,
        }
    }

    fn show_drugs_tab(&mut self, ui: &mut egui::Ui) {
        tabs::year_slider(
            ui,
            &mut self.drug_year,
            year_range(&self.drug_years),
            &self.drug_years,
        );
        ui.add_space(8.0);

        ui.label(
            RichText::new(format!("Drug Seizures in {}", self.drug_year))
                .size(16.0)
                .strong(),
        );
        let Self {
            data,
            drug_breakdown,
            drug_year,
            ..
        } = self;
        let rows = drug_breakdown.get(*drug_year, |y| queries::drug_category_breakdown(data, y));
        ChartPlotter::draw_category_bar(ui, "drugs", rows, "Sum Qty (lbs)", DRUG_COLOR);

        ui.add_space(12.0);
        ui.label(RichText::new("Drug Seizures Over Time").size(16.0).strong());
        ChartPlotter::draw_trend_line(ui, "drugs", &self.drug_trend, "Sum Qty (lbs)", DRUG_COLOR);
    }

    fn show_weapons_tab(&mut self, ui: &mut egui::Ui) {
        tabs::year_slider(
            ui,
            &mut self.weapon_year,
            year_range(&self.weapon_years),
            &self.weapon_years,
        );
        ui.add_space(8.0);

        ui.label(
            RichText::new(format!("Weapons Seized in {}", self.weapon_year))
                .size(16.0)
                .strong(),
        );
        let Self {
            data,
            weapon_breakdown,
            weapon_year,
            ..
        } = self;
        let rows =
            weapon_breakdown.get(*weapon_year, |y| queries::weapon_category_breakdown(data, y));
        ChartPlotter::draw_category_bar(ui, "weapons", rows, "Quantity Seized", WEAPON_COLOR);

        ui.add_space(12.0);
        ui.label(
            RichText::new("Weapons Seizures Over Time")
                .size(16.0)
                .strong(),
        );
        ChartPlotter::draw_trend_line(
            ui,
            "weapons",
            &self.weapon_trend,
            "Quantity Seized",
            WEAPON_COLOR,
        );
    }

    fn show_comparison_tab(&mut self, ui: &mut egui::Ui) {
        ui.label(
            RichText::new("Drugs vs Weapons Seizures")
                .size(16.0)
                .strong(),
        );
        ChartPlotter::draw_comparison_bars(ui, &self.comparison);
    }

    fn show_map_tab(&mut self, ui: &mut egui::Ui) {
        tabs::year_slider(
            ui,
            &mut self.map_year,
            MAP_YEAR_MIN..=MAP_YEAR_MAX,
            &self.map_years,
        );
        ui.add_space(8.0);

        ui.label(
            RichText::new(format!(
                "Top Regions for Drug & Weapon Seizures in {}",
                self.map_year
            ))
            .size(16.0)
            .strong(),
        );
        let Self {
            data,
            map_view,
            map_year,
            ..
        } = self;
        let bubbles = map_view.get(*map_year, |y| queries::map_bubbles(data, y));
        ChartPlotter::draw_map(ui, bubbles);
    }
}

impl eframe::App for SeizureTrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.heading("CBP Contraband Seizure Tracker");
            ui.label("Explore trends in drug and weapons seizures across U.S. borders");
            ui.add_space(6.0);
            tabs::tab_bar(ui, &mut self.tab);
            ui.add_space(4.0);
        });

        CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match self.tab {
                DashboardTab::Drugs => self.show_drugs_tab(ui),
                DashboardTab::Weapons => self.show_weapons_tab(ui),
                DashboardTab::Comparison => self.show_comparison_tab(ui),
                DashboardTab::Map => self.show_map_tab(ui),
            });
        });
    }
}

/// Slider range for a dataset's distinct years. An empty year list
/// falls back to the configured map range.
fn year_range(years: &[i32]) -> std::ops::RangeInclusive<i32> {
    match (years.first(), years.last()) {
        (Some(&min), Some(&max)) => min..=max,
        _ => MAP_YEAR_MIN..=MAP_YEAR_MAX,
    }
}
