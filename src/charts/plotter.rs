//! Chart Plotter Module
//! Draws the dashboard visualizations using egui_plot: category bars,
//! year trend lines, grouped comparison bars and the seizure map.

use egui::Color32;
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints, Points};

use crate::queries::{CategoryTotal, ComparisonRow, MapBubble, SeizureKind, YearTotal};

pub const DRUG_COLOR: Color32 = Color32::from_rgb(52, 152, 219); // Blue
pub const WEAPON_COLOR: Color32 = Color32::from_rgb(231, 76, 60); // Red

const CHART_HEIGHT: f32 = 300.0;

/// Map bubble radius range in points.
const BUBBLE_MIN_RADIUS: f32 = 3.0;
const BUBBLE_MAX_RADIUS: f32 = 18.0;

/// Draws the dashboard charts.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Bar chart of summed quantity per category, one bar per category
    /// in result order.
    pub fn draw_category_bar(
        ui: &mut egui::Ui,
        id: &str,
        rows: &[CategoryTotal],
        value_label: &str,
        color: Color32,
    ) {
        let labels: Vec<String> = rows.iter().map(|r| r.category.clone()).collect();
        let bars: Vec<Bar> = rows
            .iter()
            .enumerate()
            .map(|(i, r)| Bar::new(i as f64, r.total).width(0.6).fill(color))
            .collect();

        Plot::new(format!("category_bar_{id}"))
            .height(CHART_HEIGHT)
            .allow_scroll(false)
            .y_axis_label(value_label.to_string())
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round() as usize;
                if (mark.value - idx as f64).abs() < 1e-6 && idx < labels.len() {
                    labels[idx].clone()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars));
            });
    }

    /// Trend line of summed quantity per fiscal year, with point markers.
    pub fn draw_trend_line(
        ui: &mut egui::Ui,
        id: &str,
        rows: &[YearTotal],
        value_label: &str,
        color: Color32,
    ) {
        let points: Vec<[f64; 2]> = rows
            .iter()
            .map(|r| [r.fiscal_year as f64, r.total])
            .collect();

        Plot::new(format!("trend_{id}"))
            .height(CHART_HEIGHT)
            .allow_scroll(false)
            .x_axis_label("Fiscal Year")
            .y_axis_label(value_label.to_string())
            .x_axis_formatter(|mark, _range| {
                let year = mark.value.round();
                if (mark.value - year).abs() < 1e-6 {
                    format!("{year:.0}")
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(PlotPoints::from_iter(points.iter().copied()))
                        .color(color)
                        .width(2.0),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from_iter(points.iter().copied()))
                        .radius(4.0)
                        .color(color),
                );
            });
    }

    /// Grouped bars per fiscal year: drug pounds next to weapon counts.
    pub fn draw_comparison_bars(ui: &mut egui::Ui, rows: &[ComparisonRow]) {
        let drug_bars: Vec<Bar> = rows
            .iter()
            .map(|r| {
                Bar::new(r.fiscal_year as f64 - 0.2, r.drug_lbs)
                    .width(0.35)
                    .fill(DRUG_COLOR)
            })
            .collect();
        let weapon_bars: Vec<Bar> = rows
            .iter()
            .map(|r| {
                Bar::new(r.fiscal_year as f64 + 0.2, r.weapon_count as f64)
                    .width(0.35)
                    .fill(WEAPON_COLOR)
            })
            .collect();

        Plot::new("comparison_bars")
            .height(CHART_HEIGHT)
            .allow_scroll(false)
            .legend(Legend::default())
            .x_axis_label("Fiscal Year")
            .y_axis_label("Total")
            .x_axis_formatter(|mark, _range| {
                let year = mark.value.round();
                if (mark.value - year).abs() < 1e-6 {
                    format!("{year:.0}")
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(drug_bars).name("Drugs (lbs)"));
                plot_ui.bar_chart(BarChart::new(weapon_bars).name("Weapons (count)"));
            });
    }

    /// Geographic bubble chart: longitude on x, latitude on y, bubble
    /// radius scaled by summed quantity within each dataset.
    pub fn draw_map(ui: &mut egui::Ui, bubbles: &[MapBubble]) {
        let max_drug = Self::max_quantity(bubbles, SeizureKind::Drugs);
        let max_weapon = Self::max_quantity(bubbles, SeizureKind::Weapons);

        Plot::new("seizure_map")
            .height(420.0)
            .allow_scroll(false)
            .legend(Legend::default())
            .data_aspect(1.0)
            .x_axis_label("Longitude")
            .y_axis_label("Latitude")
            .show(ui, |plot_ui| {
                for bubble in bubbles {
                    let (color, max) = match bubble.kind {
                        SeizureKind::Drugs => (DRUG_COLOR, max_drug),
                        SeizureKind::Weapons => (WEAPON_COLOR, max_weapon),
                    };
                    plot_ui.points(
                        Points::new(PlotPoints::from(vec![[bubble.lon, bubble.lat]]))
                            .radius(Self::bubble_radius(bubble.quantity, max))
                            .color(color.gamma_multiply(0.8))
                            .name(bubble.kind.label()),
                    );
                }
            });
    }

    /// Scale a quantity into a bubble radius. Bubble area tracks the
    /// quantity, so the radius follows the square root.
    fn bubble_radius(quantity: f64, max: f64) -> f32 {
        if max <= 0.0 || quantity <= 0.0 {
            return BUBBLE_MIN_RADIUS;
        }
        let scaled = (quantity / max).sqrt() as f32;
        BUBBLE_MIN_RADIUS + scaled * (BUBBLE_MAX_RADIUS - BUBBLE_MIN_RADIUS)
    }

    fn max_quantity(bubbles: &[MapBubble], kind: SeizureKind) -> f64 {
        bubbles
            .iter()
            .filter(|b| b.kind == kind)
            .map(|b| b.quantity)
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bubble_radius_scales_with_quantity() {
        assert_eq!(ChartPlotter::bubble_radius(0.0, 100.0), BUBBLE_MIN_RADIUS);
        assert_eq!(ChartPlotter::bubble_radius(100.0, 100.0), BUBBLE_MAX_RADIUS);
        let mid = ChartPlotter::bubble_radius(25.0, 100.0);
        assert!(mid > BUBBLE_MIN_RADIUS && mid < BUBBLE_MAX_RADIUS);
    }

    #[test]
    fn bubble_radius_handles_empty_selection() {
        assert_eq!(ChartPlotter::bubble_radius(5.0, 0.0), BUBBLE_MIN_RADIUS);
    }
}
