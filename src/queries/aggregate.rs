//! Aggregation Core
//! Pure query functions over the loaded data context. Every view is a
//! group-and-sum; results come out in the grouping key's natural order
//! and the chart layer decides display order.

use std::collections::BTreeMap;

use crate::data::DataContext;

/// Sum of a quantity for one categorical label.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Sum of a quantity for one fiscal year.
#[derive(Debug, Clone, PartialEq)]
pub struct YearTotal {
    pub fiscal_year: i32,
    pub total: f64,
}

/// Drug and weapons totals for one fiscal year. Years present in only
/// one dataset carry 0 on the other side.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub fiscal_year: i32,
    pub drug_lbs: f64,
    pub weapon_count: i64,
}

/// Which dataset a map bubble came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeizureKind {
    Drugs,
    Weapons,
}

impl SeizureKind {
    pub fn label(self) -> &'static str {
        match self {
            SeizureKind::Drugs => "Drugs",
            SeizureKind::Weapons => "Weapons",
        }
    }
}

/// One bubble on the map: a field office with its summed quantity for
/// the selected year. Rows without coordinates never reach this type.
#[derive(Debug, Clone, PartialEq)]
pub struct MapBubble {
    pub area: String,
    pub lat: f64,
    pub lon: f64,
    pub kind: SeizureKind,
    pub quantity: f64,
}

/// Pounds seized per drug type in the selected fiscal year.
pub fn drug_category_breakdown(ctx: &DataContext, year: i32) -> Vec<CategoryTotal> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for record in &ctx.drugs {
        if record.fiscal_year == Some(year) {
            *totals.entry(record.drug_type.as_str()).or_insert(0.0) += record.quantity_lbs;
        }
    }
    collect_category_totals(totals)
}

/// Weapons seized per category in the selected fiscal year.
pub fn weapon_category_breakdown(ctx: &DataContext, year: i32) -> Vec<CategoryTotal> {
    let mut totals: BTreeMap<&str, i64> = BTreeMap::new();
    for record in &ctx.weapons {
        if record.fiscal_year == Some(year) {
            *totals.entry(record.category.as_str()).or_insert(0) += record.quantity;
        }
    }
    totals
        .into_iter()
        .map(|(category, total)| CategoryTotal {
            category: category.to_string(),
            total: total as f64,
        })
        .collect()
}

/// Pounds seized per fiscal year across the full time range.
pub fn drug_trend(ctx: &DataContext) -> Vec<YearTotal> {
    let mut totals: BTreeMap<i32, f64> = BTreeMap::new();
    for record in &ctx.drugs {
        if let Some(year) = record.fiscal_year {
            *totals.entry(year).or_insert(0.0) += record.quantity_lbs;
        }
    }
    collect_year_totals(totals)
}

/// Weapons seized per fiscal year across the full time range.
pub fn weapon_trend(ctx: &DataContext) -> Vec<YearTotal> {
    let mut totals: BTreeMap<i32, i64> = BTreeMap::new();
    for record in &ctx.weapons {
        if let Some(year) = record.fiscal_year {
            *totals.entry(year).or_insert(0) += record.quantity;
        }
    }
    totals
        .into_iter()
        .map(|(fiscal_year, total)| YearTotal {
            fiscal_year,
            total: total as f64,
        })
        .collect()
}

/// Yearly totals of both datasets, outer-joined on fiscal year. The
/// merge key is the union of years seen in either dataset.
pub fn comparison(ctx: &DataContext) -> Vec<ComparisonRow> {
    let mut rows: BTreeMap<i32, (f64, i64)> = BTreeMap::new();
    for total in drug_trend(ctx) {
        rows.entry(total.fiscal_year).or_insert((0.0, 0)).0 += total.total;
    }
    for record in &ctx.weapons {
        if let Some(year) = record.fiscal_year {
            rows.entry(year).or_insert((0.0, 0)).1 += record.quantity;
        }
    }
    rows.into_iter()
        .map(|(fiscal_year, (drug_lbs, weapon_count))| ComparisonRow {
            fiscal_year,
            drug_lbs,
            weapon_count,
        })
        .collect()
}

/// Per-office bubbles for the selected year, drug bubbles first, then
/// weapons. Rows with unknown field offices are dropped here and only
/// here.
pub fn map_bubbles(ctx: &DataContext, year: i32) -> Vec<MapBubble> {
    let mut drug_totals: BTreeMap<&str, ((f64, f64), f64)> = BTreeMap::new();
    for record in &ctx.drugs {
        if record.fiscal_year != Some(year) {
            continue;
        }
        if let Some(coords) = record.coords {
            drug_totals.entry(record.area.as_str()).or_insert((coords, 0.0)).1 +=
                record.quantity_lbs;
        }
    }

    let mut weapon_totals: BTreeMap<&str, ((f64, f64), i64)> = BTreeMap::new();
    for record in &ctx.weapons {
        if record.fiscal_year != Some(year) {
            continue;
        }
        if let Some(coords) = record.coords {
            weapon_totals.entry(record.area.as_str()).or_insert((coords, 0)).1 +=
                record.quantity;
        }
    }

    let mut bubbles: Vec<MapBubble> = drug_totals
        .into_iter()
        .map(|(area, ((lat, lon), quantity))| MapBubble {
            area: area.to_string(),
            lat,
            lon,
            kind: SeizureKind::Drugs,
            quantity,
        })
        .collect();
    bubbles.extend(
        weapon_totals
            .into_iter()
            .map(|(area, ((lat, lon), quantity))| MapBubble {
                area: area.to_string(),
                lat,
                lon,
                kind: SeizureKind::Weapons,
                quantity: quantity as f64,
            }),
    );
    bubbles
}

fn collect_category_totals(totals: BTreeMap<&str, f64>) -> Vec<CategoryTotal> {
    totals
        .into_iter()
        .map(|(category, total)| CategoryTotal {
            category: category.to_string(),
            total,
        })
        .collect()
}

fn collect_year_totals(totals: BTreeMap<i32, f64>) -> Vec<YearTotal> {
    totals
        .into_iter()
        .map(|(fiscal_year, total)| YearTotal { fiscal_year, total })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DrugRecord, WeaponRecord};

    fn drug(year: Option<i32>, area: &str, drug_type: &str, lbs: f64) -> DrugRecord {
        DrugRecord {
            fiscal_year: year,
            area: area.to_string(),
            drug_type: drug_type.to_string(),
            quantity_lbs: lbs,
            coords: crate::data::coords::lookup(area),
        }
    }

    fn weapon(year: Option<i32>, area: &str, category: &str, count: i64) -> WeaponRecord {
        WeaponRecord {
            fiscal_year: year,
            area: area.to_string(),
            category: category.to_string(),
            quantity: count,
            coords: crate::data::coords::lookup(area),
        }
    }

    fn sample_ctx() -> DataContext {
        DataContext::new(
            vec![
                drug(Some(2022), "San Diego Field Office", "Cocaine", 10.0),
                drug(Some(2022), "Laredo Field Office", "Cocaine", 15.0),
                drug(Some(2022), "Laredo Field Office", "Heroin", 4.0),
                drug(Some(2021), "Laredo Field Office", "Cocaine", 7.0),
                drug(None, "Laredo Field Office", "Cocaine", 99.0),
            ],
            vec![
                weapon(Some(2022), "Tucson Field Office", "Rifles", 5),
                weapon(Some(2022), "Tucson Field Office", "Rifles", 3),
                weapon(Some(2023), "Tucson Field Office", "Handguns", 2),
            ],
        )
    }

    #[test]
    fn category_breakdown_sums_within_year() {
        let rows = drug_category_breakdown(&sample_ctx(), 2022);
        assert_eq!(
            rows,
            vec![
                CategoryTotal {
                    category: "Cocaine".into(),
                    total: 25.0
                },
                CategoryTotal {
                    category: "Heroin".into(),
                    total: 4.0
                },
            ]
        );
    }

    #[test]
    fn category_breakdown_end_to_end_example() {
        let ctx = DataContext::new(
            vec![
                drug(Some(2022), "San Diego Field Office", "Cocaine", 10.0),
                drug(Some(2022), "Laredo Field Office", "Cocaine", 5.0),
            ],
            Vec::new(),
        );
        let rows = drug_category_breakdown(&ctx, 2022);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category, "Cocaine");
        assert_eq!(rows[0].total, 15.0);
    }

    #[test]
    fn weapon_breakdown_merges_duplicate_categories() {
        let rows = weapon_category_breakdown(&sample_ctx(), 2022);
        assert_eq!(
            rows,
            vec![CategoryTotal {
                category: "Rifles".into(),
                total: 8.0
            }]
        );
    }

    #[test]
    fn trend_has_one_row_per_distinct_year() {
        let rows = drug_trend(&sample_ctx());
        assert_eq!(
            rows,
            vec![
                YearTotal {
                    fiscal_year: 2021,
                    total: 7.0
                },
                YearTotal {
                    fiscal_year: 2022,
                    total: 29.0
                },
            ]
        );
    }

    #[test]
    fn null_year_rows_are_excluded_from_year_views() {
        let ctx = sample_ctx();
        let total: f64 = drug_trend(&ctx).iter().map(|r| r.total).sum();
        // The 99-lb null-year row contributes nowhere.
        assert_eq!(total, 36.0);
        assert!(drug_category_breakdown(&ctx, 2021)
            .iter()
            .all(|r| r.total != 99.0));
    }

    #[test]
    fn comparison_outer_joins_with_zero_fill() {
        let rows = comparison(&sample_ctx());
        assert_eq!(
            rows,
            vec![
                ComparisonRow {
                    fiscal_year: 2021,
                    drug_lbs: 7.0,
                    weapon_count: 0
                },
                ComparisonRow {
                    fiscal_year: 2022,
                    drug_lbs: 29.0,
                    weapon_count: 8
                },
                ComparisonRow {
                    fiscal_year: 2023,
                    drug_lbs: 0.0,
                    weapon_count: 2
                },
            ]
        );
    }

    #[test]
    fn map_bubbles_sum_per_office_and_tag_kind() {
        let bubbles = map_bubbles(&sample_ctx(), 2022);
        assert_eq!(bubbles.len(), 3);
        assert_eq!(bubbles[0].area, "Laredo Field Office");
        assert_eq!(bubbles[0].kind, SeizureKind::Drugs);
        assert_eq!(bubbles[0].quantity, 19.0);
        assert_eq!(bubbles[1].area, "San Diego Field Office");
        assert_eq!(bubbles[2].kind, SeizureKind::Weapons);
        assert_eq!(bubbles[2].quantity, 8.0);
    }

    #[test]
    fn map_bubbles_drop_unknown_offices() {
        let ctx = DataContext::new(
            vec![
                drug(Some(2022), "Anchorage Field Office", "Cocaine", 50.0),
                drug(Some(2022), "Miami Field Office", "Cocaine", 1.0),
            ],
            Vec::new(),
        );
        let bubbles = map_bubbles(&ctx, 2022);
        assert_eq!(bubbles.len(), 1);
        assert_eq!(bubbles[0].area, "Miami Field Office");

        // The unknown office still counts everywhere else.
        let breakdown = drug_category_breakdown(&ctx, 2022);
        assert_eq!(breakdown[0].total, 51.0);
    }

    #[test]
    fn out_of_range_year_yields_empty_results() {
        let ctx = sample_ctx();
        assert!(drug_category_breakdown(&ctx, 1999).is_empty());
        assert!(weapon_category_breakdown(&ctx, 1999).is_empty());
        assert!(map_bubbles(&ctx, 1999).is_empty());
    }

    #[test]
    fn queries_are_idempotent() {
        let ctx = sample_ctx();
        assert_eq!(
            drug_category_breakdown(&ctx, 2022),
            drug_category_breakdown(&ctx, 2022)
        );
        assert_eq!(drug_trend(&ctx), drug_trend(&ctx));
        assert_eq!(weapon_trend(&ctx), weapon_trend(&ctx));
        assert_eq!(comparison(&ctx), comparison(&ctx));
        assert_eq!(map_bubbles(&ctx, 2022), map_bubbles(&ctx, 2022));
    }
}
