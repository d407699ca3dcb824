//! Typed Seizure Records
//! Column access is validated once at load time; everything downstream
//! works on these records instead of raw table columns.

/// One drug-seizure row. Quantity is in pounds.
#[derive(Debug, Clone, PartialEq)]
pub struct DrugRecord {
    pub fiscal_year: Option<i32>,
    pub area: String,
    pub drug_type: String,
    pub quantity_lbs: f64,
    pub coords: Option<(f64, f64)>,
}

/// One weapons-seizure row. Quantity is a unit count.
#[derive(Debug, Clone, PartialEq)]
pub struct WeaponRecord {
    pub fiscal_year: Option<i32>,
    pub area: String,
    pub category: String,
    pub quantity: i64,
    pub coords: Option<(f64, f64)>,
}

/// Immutable owner of both loaded datasets. Built once at startup and
/// passed by shared reference into every aggregation call.
#[derive(Debug, Clone, Default)]
pub struct DataContext {
    pub drugs: Vec<DrugRecord>,
    pub weapons: Vec<WeaponRecord>,
}

impl DataContext {
    pub fn new(drugs: Vec<DrugRecord>, weapons: Vec<WeaponRecord>) -> Self {
        Self { drugs, weapons }
    }

    /// Distinct non-null fiscal years in the drug table, ascending.
    pub fn drug_years(&self) -> Vec<i32> {
        Self::distinct_years(self.drugs.iter().map(|r| r.fiscal_year))
    }

    /// Distinct non-null fiscal years in the weapons table, ascending.
    pub fn weapon_years(&self) -> Vec<i32> {
        Self::distinct_years(self.weapons.iter().map(|r| r.fiscal_year))
    }

    fn distinct_years(years: impl Iterator<Item = Option<i32>>) -> Vec<i32> {
        let mut distinct: Vec<i32> = years.flatten().collect();
        distinct.sort_unstable();
        distinct.dedup();
        distinct
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_years_sorted_and_deduped() {
        let ctx = DataContext::new(
            vec![
                DrugRecord {
                    fiscal_year: Some(2022),
                    area: "Laredo Field Office".into(),
                    drug_type: "Cocaine".into(),
                    quantity_lbs: 1.0,
                    coords: None,
                },
                DrugRecord {
                    fiscal_year: Some(2020),
                    area: "Laredo Field Office".into(),
                    drug_type: "Heroin".into(),
                    quantity_lbs: 2.0,
                    coords: None,
                },
                DrugRecord {
                    fiscal_year: Some(2022),
                    area: "Miami Field Office".into(),
                    drug_type: "Cocaine".into(),
                    quantity_lbs: 3.0,
                    coords: None,
                },
                DrugRecord {
                    fiscal_year: None,
                    area: "Miami Field Office".into(),
                    drug_type: "Cocaine".into(),
                    quantity_lbs: 4.0,
                    coords: None,
                },
            ],
            Vec::new(),
        );

        assert_eq!(ctx.drug_years(), vec![2020, 2022]);
        assert!(ctx.weapon_years().is_empty());
    }
}
