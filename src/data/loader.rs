//! Seizure Dataset Loader
//! Reads the per-dataset CSV extracts with Polars, concatenates them in
//! file-list order, normalizes the shared fields, and materializes typed
//! records enriched with field-office coordinates.

use polars::prelude::*;
use std::path::PathBuf;
use thiserror::Error;

use crate::data::coords;
use crate::data::records::{DataContext, DrugRecord, WeaponRecord};

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("missing input file: {}", .0.display())]
    MissingFile(PathBuf),
    #[error("failed to read {}: {source}", .path.display())]
    Malformed { path: PathBuf, source: PolarsError },
    #[error("CSV error: {0}")]
    Csv(#[from] PolarsError),
    #[error("no input files given for the {0} dataset")]
    NoFiles(&'static str),
}

/// Source column names for one dataset variant. The two extracts use
/// different names for the fiscal-year and quantity fields.
struct SourceColumns {
    area: &'static str,
    year: &'static str,
    category: &'static str,
    quantity: &'static str,
}

const DRUG_COLUMNS: SourceColumns = SourceColumns {
    area: "Area of Responsibility",
    year: "FY",
    category: "Drug Type",
    quantity: "Sum Qty (lbs)",
};

const WEAPON_COLUMNS: SourceColumns = SourceColumns {
    area: "Area of Responsibility",
    year: "Fiscal Year",
    category: "Category",
    quantity: "Quantity Seized",
};

/// Load both datasets and build the immutable data context.
pub fn load_context(
    drug_paths: &[PathBuf],
    weapon_paths: &[PathBuf],
) -> Result<DataContext, LoaderError> {
    let drugs = load_drug_dataset(drug_paths)?;
    let weapons = load_weapon_dataset(weapon_paths)?;
    Ok(DataContext::new(drugs, weapons))
}

/// Load and concatenate the drug-seizure extracts.
pub fn load_drug_dataset(paths: &[PathBuf]) -> Result<Vec<DrugRecord>, LoaderError> {
    let df = read_concat(paths, &DRUG_COLUMNS, "drug")?;
    let rows = extract_rows(&df)?;

    let records: Vec<DrugRecord> = rows
        .into_iter()
        .map(|row| DrugRecord {
            coords: coords::lookup(&row.area),
            fiscal_year: row.fiscal_year,
            area: row.area,
            drug_type: row.category,
            quantity_lbs: row.quantity,
        })
        .collect();

    log_dataset(
        "drug",
        paths.len(),
        records.len(),
        records.iter().map(|r| (r.fiscal_year, r.coords.is_none())),
    );
    Ok(records)
}

/// Load and concatenate the weapons-seizure extracts.
pub fn load_weapon_dataset(paths: &[PathBuf]) -> Result<Vec<WeaponRecord>, LoaderError> {
    let df = read_concat(paths, &WEAPON_COLUMNS, "weapons")?;
    let rows = extract_rows(&df)?;

    let records: Vec<WeaponRecord> = rows
        .into_iter()
        .map(|row| WeaponRecord {
            coords: coords::lookup(&row.area),
            fiscal_year: row.fiscal_year,
            area: row.area,
            category: row.category,
            quantity: row.quantity.round() as i64,
        })
        .collect();

    log_dataset(
        "weapons",
        paths.len(),
        records.len(),
        records.iter().map(|r| (r.fiscal_year, r.coords.is_none())),
    );
    Ok(records)
}

/// Read every file in list order and vstack into one frame with the
/// canonical column layout (all fields as strings, parsed afterwards).
fn read_concat(
    paths: &[PathBuf],
    columns: &SourceColumns,
    dataset: &'static str,
) -> Result<DataFrame, LoaderError> {
    if paths.is_empty() {
        return Err(LoaderError::NoFiles(dataset));
    }

    let mut combined: Option<DataFrame> = None;
    for path in paths {
        if !path.is_file() {
            return Err(LoaderError::MissingFile(path.clone()));
        }

        let df = LazyCsvReader::new(path)
            .with_infer_schema_length(Some(10000))
            .finish()
            .and_then(|lazy| {
                lazy.select([
                    col(columns.area).cast(DataType::String).alias("area"),
                    col(columns.year).cast(DataType::String).alias("fiscal_year"),
                    col(columns.category).cast(DataType::String).alias("category"),
                    col(columns.quantity).cast(DataType::String).alias("quantity"),
                ])
                .collect()
            })
            .map_err(|source| LoaderError::Malformed {
                path: path.clone(),
                source,
            })?;

        combined = Some(match combined {
            Some(acc) => acc.vstack(&df)?,
            None => df,
        });
    }

    combined.ok_or(LoaderError::NoFiles(dataset))
}

/// One extracted row before the dataset variant is applied.
struct RawRow {
    fiscal_year: Option<i32>,
    area: String,
    category: String,
    quantity: f64,
}

fn extract_rows(df: &DataFrame) -> Result<Vec<RawRow>, LoaderError> {
    let area_ca = df.column("area")?.as_materialized_series().str()?;
    let year_ca = df.column("fiscal_year")?.as_materialized_series().str()?;
    let category_ca = df.column("category")?.as_materialized_series().str()?;
    let quantity_ca = df.column("quantity")?.as_materialized_series().str()?;

    let mut rows = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        rows.push(RawRow {
            fiscal_year: year_ca.get(i).and_then(parse_year),
            area: coords::canonical_area(area_ca.get(i).unwrap_or("")),
            category: category_ca.get(i).unwrap_or("").trim().to_string(),
            quantity: quantity_ca.get(i).and_then(parse_quantity).unwrap_or(0.0),
        });
    }
    Ok(rows)
}

/// Coerce a fiscal-year field to an integer. Unparseable values become
/// `None` and the row is excluded from year-indexed aggregations.
fn parse_year(raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    if let Ok(year) = trimmed.parse::<i32>() {
        return Some(year);
    }
    // Some extracts carry the year as a float ("2021.0").
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v as i32)
}

/// Parse a quantity field, tolerating thousands separators.
fn parse_quantity(raw: &str) -> Option<f64> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn log_dataset(
    dataset: &str,
    file_count: usize,
    row_count: usize,
    rows: impl Iterator<Item = (Option<i32>, bool)>,
) {
    let mut null_years = 0usize;
    let mut unknown_offices = 0usize;
    for (year, unknown) in rows {
        if year.is_none() {
            null_years += 1;
        }
        if unknown {
            unknown_offices += 1;
        }
    }

    log::info!("loaded {dataset} dataset: {row_count} rows from {file_count} files");
    if null_years > 0 {
        log::warn!("{dataset} dataset: {null_years} rows with unparseable fiscal year");
    }
    if unknown_offices > 0 {
        log::warn!("{dataset} dataset: {unknown_offices} rows with unknown field office");
    }
}
