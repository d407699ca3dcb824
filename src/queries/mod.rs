//! Queries module - pure aggregation views over the data context

mod aggregate;

pub use aggregate::{
    comparison, drug_category_breakdown, drug_trend, map_bubbles, weapon_category_breakdown,
    weapon_trend, CategoryTotal, ComparisonRow, MapBubble, SeizureKind, YearTotal,
};
