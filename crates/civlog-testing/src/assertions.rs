//! Custom assertions over the CLI's JSON output.
//!
//! - Record counts from `show`
//! - Page layout and totals from `totals`

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert that `show --format json` output holds the expected number of records.
pub fn assert_record_count(json: &Value, expected: usize) -> Result<()> {
    let records = json["records"]
        .as_array()
        .context("Expected 'records' array in JSON")?;

    if records.len() != expected {
        anyhow::bail!("Expected {} records, got {}", expected, records.len());
    }

    Ok(())
}

/// Assert the record count of every closed page, in page order.
pub fn assert_page_sizes(json: &Value, expected: &[usize]) -> Result<()> {
    let pages = json["pages"]
        .as_array()
        .context("Expected 'pages' array in JSON")?;

    let sizes: Vec<usize> = pages
        .iter()
        .map(|p| p["records"].as_u64().unwrap_or(0) as usize)
        .collect();

    if sizes != expected {
        anyhow::bail!("Expected page sizes {:?}, got {:?}", expected, sizes);
    }

    Ok(())
}

/// Assert one hour field of a totals object (e.g. `json["running"]`).
pub fn assert_hours(totals: &Value, field: &str, expected: f64) -> Result<()> {
    let actual = totals[field]
        .as_f64()
        .with_context(|| format!("Expected numeric '{}' in totals", field))?;

    if (actual - expected).abs() > 1e-9 {
        anyhow::bail!("Expected {} = {}, got {}", field, expected, actual);
    }

    Ok(())
}
