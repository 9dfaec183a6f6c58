use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use super::model::Record;

/// Output row: the input columns in their canonical order plus revenue.
#[derive(Serialize)]
struct ExportRow<'a> {
    platform: &'a str,
    content_type: &'a str,
    year: i32,
    month: u32,
    post_hour: u8,
    campaign_name: &'a str,
    engagement: f64,
    engagement_rate: f64,
    reach: f64,
    ad_spend: f64,
    roi: f64,
    date: String,
    revenue_generated: f64,
}

impl<'a> From<&'a Record> for ExportRow<'a> {
    fn from(r: &'a Record) -> Self {
        ExportRow {
            platform: &r.platform,
            content_type: &r.content_type,
            year: r.year,
            month: r.month,
            post_hour: r.post_hour,
            campaign_name: &r.campaign_name,
            engagement: r.engagement,
            engagement_rate: r.engagement_rate,
            reach: r.reach,
            ad_spend: r.ad_spend,
            roi: r.roi,
            date: r.date.format("%Y-%m-%d").to_string(),
            revenue_generated: r.revenue_generated,
        }
    }
}

/// Write `records` as CSV (with header) to any writer.
pub fn write_csv<W: Write>(writer: W, records: &[&Record]) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    for r in records {
        out.serialize(ExportRow::from(*r))
            .with_context(|| format!("writing row for campaign '{}'", r.campaign_name))?;
    }
    if records.is_empty() {
        // serde writes the header with the first row only.
        out.write_record(super::loader::REQUIRED_COLUMNS.iter().chain(["revenue_generated"].iter()))
            .context("writing CSV header")?;
    }
    out.flush().context("flushing CSV output")?;
    Ok(())
}

/// Export `records` to a CSV file at `path`.
pub fn export_to_path(path: &Path, records: &[&Record]) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    write_csv(file, records)?;
    log::info!("Exported {} records to {}", records.len(), path.display());
    Ok(())
}
