use std::collections::BTreeSet;

use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// Record – one row of the engagement CSV
// ---------------------------------------------------------------------------

/// A single social-media post / campaign observation.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub platform: String,
    pub content_type: String,
    pub year: i32,
    /// 1–12.
    pub month: u32,
    /// 0–23.
    pub post_hour: u8,
    pub campaign_name: String,
    pub engagement: f64,
    /// Percentage, e.g. `4.5` means 4.5 %.
    pub engagement_rate: f64,
    pub reach: f64,
    pub ad_spend: f64,
    pub roi: f64,
    pub date: NaiveDate,
    /// Derived: `ad_spend * (1 + roi)`. Never read from the source file.
    pub revenue_generated: f64,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with the distinct values of each filter dimension.
///
/// Immutable once built; filtering works on indices or borrowed views.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// All records, in file order.
    pub records: Vec<Record>,
    pub platforms: BTreeSet<String>,
    pub content_types: BTreeSet<String>,
    pub years: BTreeSet<i32>,
}

impl Dataset {
    /// Build the dimension indices from the loaded records.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut platforms = BTreeSet::new();
        let mut content_types = BTreeSet::new();
        let mut years = BTreeSet::new();

        for r in &records {
            platforms.insert(r.platform.clone());
            content_types.insert(r.content_type.clone());
            years.insert(r.year);
        }

        Dataset {
            records,
            platforms,
            content_types,
            years,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Borrow the records at `indices`, in the given order.
    pub fn view(&self, indices: &[usize]) -> Vec<&Record> {
        indices.iter().filter_map(|&i| self.records.get(i)).collect()
    }
}
