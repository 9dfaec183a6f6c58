use std::collections::BTreeMap;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

use super::derive::add_revenue;
use super::model::{Dataset, Record};

/// Columns every input file must carry, in export order.
pub const REQUIRED_COLUMNS: [&str; 12] = [
    "platform",
    "content_type",
    "year",
    "month",
    "post_hour",
    "campaign_name",
    "engagement",
    "engagement_rate",
    "reach",
    "ad_spend",
    "roi",
    "date",
];

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}: {reason}")]
    Malformed { row: usize, reason: String },

    #[error("row {row}: '{value}' is not a recognised date")]
    InvalidDate { row: usize, value: String },

    #[error("row {row}: {column} = {value} is out of range")]
    OutOfRange {
        row: usize,
        column: &'static str,
        value: i64,
    },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a dataset once per process and path.
///
/// The first successful load for a path is kept for the lifetime of the
/// process; later calls return the same `Arc`. Failures are not cached.
pub fn load_cached(path: &Path) -> Result<Arc<Dataset>, LoadError> {
    static CACHE: OnceLock<Mutex<BTreeMap<PathBuf, Arc<Dataset>>>> = OnceLock::new();
    let cache = CACHE.get_or_init(|| Mutex::new(BTreeMap::new()));

    if let Some(ds) = cache
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get(path)
    {
        log::debug!("dataset cache hit for {}", path.display());
        return Ok(Arc::clone(ds));
    }

    let loaded = Arc::new(load_file(path)?);
    let mut guard = cache.lock().unwrap_or_else(PoisonError::into_inner);
    let ds = guard.entry(path.to_path_buf()).or_insert(loaded);
    Ok(Arc::clone(ds))
}

/// Load an engagement dataset from a CSV file, bypassing the cache.
pub fn load_file(path: &Path) -> Result<Dataset, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" | "" => {}
        other => return Err(LoadError::UnsupportedFormat(other.to_string())),
    }

    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = load_reader(file)?;
    log::info!("Loaded {} records from {}", dataset.len(), path.display());
    Ok(dataset)
}

/// Parse CSV from any reader. The header row must name every
/// [`REQUIRED_COLUMNS`] entry; other columns are ignored.
pub fn load_reader<R: Read>(reader: R) -> Result<Dataset, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = reader.headers()?.clone();
    let columns = ColumnIndex::resolve(&headers)?;

    let mut records = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let row = i + 1;
        let raw = result?;
        records.push(columns.parse_row(&raw, row)?);
    }

    add_revenue(&mut records);
    Ok(Dataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Row parsing
// ---------------------------------------------------------------------------

/// Header position of each required column.
struct ColumnIndex {
    positions: [usize; REQUIRED_COLUMNS.len()],
}

impl ColumnIndex {
    fn resolve(headers: &csv::StringRecord) -> Result<Self, LoadError> {
        let mut positions = [0; REQUIRED_COLUMNS.len()];
        for (slot, name) in positions.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = headers
                .iter()
                .position(|h| h == name)
                .ok_or(LoadError::MissingColumn(name))?;
        }
        Ok(ColumnIndex { positions })
    }

    fn cell<'r>(&self, raw: &'r csv::StringRecord, col: usize) -> &'r str {
        raw.get(self.positions[col]).unwrap_or("")
    }

    fn parse<T: FromStr>(&self, raw: &csv::StringRecord, col: usize, row: usize) -> Result<T, LoadError>
    where
        T::Err: std::fmt::Display,
    {
        let value = self.cell(raw, col);
        value.parse::<T>().map_err(|e| LoadError::Malformed {
            row,
            reason: format!("{} = '{value}': {e}", REQUIRED_COLUMNS[col]),
        })
    }

    /// Numeric measure; `NaN` and infinities are rejected.
    fn number(&self, raw: &csv::StringRecord, col: usize, row: usize) -> Result<f64, LoadError> {
        let value: f64 = self.parse(raw, col, row)?;
        if !value.is_finite() {
            return Err(LoadError::Malformed {
                row,
                reason: format!(
                    "{} = '{}' is not a finite number",
                    REQUIRED_COLUMNS[col],
                    self.cell(raw, col)
                ),
            });
        }
        Ok(value)
    }

    fn text(&self, raw: &csv::StringRecord, col: usize, row: usize) -> Result<String, LoadError> {
        let value = self.cell(raw, col);
        if value.is_empty() {
            return Err(LoadError::Malformed {
                row,
                reason: format!("{} is empty", REQUIRED_COLUMNS[col]),
            });
        }
        Ok(value.to_string())
    }

    fn parse_row(&self, raw: &csv::StringRecord, row: usize) -> Result<Record, LoadError> {
        let month: i64 = self.parse(raw, 3, row)?;
        if !(1..=12).contains(&month) {
            return Err(LoadError::OutOfRange {
                row,
                column: "month",
                value: month,
            });
        }
        let post_hour: i64 = self.parse(raw, 4, row)?;
        if !(0..=23).contains(&post_hour) {
            return Err(LoadError::OutOfRange {
                row,
                column: "post_hour",
                value: post_hour,
            });
        }

        let date_text = self.cell(raw, 11);
        let date = parse_date(date_text).ok_or_else(|| LoadError::InvalidDate {
            row,
            value: date_text.to_string(),
        })?;

        Ok(Record {
            platform: self.text(raw, 0, row)?,
            content_type: self.text(raw, 1, row)?,
            year: self.parse(raw, 2, row)?,
            // Range-checked above.
            month: month as u32,
            post_hour: post_hour as u8,
            campaign_name: self.text(raw, 5, row)?,
            engagement: self.number(raw, 6, row)?,
            engagement_rate: self.number(raw, 7, row)?,
            reach: self.number(raw, 8, row)?,
            ad_spend: self.number(raw, 9, row)?,
            roi: self.number(raw, 10, row)?,
            date,
            revenue_generated: 0.0,
        })
    }
}

/// Accepts plain dates and timestamps; the time part is dropped.
fn parse_date(s: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                .map(|dt| dt.date())
        })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const HEADER: &str = "platform,content_type,year,month,post_hour,campaign_name,engagement,engagement_rate,reach,ad_spend,roi,date";

    fn csv_text(rows: &[&str]) -> String {
        let mut text = String::from(HEADER);
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        text
    }

    #[test]
    fn loads_records_and_derives_revenue() {
        let text = csv_text(&[
            "Instagram,Reel,2024,3,18,Spring Sale,1500,5.25,20000,250.5,0.4,2024-03-14",
            "Twitter,Text,2023,11,9,Black Friday,320,1.1,8000,90,1.25,11/24/2023",
        ]);
        let ds = load_reader(text.as_bytes()).unwrap();

        assert_eq!(ds.len(), 2);
        let first = &ds.records[0];
        assert_eq!(first.platform, "Instagram");
        assert_eq!(first.month, 3);
        assert_eq!(first.post_hour, 18);
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2024, 3, 14).unwrap());
        assert_eq!(first.revenue_generated, 250.5 * (1.0 + 0.4));
        assert_eq!(ds.records[1].date, NaiveDate::from_ymd_opt(2023, 11, 24).unwrap());
        assert!(ds.years.contains(&2023));
    }

    #[test]
    fn ignores_extra_columns_and_column_order() {
        let text = "date,roi,ad_spend,reach,engagement_rate,engagement,campaign_name,post_hour,month,year,content_type,platform,revenue_generated,notes\n\
                    2024-01-02 10:30:00,0.5,100,500,2.5,40,Intro,10,1,2024,Image,Facebook,9999,hello";
        let ds = load_reader(text.as_bytes()).unwrap();
        let r = &ds.records[0];
        assert_eq!(r.platform, "Facebook");
        assert_eq!(r.date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(r.revenue_generated, 150.0);
    }

    #[test]
    fn missing_column_is_reported() {
        let text = "platform,content_type,year\nA,B,2024";
        let err = load_reader(text.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("month")));
    }

    #[test]
    fn malformed_number_reports_row() {
        let text = csv_text(&[
            "A,Video,2024,1,1,C,10,1.0,100,10,0.1,2024-01-01",
            "A,Video,2024,1,1,C,lots,1.0,100,10,0.1,2024-01-01",
        ]);
        let err = load_reader(text.as_bytes()).unwrap_err();
        match err {
            LoadError::Malformed { row, reason } => {
                assert_eq!(row, 2);
                assert!(reason.contains("engagement"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn bad_date_and_out_of_range_values() {
        let bad_date = csv_text(&["A,Video,2024,1,1,C,10,1.0,100,10,0.1,yesterday"]);
        assert!(matches!(
            load_reader(bad_date.as_bytes()),
            Err(LoadError::InvalidDate { row: 1, .. })
        ));

        let bad_hour = csv_text(&["A,Video,2024,1,24,C,10,1.0,100,10,0.1,2024-01-01"]);
        assert!(matches!(
            load_reader(bad_hour.as_bytes()),
            Err(LoadError::OutOfRange {
                column: "post_hour",
                value: 24,
                ..
            })
        ));

        let bad_month = csv_text(&["A,Video,2024,0,1,C,10,1.0,100,10,0.1,2024-01-01"]);
        assert!(matches!(
            load_reader(bad_month.as_bytes()),
            Err(LoadError::OutOfRange { column: "month", .. })
        ));
    }

    #[test]
    fn non_finite_numbers_are_malformed() {
        for (cells, column) in [
            ("10,NaN,100,10,0.1", "engagement_rate"),
            ("inf,1.0,100,10,0.1", "engagement"),
            ("10,1.0,100,-infinity,0.1", "ad_spend"),
        ] {
            let text = csv_text(&[
                "A,Video,2024,1,1,C,10,9.0,100,10,0.1,2024-01-01",
                &format!("B,Video,2024,1,1,C,{cells},2024-01-01"),
            ]);
            match load_reader(text.as_bytes()) {
                Err(LoadError::Malformed { row, reason }) => {
                    assert_eq!(row, 2);
                    assert!(reason.starts_with(column), "{reason}");
                }
                other => panic!("expected malformed {column}, got {other:?}"),
            }
        }
    }

    #[test]
    fn empty_platform_is_malformed() {
        let text = csv_text(&[",Video,2024,1,1,C,10,1.0,100,10,0.1,2024-01-01"]);
        assert!(matches!(
            load_reader(text.as_bytes()),
            Err(LoadError::Malformed { row: 1, .. })
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let err = load_file(Path::new("data.parquet")).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat(ext) if ext == "parquet"));
    }

    #[test]
    fn cached_load_returns_same_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("engagement.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            "{}",
            csv_text(&["A,Video,2024,1,1,C,10,1.0,100,10,0.1,2024-01-01"])
        )
        .unwrap();
        drop(file);

        let first = load_cached(&path).unwrap();
        // The cached copy survives the file disappearing.
        std::fs::remove_file(&path).unwrap();
        let second = load_cached(&path).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn failed_load_is_not_cached() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("late.csv");
        assert!(load_cached(&path).is_err());

        std::fs::write(
            &path,
            csv_text(&["B,Image,2023,5,7,D,10,1.0,100,10,0.1,2023-05-01"]),
        )
        .unwrap();
        let ds = load_cached(&path).unwrap();
        assert_eq!(ds.records[0].platform, "B");
    }
}
