use std::collections::BTreeSet;

use super::model::{Dataset, Record};

// ---------------------------------------------------------------------------
// Filter selection: which values are allowed per dimension
// ---------------------------------------------------------------------------

/// The three filterable dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Platform,
    ContentType,
    Year,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Dimension::Platform, Dimension::ContentType, Dimension::Year];

    pub fn label(self) -> &'static str {
        match self {
            Dimension::Platform => "Platform",
            Dimension::ContentType => "Content Type",
            Dimension::Year => "Year",
        }
    }
}

/// Allowed values per dimension. An empty set allows nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub platforms: BTreeSet<String>,
    pub content_types: BTreeSet<String>,
    pub years: BTreeSet<i32>,
}

impl FilterSelection {
    /// Everything selected (i.e., show everything).
    pub fn all(dataset: &Dataset) -> Self {
        FilterSelection {
            platforms: dataset.platforms.clone(),
            content_types: dataset.content_types.clone(),
            years: dataset.years.clone(),
        }
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.platforms.contains(&record.platform)
            && self.content_types.contains(&record.content_type)
            && self.years.contains(&record.year)
    }

    /// Whether `value` (as displayed in the UI) is selected on `dim`.
    pub fn is_selected(&self, dim: Dimension, value: &str) -> bool {
        match dim {
            Dimension::Platform => self.platforms.contains(value),
            Dimension::ContentType => self.content_types.contains(value),
            Dimension::Year => value
                .parse::<i32>()
                .is_ok_and(|y| self.years.contains(&y)),
        }
    }

    /// Flip a single value on one dimension.
    pub fn toggle(&mut self, dim: Dimension, value: &str) {
        match dim {
            Dimension::Platform => toggle(&mut self.platforms, value.to_string()),
            Dimension::ContentType => toggle(&mut self.content_types, value.to_string()),
            Dimension::Year => {
                if let Ok(y) = value.parse::<i32>() {
                    toggle(&mut self.years, y);
                }
            }
        }
    }

    /// Select every value of `dim` present in the dataset.
    pub fn select_all(&mut self, dim: Dimension, dataset: &Dataset) {
        match dim {
            Dimension::Platform => self.platforms = dataset.platforms.clone(),
            Dimension::ContentType => self.content_types = dataset.content_types.clone(),
            Dimension::Year => self.years = dataset.years.clone(),
        }
    }

    pub fn select_none(&mut self, dim: Dimension) {
        match dim {
            Dimension::Platform => self.platforms.clear(),
            Dimension::ContentType => self.content_types.clear(),
            Dimension::Year => self.years.clear(),
        }
    }

    /// Number of selected values on `dim`.
    pub fn count(&self, dim: Dimension) -> usize {
        match dim {
            Dimension::Platform => self.platforms.len(),
            Dimension::ContentType => self.content_types.len(),
            Dimension::Year => self.years.len(),
        }
    }
}

fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T) {
    if !set.remove(&value) {
        set.insert(value);
    }
}

/// Distinct values of `dim` in the dataset, as display strings.
pub fn dimension_values(dataset: &Dataset, dim: Dimension) -> Vec<String> {
    match dim {
        Dimension::Platform => dataset.platforms.iter().cloned().collect(),
        Dimension::ContentType => dataset.content_types.iter().cloned().collect(),
        Dimension::Year => dataset.years.iter().map(|y| y.to_string()).collect(),
    }
}

/// Return indices of records that pass the selection, in dataset order.
pub fn filtered_indices(dataset: &Dataset, selection: &FilterSelection) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, r)| selection.matches(r))
        .map(|(i, _)| i)
        .collect()
}

/// Narrow an existing view further. Order is preserved.
#[cfg(test)]
pub fn filter_view<'a>(view: &[&'a Record], selection: &FilterSelection) -> Vec<&'a Record> {
    view.iter().copied().filter(|r| selection.matches(r)).collect()
}
