use std::path::Path;
use std::sync::Arc;

use crate::analytics::Summary;
use crate::color::ColorMap;
use crate::config::Config;
use crate::data::export::export_to_path;
use crate::data::filter::{filtered_indices, Dimension, FilterSelection};
use crate::data::loader::{load_cached, LoadError};
use crate::data::model::{Dataset, Record};

// ---------------------------------------------------------------------------
// Tabs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Engagement,
    Content,
    CampaignRoi,
    BestTime,
    Trends,
    StrategyAdvisor,
    Scorecard,
}

impl Tab {
    pub const ALL: [Tab; 7] = [
        Tab::Engagement,
        Tab::Content,
        Tab::CampaignRoi,
        Tab::BestTime,
        Tab::Trends,
        Tab::StrategyAdvisor,
        Tab::Scorecard,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Engagement => "Engagement",
            Tab::Content => "Content",
            Tab::CampaignRoi => "Campaign ROI",
            Tab::BestTime => "Best Time",
            Tab::Trends => "Trends",
            Tab::StrategyAdvisor => "Strategy Advisor",
            Tab::Scorecard => "Scorecard",
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    pub config: Config,

    /// Loaded dataset (None until a file loads).
    pub dataset: Option<Arc<Dataset>>,

    /// Per-dimension filter selections.
    pub selection: FilterSelection,

    /// Indices of records passing the current selection.
    pub visible_indices: Vec<usize>,

    /// Aggregates for `visible_indices`. Rebuilt on every selection change.
    pub summary: Summary,

    pub platform_colors: ColorMap,
    pub content_colors: ColorMap,

    pub active_tab: Tab,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Load `path` through the process-wide cache and make it current.
    ///
    /// On failure the previous dataset stays loaded and the error is shown.
    pub fn load(&mut self, path: &Path) -> Result<(), LoadError> {
        match load_cached(path) {
            Ok(dataset) => {
                self.set_dataset(dataset);
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                self.status_message = Some(format!("Error: {e}"));
                Err(e)
            }
        }
    }

    /// Ingest a dataset, select everything and recompute.
    pub fn set_dataset(&mut self, dataset: Arc<Dataset>) {
        self.selection = FilterSelection::all(&dataset);
        self.platform_colors = ColorMap::new(&dataset.platforms);
        self.content_colors = ColorMap::new(&dataset.content_types);
        self.dataset = Some(dataset);
        self.status_message = None;
        self.refilter();
    }

    /// Recompute `visible_indices` and the summary after a selection change.
    pub fn refilter(&mut self) {
        let Some(ds) = &self.dataset else {
            self.visible_indices.clear();
            self.summary = Summary::default();
            return;
        };
        self.visible_indices = filtered_indices(ds, &self.selection);
        self.summary = Summary::compute(&ds.view(&self.visible_indices));
        log::debug!(
            "{} of {} records visible",
            self.visible_indices.len(),
            ds.len()
        );
    }

    /// Records passing the current selection, in file order.
    pub fn visible_records(&self) -> Vec<&Record> {
        self.dataset
            .as_ref()
            .map(|ds| ds.view(&self.visible_indices))
            .unwrap_or_default()
    }

    pub fn toggle_filter_value(&mut self, dim: Dimension, value: &str) {
        self.selection.toggle(dim, value);
        self.refilter();
    }

    pub fn select_all(&mut self, dim: Dimension) {
        if let Some(ds) = &self.dataset {
            self.selection.select_all(dim, ds);
            self.refilter();
        }
    }

    pub fn select_none(&mut self, dim: Dimension) {
        self.selection.select_none(dim);
        self.refilter();
    }

    /// Write the visible records to `path`.
    pub fn export(&mut self, path: &Path) -> anyhow::Result<()> {
        let result = export_to_path(path, &self.visible_records());
        match &result {
            Ok(()) => {
                self.status_message = Some(format!(
                    "Exported {} records to {}",
                    self.visible_indices.len(),
                    path.display()
                ));
            }
            Err(e) => {
                log::error!("Export failed: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
        result
    }
}
