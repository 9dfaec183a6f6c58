//! Aggregations over a filtered view: KPIs, "best X" insights, chart series,
//! the platform scorecard and the text recommendations built from them.
//!
//! Everything here is a pure function of `&[&Record]`. [`Summary`] bundles
//! the results of one recomputation pass.

use std::collections::BTreeMap;

use crate::data::model::Record;

pub mod insights;
pub mod kpi;
pub mod recommend;
pub mod scorecard;

use insights::{Breakdown, Insights};
use kpi::Kpis;
use scorecard::ScoreRow;

/// Mean of `value` per `key`, ordered by key ascending.
pub fn group_mean<K, FK, FV>(view: &[&Record], key: FK, value: FV) -> Vec<(K, f64)>
where
    K: Ord,
    FK: Fn(&Record) -> K,
    FV: Fn(&Record) -> f64,
{
    let mut acc: BTreeMap<K, (f64, usize)> = BTreeMap::new();
    for r in view {
        let slot = acc.entry(key(r)).or_insert((0.0, 0));
        slot.0 += value(r);
        slot.1 += 1;
    }
    acc.into_iter()
        .map(|(k, (sum, n))| (k, sum / n as f64))
        .collect()
}

/// Key of the largest value. Groups must be in ascending key order, so on a
/// tie the smallest key wins. `NaN` values never win. `None` for no groups.
pub fn argmax<K: Clone>(groups: &[(K, f64)]) -> Option<K> {
    let mut best: Option<&(K, f64)> = None;
    for g in groups.iter().filter(|g| !g.1.is_nan()) {
        match best {
            Some(b) if g.1 <= b.1 => {}
            _ => best = Some(g),
        }
    }
    best.map(|(k, _)| k.clone())
}

/// Arithmetic mean, `0.0` for an empty slice.
pub fn mean(values: impl IntoIterator<Item = f64>) -> f64 {
    let (sum, n) = values
        .into_iter()
        .fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if n == 0 {
        0.0
    } else {
        sum / n as f64
    }
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

// ---------------------------------------------------------------------------
// Summary – one full recomputation pass
// ---------------------------------------------------------------------------

/// Everything the dashboard shows for one filter selection.
#[derive(Debug, Clone, Default)]
pub struct Summary {
    pub kpis: Kpis,
    pub insights: Insights,
    pub breakdown: Breakdown,
    pub scorecard: Vec<ScoreRow>,
    pub strategy: Vec<String>,
    pub key_insights: Vec<String>,
}

impl Summary {
    pub fn compute(view: &[&Record]) -> Self {
        let breakdown = Breakdown::compute(view);
        let insights = Insights::from_breakdown(&breakdown);
        let strategy = recommend::strategy(&insights);
        let key_insights = recommend::key_insights(&insights, &breakdown);
        Summary {
            kpis: Kpis::compute(view),
            insights,
            breakdown,
            scorecard: scorecard::compute(view),
            strategy,
            key_insights,
        }
    }
}
