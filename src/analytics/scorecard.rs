use std::cmp::Ordering;

use crate::data::model::Record;

use super::{group_mean, round_to};

const ENGAGEMENT_WEIGHT: f64 = 40.0;
const ROI_WEIGHT: f64 = 40.0;
const REACH_WEIGHT: f64 = 20.0;

/// Per-platform means that feed the score.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformStats {
    pub platform: String,
    pub engagement_rate: f64,
    pub roi: f64,
    pub reach: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRow {
    pub stats: PlatformStats,
    /// Rounded to 1 decimal.
    pub score: f64,
}

/// Group the view by platform and score each one. Rows are sorted by platform.
pub fn compute(view: &[&Record]) -> Vec<ScoreRow> {
    let rates = group_mean(view, |r| r.platform.clone(), |r| r.engagement_rate);
    let rois = group_mean(view, |r| r.platform.clone(), |r| r.roi);
    let reaches = group_mean(view, |r| r.platform.clone(), |r| r.reach);

    let stats: Vec<PlatformStats> = rates
        .into_iter()
        .zip(rois)
        .zip(reaches)
        .map(|(((platform, engagement_rate), (_, roi)), (_, reach))| PlatformStats {
            platform,
            engagement_rate,
            roi,
            reach,
        })
        .collect();

    score_platforms(&stats)
}

/// Weighted composite score:
/// `er * 40 + roi * 40 + (reach / max_reach) * 20`.
///
/// The reach term is 0 when the largest reach is not positive. Output keeps
/// the input order.
pub fn score_platforms(stats: &[PlatformStats]) -> Vec<ScoreRow> {
    let max_reach = stats.iter().map(|s| s.reach).fold(0.0_f64, f64::max);

    stats
        .iter()
        .map(|s| {
            let reach_share = if max_reach > 0.0 { s.reach / max_reach } else { 0.0 };
            let raw = s.engagement_rate * ENGAGEMENT_WEIGHT
                + s.roi * ROI_WEIGHT
                + reach_share * REACH_WEIGHT;
            ScoreRow {
                stats: s.clone(),
                score: round_to(raw, 1),
            }
        })
        .collect()
}

/// Highest score first; equal scores by platform name.
pub fn ranked(rows: &[ScoreRow]) -> Vec<ScoreRow> {
    let mut out = rows.to_vec();
    out.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.stats.platform.cmp(&b.stats.platform))
    });
    out
}
