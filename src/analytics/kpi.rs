use crate::data::model::Record;

use super::{mean, round_to};

/// The five headline numbers plus the size of the view they came from.
///
/// An empty view reports all zeros.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Kpis {
    pub records: usize,
    pub total_engagement: f64,
    /// Mean engagement rate, rounded to 2 decimals.
    pub avg_engagement_rate: f64,
    pub total_ad_spend: f64,
    pub total_revenue: f64,
    pub avg_roi: f64,
}

impl Kpis {
    pub fn compute(view: &[&Record]) -> Self {
        Kpis {
            records: view.len(),
            total_engagement: view.iter().map(|r| r.engagement).sum(),
            avg_engagement_rate: round_to(mean(view.iter().map(|r| r.engagement_rate)), 2),
            total_ad_spend: view.iter().map(|r| r.ad_spend).sum(),
            total_revenue: view.iter().map(|r| r.revenue_generated).sum(),
            avg_roi: mean(view.iter().map(|r| r.roi)),
        }
    }
}
