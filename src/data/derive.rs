use super::model::Record;

/// Revenue generated by a campaign: spend plus the return on it.
pub fn revenue(ad_spend: f64, roi: f64) -> f64 {
    ad_spend * (1.0 + roi)
}

/// Fill in `revenue_generated` for every record.
pub fn add_revenue(records: &mut [Record]) {
    for r in records {
        r.revenue_generated = revenue(r.ad_spend, r.roi);
    }
}
