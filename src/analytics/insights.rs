use crate::data::model::Record;

use super::{argmax, group_mean};

/// Hours counted as "evening" posts, inclusive.
pub const EVENING_HOURS: std::ops::RangeInclusive<u8> = 17..=23;

/// Mean ad spend and ROI for one campaign.
#[derive(Debug, Clone, PartialEq)]
pub struct CampaignRow {
    pub campaign_name: String,
    pub ad_spend: f64,
    pub roi: f64,
}

/// One point on the monthly engagement trend.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub year: i32,
    pub month: u32,
    pub engagement: f64,
}

/// Grouped series backing the charts and tables. All groups are ordered by
/// key ascending.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Breakdown {
    /// Mean engagement rate per platform.
    pub platform_engagement_rate: Vec<(String, f64)>,
    /// Mean engagement per content type.
    pub content_engagement: Vec<(String, f64)>,
    pub campaigns: Vec<CampaignRow>,
    /// Mean engagement per posting hour.
    pub hourly_engagement: Vec<(u8, f64)>,
    /// Mean engagement per month of year.
    pub monthly_engagement: Vec<(u32, f64)>,
    /// Mean engagement per (year, month).
    pub trend: Vec<TrendPoint>,
    /// Mean engagement of posts made during [`EVENING_HOURS`].
    pub evening_engagement: Option<f64>,
    /// Mean engagement of all other posts.
    pub daytime_engagement: Option<f64>,
}

impl Breakdown {
    pub fn compute(view: &[&Record]) -> Self {
        let spend = group_mean(view, |r| r.campaign_name.clone(), |r| r.ad_spend);
        let roi = group_mean(view, |r| r.campaign_name.clone(), |r| r.roi);
        // Same keys in the same order on both sides.
        let campaigns = spend
            .into_iter()
            .zip(roi)
            .map(|((campaign_name, ad_spend), (_, roi))| CampaignRow {
                campaign_name,
                ad_spend,
                roi,
            })
            .collect();

        let trend = group_mean(view, |r| (r.year, r.month), |r| r.engagement)
            .into_iter()
            .map(|((year, month), engagement)| TrendPoint {
                year,
                month,
                engagement,
            })
            .collect();

        let daypart = group_mean(view, |r| EVENING_HOURS.contains(&r.post_hour), |r| r.engagement);
        let daypart_mean = |evening: bool| {
            daypart
                .iter()
                .find(|(k, _)| *k == evening)
                .map(|(_, e)| *e)
        };

        Breakdown {
            platform_engagement_rate: group_mean(
                view,
                |r| r.platform.clone(),
                |r| r.engagement_rate,
            ),
            content_engagement: group_mean(view, |r| r.content_type.clone(), |r| r.engagement),
            campaigns,
            hourly_engagement: group_mean(view, |r| r.post_hour, |r| r.engagement),
            monthly_engagement: group_mean(view, |r| r.month, |r| r.engagement),
            trend,
            evening_engagement: daypart_mean(true),
            daytime_engagement: daypart_mean(false),
        }
    }
}

/// The "best X" lookups. `None` when the view is empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Insights {
    /// Highest mean engagement rate.
    pub best_platform: Option<String>,
    /// Highest mean engagement.
    pub best_content_type: Option<String>,
    pub best_hour: Option<u8>,
    pub best_month: Option<u32>,
}

impl Insights {
    pub fn from_breakdown(b: &Breakdown) -> Self {
        Insights {
            best_platform: argmax(&b.platform_engagement_rate),
            best_content_type: argmax(&b.content_engagement),
            best_hour: argmax(&b.hourly_engagement),
            best_month: argmax(&b.monthly_engagement),
        }
    }

    #[cfg(test)]
    pub fn compute(view: &[&Record]) -> Self {
        Self::from_breakdown(&Breakdown::compute(view))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::fixtures::record;

    fn post(platform: &str, content: &str, hour: u8, month: u32, engagement: f64, rate: f64) -> Record {
        let mut r = record(platform, content, 2024);
        r.post_hour = hour;
        r.month = month;
        r.engagement = engagement;
        r.engagement_rate = rate;
        r
    }

    #[test]
    fn picks_best_of_each_dimension() {
        let records = vec![
            post("Instagram", "Reel", 18, 6, 900.0, 6.0),
            post("Instagram", "Image", 9, 1, 100.0, 5.0),
            post("Twitter", "Text", 18, 6, 500.0, 2.0),
            post("LinkedIn", "Reel", 20, 12, 700.0, 4.0),
        ];
        let view: Vec<&Record> = records.iter().collect();
        let insights = Insights::compute(&view);

        // Instagram 5.5 > LinkedIn 4.0 > Twitter 2.0
        assert_eq!(insights.best_platform.as_deref(), Some("Instagram"));
        // Reel 800 > Text 500 > Image 100
        assert_eq!(insights.best_content_type.as_deref(), Some("Reel"));
        // 18h: 700, 20h: 700, 9h: 100 -> tie goes to the earlier hour
        assert_eq!(insights.best_hour, Some(18));
        // month 6: 700, month 12: 700 -> tie goes to the earlier month
        assert_eq!(insights.best_month, Some(6));
    }

    #[test]
    fn result_does_not_depend_on_record_order() {
        let records = vec![
            post("B", "Video", 7, 3, 300.0, 3.0),
            post("A", "Video", 8, 4, 300.0, 3.0),
            post("C", "Image", 9, 5, 100.0, 1.0),
        ];
        let forward: Vec<&Record> = records.iter().collect();
        let backward: Vec<&Record> = records.iter().rev().collect();

        let a = Insights::compute(&forward);
        let b = Insights::compute(&backward);
        assert_eq!(a, b);
        assert_eq!(a.best_platform.as_deref(), Some("A"));
        assert_eq!(a.best_hour, Some(7));
    }

    #[test]
    fn breakdown_series() {
        let mut a = post("A", "Video", 10, 1, 100.0, 1.0);
        a.campaign_name = "Zeta".to_string();
        a.ad_spend = 50.0;
        a.roi = 0.2;
        let mut b = post("A", "Video", 10, 2, 300.0, 1.0);
        b.campaign_name = "Alpha".to_string();
        b.ad_spend = 10.0;
        b.roi = 1.0;
        let mut c = post("A", "Video", 11, 1, 200.0, 1.0);
        c.campaign_name = "Alpha".to_string();
        c.ad_spend = 30.0;
        c.roi = 0.0;
        c.year = 2023;

        let bd = Breakdown::compute(&[&a, &b, &c]);
        assert_eq!(
            bd.campaigns,
            vec![
                CampaignRow {
                    campaign_name: "Alpha".to_string(),
                    ad_spend: 20.0,
                    roi: 0.5
                },
                CampaignRow {
                    campaign_name: "Zeta".to_string(),
                    ad_spend: 50.0,
                    roi: 0.2
                },
            ]
        );
        assert_eq!(bd.hourly_engagement, vec![(10, 200.0), (11, 200.0)]);
        assert_eq!(
            bd.trend.iter().map(|p| (p.year, p.month)).collect::<Vec<_>>(),
            vec![(2023, 1), (2024, 1), (2024, 2)]
        );
    }

    #[test]
    fn daypart_means_weight_every_post() {
        let records = vec![
            post("A", "Video", 9, 1, 300.0, 1.0),
            post("A", "Video", 9, 1, 300.0, 1.0),
            post("A", "Video", 9, 1, 300.0, 1.0),
            post("A", "Video", 10, 1, 0.0, 1.0),
            post("A", "Video", 20, 1, 200.0, 1.0),
        ];
        let view: Vec<&Record> = records.iter().collect();
        let bd = Breakdown::compute(&view);

        assert_eq!(bd.daytime_engagement, Some(225.0));
        assert_eq!(bd.evening_engagement, Some(200.0));
    }

    #[test]
    fn daypart_missing_side_is_none() {
        let r = post("A", "Video", 21, 1, 50.0, 1.0);
        let bd = Breakdown::compute(&[&r]);
        assert_eq!(bd.evening_engagement, Some(50.0));
        assert_eq!(bd.daytime_engagement, None);
    }

    #[test]
    fn empty_view_has_no_insights() {
        assert_eq!(Insights::compute(&[]), Insights::default());
        assert_eq!(Breakdown::compute(&[]), Breakdown::default());
    }
}
