use super::argmax;
use super::insights::{Breakdown, CampaignRow, Insights};

pub const NO_DATA: &str = "No records match the current filters";

/// Bullet points for the strategy advisor tab.
pub fn strategy(insights: &Insights) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(p) = &insights.best_platform {
        lines.push(format!("Focus on {p} platform"));
    }
    if let Some(c) = &insights.best_content_type {
        lines.push(format!("Use {c} content"));
    }
    if let Some(h) = insights.best_hour {
        lines.push(format!("Post around {h}:00 hrs"));
    }
    if let Some(m) = insights.best_month {
        lines.push(format!("Peak engagement in Month {m}"));
    }
    if lines.is_empty() {
        lines.push(NO_DATA.to_string());
    }
    lines
}

/// Data-backed observations shown under "Key Insights".
pub fn key_insights(insights: &Insights, breakdown: &Breakdown) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(c) = &insights.best_content_type {
        lines.push(format!("{c} content performs better than other formats"));
    }
    if evening_beats_daytime(breakdown) {
        lines.push("Evening posting hours show higher engagement".to_string());
    }
    if spend_leader_differs_from_roi_leader(breakdown) {
        lines.push("Higher ad spend does not always guarantee higher ROI".to_string());
    }
    if let Some(p) = &insights.best_platform {
        lines.push(format!("{p} is the most effective platform overall"));
    }
    if lines.is_empty() {
        lines.push(NO_DATA.to_string());
    }
    lines
}

/// Post-level comparison; false unless both sides have posts.
fn evening_beats_daytime(breakdown: &Breakdown) -> bool {
    match (breakdown.evening_engagement, breakdown.daytime_engagement) {
        (Some(evening), Some(daytime)) => evening > daytime,
        _ => false,
    }
}

/// Campaigns are ordered by name, so ties go to the first name.
fn spend_leader_differs_from_roi_leader(breakdown: &Breakdown) -> bool {
    let by = |f: fn(&CampaignRow) -> f64| {
        let pairs: Vec<(&str, f64)> = breakdown
            .campaigns
            .iter()
            .map(|c| (c.campaign_name.as_str(), f(c)))
            .collect();
        argmax(&pairs)
    };
    match (by(|c| c.ad_spend), by(|c| c.roi)) {
        (Some(spend), Some(roi)) => spend != roi,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::fixtures::record;
    use crate::data::model::Record;

    fn campaign(name: &str, ad_spend: f64, roi: f64) -> CampaignRow {
        CampaignRow {
            campaign_name: name.to_string(),
            ad_spend,
            roi,
        }
    }

    #[test]
    fn strategy_lists_every_insight() {
        let insights = Insights {
            best_platform: Some("Instagram".to_string()),
            best_content_type: Some("Reel".to_string()),
            best_hour: Some(19),
            best_month: Some(11),
        };
        assert_eq!(
            strategy(&insights),
            vec![
                "Focus on Instagram platform",
                "Use Reel content",
                "Post around 19:00 hrs",
                "Peak engagement in Month 11",
            ]
        );
    }

    #[test]
    fn empty_insights_degrade_to_message() {
        assert_eq!(strategy(&Insights::default()), vec![NO_DATA]);
        assert_eq!(
            key_insights(&Insights::default(), &Breakdown::default()),
            vec![NO_DATA]
        );
    }

    #[test]
    fn key_insights_follow_the_data() {
        let insights = Insights {
            best_platform: Some("TikTok".to_string()),
            best_content_type: Some("Video".to_string()),
            best_hour: Some(20),
            best_month: Some(3),
        };
        let breakdown = Breakdown {
            evening_engagement: Some(400.0),
            daytime_engagement: Some(100.0),
            campaigns: vec![campaign("Big Spend", 900.0, 0.1), campaign("Lean", 50.0, 2.0)],
            ..Breakdown::default()
        };
        let lines = key_insights(&insights, &breakdown);
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("Evening"));
        assert!(lines[2].starts_with("Higher ad spend"));
        assert_eq!(lines[3], "TikTok is the most effective platform overall");
    }

    #[test]
    fn claims_dropped_when_data_disagrees() {
        let breakdown = Breakdown {
            evening_engagement: Some(100.0),
            daytime_engagement: Some(500.0),
            campaigns: vec![campaign("Big Spend", 900.0, 3.0), campaign("Lean", 50.0, 0.5)],
            ..Breakdown::default()
        };
        let insights = Insights {
            best_content_type: Some("Image".to_string()),
            ..Insights::default()
        };
        assert_eq!(
            key_insights(&insights, &breakdown),
            vec!["Image content performs better than other formats"]
        );
    }

    #[test]
    fn busy_daytime_hour_outweighs_quiet_one() {
        let mut records = Vec::new();
        for (hour, engagement) in [(9, 300.0), (9, 300.0), (9, 300.0), (10, 0.0), (20, 200.0)] {
            let mut r = record("A", "Video", 2024);
            r.post_hour = hour;
            r.engagement = engagement;
            records.push(r);
        }
        let view: Vec<&Record> = records.iter().collect();
        let breakdown = Breakdown::compute(&view);
        let insights = Insights::from_breakdown(&breakdown);

        let lines = key_insights(&insights, &breakdown);
        assert!(!lines.iter().any(|l| l.starts_with("Evening")), "{lines:?}");
    }

    #[test]
    fn tied_campaign_leaders_resolve_to_first_name() {
        // "Alpha" leads both spend and ROI once ties go to the first name.
        let breakdown = Breakdown {
            campaigns: vec![
                campaign("Alpha", 500.0, 1.5),
                campaign("Beta", 500.0, 1.5),
            ],
            ..Breakdown::default()
        };
        assert!(!spend_leader_differs_from_roi_leader(&breakdown));

        let breakdown = Breakdown {
            campaigns: vec![
                campaign("Alpha", 500.0, 1.0),
                campaign("Beta", 500.0, 1.5),
            ],
            ..Breakdown::default()
        };
        assert!(spend_leader_differs_from_roi_leader(&breakdown));
    }
}
