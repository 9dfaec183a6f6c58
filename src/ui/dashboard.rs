use eframe::egui::{self, Color32, Margin, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::analytics::insights::CampaignRow;
use crate::analytics::kpi::Kpis;
use crate::analytics::scorecard::{ranked, ScoreRow};
use crate::color::ColorMap;
use crate::state::{AppState, Tab};
use crate::ui::plot;

const NOT_AVAILABLE: &str = "n/a";

// ---------------------------------------------------------------------------
// Central panel
// ---------------------------------------------------------------------------

/// Render the dashboard body: header, KPI cards, tabs, insights, footer.
pub fn central_panel(ui: &mut Ui, state: &mut AppState) {
    if state.dataset.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open an engagement CSV to begin  (File → Open…)");
        });
        return;
    }
    if state.dataset.as_ref().is_some_and(|ds| ds.is_empty()) {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("The loaded file has no records.");
        });
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            header(ui);
            ui.add_space(8.0);
            kpi_cards(ui, &state.summary.kpis);
            ui.label(
                RichText::new(format!("Based on {} posts", state.summary.kpis.records))
                    .color(Color32::GRAY),
            );
            ui.add_space(12.0);

            ui.horizontal_wrapped(|ui: &mut Ui| {
                for tab in Tab::ALL {
                    ui.selectable_value(&mut state.active_tab, tab, tab.title());
                }
            });
            ui.separator();
            tab_body(ui, state);

            ui.add_space(16.0);
            ui.heading("Key Insights");
            for line in &state.summary.key_insights {
                ui.label(format!("• {line}"));
            }

            ui.add_space(16.0);
            ui.separator();
            ui.vertical_centered(|ui: &mut Ui| {
                ui.label(
                    RichText::new("Social Media Engagement Analytics").color(Color32::GRAY),
                );
            });
        });
}

fn header(ui: &mut Ui) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(
            RichText::new("Social Media Analytics Pro Dashboard")
                .size(28.0)
                .strong()
                .color(Color32::from_rgb(0x00, 0xc6, 0xff)),
        );
        ui.label(
            RichText::new("Engagement • Content • Campaign ROI • Strategy")
                .color(Color32::LIGHT_GRAY),
        );
    });
}

// ---------------------------------------------------------------------------
// KPI cards
// ---------------------------------------------------------------------------

fn kpi_cards(ui: &mut Ui, kpis: &Kpis) {
    let cards = [
        (
            "Total Engagement",
            format!("{:.0}", kpis.total_engagement),
            Color32::from_rgb(0x39, 0x6a, 0xfc),
        ),
        (
            "Avg Engagement Rate",
            format!("{:.2}%", kpis.avg_engagement_rate),
            Color32::from_rgb(0x11, 0x99, 0x8e),
        ),
        (
            "Ad Spend",
            format!("₹ {:.0}", kpis.total_ad_spend),
            Color32::from_rgb(0xf7, 0x97, 0x1e),
        ),
        (
            "Revenue",
            format!("₹ {:.0}", kpis.total_revenue),
            Color32::from_rgb(0xff, 0x41, 0x6c),
        ),
        (
            "Avg ROI",
            format!("{:.2}", kpis.avg_roi),
            Color32::from_rgb(0x66, 0x7e, 0xea),
        ),
    ];

    ui.columns(cards.len(), |cols| {
        for (col, (title, value, fill)) in cols.iter_mut().zip(cards) {
            egui::Frame::default()
                .fill(fill)
                .inner_margin(Margin::same(12))
                .show(col, |ui: &mut Ui| {
                    ui.vertical_centered(|ui: &mut Ui| {
                        ui.label(RichText::new(title).color(Color32::WHITE));
                        ui.label(RichText::new(value).size(22.0).strong().color(Color32::WHITE));
                    });
                });
        }
    });
}

// ---------------------------------------------------------------------------
// Tabs
// ---------------------------------------------------------------------------

fn tab_body(ui: &mut Ui, state: &AppState) {
    let summary = &state.summary;
    let insights = &summary.insights;
    let breakdown = &summary.breakdown;

    match state.active_tab {
        Tab::Engagement => {
            plot::category_bars(
                ui,
                "platform_engagement_rate",
                "Engagement rate (%)",
                &breakdown.platform_engagement_rate,
                &state.platform_colors,
            );
            ui.label(format!(
                "Best platform: {}",
                insights.best_platform.as_deref().unwrap_or(NOT_AVAILABLE)
            ));
        }
        Tab::Content => {
            plot::category_bars(
                ui,
                "content_engagement",
                "Engagement",
                &breakdown.content_engagement,
                &state.content_colors,
            );
        }
        Tab::CampaignRoi => campaign_table(ui, &breakdown.campaigns),
        Tab::BestTime => {
            let points = breakdown
                .hourly_engagement
                .iter()
                .map(|(h, e)| [f64::from(*h), *e])
                .collect();
            plot::line_chart(ui, "hourly_engagement", "Engagement", "Hour of day", "Engagement", points);
            ui.label(match insights.best_hour {
                Some(h) => format!("Best posting time: {h}:00 hrs"),
                None => format!("Best posting time: {NOT_AVAILABLE}"),
            });
        }
        Tab::Trends => {
            let points = breakdown
                .trend
                .iter()
                .map(|p| [f64::from(p.year) + f64::from(p.month - 1) / 12.0, p.engagement])
                .collect();
            plot::line_chart(ui, "monthly_trend", "Engagement", "Year", "Engagement", points);
            ui.label(match insights.best_month {
                Some(m) => format!("Highest engagement in Month {m}"),
                None => format!("Highest engagement in Month {NOT_AVAILABLE}"),
            });
        }
        Tab::StrategyAdvisor => {
            ui.label(RichText::new("Smart Strategy Recommendation").strong());
            for line in &summary.strategy {
                ui.label(format!("• {line}"));
            }
        }
        Tab::Scorecard => scorecard(ui, &summary.scorecard, &state.platform_colors),
    }
}

fn campaign_table(ui: &mut Ui, rows: &[CampaignRow]) {
    if rows.is_empty() {
        ui.label("No campaigns for the current filters.");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .vscroll(false)
        .column(Column::remainder().at_least(180.0))
        .column(Column::auto().at_least(100.0))
        .column(Column::auto().at_least(80.0))
        .header(22.0, |mut header| {
            header.col(|ui: &mut Ui| {
                ui.strong("Campaign");
            });
            header.col(|ui: &mut Ui| {
                ui.strong("Avg ad spend");
            });
            header.col(|ui: &mut Ui| {
                ui.strong("Avg ROI");
            });
        })
        .body(|body| {
            body.rows(20.0, rows.len(), |mut row| {
                let c = &rows[row.index()];
                row.col(|ui: &mut Ui| {
                    ui.label(c.campaign_name.as_str());
                });
                row.col(|ui: &mut Ui| {
                    ui.label(format!("{:.2}", c.ad_spend));
                });
                row.col(|ui: &mut Ui| {
                    ui.label(format!("{:.3}", c.roi));
                });
            });
        });
}

fn scorecard(ui: &mut Ui, rows: &[ScoreRow], colors: &ColorMap) {
    if rows.is_empty() {
        ui.label("No platforms for the current filters.");
        return;
    }

    egui::Grid::new("scorecard_grid")
        .striped(true)
        .num_columns(5)
        .show(ui, |ui: &mut Ui| {
            for heading in ["Platform", "Engagement rate", "ROI", "Reach", "Score"] {
                ui.strong(heading);
            }
            ui.end_row();
            for row in ranked(rows) {
                let s = &row.stats;
                ui.label(RichText::new(&s.platform).color(colors.color_for(&s.platform)));
                ui.label(format!("{:.2}", s.engagement_rate));
                ui.label(format!("{:.3}", s.roi));
                ui.label(format!("{:.0}", s.reach));
                ui.label(RichText::new(format!("{:.1}", row.score)).strong());
                ui.end_row();
            }
        });

    ui.add_space(8.0);
    let series: Vec<(String, f64)> = rows
        .iter()
        .map(|r| (r.stats.platform.clone(), r.score))
        .collect();
    plot::category_bars(ui, "scorecard_chart", "Score", &series, colors);
}
