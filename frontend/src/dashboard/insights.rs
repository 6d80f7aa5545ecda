use crate::dashboard::engagement::{ENJOYED_ABOVE, LOVED_ABOVE};
use crate::models::{CategoryBreakdown, EngagementRow, StatsSummary};
use crate::utils::{format_number, rounded_ratio, to_fixed};

/// One line of the insights panel; `highlight` is rendered emphasised.
#[derive(Debug, Clone, PartialEq)]
pub struct Insight {
    pub icon: &'static str,
    pub text: String,
    pub highlight: Option<String>,
}

impl Insight {
    fn emphasised(icon: &'static str, text: &str, highlight: String) -> Self {
        Self {
            icon,
            text: text.to_string(),
            highlight: Some(highlight),
        }
    }

    pub fn plain_text(&self) -> String {
        format!(
            "{} {}{}",
            self.icon,
            self.text,
            self.highlight.as_deref().unwrap_or_default()
        )
    }
}

pub fn summarize(
    stats: &StatsSummary,
    categories: &[CategoryBreakdown],
    analysis: &[EngagementRow],
) -> Vec<Insight> {
    let mut insights = Vec::new();

    if let Some(top) = categories.first() {
        insights.push(Insight::emphasised(
            "🎬",
            "Most Popular Category: ",
            top.category_name.clone(),
        ));
    }

    if !analysis.is_empty() {
        let mean = analysis.iter().map(|row| row.engagement_rate).sum::<f64>() / analysis.len() as f64;
        insights.push(Insight::emphasised(
            "📊",
            "Average Engagement Rate: ",
            format!("{}%", to_fixed(mean, 2)),
        ));

        // "Just viewing" here is strictly below 1.5, unlike the table badge.
        let loved = analysis.iter().filter(|row| row.engagement_rate > LOVED_ABOVE).count();
        let viewing = analysis.iter().filter(|row| row.engagement_rate < ENJOYED_ABOVE).count();
        insights.push(Insight {
            icon: "😍",
            text: format!("{} videos are truly loved, {} are just being viewed", loved, viewing),
            highlight: None,
        });
    }

    if let Some(average) = rounded_ratio(stats.total_views, stats.total_videos) {
        insights.push(Insight::emphasised(
            "📈",
            "Average Views per Video: ",
            format_number(average),
        ));
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(rate: f64) -> EngagementRow {
        EngagementRow {
            title: "t".to_string(),
            channel_name: "c".to_string(),
            view_count: 100,
            like_count: 1,
            engagement_rate: rate,
        }
    }

    fn category(name: &str) -> CategoryBreakdown {
        CategoryBreakdown {
            category_name: name.to_string(),
            video_count: 1,
            total_views: 1,
            total_likes: 0,
            avg_views: 0,
        }
    }

    #[test]
    fn full_summary() {
        let stats = StatsSummary {
            total_videos: 4,
            total_channels: 2,
            total_views: 10_000,
            total_likes: 300,
        };
        let insights = summarize(
            &stats,
            &[category("Music"), category("Gaming")],
            &[row(4.0), row(2.2), row(1.0), row(2.0)],
        );
        let lines: Vec<String> = insights.iter().map(Insight::plain_text).collect();
        assert_eq!(
            lines,
            vec![
                "🎬 Most Popular Category: Music",
                "📊 Average Engagement Rate: 2.30%",
                "😍 1 videos are truly loved, 1 are just being viewed",
                "📈 Average Views per Video: 2.5K",
            ]
        );
    }

    #[test]
    fn boundary_rates_are_counted_on_neither_side() {
        let insights = summarize(&StatsSummary::default(), &[], &[row(3.0), row(1.5)]);
        assert_eq!(insights[1].text, "0 videos are truly loved, 0 are just being viewed");
    }

    #[test]
    fn mean_rate_rounds_exact_ties_up() {
        let insights = summarize(&StatsSummary::default(), &[], &[row(2.25), row(0.0)]);
        assert_eq!(insights[0].highlight.as_deref(), Some("1.13%"));
    }

    #[test]
    fn empty_inputs_yield_no_insights() {
        assert!(summarize(&StatsSummary::default(), &[], &[]).is_empty());
    }

    #[test]
    fn average_views_rounds_to_nearest() {
        let stats = StatsSummary {
            total_videos: 3,
            total_channels: 1,
            total_views: 3500,
            total_likes: 0,
        };
        let insights = summarize(&stats, &[], &[]);
        assert_eq!(insights[0].highlight.as_deref(), Some("1.2K"));
    }
}
