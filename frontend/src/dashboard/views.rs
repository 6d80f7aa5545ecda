//! Projections from API records to display rows.
//!
//! Rows hold display-ready strings only; markup is produced by the components,
//! which insert every field as escaped text.

use crate::dashboard::engagement::Engagement;
use crate::models::{
    CategoryBreakdown, ChannelRanking, EngagementRow, StatsSummary, TrendingVideo, YoutuberRanking,
};
use crate::utils::{format_number, format_rate};

#[derive(Debug, Clone, PartialEq)]
pub struct StatCounters {
    pub total_videos: String,
    pub total_channels: String,
    pub total_views: String,
    pub total_likes: String,
}

pub fn stat_counters(stats: &StatsSummary) -> StatCounters {
    StatCounters {
        total_videos: stats.total_videos.to_string(),
        total_channels: stats.total_channels.to_string(),
        total_views: format_number(stats.total_views),
        total_likes: format_number(stats.total_likes),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct YoutuberRow {
    pub rank: usize,
    pub channel_name: String,
    pub subscribers: String,
    pub videos: String,
    pub views: String,
}

pub fn youtuber_rows(youtubers: &[YoutuberRanking]) -> Vec<YoutuberRow> {
    youtubers
        .iter()
        .enumerate()
        .map(|(index, y)| YoutuberRow {
            rank: index + 1,
            channel_name: y.channel_name.clone(),
            subscribers: format_number(y.subscriber_count),
            videos: format_number(y.video_count),
            views: format_number(y.total_views),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendingCard {
    pub rank: usize,
    pub title: String,
    pub channel_name: String,
    pub category_name: String,
    pub views: String,
    pub likes: String,
}

pub fn trending_cards(videos: &[TrendingVideo]) -> Vec<TrendingCard> {
    videos
        .iter()
        .enumerate()
        .map(|(index, v)| TrendingCard {
            rank: index + 1,
            title: v.title.clone(),
            channel_name: v.channel_name.clone(),
            category_name: v.category_name.clone(),
            views: format_number(v.view_count),
            likes: format_number(v.like_count),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChannelRow {
    pub rank: usize,
    pub channel_name: String,
    pub videos: String,
    pub views: String,
    pub avg_views: String,
    pub likes: String,
}

pub fn channel_rows(channels: &[ChannelRanking]) -> Vec<ChannelRow> {
    channels
        .iter()
        .enumerate()
        .map(|(index, c)| ChannelRow {
            rank: index + 1,
            channel_name: c.channel_name.clone(),
            videos: c.video_count.to_string(),
            views: format_number(c.total_views),
            avg_views: format_number(c.avg_views),
            likes: format_number(c.total_likes),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRow {
    pub category_name: String,
    pub videos: String,
    pub views: String,
    pub likes: String,
    pub avg_views: String,
}

pub fn category_rows(categories: &[CategoryBreakdown]) -> Vec<CategoryRow> {
    categories
        .iter()
        .map(|c| CategoryRow {
            category_name: c.category_name.clone(),
            videos: c.video_count.to_string(),
            views: format_number(c.total_views),
            likes: format_number(c.total_likes),
            avg_views: format_number(c.avg_views),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct EngagementTableRow {
    pub title: String,
    pub channel_name: String,
    pub views: String,
    pub likes: String,
    pub rate: String,
    pub engagement: Engagement,
}

pub fn engagement_rows(rows: &[EngagementRow]) -> Vec<EngagementTableRow> {
    rows.iter()
        .map(|r| EngagementTableRow {
            title: r.title.clone(),
            channel_name: r.channel_name.clone(),
            views: format_number(r.view_count),
            likes: format_number(r.like_count),
            rate: format_rate(r.engagement_rate),
            engagement: Engagement::classify(r.engagement_rate),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn youtuber(name: &str, subscribers: u64) -> YoutuberRanking {
        YoutuberRanking {
            channel_name: name.to_string(),
            subscriber_count: subscribers,
            video_count: 20_000,
            total_views: 250_000_000,
        }
    }

    fn channel(name: &str, views: u64) -> ChannelRanking {
        ChannelRanking {
            channel_name: name.to_string(),
            total_views: views,
            video_count: 0,
            avg_views: 0,
            total_likes: 0,
        }
    }

    #[test]
    fn stats_format_only_views_and_likes() {
        let counters = stat_counters(&StatsSummary {
            total_videos: 1500,
            total_channels: 42,
            total_views: 2_500_000,
            total_likes: 1500,
        });
        assert_eq!(counters.total_videos, "1500");
        assert_eq!(counters.total_channels, "42");
        assert_eq!(counters.total_views, "2.5M");
        assert_eq!(counters.total_likes, "1.5K");
    }

    #[test]
    fn ranked_rows_keep_input_order() {
        // Deliberately unsorted: the backend decides the order.
        let rows = youtuber_rows(&[youtuber("Small", 10), youtuber("Huge", 280_000_000)]);
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[0].channel_name, "Small");
        assert_eq!(rows[1].rank, 2);
        assert_eq!(rows[1].subscribers, "280.0M");
        assert_eq!(rows[1].videos, "20.0K");
    }

    #[test]
    fn channel_rows_rank_from_one() {
        let rows = channel_rows(&[channel("a", 3), channel("b", 2), channel("c", 1)]);
        let ranks: Vec<usize> = rows.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
        assert_eq!(rows[2].channel_name, "c");
    }

    #[test]
    fn channel_rows_show_volume_and_averages() {
        let rows = channel_rows(&[ChannelRanking {
            channel_name: "T-Series".to_string(),
            total_views: 48_000_000,
            video_count: 12,
            avg_views: 4_000_000,
            total_likes: 1150,
        }]);
        assert_eq!(rows[0].videos, "12");
        assert_eq!(rows[0].views, "48.0M");
        assert_eq!(rows[0].avg_views, "4.0M");
        assert_eq!(rows[0].likes, "1.1K");
    }

    #[test]
    fn trending_cards_carry_rank_and_counts() {
        let cards = trending_cards(&[TrendingVideo {
            title: "<b>Launch</b>".to_string(),
            channel_name: "ISRO".to_string(),
            category_name: "Science".to_string(),
            view_count: 1_200_000,
            like_count: 999,
        }]);
        assert_eq!(cards[0].rank, 1);
        // Raw text is kept; escaping happens when it is inserted as a text node.
        assert_eq!(cards[0].title, "<b>Launch</b>");
        assert_eq!(cards[0].views, "1.2M");
        assert_eq!(cards[0].likes, "999");
    }

    #[test]
    fn category_video_count_is_unformatted() {
        let rows = category_rows(&[CategoryBreakdown {
            category_name: "Music".to_string(),
            video_count: 1200,
            total_views: 5_000_000,
            total_likes: 45_000,
            avg_views: 4166,
        }]);
        assert_eq!(rows[0].videos, "1200");
        assert_eq!(rows[0].avg_views, "4.2K");
        assert_eq!(rows[0].views, "5.0M");
        assert_eq!(rows[0].likes, "45.0K");
    }

    #[test]
    fn engagement_rows_classify_each_video() {
        let row = |rate| EngagementRow {
            title: "t".to_string(),
            channel_name: "c".to_string(),
            view_count: 1000,
            like_count: 30,
            engagement_rate: rate,
        };
        let rows = engagement_rows(&[row(3.0), row(4.5), row(0.2)]);
        assert_eq!(rows[0].engagement, Engagement::Enjoyed);
        assert_eq!(rows[0].rate, "3%");
        assert_eq!(rows[1].engagement, Engagement::Loved);
        assert_eq!(rows[2].engagement, Engagement::JustViewing);
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert!(channel_rows(&[]).is_empty());
        assert!(engagement_rows(&[]).is_empty());
    }
}
