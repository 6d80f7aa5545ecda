use serde::{Deserialize, Deserializer};

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct StatsSummary {
    #[serde(deserialize_with = "count")]
    pub total_videos: u64,
    #[serde(deserialize_with = "count")]
    pub total_channels: u64,
    #[serde(deserialize_with = "count")]
    pub total_views: u64,
    #[serde(deserialize_with = "count")]
    pub total_likes: u64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ChannelRanking {
    #[serde(deserialize_with = "text")]
    pub channel_name: String,
    #[serde(deserialize_with = "count")]
    pub total_views: u64,
    #[serde(default, deserialize_with = "count")]
    pub video_count: u64,
    #[serde(default, deserialize_with = "count")]
    pub avg_views: u64,
    #[serde(default, deserialize_with = "count")]
    pub total_likes: u64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CategoryBreakdown {
    #[serde(deserialize_with = "text")]
    pub category_name: String,
    #[serde(deserialize_with = "count")]
    pub video_count: u64,
    #[serde(deserialize_with = "count")]
    pub total_views: u64,
    #[serde(deserialize_with = "count")]
    pub total_likes: u64,
    #[serde(default, deserialize_with = "count")]
    pub avg_views: u64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TrendingVideo {
    #[serde(deserialize_with = "text")]
    pub title: String,
    #[serde(deserialize_with = "text")]
    pub channel_name: String,
    #[serde(default, deserialize_with = "text")]
    pub category_name: String,
    #[serde(deserialize_with = "count")]
    pub view_count: u64,
    #[serde(deserialize_with = "count")]
    pub like_count: u64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct EngagementRow {
    #[serde(deserialize_with = "text")]
    pub title: String,
    #[serde(deserialize_with = "text")]
    pub channel_name: String,
    #[serde(deserialize_with = "count")]
    pub view_count: u64,
    #[serde(deserialize_with = "count")]
    pub like_count: u64,
    /// Likes per hundred views, as computed by the backend.
    #[serde(default, deserialize_with = "rate")]
    pub engagement_rate: f64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct YoutuberRanking {
    #[serde(deserialize_with = "text")]
    pub channel_name: String,
    #[serde(deserialize_with = "count")]
    pub subscriber_count: u64,
    #[serde(deserialize_with = "count")]
    pub video_count: u64,
    #[serde(deserialize_with = "count")]
    pub total_views: u64,
}

/// Success body of the ingestion endpoint.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TrendingIngest {
    #[serde(deserialize_with = "count")]
    pub inserted: u64,
}

/// Failure body shared by every endpoint.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

// SQL aggregates come back as null on empty tables and AVG() yields floats.
fn count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Option::<serde_json::Number>::deserialize(deserializer)?;
    Ok(number
        .map(|n| n.as_u64().unwrap_or_else(|| n.as_f64().unwrap_or(0.0).max(0.0) as u64))
        .unwrap_or(0))
}

fn rate<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_tolerate_null_sums() {
        let stats: StatsSummary = serde_json::from_str(
            r#"{"total_videos":0,"total_channels":0,"total_views":null,"total_likes":null}"#,
        )
        .unwrap();
        assert_eq!(stats, StatsSummary::default());
    }

    #[test]
    fn channel_ranking_accepts_float_averages_and_extra_columns() {
        let channels: Vec<ChannelRanking> = serde_json::from_str(
            r#"[{"channel_name":"T-Series","video_count":3,"total_views":900,"avg_views":300.6,"total_likes":12}]"#,
        )
        .unwrap();
        assert_eq!(channels[0].avg_views, 300);
        assert_eq!(channels[0].total_views, 900);
    }

    #[test]
    fn channel_ranking_only_needs_name_and_views() {
        let channels: Vec<ChannelRanking> =
            serde_json::from_str(r#"[{"channel_name":"A","total_views":5}]"#).unwrap();
        assert_eq!(channels[0].video_count, 0);
    }

    #[test]
    fn engagement_row_keeps_fractional_rate() {
        let row: EngagementRow = serde_json::from_str(
            r#"{"title":"t","channel_name":"c","view_count":1000,"like_count":35,"engagement_rate":3.5}"#,
        )
        .unwrap();
        assert_eq!(row.engagement_rate, 3.5);
    }

    #[test]
    fn missing_category_becomes_empty() {
        let video: TrendingVideo = serde_json::from_str(
            r#"{"title":"t","channel_name":"c","category_name":null,"view_count":1,"like_count":0}"#,
        )
        .unwrap();
        assert_eq!(video.category_name, "");
    }
}
