use crate::api::{AnalyticsClient, ApiError, Transport};
use crate::config::Timing;
use crate::dashboard::charts::{ChartBoard, ChartError, ChartSurface};
use crate::dashboard::insights::{summarize, Insight};
use crate::models::{
    CategoryBreakdown, ChannelRanking, EngagementRow, StatsSummary, TrendingVideo, YoutuberRanking,
};
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

pub const RESET_PROMPT: &str = "Delete all data?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Error,
        }
    }
}

/// Receives every view update the controller produces.
pub trait DashboardSink {
    fn stats(&self, stats: StatsSummary);
    fn youtubers(&self, youtubers: Vec<YoutuberRanking>);
    fn trending(&self, videos: Vec<TrendingVideo>);
    fn channels(&self, channels: Vec<ChannelRanking>);
    fn categories(&self, categories: Vec<CategoryBreakdown>);
    fn engagement(&self, rows: Vec<EngagementRow>);
    fn insights(&self, insights: Vec<Insight>);
    fn status(&self, message: StatusMessage);
    fn fetch_busy(&self, busy: bool);
}

/// Page-level affordances: confirmation, timers and reload.
#[allow(async_fn_in_trait)]
pub trait Host {
    fn confirm(&self, prompt: &str) -> bool;
    async fn sleep(&self, delay: Duration);
    fn reload(&self);
}

pub struct DashboardController<T, V, H, S: ChartSurface> {
    client: AnalyticsClient<T>,
    sink: V,
    host: H,
    charts: Rc<RefCell<ChartBoard<S>>>,
    timing: Timing,
}

impl<T, V, H, S> DashboardController<T, V, H, S>
where
    T: Transport,
    V: DashboardSink,
    H: Host,
    S: ChartSurface,
{
    pub fn new(
        client: AnalyticsClient<T>,
        sink: V,
        host: H,
        charts: Rc<RefCell<ChartBoard<S>>>,
        timing: Timing,
    ) -> Self {
        Self {
            client,
            sink,
            host,
            charts,
            timing,
        }
    }

    // Passive loads log failures and leave the current view untouched.
    async fn load<R>(&self, what: &str, request: impl Future<Output = Result<R, ApiError>>) -> Option<R> {
        match request.await {
            Ok(value) => Some(value),
            Err(e) => {
                log::error!("{} error: {}", what, e);
                None
            }
        }
    }

    fn log_chart_error(result: Result<(), ChartError>) {
        if let Err(e) = result {
            log::error!("{}", e);
        }
    }

    pub async fn load_stats(&self) -> Option<StatsSummary> {
        let stats = self.load("Stats", self.client.stats()).await?;
        self.sink.stats(stats.clone());
        Some(stats)
    }

    pub async fn load_top_youtubers(&self) -> Option<Vec<YoutuberRanking>> {
        let youtubers = self.load("Top YouTubers", self.client.top_youtubers()).await?;
        self.sink.youtubers(youtubers.clone());
        Some(youtubers)
    }

    pub async fn load_top_trending_videos(&self) -> Option<Vec<TrendingVideo>> {
        let videos = self
            .load("Trending videos", self.client.top_trending_videos())
            .await?;
        self.sink.trending(videos.clone());
        Some(videos)
    }

    pub async fn load_top_channels(&self) -> Option<Vec<ChannelRanking>> {
        let channels = self.load("Top channels", self.client.top_channels()).await?;
        self.sink.channels(channels.clone());
        Self::log_chart_error(self.charts.borrow_mut().draw_top_channels(&channels));
        Some(channels)
    }

    pub async fn load_categories(&self) -> Option<Vec<CategoryBreakdown>> {
        let categories = self
            .load("Categories", self.client.popular_categories())
            .await?;
        self.sink.categories(categories.clone());
        Self::log_chart_error(self.charts.borrow_mut().draw_categories(&categories));
        Some(categories)
    }

    pub async fn load_views_likes_analysis(&self) -> Option<Vec<EngagementRow>> {
        let rows = self
            .load("Views vs Likes", self.client.views_likes_analysis())
            .await?;
        self.sink.engagement(rows.clone());
        Self::log_chart_error(self.charts.borrow_mut().draw_views_likes(&rows));
        Some(rows)
    }

    /// Publishes insights from collections this refresh already fetched.
    /// A missing input leaves the previous insights in place.
    pub fn publish_insights(
        &self,
        stats: Option<&StatsSummary>,
        categories: Option<&[CategoryBreakdown]>,
        analysis: Option<&[EngagementRow]>,
    ) {
        match (stats, categories, analysis) {
            (Some(stats), Some(categories), Some(analysis)) => {
                let insights = summarize(stats, categories, analysis);
                for insight in &insights {
                    log::debug!("Insight: {}", insight.plain_text());
                }
                self.sink.insights(insights);
            }
            _ => log::warn!("Insights skipped: not all inputs loaded"),
        }
    }

    pub async fn refresh(&self) {
        let stats = self.load_stats().await;
        self.load_top_trending_videos().await;
        self.load_top_channels().await;
        let categories = self.load_categories().await;
        let analysis = self.load_views_likes_analysis().await;
        self.publish_insights(stats.as_ref(), categories.as_deref(), analysis.as_deref());
    }

    pub async fn initial_load(&self) {
        self.refresh().await;
        self.load_top_youtubers().await;
    }

    pub async fn fetch_trending(&self) {
        self.sink.fetch_busy(true);

        let refresh_due = match self.client.fetch_trending().await {
            Ok(ingest) => {
                self.sink.status(StatusMessage::success(format!(
                    "Success! Inserted {} new videos",
                    ingest.inserted
                )));
                true
            }
            Err(ApiError::Application(message)) => {
                self.sink.status(StatusMessage::error(format!("Error: {}", message)));
                false
            }
            Err(e) => {
                log::error!("Fetch trending failed: {}", e);
                self.sink.status(StatusMessage::error(
                    "Error: Make sure the backend server is running",
                ));
                false
            }
        };

        self.sink.fetch_busy(false);

        if refresh_due {
            self.host.sleep(self.timing.refresh_delay).await;
            self.refresh().await;
        }
    }

    pub async fn reset(&self) {
        if !self.host.confirm(RESET_PROMPT) {
            return;
        }

        match self.client.reset_db().await {
            Ok(()) => {
                self.sink.status(StatusMessage::success("Database reset successfully"));
                self.host.sleep(self.timing.reload_delay).await;
                self.host.reload();
            }
            Err(e) => {
                log::error!("Reset failed: {}", e);
                self.sink.status(StatusMessage::error("Error resetting database"));
            }
        }
    }
}
