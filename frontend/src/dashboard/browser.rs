use crate::dashboard::controller::{DashboardSink, Host, StatusMessage};
use crate::dashboard::insights::Insight;
use crate::dashboard::status::StatusClock;
use crate::models::{
    CategoryBreakdown, ChannelRanking, EngagementRow, StatsSummary, TrendingVideo, YoutuberRanking,
};
use std::rc::Rc;
use std::time::Duration;
use web_sys::window;
use yew::prelude::*;

/// Writes controller updates into the page's component state.
#[derive(Clone)]
pub struct StateSink {
    pub stats: UseStateHandle<Option<StatsSummary>>,
    pub youtubers: UseStateHandle<Vec<YoutuberRanking>>,
    pub trending: UseStateHandle<Vec<TrendingVideo>>,
    pub channels: UseStateHandle<Vec<ChannelRanking>>,
    pub categories: UseStateHandle<Vec<CategoryBreakdown>>,
    pub engagement: UseStateHandle<Vec<EngagementRow>>,
    pub insights: UseStateHandle<Vec<Insight>>,
    pub status: UseStateHandle<Option<StatusMessage>>,
    pub status_clock: Rc<StatusClock>,
    pub status_timeout: Duration,
    pub fetch_busy: UseStateHandle<bool>,
}

impl DashboardSink for StateSink {
    fn stats(&self, stats: StatsSummary) {
        self.stats.set(Some(stats));
    }

    fn youtubers(&self, youtubers: Vec<YoutuberRanking>) {
        self.youtubers.set(youtubers);
    }

    fn trending(&self, videos: Vec<TrendingVideo>) {
        self.trending.set(videos);
    }

    fn channels(&self, channels: Vec<ChannelRanking>) {
        self.channels.set(channels);
    }

    fn categories(&self, categories: Vec<CategoryBreakdown>) {
        self.categories.set(categories);
    }

    fn engagement(&self, rows: Vec<EngagementRow>) {
        self.engagement.set(rows);
    }

    fn insights(&self, insights: Vec<Insight>) {
        self.insights.set(insights);
    }

    fn status(&self, message: StatusMessage) {
        let generation = self.status_clock.begin();
        self.status.set(Some(message));

        let status = self.status.clone();
        let clock = self.status_clock.clone();
        let timeout = self.status_timeout;
        wasm_bindgen_futures::spawn_local(async move {
            if clock.expired(&BrowserHost, generation, timeout).await {
                status.set(None);
            }
        });
    }

    fn fetch_busy(&self, busy: bool) {
        self.fetch_busy.set(busy);
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserHost;

impl Host for BrowserHost {
    fn confirm(&self, prompt: &str) -> bool {
        window()
            .and_then(|w| w.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }

    async fn sleep(&self, delay: Duration) {
        yew::platform::time::sleep(delay).await;
    }

    fn reload(&self) {
        if let Some(window) = window() {
            if let Err(e) = window.location().reload() {
                log::error!("Page reload failed: {:?}", e);
            }
        }
    }
}
