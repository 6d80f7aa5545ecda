use crate::api::{AnalyticsClient, HttpTransport};
use crate::config::CONFIG;
use crate::dashboard::browser::{BrowserHost, StateSink};
use crate::dashboard::charts::{ChartBoard, ChartJs};
use crate::dashboard::components::{
    ActionBar, CategoriesPanel, ChannelsPanel, DashboardLayout, EngagementPanel, InsightsList,
    Panel, StatsPanel, StatusBanner, TrendingGrid, YoutubersTable,
};
use crate::dashboard::controller::{DashboardController, StatusMessage};
use crate::dashboard::insights::Insight;
use crate::dashboard::status::StatusClock;
use crate::models::{
    CategoryBreakdown, ChannelRanking, EngagementRow, StatsSummary, TrendingVideo, YoutuberRanking,
};
use std::rc::Rc;
use yew::prelude::*;

pub mod browser;
pub mod charts;
pub mod components;
pub mod controller;
pub mod engagement;
pub mod insights;
pub mod status;
pub mod views;

type BrowserController = DashboardController<HttpTransport, StateSink, BrowserHost, ChartJs>;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let stats = use_state(|| None::<StatsSummary>);
    let youtubers = use_state(Vec::<YoutuberRanking>::new);
    let trending = use_state(Vec::<TrendingVideo>::new);
    let channels = use_state(Vec::<ChannelRanking>::new);
    let categories = use_state(Vec::<CategoryBreakdown>::new);
    let engagement = use_state(Vec::<EngagementRow>::new);
    let insights = use_state(Vec::<Insight>::new);
    let status = use_state(|| None::<StatusMessage>);
    let fetch_busy = use_state(|| false);
    let status_clock = use_memo((), |_| StatusClock::default());
    let charts = use_mut_ref(|| ChartBoard::new(ChartJs));

    let controller: Rc<BrowserController> = {
        let sink = StateSink {
            stats: stats.clone(),
            youtubers: youtubers.clone(),
            trending: trending.clone(),
            channels: channels.clone(),
            categories: categories.clone(),
            engagement: engagement.clone(),
            insights: insights.clone(),
            status: status.clone(),
            status_clock: status_clock.clone(),
            status_timeout: CONFIG.timing.status_timeout,
            fetch_busy: fetch_busy.clone(),
        };
        Rc::new(DashboardController::new(
            AnalyticsClient::new(HttpTransport::new(CONFIG.api_base.clone())),
            sink,
            BrowserHost,
            charts.clone(),
            CONFIG.timing,
        ))
    };

    // Initial load on mount
    {
        let controller = controller.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                controller.initial_load().await;
            });
            || ()
        });
    }

    let on_fetch = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| {
            let controller = controller.clone();
            wasm_bindgen_futures::spawn_local(async move {
                controller.fetch_trending().await;
            });
        })
    };

    let on_refresh = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| {
            let controller = controller.clone();
            wasm_bindgen_futures::spawn_local(async move {
                controller.refresh().await;
            });
        })
    };

    let on_reset = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| {
            let controller = controller.clone();
            wasm_bindgen_futures::spawn_local(async move {
                controller.reset().await;
            });
        })
    };

    html! {
        <DashboardLayout title={CONFIG.app_name.clone()}>
            <ActionBar
                fetch_busy={*fetch_busy}
                on_fetch={on_fetch}
                on_refresh={on_refresh}
                on_reset={on_reset}
            />
            <StatusBanner status={(*status).clone()} />
            <StatsPanel stats={(*stats).clone()} />

            <Panel title="🔥 Top 5 Trending Videos">
                <TrendingGrid videos={(*trending).clone()} />
            </Panel>
            <Panel title="📺 Top Channels by Views">
                <ChannelsPanel channels={(*channels).clone()} />
            </Panel>
            <Panel title="🎬 Popular Categories">
                <CategoriesPanel categories={(*categories).clone()} />
            </Panel>
            <Panel title="❤️ Views vs Likes">
                <EngagementPanel rows={(*engagement).clone()} />
            </Panel>
            <Panel title="🇮🇳 Top Indian YouTubers">
                <YoutubersTable youtubers={(*youtubers).clone()} />
            </Panel>
            <Panel title="💡 Insights">
                <InsightsList insights={(*insights).clone()} />
            </Panel>
        </DashboardLayout>
    }
}
