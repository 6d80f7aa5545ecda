use crate::dashboard::charts::{CATEGORIES_CANVAS, TOP_CHANNELS_CANVAS, VIEWS_LIKES_CANVAS};
use crate::dashboard::controller::{StatusKind, StatusMessage};
use crate::dashboard::insights::Insight;
use crate::dashboard::views::{
    category_rows, channel_rows, engagement_rows, stat_counters, trending_cards, youtuber_rows,
};
use crate::models::{
    CategoryBreakdown, ChannelRanking, EngagementRow, StatsSummary, TrendingVideo, YoutuberRanking,
};
use yew::prelude::*;

const TH: &str = "px-4 py-2 text-left text-xs font-medium text-slate-400 uppercase tracking-wider";
const TD: &str = "px-4 py-2 text-sm text-slate-200";

#[derive(Properties, PartialEq)]
pub struct DashboardLayoutProps {
    pub children: Children,
    pub title: String,
}

#[function_component(DashboardLayout)]
pub fn dashboard_layout(props: &DashboardLayoutProps) -> Html {
    html! {
        <div class="min-h-screen bg-slate-900 p-4">
            <div class="max-w-6xl mx-auto">
                <h1 class="text-3xl font-bold text-slate-100 mb-6">{ &props.title }</h1>
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PanelProps {
    pub title: String,
    pub children: Children,
}

#[function_component(Panel)]
pub fn panel(props: &PanelProps) -> Html {
    html! {
        <section class="bg-slate-800 rounded-lg shadow-lg p-6 mb-6">
            <h2 class="text-xl font-semibold text-slate-100 mb-4">{ &props.title }</h2>
            { for props.children.iter() }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ActionBarProps {
    pub fetch_busy: bool,
    pub on_fetch: Callback<MouseEvent>,
    pub on_refresh: Callback<MouseEvent>,
    pub on_reset: Callback<MouseEvent>,
}

#[function_component(ActionBar)]
pub fn action_bar(props: &ActionBarProps) -> Html {
    html! {
        <div class="flex flex-wrap gap-4 mb-6">
            <button
                id="fetchBtn"
                onclick={props.on_fetch.clone()}
                disabled={props.fetch_busy}
                class="bg-blue-600 text-white px-6 py-2 rounded hover:bg-blue-700 disabled:opacity-50"
            >
                { if props.fetch_busy { "Fetching..." } else { "Fetch Trending Data" } }
            </button>
            <button
                id="refreshBtn"
                onclick={props.on_refresh.clone()}
                class="bg-green-600 text-white px-6 py-2 rounded hover:bg-green-700"
            >
                { "Refresh Dashboard" }
            </button>
            <button
                id="resetBtn"
                onclick={props.on_reset.clone()}
                class="bg-red-600 text-white px-6 py-2 rounded hover:bg-red-700"
            >
                { "Reset Database" }
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusBannerProps {
    pub status: Option<StatusMessage>,
}

#[function_component(StatusBanner)]
pub fn status_banner(props: &StatusBannerProps) -> Html {
    match &props.status {
        Some(status) => {
            let class = match status.kind {
                StatusKind::Success => "bg-green-100 border border-green-400 text-green-700",
                StatusKind::Error => "bg-red-100 border border-red-400 text-red-700",
            };
            html! {
                <div id="statusMsg" class={classes!("status-message", "px-4", "py-3", "rounded", "mb-4", class)}>
                    { status.text.clone() }
                </div>
            }
        }
        None => html! { <div id="statusMsg" class="status-message"></div> },
    }
}

#[derive(Properties, PartialEq)]
pub struct StatsPanelProps {
    pub stats: Option<StatsSummary>,
}

#[function_component(StatsPanel)]
pub fn stats_panel(props: &StatsPanelProps) -> Html {
    let Some(stats) = &props.stats else {
        return html! {
            <div class="bg-slate-800 p-4 rounded-lg mb-6">
                <p class="text-slate-400">{"Loading stats..."}</p>
            </div>
        };
    };
    let counters = stat_counters(stats);
    let tile = |id: &'static str, label: &'static str, value: String| {
        html! {
            <div class="bg-slate-800 p-4 rounded-lg">
                <h3 class="text-sm font-semibold text-slate-400">{ label }</h3>
                <p id={id} class="text-2xl font-bold text-blue-400">{ value }</p>
            </div>
        }
    };

    html! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mb-6">
            { tile("totalVideos", "Total Videos", counters.total_videos) }
            { tile("totalChannels", "Total Channels", counters.total_channels) }
            { tile("totalViews", "Total Views", counters.total_views) }
            { tile("totalLikes", "Total Likes", counters.total_likes) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ChartCanvasProps {
    pub id: &'static str,
}

// Charts are drawn onto these by the controller, outside of Yew's diffing.
#[function_component(ChartCanvas)]
pub fn chart_canvas(props: &ChartCanvasProps) -> Html {
    html! {
        <div class="relative h-72">
            <canvas id={props.id}></canvas>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TrendingGridProps {
    pub videos: Vec<TrendingVideo>,
}

#[function_component(TrendingGrid)]
pub fn trending_grid(props: &TrendingGridProps) -> Html {
    html! {
        <div id="trendingVideosGrid" class="grid grid-cols-1 md:grid-cols-5 gap-4">
            {
                for trending_cards(&props.videos).into_iter().map(|card| html! {
                    <div class="trending-video-card bg-slate-700 rounded-lg p-4">
                        <div class="video-rank text-blue-400 font-bold">{ format!("#{}", card.rank) }</div>
                        <h3 class="video-title text-slate-100 font-semibold my-2">{ card.title }</h3>
                        <p class="video-channel text-sm text-slate-300">{ format!("📺 {}", card.channel_name) }</p>
                        <p class="video-category text-sm text-slate-300">{ format!("🎬 {}", card.category_name) }</p>
                        <div class="video-stats flex justify-between text-xs text-slate-400 mt-2">
                            <span>{ format!("👁️ {} views", card.views) }</span>
                            <span>{ format!("👍 {} likes", card.likes) }</span>
                        </div>
                    </div>
                })
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct YoutubersTableProps {
    pub youtubers: Vec<YoutuberRanking>,
}

#[function_component(YoutubersTable)]
pub fn youtubers_table(props: &YoutubersTableProps) -> Html {
    html! {
        <table id="topYoutubersTable" class="min-w-full">
            <thead>
                <tr>
                    <th class={TH}>{"#"}</th>
                    <th class={TH}>{"Channel"}</th>
                    <th class={TH}>{"Subscribers"}</th>
                    <th class={TH}>{"Videos"}</th>
                    <th class={TH}>{"Total Views"}</th>
                </tr>
            </thead>
            <tbody class="divide-y divide-slate-700">
                {
                    for youtuber_rows(&props.youtubers).into_iter().map(|row| html! {
                        <tr>
                            <td class={TD}><strong>{ row.rank.to_string() }</strong></td>
                            <td class={TD}>{ row.channel_name }</td>
                            <td class={TD}><strong>{ row.subscribers }</strong>{" subscribers"}</td>
                            <td class={TD}>{ row.videos }</td>
                            <td class={TD}>{ row.views }</td>
                        </tr>
                    })
                }
            </tbody>
        </table>
    }
}

#[derive(Properties, PartialEq)]
pub struct ChannelsPanelProps {
    pub channels: Vec<ChannelRanking>,
}

#[function_component(ChannelsPanel)]
pub fn channels_panel(props: &ChannelsPanelProps) -> Html {
    html! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
            <table id="topChannelsTable" class="min-w-full">
                <thead>
                    <tr>
                        <th class={TH}>{"#"}</th>
                        <th class={TH}>{"Channel"}</th>
                        <th class={TH}>{"Videos"}</th>
                        <th class={TH}>{"Total Views"}</th>
                        <th class={TH}>{"Avg Views"}</th>
                        <th class={TH}>{"Likes"}</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-slate-700">
                    {
                        for channel_rows(&props.channels).into_iter().map(|row| html! {
                            <tr>
                                <td class={TD}><strong>{ row.rank.to_string() }</strong></td>
                                <td class={TD}>{ row.channel_name }</td>
                                <td class={TD}>{ row.videos }</td>
                                <td class={TD}>{ row.views }</td>
                                <td class={TD}>{ row.avg_views }</td>
                                <td class={TD}>{ row.likes }</td>
                            </tr>
                        })
                    }
                </tbody>
            </table>
            <ChartCanvas id={TOP_CHANNELS_CANVAS} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CategoriesPanelProps {
    pub categories: Vec<CategoryBreakdown>,
}

#[function_component(CategoriesPanel)]
pub fn categories_panel(props: &CategoriesPanelProps) -> Html {
    html! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
            <table id="categoriesTable" class="min-w-full">
                <thead>
                    <tr>
                        <th class={TH}>{"Category"}</th>
                        <th class={TH}>{"Videos"}</th>
                        <th class={TH}>{"Views"}</th>
                        <th class={TH}>{"Likes"}</th>
                        <th class={TH}>{"Avg Views"}</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-slate-700">
                    {
                        for category_rows(&props.categories).into_iter().map(|row| html! {
                            <tr>
                                <td class={TD}>{ row.category_name }</td>
                                <td class={TD}>{ row.videos }</td>
                                <td class={TD}>{ row.views }</td>
                                <td class={TD}>{ row.likes }</td>
                                <td class={TD}>{ row.avg_views }</td>
                            </tr>
                        })
                    }
                </tbody>
            </table>
            <ChartCanvas id={CATEGORIES_CANVAS} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct EngagementPanelProps {
    pub rows: Vec<EngagementRow>,
}

#[function_component(EngagementPanel)]
pub fn engagement_panel(props: &EngagementPanelProps) -> Html {
    html! {
        <div class="grid grid-cols-1 gap-6">
            <ChartCanvas id={VIEWS_LIKES_CANVAS} />
            <div class="overflow-x-auto">
                <table id="viewsLikesTable" class="min-w-full">
                    <thead>
                        <tr>
                            <th class={TH}>{"Title"}</th>
                            <th class={TH}>{"Channel"}</th>
                            <th class={TH}>{"Views"}</th>
                            <th class={TH}>{"Likes"}</th>
                            <th class={TH}>{"Engagement"}</th>
                            <th class={TH}>{"Status"}</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-slate-700">
                        {
                            for engagement_rows(&props.rows).into_iter().map(|row| html! {
                                <tr>
                                    <td class={classes!(TD, "max-w-xs", "truncate")} title={row.title.clone()}>{ row.title }</td>
                                    <td class={TD}>{ row.channel_name }</td>
                                    <td class={TD}>{ row.views }</td>
                                    <td class={TD}>{ row.likes }</td>
                                    <td class={TD}><strong>{ row.rate }</strong></td>
                                    <td class={TD}>
                                        <span class={classes!("status-badge", row.engagement.css_class())}>
                                            { row.engagement.label() }
                                        </span>
                                    </td>
                                </tr>
                            })
                        }
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct InsightsListProps {
    pub insights: Vec<Insight>,
}

#[function_component(InsightsList)]
pub fn insights_list(props: &InsightsListProps) -> Html {
    html! {
        <div id="insightsList" class="space-y-2">
            {
                for props.insights.iter().map(|insight| html! {
                    <div class="insight-item text-slate-200">
                        { format!("{} {}", insight.icon, insight.text) }
                        {
                            match &insight.highlight {
                                Some(highlight) => html! { <strong>{ highlight.clone() }</strong> },
                                None => html! {},
                            }
                        }
                    </div>
                })
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    fn video(title: &str) -> TrendingVideo {
        TrendingVideo {
            title: title.to_string(),
            channel_name: "ISRO & Co".to_string(),
            category_name: "Science".to_string(),
            view_count: 1_200_000,
            like_count: 999,
        }
    }

    #[tokio::test]
    async fn trending_titles_render_as_escaped_text() {
        let videos = vec![video("<b>Launch</b>")];
        let html = ServerRenderer::<TrendingGrid>::with_props(move || TrendingGridProps { videos })
            .render()
            .await;

        assert!(html.contains("&lt;b&gt;Launch&lt;/b&gt;"));
        assert!(!html.contains("<b>Launch"));
        assert!(html.contains("ISRO &amp; Co"));
        assert!(html.contains("1.2M views"));
    }

    #[tokio::test]
    async fn engagement_titles_render_as_escaped_text() {
        let rows = vec![EngagementRow {
            title: "<script>x</script>".to_string(),
            channel_name: "c".to_string(),
            view_count: 1000,
            like_count: 40,
            engagement_rate: 4.0,
        }];
        let html = ServerRenderer::<EngagementPanel>::with_props(move || EngagementPanelProps { rows })
            .render()
            .await;

        assert!(html.contains("&lt;script&gt;x&lt;/script&gt;"));
        assert!(!html.contains("<script>x</script></td>"));
        assert!(html.contains("status-loved"));
    }
}
