use crate::models::{CategoryBreakdown, ChannelRanking, EngagementRow};
use crate::utils::truncate_label;
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;
use wasm_bindgen::prelude::*;

pub const TOP_CHANNELS_CANVAS: &str = "topChannelsChart";
pub const CATEGORIES_CANVAS: &str = "categoriesChart";
pub const VIEWS_LIKES_CANVAS: &str = "viewsLikesChart";

pub const BAR_LABEL_CHARS: usize = 20;
pub const CATEGORY_PALETTE: [&str; 6] = [
    "#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#ec4899",
];

const ACCENT: &str = "#3b82f6";
const TICK_COLOR: &str = "#cbd5e1";
const GRID_COLOR: &str = "#475569";

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to encode chart config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("chart on #{canvas} could not be created: {reason}")]
    Create { canvas: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Doughnut,
    Scatter,
}

/// Chart.js configuration object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Series,
    pub background_color: Colors,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Series {
    Values(Vec<u64>),
    Points(Vec<Point>),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: u64,
    pub y: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Colors {
    Single(String),
    Palette(Vec<String>),
}

pub fn top_channels_chart(channels: &[ChannelRanking]) -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Bar,
        data: ChartData {
            labels: channels
                .iter()
                .map(|c| truncate_label(&c.channel_name, BAR_LABEL_CHARS))
                .collect(),
            datasets: vec![Dataset {
                label: Some("Total Views".to_string()),
                data: Series::Values(channels.iter().map(|c| c.total_views).collect()),
                background_color: Colors::Single(ACCENT.to_string()),
                border_color: None,
                border_radius: Some(6),
                point_radius: None,
            }],
        },
        options: json!({
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": { "legend": { "display": false } },
            "scales": {
                "y": { "beginAtZero": true, "ticks": { "color": TICK_COLOR }, "grid": { "color": GRID_COLOR } },
                "x": { "ticks": { "color": TICK_COLOR }, "grid": { "display": false } }
            }
        }),
    }
}

pub fn categories_chart(categories: &[CategoryBreakdown]) -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Doughnut,
        data: ChartData {
            labels: categories.iter().map(|c| c.category_name.clone()).collect(),
            datasets: vec![Dataset {
                label: None,
                data: Series::Values(categories.iter().map(|c| c.total_views).collect()),
                background_color: Colors::Palette(
                    CATEGORY_PALETTE
                        .iter()
                        .cycle()
                        .take(categories.len())
                        .map(|c| c.to_string())
                        .collect(),
                ),
                border_color: None,
                border_radius: None,
                point_radius: None,
            }],
        },
        options: json!({
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": { "legend": { "position": "right", "labels": { "color": TICK_COLOR } } }
        }),
    }
}

pub fn views_likes_chart(rows: &[EngagementRow]) -> ChartConfig {
    let axis = |title: &str| {
        json!({
            "title": { "display": true, "text": title, "color": TICK_COLOR },
            "ticks": { "color": TICK_COLOR },
            "grid": { "color": GRID_COLOR }
        })
    };
    let mut x_axis = axis("Views");
    x_axis["type"] = json!("linear");

    ChartConfig {
        kind: ChartKind::Scatter,
        data: ChartData {
            labels: Vec::new(),
            datasets: vec![Dataset {
                label: Some("Views vs Likes".to_string()),
                data: Series::Points(
                    rows.iter()
                        .map(|r| Point {
                            x: r.view_count,
                            y: r.like_count,
                        })
                        .collect(),
                ),
                background_color: Colors::Single("rgba(59, 130, 246, 0.6)".to_string()),
                border_color: Some(ACCENT.to_string()),
                border_radius: None,
                point_radius: Some(6),
            }],
        },
        options: json!({
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": { "legend": { "labels": { "color": TICK_COLOR } } },
            "scales": { "x": x_axis, "y": axis("Likes") }
        }),
    }
}

/// A live chart bound to a canvas.
pub trait ChartHandle {
    fn destroy(self);
}

/// Something that can draw a chart onto a canvas.
pub trait ChartSurface {
    type Chart: ChartHandle;

    fn create(&self, canvas_id: &str, config: &ChartConfig) -> Result<Self::Chart, ChartError>;
}

/// Owns the single live chart of one canvas.
pub struct ChartSlot<C: ChartHandle> {
    canvas_id: &'static str,
    live: Option<C>,
}

impl<C: ChartHandle> ChartSlot<C> {
    pub fn new(canvas_id: &'static str) -> Self {
        Self {
            canvas_id,
            live: None,
        }
    }

    pub fn is_live(&self) -> bool {
        self.live.is_some()
    }

    pub fn dispose(&mut self) {
        if let Some(chart) = self.live.take() {
            chart.destroy();
        }
    }

    pub fn replace(&mut self, next: C) {
        self.dispose();
        self.live = Some(next);
    }

    /// Destroys the current chart, then builds a new one from `config`.
    /// The canvas must be free before the library will draw on it again.
    pub fn redraw<S>(&mut self, surface: &S, config: &ChartConfig) -> Result<(), ChartError>
    where
        S: ChartSurface<Chart = C>,
    {
        if self.is_live() {
            log::debug!("Replacing chart on #{}", self.canvas_id);
        }
        self.dispose();
        let chart = surface.create(self.canvas_id, config)?;
        self.replace(chart);
        Ok(())
    }
}

/// The three charts of the dashboard.
pub struct ChartBoard<S: ChartSurface> {
    surface: S,
    top_channels: ChartSlot<S::Chart>,
    categories: ChartSlot<S::Chart>,
    views_likes: ChartSlot<S::Chart>,
}

impl<S: ChartSurface> ChartBoard<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            top_channels: ChartSlot::new(TOP_CHANNELS_CANVAS),
            categories: ChartSlot::new(CATEGORIES_CANVAS),
            views_likes: ChartSlot::new(VIEWS_LIKES_CANVAS),
        }
    }

    pub fn draw_top_channels(&mut self, channels: &[ChannelRanking]) -> Result<(), ChartError> {
        self.top_channels
            .redraw(&self.surface, &top_channels_chart(channels))
    }

    pub fn draw_categories(&mut self, categories: &[CategoryBreakdown]) -> Result<(), ChartError> {
        self.categories
            .redraw(&self.surface, &categories_chart(categories))
    }

    pub fn draw_views_likes(&mut self, rows: &[EngagementRow]) -> Result<(), ChartError> {
        self.views_likes
            .redraw(&self.surface, &views_likes_chart(rows))
    }
}

#[wasm_bindgen]
extern "C" {
    /// Chart.js, loaded globally by the host page.
    #[wasm_bindgen(js_name = Chart)]
    pub type JsChart;

    #[wasm_bindgen(constructor, catch, js_class = "Chart")]
    fn new(item: &str, config: &JsValue) -> Result<JsChart, JsValue>;

    #[wasm_bindgen(method, js_name = destroy, js_class = "Chart")]
    fn release(this: &JsChart);
}

impl ChartHandle for JsChart {
    fn destroy(self) {
        self.release();
    }
}

/// Draws through the global Chart.js constructor.
#[derive(Debug, Default, Clone, Copy)]
pub struct ChartJs;

impl ChartSurface for ChartJs {
    type Chart = JsChart;

    fn create(&self, canvas_id: &str, config: &ChartConfig) -> Result<JsChart, ChartError> {
        let encoded = serde_json::to_string(config)?;
        let js_config = js_sys::JSON::parse(&encoded).map_err(|e| ChartError::Create {
            canvas: canvas_id.to_string(),
            reason: format!("{:?}", e),
        })?;
        JsChart::new(canvas_id, &js_config).map_err(|e| ChartError::Create {
            canvas: canvas_id.to_string(),
            reason: format!("{:?}", e),
        })
    }
}
